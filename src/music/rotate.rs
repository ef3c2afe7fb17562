// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Cyclic rotation of ordered sequences.

/// Left-rotate a sequence by `n` positions, returning a new vector.
///
/// Elements `0..n` move to the end. `n` wraps modulo the length, and an
/// empty input yields an empty output.
pub fn rotate<T: Clone>(sequence: &[T], n: usize) -> Vec<T> {
    if sequence.is_empty() {
        return Vec::new();
    }

    let n = n % sequence.len();
    let mut rotated = Vec::with_capacity(sequence.len());
    rotated.extend_from_slice(&sequence[n..]);
    rotated.extend_from_slice(&sequence[..n]);
    rotated
}
