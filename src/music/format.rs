// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Display formatting for spelled notes.

/// Column width each note is padded to before symbol replacement
const COLUMN_WIDTH: usize = 3;

const FLAT: char = '\u{266D}';
const SHARP: char = '\u{266F}';

/// Replace ASCII accidentals with typographic flat/sharp symbols
pub fn typeset(text: &str) -> String {
    text.replace('b', &FLAT.to_string())
        .replace('#', &SHARP.to_string())
}

/// Render notes separated by a single space
pub fn dump<S: AsRef<str>>(notes: &[S]) -> String {
    dump_with(notes, " ")
}

/// Render notes with a custom separator.
///
/// Each note is left-aligned in a three-character column, so "C" and
/// "Bbb" line up when several scales are printed one above the other.
pub fn dump_with<S: AsRef<str>>(notes: &[S], separator: &str) -> String {
    let columns: Vec<String> = notes
        .iter()
        .map(|note| format!("{:<width$}", note.as_ref(), width = COLUMN_WIDTH))
        .collect();
    typeset(&columns.join(separator))
}
