// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Diatonic modes as rotations of a major scale.

use std::fmt;
use std::str::FromStr;

use super::chromatic::{pitch_class, KEYS};
use super::error::{Result as SpellResult, SpellingError};
use super::formula::make_formula;
use super::interval::IntervalType;
use super::rotate::rotate;
use super::spelling::make_intervals;

/// Major scale formula the modes are rotated from
pub const MAJOR_SCALE: &str = "1,2,3,4,5,6,7";

/// The seven modes of the major scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Ionian,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Aeolian,
    Locrian,
}

impl Mode {
    /// All modes in rotation order
    pub const ALL: [Mode; 7] = [
        Mode::Ionian,
        Mode::Dorian,
        Mode::Phrygian,
        Mode::Lydian,
        Mode::Mixolydian,
        Mode::Aeolian,
        Mode::Locrian,
    ];

    /// Number of positions to rotate the major scale by
    pub fn rotation(self) -> usize {
        match self {
            Mode::Ionian => 0,
            Mode::Dorian => 1,
            Mode::Phrygian => 2,
            Mode::Lydian => 3,
            Mode::Mixolydian => 4,
            Mode::Aeolian => 5,
            Mode::Locrian => 6,
        }
    }

    /// Mode for a rotation amount (0-6)
    pub fn from_rotation(rotation: usize) -> Option<Self> {
        Mode::ALL.get(rotation).copied()
    }

    /// Mode name as written in the rotation table
    pub fn name(self) -> &'static str {
        match self {
            Mode::Ionian => "Ionian",
            Mode::Dorian => "Dorian",
            Mode::Phrygian => "Phrygian",
            Mode::Lydian => "Lydian",
            Mode::Mixolydian => "Mixolydian",
            Mode::Aeolian => "Aeolian",
            Mode::Locrian => "Locrian",
        }
    }
}

impl FromStr for Mode {
    type Err = SpellingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ionian" => Ok(Mode::Ionian),
            "dorian" => Ok(Mode::Dorian),
            "phrygian" => Ok(Mode::Phrygian),
            "lydian" => Ok(Mode::Lydian),
            "mixolydian" => Ok(Mode::Mixolydian),
            "aeolian" => Ok(Mode::Aeolian),
            "locrian" => Ok(Mode::Locrian),
            _ => Err(SpellingError::UnknownMode(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Rotate a resolved scale so that it starts on `degree` (0-based).
///
/// The first note of the result is the modal tonic; its letter names the mode.
pub fn mode<T: Clone>(scale: &[T], degree: usize) -> Vec<T> {
    rotate(scale, degree)
}

/// All seven modes of a resolved major scale, in rotation order
pub fn modes<T: Clone>(scale: &[T]) -> Vec<(Mode, Vec<T>)> {
    Mode::ALL
        .iter()
        .map(|&m| (m, mode(scale, m.rotation())))
        .collect()
}

/// Every mode that starts on `tonic`, in rotation order.
///
/// The major scale of each key in [`KEYS`] is rotated through all seven
/// modes and the rotations are grouped by their first note. A mode is
/// taken from the first key that yields it; modes whose parent key is not
/// in the table are left out (Fb has only Ionian and Lydian).
pub fn modes_on(tonic: &str) -> SpellResult<Vec<(Mode, Vec<&'static str>)>> {
    pitch_class(tonic)?;

    let mut found: Vec<(Mode, Vec<&'static str>)> = Vec::new();
    for key in KEYS {
        let resolution = make_intervals(key, IntervalType::Major)?;
        let major = make_formula(MAJOR_SCALE, &resolution)?;

        for (m, notes) in modes(&major) {
            if notes.first().copied() == Some(tonic) && !found.iter().any(|(f, _)| *f == m) {
                found.push((m, notes));
            }
        }
    }

    found.sort_by_key(|(m, _)| m.rotation());
    Ok(found)
}
