// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Interval tables.
//!
//! Two parallel naming schemes for the intervals of an octave. Row `i`
//! of either table holds every label that sits `i` semitones above the
//! tonic; the octave row wraps back onto chromatic slot 0.
//!
//! - [`IntervalType::Standard`]: quality + number ("P1", "m3", "A4")
//! - [`IntervalType::Major`]: accidental + major-scale degree ("1", "b3", "#11")

use std::fmt;
use std::str::FromStr;

use super::error::SpellingError;

/// Interval labels sharing one semitone distance from the tonic
pub type IntervalRow = &'static [&'static str];

/// Quality + number labels, unison through octave
pub const STANDARD_INTERVALS: [IntervalRow; 13] = [
    &["P1", "d2"], // Perfect unison, diminished second
    &["m2", "A1"],
    &["M2", "d3"],
    &["m3", "A2"],
    &["M3", "d4"],
    &["P4", "A3"],
    &["d5", "A4"], // Tritone
    &["P5", "d6"],
    &["m6", "A5"],
    &["M6", "d7"],
    &["m7", "A6"],
    &["M7", "d8"],
    &["P8", "A7"], // Octave
];

/// Labels relative to the major scale, including compound chord tones
pub const MAJOR_INTERVALS: [IntervalRow; 13] = [
    &["1", "bb2"],
    &["b2", "#1"],
    &["2", "bb3", "9"],
    &["b3", "#2"],
    &["3", "b4"],
    &["4", "#3", "11"],
    &["b5", "#4", "#11"],
    &["5", "bb6"],
    &["b6", "#5"],
    &["6", "bb7", "13"],
    &["b7", "#6"],
    &["7", "b8"],
    &["8", "#7"],
];

/// Which interval table (and label parser) to resolve against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IntervalType {
    /// Quality + number labels
    Standard,
    /// Accidental + scale-degree labels
    #[default]
    Major,
}

impl IntervalType {
    /// Both interval types
    pub const ALL: [IntervalType; 2] = [IntervalType::Standard, IntervalType::Major];

    /// The interval table for this type
    pub fn table(self) -> &'static [IntervalRow] {
        match self {
            IntervalType::Standard => &STANDARD_INTERVALS,
            IntervalType::Major => &MAJOR_INTERVALS,
        }
    }

    /// Total number of labels in this type's table
    pub fn label_count(self) -> usize {
        self.table().iter().map(|row| row.len()).sum()
    }

    /// Number of letters above the tonic that `label` must be spelled with.
    ///
    /// Standard labels carry the number after a single quality character
    /// ("M3" -> 2). Major labels carry it after any run of `b`/`#`
    /// accidentals ("b3" -> 2, "#11" -> 10). Returns `None` when the label
    /// has no usable degree number.
    pub fn letter_offset(self, label: &str) -> Option<usize> {
        let number = match self {
            IntervalType::Standard => {
                let mut chars = label.chars();
                chars.next()?;
                chars.as_str()
            }
            IntervalType::Major => label.trim_start_matches(['b', '#']),
        };
        number.parse::<usize>().ok()?.checked_sub(1)
    }

    /// Name accepted on the command line
    pub fn name(self) -> &'static str {
        match self {
            IntervalType::Standard => "standard",
            IntervalType::Major => "major",
        }
    }
}

impl FromStr for IntervalType {
    type Err = SpellingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(IntervalType::Standard),
            "major" => Ok(IntervalType::Major),
            _ => Err(SpellingError::UnknownIntervalType(s.to_string())),
        }
    }
}

impl fmt::Display for IntervalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
