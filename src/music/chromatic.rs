// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! The chromatic table.
//!
//! Twelve semitone slots, each holding every spelling the engine knows
//! for that pitch class. Slot 0 is the C pitch class; the table can be
//! re-based at any spelling it contains.

use super::error::{Result, SpellingError};
use super::rotate::rotate;

/// Enharmonic spellings sharing one semitone position
pub type Slot = &'static [&'static str];

/// Number of semitones per octave
pub const SEMITONES: usize = 12;

/// Base chromatic table, ascending by semitone from C
pub const CHROMATIC: [Slot; SEMITONES] = [
    &["B#", "C", "Dbb"],
    &["B##", "C#", "Db"],
    &["C##", "D", "Ebb"],
    &["D#", "Eb", "Fbb"],
    &["D##", "E", "Fb"],
    &["E#", "F", "Gbb"],
    &["E##", "F#", "Gb"],
    &["F##", "G", "Abb"],
    &["G#", "Ab"],
    &["G##", "A", "Bbb"],
    &["A#", "Bb", "Cbb"],
    &["A##", "B", "Cb"],
];

/// Tonics offered when listing a scale in every key
pub const KEYS: [&str; 21] = [
    "B#", "C", "C#", "Db", "D", "D#", "Eb", "E", "Fb", "E#", "F", "F#", "Gb", "G", "G#", "Ab",
    "A", "A#", "Bb", "B", "Cb",
];

/// Index of the slot that spells `note`, if any (exact, case-sensitive)
pub fn find_slot(table: &[Slot], note: &str) -> Option<usize> {
    table
        .iter()
        .position(|slot| slot.iter().any(|&spelling| spelling == note))
}

/// Chromatic table re-based so that slot 0 contains `key`
pub fn chromatic(key: &str) -> Result<Vec<Slot>> {
    let start = find_slot(&CHROMATIC, key)
        .ok_or_else(|| SpellingError::UnknownNote(key.to_string()))?;
    Ok(rotate(&CHROMATIC, start))
}

/// Pitch class (0-11, C = 0) of a spelled note
pub fn pitch_class(note: &str) -> Result<u8> {
    find_slot(&CHROMATIC, note)
        .map(|slot| slot as u8)
        .ok_or_else(|| SpellingError::UnknownNote(note.to_string()))
}

/// Check whether two spellings denote the same pitch
pub fn is_enharmonic(a: &str, b: &str) -> Result<bool> {
    Ok(pitch_class(a)? == pitch_class(b)?)
}
