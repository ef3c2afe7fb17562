// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Enharmonic spelling resolver.
//!
//! Given a tonic and an interval table, picks for every interval label the
//! one spelling whose letter is the expected scale degree above the
//! tonic's letter. "M3" above D is F#, never Gb; "d4" above D is Gb.
//!
//! When the chromatic table has no spelling with the expected letter
//! (e.g. "#2" above B# would need C###), the first spelling of the slot is
//! used instead and the substitution is reported as an
//! [`AmbiguousSpelling`] on the result. The resolver never invents a
//! spelling the table does not contain.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, warn};

use super::alphabet::Letter;
use super::chromatic::{chromatic, Slot};
use super::error::{Result, SpellingError};
use super::formula::labels;
use super::interval::IntervalType;

/// A label the table could not spell with its expected letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmbiguousSpelling {
    /// Interval label being resolved
    pub label: &'static str,
    /// Letter the label should have been spelled with
    pub expected: Letter,
    /// Spelling used instead
    pub chosen: &'static str,
}

impl fmt::Display for AmbiguousSpelling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: no {} spelling available, using {}",
            self.label, self.expected, self.chosen
        )
    }
}

/// Every interval label of one table spelled out in one key
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    key: String,
    interval_type: IntervalType,
    notes: HashMap<&'static str, &'static str>,
    ambiguous: Vec<AmbiguousSpelling>,
}

impl Resolution {
    /// The tonic this map was resolved for
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The interval table this map was resolved against
    pub fn interval_type(&self) -> IntervalType {
        self.interval_type
    }

    /// Spelled note for an interval label
    pub fn get(&self, label: &str) -> Option<&'static str> {
        self.notes.get(label).copied()
    }

    /// Number of labels resolved
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Check if nothing was resolved
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Labels that fell back to a spelling with the wrong letter
    pub fn ambiguous(&self) -> &[AmbiguousSpelling] {
        &self.ambiguous
    }

    /// True when every label got its expected letter
    pub fn is_exact(&self) -> bool {
        self.ambiguous.is_empty()
    }

    /// Fallback spellings that a formula actually uses
    pub fn ambiguous_in(&self, formula: &str) -> Vec<AmbiguousSpelling> {
        let used: Vec<&str> = labels(formula).collect();
        self.ambiguous
            .iter()
            .filter(|report| used.contains(&report.label))
            .copied()
            .collect()
    }

    /// `(label, note)` pairs in interval-table order
    pub fn entries(&self) -> Vec<(&'static str, &'static str)> {
        self.interval_type
            .table()
            .iter()
            .flat_map(|row| row.iter())
            .filter_map(|&label| self.get(label).map(|note| (label, note)))
            .collect()
    }
}

/// Spelling in `slot` that starts with `letter`
fn spell_with_letter(slot: Slot, letter: Letter) -> Option<&'static str> {
    slot.iter()
        .copied()
        .find(|spelling| Letter::of(spelling) == Some(letter))
}

/// Resolve every label of `interval_type`'s table against `key`.
///
/// Fails only when `key` is not in the chromatic table.
pub fn make_intervals(key: &str, interval_type: IntervalType) -> Result<Resolution> {
    let chromatic_scale = chromatic(key)?;
    let tonic = Letter::of(key).ok_or_else(|| SpellingError::UnknownNote(key.to_string()))?;
    let letters = tonic.sequence();

    let mut notes = HashMap::with_capacity(interval_type.label_count());
    let mut ambiguous = Vec::new();

    for (index, row) in interval_type.table().iter().enumerate() {
        let slot = chromatic_scale[index % chromatic_scale.len()];

        for &label in row.iter() {
            let Some(offset) = interval_type.letter_offset(label) else {
                warn!(label, %interval_type, "interval label has no degree number");
                continue;
            };
            let expected = letters[offset % letters.len()];

            let spelling = match spell_with_letter(slot, expected) {
                Some(spelling) => spelling,
                None => {
                    let chosen = slot[0];
                    let report = AmbiguousSpelling {
                        label,
                        expected,
                        chosen,
                    };
                    warn!(key, %interval_type, "{}", report);
                    ambiguous.push(report);
                    chosen
                }
            };

            debug!(key, label, %expected, spelling, "resolved interval");
            notes.insert(label, spelling);
        }
    }

    Ok(Resolution {
        key: key.to_string(),
        interval_type,
        notes,
        ambiguous,
    })
}
