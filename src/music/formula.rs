// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Formula expansion.
//!
//! A formula is a comma-separated list of interval labels ("1,b3,5").
//! Expanding it against a [`Resolution`] yields the spelled notes in order.

use super::error::{Result, SpellingError};
use super::spelling::Resolution;

/// Split a formula into trimmed interval labels
pub fn labels(formula: &str) -> impl Iterator<Item = &str> {
    formula.split(',').map(str::trim)
}

/// Spell every label of `formula` using `resolution`, preserving order
pub fn make_formula(formula: &str, resolution: &Resolution) -> Result<Vec<&'static str>> {
    labels(formula)
        .map(|label| {
            resolution
                .get(label)
                .ok_or_else(|| SpellingError::UnknownInterval(label.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::interval::IntervalType;
    use crate::music::spelling::make_intervals;

    #[test]
    fn test_major_scale() {
        let r = make_intervals("C", IntervalType::Major).unwrap();
        assert_eq!(
            make_formula("1,2,3,4,5,6,7", &r).unwrap(),
            vec!["C", "D", "E", "F", "G", "A", "B"]
        );
    }

    #[test]
    fn test_standard_major_scale_with_octave() {
        let r = make_intervals("C", IntervalType::Standard).unwrap();
        assert_eq!(
            make_formula("P1,M2,M3,P4,P5,M6,M7,P8", &r).unwrap(),
            vec!["C", "D", "E", "F", "G", "A", "B", "C"]
        );
    }

    #[test]
    fn test_natural_minor() {
        let r = make_intervals("C", IntervalType::Major).unwrap();
        assert_eq!(
            make_formula("1,2,b3,4,5,b6,b7", &r).unwrap(),
            vec!["C", "D", "Eb", "F", "G", "Ab", "Bb"]
        );
    }

    #[test]
    fn test_diminished_seventh_in_a() {
        let r = make_intervals("A", IntervalType::Major).unwrap();
        assert_eq!(make_formula("1,b3,b5,bb7", &r).unwrap(), vec!["A", "C", "Eb", "Gb"]);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let r = make_intervals("G", IntervalType::Major).unwrap();
        assert_eq!(make_formula("1, 3 ,5", &r).unwrap(), vec!["G", "B", "D"]);
    }

    #[test]
    fn test_unknown_interval() {
        let r = make_intervals("C", IntervalType::Major).unwrap();
        assert_eq!(
            make_formula("1,3,M3", &r),
            Err(SpellingError::UnknownInterval("M3".to_string()))
        );
        assert_eq!(
            make_formula("", &r),
            Err(SpellingError::UnknownInterval(String::new()))
        );
    }

    #[test]
    fn test_labels_split() {
        let parts: Vec<&str> = labels("1, b3,#11").collect();
        assert_eq!(parts, vec!["1", "b3", "#11"]);
    }
}
