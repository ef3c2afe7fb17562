// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! The musical alphabet.
//!
//! Seven letter names in cyclic order starting at C. Every spelled note
//! starts with one of these letters; accidentals are layered on top.

use std::fmt;

use super::rotate::rotate;

/// Diatonic letter names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// All letters in alphabet order
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Position of this letter in the alphabet (C = 0)
    pub fn index(self) -> usize {
        match self {
            Letter::C => 0,
            Letter::D => 1,
            Letter::E => 2,
            Letter::F => 3,
            Letter::G => 4,
            Letter::A => 5,
            Letter::B => 6,
        }
    }

    /// Parse a letter from its character (case-sensitive, uppercase only)
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    /// Leading letter of a spelled note ("F#" -> F)
    pub fn of(spelling: &str) -> Option<Self> {
        spelling.chars().next().and_then(Letter::from_char)
    }

    /// The alphabet rotated so that it starts at this letter
    pub fn sequence(self) -> Vec<Letter> {
        rotate(&Letter::ALL, self.index())
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        };
        write!(f, "{}", c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_index() {
        assert_eq!(Letter::C.index(), 0);
        assert_eq!(Letter::A.index(), 5);
        assert_eq!(Letter::B.index(), 6);
    }

    #[test]
    fn test_letter_of_spelling() {
        assert_eq!(Letter::of("C"), Some(Letter::C));
        assert_eq!(Letter::of("Bbb"), Some(Letter::B));
        assert_eq!(Letter::of("F#"), Some(Letter::F));
        assert_eq!(Letter::of("c"), None);
        assert_eq!(Letter::of(""), None);
    }

    #[test]
    fn test_letter_sequence() {
        assert_eq!(
            Letter::A.sequence(),
            vec![
                Letter::A,
                Letter::B,
                Letter::C,
                Letter::D,
                Letter::E,
                Letter::F,
                Letter::G
            ]
        );
        assert_eq!(Letter::C.sequence(), Letter::ALL.to_vec());
    }

    #[test]
    fn test_letter_display() {
        let names: Vec<String> = Letter::ALL.iter().map(|l| l.to_string()).collect();
        assert_eq!(names, vec!["C", "D", "E", "F", "G", "A", "B"]);
    }
}
