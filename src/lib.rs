// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! SPELL - correctly spelled notes for scales and chords in any key.
//!
//! The [`music`] module holds the enharmonic spelling engine; [`config`]
//! holds the catalog of named formulas that feeds it.
//!
//! ```
//! use spell::music::{make_formula, make_intervals, IntervalType};
//!
//! let intervals = make_intervals("F", IntervalType::Major).unwrap();
//! let notes = make_formula("1,3,5,b7", &intervals).unwrap();
//! assert_eq!(notes, vec!["F", "A", "C", "Eb"]);
//! ```

pub mod config;
pub mod music;

pub use config::{Catalog, CatalogFormat};
pub use music::{
    chromatic, dump, make_formula, make_intervals, mode, modes_on, rotate, IntervalType, Mode,
    Resolution, SpellingError,
};
