// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Enharmonic spelling engine.
//!
//! This module holds the static note and interval tables and the
//! algorithms that turn an interval formula into correctly spelled notes
//! in any key.

pub mod alphabet;
pub mod chromatic;
pub mod error;
pub mod format;
pub mod formula;
pub mod interval;
pub mod mode;
pub mod rotate;
pub mod spelling;

pub use alphabet::Letter;
pub use chromatic::{chromatic, find_slot, is_enharmonic, pitch_class, Slot, CHROMATIC, KEYS};
pub use error::SpellingError;
pub use format::{dump, dump_with};
pub use formula::make_formula;
pub use interval::IntervalType;
pub use mode::{mode, modes, modes_on, Mode, MAJOR_SCALE};
pub use rotate::rotate;
pub use spelling::{make_intervals, AmbiguousSpelling, Resolution};
