// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for the spelling engine.

use thiserror::Error;

/// Errors returned by the spelling engine and catalog lookups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpellingError {
    /// Key or note is not spelled anywhere in the chromatic table
    #[error("unknown note '{0}'")]
    UnknownNote(String),

    /// Formula references a label absent from the resolved interval map
    #[error("unknown interval '{0}'")]
    UnknownInterval(String),

    /// Interval table selector is neither "standard" nor "major"
    #[error("unknown interval type '{0}' (expected 'standard' or 'major')")]
    UnknownIntervalType(String),

    /// Mode name is not in the rotation table
    #[error("unknown mode '{0}'")]
    UnknownMode(String),

    /// Scale or chord name is not in the catalog
    #[error("unknown formula '{0}'")]
    UnknownFormula(String),
}

/// Result alias for spelling operations
pub type Result<T> = std::result::Result<T, SpellingError>;
