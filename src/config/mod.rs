// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Formula catalog configuration.
//!
//! The catalog names the scale and chord formulas and the mode rotation
//! table. A built-in catalog ships with the crate; a user catalog can be
//! loaded from a YAML or TOML file at start-up. Catalogs are read once
//! and never mutated afterwards.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::music::{make_formula, make_intervals, IntervalType, Mode, SpellingError};

/// Catalog shipped with the crate
const BUILTIN_CATALOG: &str = include_str!("catalog.yaml");

/// Tonic used to check that catalog formulas only use known labels
const VALIDATION_KEY: &str = "C";

/// Named scale/chord formulas and mode rotations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    /// Scale formulas by name
    #[serde(default)]
    pub scales: BTreeMap<String, String>,
    /// Chord formulas by name
    #[serde(default)]
    pub chords: BTreeMap<String, String>,
    /// Mode name -> rotation of the major scale (0-6)
    #[serde(default = "default_modes")]
    pub modes: BTreeMap<String, usize>,
}

fn default_modes() -> BTreeMap<String, usize> {
    Mode::ALL
        .iter()
        .map(|m| (m.name().to_string(), m.rotation()))
        .collect()
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            scales: BTreeMap::new(),
            chords: BTreeMap::new(),
            modes: default_modes(),
        }
    }
}

/// On-disk catalog syntax
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Yaml,
    Toml,
}

impl CatalogFormat {
    /// Format implied by a file name: `.toml` is TOML, anything else YAML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => CatalogFormat::Toml,
            _ => CatalogFormat::Yaml,
        }
    }
}

impl Catalog {
    /// The catalog embedded in the binary
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN_CATALOG, CatalogFormat::Yaml).context("Built-in catalog is malformed")
    }

    /// Load a catalog file, picking the syntax from its extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {:?}", path))?;
        let catalog = Self::parse(&contents, CatalogFormat::from_path(path))
            .with_context(|| format!("Invalid catalog file: {:?}", path))?;

        debug!(
            path = %path.display(),
            scales = catalog.scales.len(),
            chords = catalog.chords.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Parse catalog text in the given syntax
    pub fn parse(text: &str, format: CatalogFormat) -> Result<Self> {
        match format {
            CatalogFormat::Yaml => serde_yaml::from_str(text).context("Failed to parse YAML catalog"),
            CatalogFormat::Toml => toml::from_str(text).context("Failed to parse TOML catalog"),
        }
    }

    /// Render the catalog in the given syntax
    pub fn render(&self, format: CatalogFormat) -> Result<String> {
        match format {
            CatalogFormat::Yaml => {
                serde_yaml::to_string(self).context("Failed to render catalog as YAML")
            }
            CatalogFormat::Toml => toml::to_string(self).context("Failed to render catalog as TOML"),
        }
    }

    /// Write the catalog, in the syntax its extension implies
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let text = self.render(CatalogFormat::from_path(path))?;
        fs::write(path, text).with_context(|| format!("Failed to write catalog file: {:?}", path))
    }

    /// Scale formula by name
    pub fn scale(&self, name: &str) -> std::result::Result<&str, SpellingError> {
        self.scales
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| SpellingError::UnknownFormula(name.to_string()))
    }

    /// Chord formula by name
    pub fn chord(&self, name: &str) -> std::result::Result<&str, SpellingError> {
        self.chords
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| SpellingError::UnknownFormula(name.to_string()))
    }

    /// Rotation amount for a mode name (exact match first, then case-insensitive)
    pub fn mode_rotation(&self, name: &str) -> std::result::Result<usize, SpellingError> {
        if let Some(&rotation) = self.modes.get(name) {
            return Ok(rotation);
        }
        self.modes
            .iter()
            .find(|(mode_name, _)| mode_name.eq_ignore_ascii_case(name))
            .map(|(_, &rotation)| rotation)
            .ok_or_else(|| SpellingError::UnknownMode(name.to_string()))
    }

    /// Mode names sorted by rotation
    pub fn modes_by_rotation(&self) -> Vec<(&str, usize)> {
        let mut modes: Vec<(&str, usize)> =
            self.modes.iter().map(|(name, &r)| (name.as_str(), r)).collect();
        modes.sort_by_key(|&(name, rotation)| (rotation, name));
        modes
    }

    /// Every problem with this catalog, empty when it is usable
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();

        match make_intervals(VALIDATION_KEY, IntervalType::Major) {
            Ok(resolution) => {
                let formulas = self
                    .scales
                    .iter()
                    .map(|(name, f)| ("scale", name, f))
                    .chain(self.chords.iter().map(|(name, f)| ("chord", name, f)));
                for (kind, name, formula) in formulas {
                    if let Err(e) = make_formula(formula, &resolution) {
                        problems.push(format!("{} '{}': {}", kind, name, e));
                    }
                }
            }
            Err(e) => problems.push(e.to_string()),
        }

        for (name, &rotation) in &self.modes {
            if Mode::from_rotation(rotation).is_none() {
                problems.push(format!(
                    "mode '{}': rotation {} is outside 0-6",
                    name, rotation
                ));
            }
        }

        problems
    }

    /// Fail with every problem found if the catalog is not usable
    pub fn validate(&self) -> Result<()> {
        let problems = self.problems();
        if problems.is_empty() {
            Ok(())
        } else {
            bail!("Invalid catalog:\n  {}", problems.join("\n  "))
        }
    }
}
