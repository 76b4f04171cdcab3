// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration system for pcset.
//!
//! This module loads the default universe, the default rescaling policy
//! and a catalogue of named sets and sequences from YAML or TOML files.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::theory::{default_universe, PitchClassSequence, PitchClassSet, RescaleMode, Universe};

/// Root configuration file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TheoryFile {
    /// Universe and rescaling defaults
    #[serde(default)]
    pub theory: TheoryConfig,
    /// Named sets, as raw integers in the configured universe
    #[serde(default)]
    pub sets: BTreeMap<String, Vec<i64>>,
    /// Named sequences, as raw integers in the configured universe
    #[serde(default)]
    pub sequences: BTreeMap<String, Vec<i64>>,
}

impl TheoryFile {
    /// Load a configuration file, choosing TOML for `.toml` and YAML otherwise
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let file = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml(&contents)?,
            _ => Self::from_yaml(&contents)?,
        };
        file.validate()
            .with_context(|| format!("Invalid config file: {:?}", path))?;
        Ok(file)
    }

    /// Parse a configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }

    /// Parse a configuration from TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML configuration")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).context("Failed to serialize configuration to TOML")
    }

    /// Save configuration, choosing the format from the extension
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let text = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => self.to_toml()?,
            _ => self.to_yaml()?,
        };
        fs::write(path, text).with_context(|| format!("Failed to write config file: {:?}", path))
    }

    /// Check the universe is usable
    pub fn validate(&self) -> Result<()> {
        if self.theory.universe == 0 {
            bail!("universe must be at least 1");
        }
        Ok(())
    }

    /// Build the named set in the configured universe
    pub fn named_set(&self, name: &str) -> Result<PitchClassSet> {
        let values = self
            .sets
            .get(name)
            .with_context(|| format!("No set named '{}' in configuration", name))?;
        Ok(PitchClassSet::with_univ(values.iter().copied(), self.theory.universe)?)
    }

    /// Build the named sequence in the configured universe
    pub fn named_sequence(&self, name: &str) -> Result<PitchClassSequence> {
        let values = self
            .sequences
            .get(name)
            .with_context(|| format!("No sequence named '{}' in configuration", name))?;
        Ok(PitchClassSequence::with_univ(values.iter().copied(), self.theory.universe)?)
    }
}

/// Universe and rescaling defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TheoryConfig {
    /// Universe size for values that do not name one
    #[serde(default = "default_universe")]
    pub universe: Universe,
    /// Policy for inexact rescaling
    #[serde(default)]
    pub rescale_mode: RescaleMode,
}

impl Default for TheoryConfig {
    fn default() -> Self {
        Self {
            universe: default_universe(),
            rescale_mode: RescaleMode::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theory::PitchClasses;
    use tempfile::tempdir;

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
theory:
  universe: 12
  rescale_mode: floor

sets:
  augmented: [0, 4, 8]
  major: [0, 4, 7]

sequences:
  motif: [0, 1, 4, 2]
"#;

        let config = TheoryFile::from_yaml(yaml).unwrap();
        assert_eq!(config.theory.universe, 12);
        assert_eq!(config.theory.rescale_mode, RescaleMode::Floor);
        assert_eq!(config.sets.len(), 2);
        assert_eq!(config.named_set("augmented").unwrap().pcs(), &[0, 4, 8]);
        assert_eq!(config.named_sequence("motif").unwrap().pcs(), &[0, 1, 4, 2]);
        assert!(config.named_set("missing").is_err());
    }

    #[test]
    fn test_parse_toml() {
        let text = r#"
[theory]
universe = 7
rescale_mode = "r"

[sets]
triad = [0, 2, 11]
"#;

        let config = TheoryFile::from_toml(text).unwrap();
        assert_eq!(config.theory.universe, 7);
        assert_eq!(config.theory.rescale_mode, RescaleMode::Round);
        let triad = config.named_set("triad").unwrap();
        assert_eq!(triad.univ(), 7);
        assert_eq!(triad.pcs(), &[0, 2, 4]);
    }

    #[test]
    fn test_default_values() {
        let config = TheoryFile::from_yaml("sets: {}\n").unwrap();
        assert_eq!(config.theory.universe, 12);
        assert_eq!(config.theory.rescale_mode, RescaleMode::Exception);
        assert!(config.sequences.is_empty());
    }

    #[test]
    fn test_invalid_mode_rejected() {
        let yaml = "theory:\n  rescale_mode: sideways\n";
        assert!(TheoryFile::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_round_trip() {
        let mut original = TheoryFile::default();
        original.theory.rescale_mode = RescaleMode::Ceiling;
        original.sets.insert("whole_tone".to_string(), vec![0, 2, 4, 6, 8, 10]);

        let yaml = original.to_yaml().unwrap();
        assert_eq!(TheoryFile::from_yaml(&yaml).unwrap(), original);

        let toml_text = original.to_toml().unwrap();
        assert_eq!(TheoryFile::from_toml(&toml_text).unwrap(), original);
    }

    #[test]
    fn test_load_and_save() {
        let dir = tempdir().unwrap();
        let mut config = TheoryFile::default();
        config.sets.insert("fifths".to_string(), vec![0, 7, 2]);

        for name in ["theory.yaml", "theory.toml"] {
            let path = dir.path().join(name);
            config.save(&path).unwrap();
            let loaded = TheoryFile::load(&path).unwrap();
            assert_eq!(loaded, config);
        }
    }

    #[test]
    fn test_load_rejects_zero_universe() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("zero.yaml");
        fs::write(&path, "theory:\n  universe: 0\n").unwrap();
        assert!(TheoryFile::load(&path).is_err());
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid.yaml");
        fs::write(&path, "this is not valid yaml: [").unwrap();
        assert!(TheoryFile::load(&path).is_err());
        assert!(TheoryFile::load(dir.path().join("missing.yaml")).is_err());
    }
}
