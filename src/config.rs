use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::classification::rules::RuleConfig;
use crate::document::attribute::{AttributeDefinition, AttributeError, AttributeSet};
use crate::document::NamingConvention;
use crate::pipeline::standards::TemplateConflictPolicy;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid attribute definitions: {0}")]
    Attributes(#[from] AttributeError),
    #[error("Keyword pattern failed to compile: {0}")]
    Pattern(#[from] regex::Error),
    #[error("Threshold {name} must lie in [0.0, 1.0], got {value}")]
    ThresholdOutOfRange { name: &'static str, value: f64 },
    #[error("Substitution floor {floor} exceeds semantic threshold {threshold}")]
    FloorAboveThreshold { floor: f64, threshold: f64 },
    #[error("Blank entry in {field}")]
    BlankPhrase { field: &'static str },
}

/// Everything the engine needs before the first document is read.
///
/// Serializable so a run can be reproduced from the exact configuration;
/// every field falls back to its default when absent from the JSON.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub attributes: AttributeSet,
    pub rules: RuleConfig,
    pub naming: NamingConvention,
    pub template_conflict: TemplateConflictPolicy,
}

impl EngineConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Defaults with a custom attribute catalogue.
    pub fn from_attributes(attributes: Vec<AttributeDefinition>) -> Result<Self, ConfigError> {
        Ok(Self {
            attributes: AttributeSet::new(attributes)?,
            ..Self::default()
        })
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        // AttributeSet validates while deserializing.
        let config: EngineConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_unit_range("semantic_threshold", self.rules.semantic_threshold)?;
        check_unit_range("substitution_floor", self.rules.substitution_floor)?;
        if self.rules.substitution_floor > self.rules.semantic_threshold {
            return Err(ConfigError::FloorAboveThreshold {
                floor: self.rules.substitution_floor,
                threshold: self.rules.semantic_threshold,
            });
        }

        // Substring checks against "" always succeed.
        let filing = &self.rules.filing_period;
        check_phrases("filing_period.attribute_marker", std::slice::from_ref(&filing.attribute_marker))?;
        check_phrases("filing_period.deviant_phrases", &filing.deviant_phrases)?;
        check_phrases("filing_period.compliant_phrases", &filing.compliant_phrases)?;
        check_phrases("conditional_phrases", &self.rules.conditional_phrases)?;
        check_phrases("substitution_markers", &self.rules.substitution_markers)?;
        check_phrases("naming.template_marker", std::slice::from_ref(&self.naming.template_marker))?;
        Ok(())
    }
}

fn check_phrases(field: &'static str, phrases: &[String]) -> Result<(), ConfigError> {
    if phrases.iter().any(|p| p.trim().is_empty()) {
        return Err(ConfigError::BlankPhrase { field });
    }
    Ok(())
}

fn check_unit_range(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ThresholdOutOfRange { name, value })
    }
}
