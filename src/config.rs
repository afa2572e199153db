// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration.
//!
//! Every knob has a default, so an empty JSON object (or no file at all) is a
//! valid configuration. Sections may be given partially:
//!
//! ```json
//! { "scoring": { "parent_damping": 0.9 }, "highlight": { "max_fragments": 2 } }
//! ```

use crate::error::ConfigError;
use crate::scoring::{DESCRIPTION_WEIGHT, NAME_WEIGHT, PARENT_DAMPING};
use crate::types::{FieldKind, WeightClass};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub scoring: ScoringConfig,
    pub highlight: HighlightConfig,
    pub pagination: PaginationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Weight of class A (name) occurrences.
    pub name_weight: f64,
    /// Weight of class B (description) occurrences.
    pub description_weight: f64,
    /// Multiplier applied to a column score when its table is synthesized.
    pub parent_damping: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        ScoringConfig {
            name_weight: NAME_WEIGHT,
            description_weight: DESCRIPTION_WEIGHT,
            parent_damping: PARENT_DAMPING,
        }
    }
}

impl ScoringConfig {
    pub fn weight(&self, class: WeightClass) -> f64 {
        match class {
            WeightClass::A => self.name_weight,
            WeightClass::B => self.description_weight,
        }
    }

    pub fn field_weight(&self, field: FieldKind) -> f64 {
        self.weight(field.weight_class())
    }
}

/// Highlight markers and fragment shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub start_sel: String,
    pub stop_sel: String,
    pub max_fragments: usize,
    pub max_words: usize,
    pub fragment_delimiter: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        HighlightConfig {
            start_sel: "<mark>".to_string(),
            stop_sel: "</mark>".to_string(),
            max_fragments: 3,
            max_words: 50,
            fragment_delimiter: " ... ".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub default_page_size: usize,
    pub max_page_size: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        PaginationConfig {
            default_page_size: 20,
            max_page_size: 100,
        }
    }
}

impl SearchConfig {
    /// Load and validate a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Parse and validate a JSON configuration string.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let scoring = &self.scoring;
        if !(scoring.name_weight.is_finite() && scoring.name_weight > 0.0) {
            return Err(invalid("scoring.name_weight", "must be a positive number"));
        }
        if !(scoring.description_weight.is_finite() && scoring.description_weight > 0.0) {
            return Err(invalid(
                "scoring.description_weight",
                "must be a positive number",
            ));
        }
        if scoring.name_weight <= scoring.description_weight {
            return Err(invalid(
                "scoring.name_weight",
                "must be greater than scoring.description_weight",
            ));
        }
        if !(scoring.parent_damping > 0.0 && scoring.parent_damping <= 1.0) {
            return Err(invalid("scoring.parent_damping", "must be in (0, 1]"));
        }

        if self.highlight.max_fragments == 0 {
            return Err(invalid("highlight.max_fragments", "must be at least 1"));
        }
        if self.highlight.max_words == 0 {
            return Err(invalid("highlight.max_words", "must be at least 1"));
        }

        let pagination = &self.pagination;
        if pagination.max_page_size == 0 {
            return Err(invalid("pagination.max_page_size", "must be at least 1"));
        }
        if pagination.default_page_size == 0
            || pagination.default_page_size > pagination.max_page_size
        {
            return Err(invalid(
                "pagination.default_page_size",
                format!("must be in [1, {}]", pagination.max_page_size),
            ));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}
