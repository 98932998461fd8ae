//! Capability flags and classifier policy

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Capability flags of the resource being scaffolded.
///
/// These drive which filters and actions are wired up and whether table
/// columns are generated at all.
#[derive(Debug, Clone, Copy)]
#[allow(clippy::struct_excessive_bools)] // capability flags are genuinely independent booleans
pub struct ResourceOptions {
    /// Whether table columns should be derived from the schema
    pub generated: bool,
    /// Whether the model supports soft deletion
    pub soft_deletable: bool,
    /// Whether the resource runs in simple (modal) mode
    pub simple: bool,
    /// Whether the resource has a view operation
    pub view_operation: bool,
}

impl Default for ResourceOptions {
    fn default() -> Self {
        Self {
            generated: true,
            soft_deletable: false,
            simple: false,
            view_operation: false,
        }
    }
}

/// Name-matching policy for the column classifier.
///
/// The exact rules for spotting secret columns and guessing a related
/// table's label column are policy, not fixed heuristics; they can be
/// overridden from a JSON file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Candidate names for a related table's human-readable label column,
    /// checked in order
    pub title_column_candidates: Vec<String>,
    /// Substrings that mark a column as secret and exclude it
    /// (case-insensitive)
    pub secret_name_markers: Vec<String>,
    /// Name suffixes that exclude a column (case-insensitive)
    pub excluded_name_suffixes: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            title_column_candidates: vec![
                "name".to_string(),
                "title".to_string(),
                "label".to_string(),
                "slug".to_string(),
            ],
            secret_name_markers: vec!["password".to_string()],
            excluded_name_suffixes: vec!["_token".to_string()],
        }
    }
}

impl ClassifierConfig {
    /// Load a policy override from a JSON file.
    ///
    /// Omitted fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read policy file: {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse policy file: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_default() {
        let options = ResourceOptions::default();
        assert!(options.generated);
        assert!(!options.soft_deletable);
        assert!(!options.simple);
        assert!(!options.view_operation);
    }

    #[test]
    fn test_config_default() {
        let config = ClassifierConfig::default();
        assert_eq!(config.title_column_candidates[0], "name");
        assert_eq!(config.secret_name_markers, vec!["password"]);
        assert_eq!(config.excluded_name_suffixes, vec!["_token"]);
    }

    #[test]
    fn test_config_partial_override() {
        let config: ClassifierConfig =
            serde_json::from_str(r#"{"title_column_candidates": ["display_name"]}"#).unwrap();
        assert_eq!(config.title_column_candidates, vec!["display_name"]);
        assert_eq!(config.secret_name_markers, vec!["password"]);
    }
}
