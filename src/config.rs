//! Configuration handling for the TUI

use crate::state::FormState;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Tracing filter used when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "mermaid_prompt=info";

/// User configuration for the TUI. Read at startup, never written.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TuiConfig {
    /// Diagram type selected when the form opens
    pub diagram_type: Option<String>,
    /// Level of detail selected when the form opens
    pub detail_level: Option<String>,
    /// Tracing filter directive
    pub log_filter: Option<String>,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "mermaid-prompt", "mermaid-prompt")
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory the log file is written to
    pub fn log_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().to_path_buf())
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: TuiConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Form values the view starts with. Values are taken verbatim.
    pub fn initial_form_state(&self) -> FormState {
        let mut state = FormState::default();
        if let Some(diagram_type) = &self.diagram_type {
            state.diagram_type = diagram_type.clone();
        }
        if let Some(detail_level) = &self.detail_level {
            state.detail_level = detail_level.clone();
        }
        state
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "mermaid-prompt-{}-{name}.json",
            std::process::id()
        ))
    }

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.diagram_type.is_none());
        assert!(config.detail_level.is_none());
        assert!(config.log_filter.is_none());
        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_initial_form_state_defaults() {
        let config = TuiConfig::default();
        assert_eq!(config.initial_form_state(), FormState::default());
    }

    #[test]
    fn test_initial_form_state_overrides() {
        let config = TuiConfig {
            diagram_type: Some("mindmap".to_string()),
            detail_level: Some("detailed".to_string()),
            ..Default::default()
        };
        let state = config.initial_form_state();
        assert_eq!(state.diagram_type, "mindmap");
        assert_eq!(state.detail_level, "detailed");
        assert_eq!(state.selection, "");
        assert_eq!(state.notes, "");
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, TuiConfig::default());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"diagram_type": "pie", "theme": "dark"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.diagram_type, Some("pie".to_string()));
    }

    #[test]
    fn test_load_from_missing_file() {
        let path = temp_path("missing");
        let config = TuiConfig::load_from(&path).unwrap();
        assert_eq!(config, TuiConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_path("valid");
        fs::write(&path, r#"{"detail_level": "basic", "log_filter": "debug"}"#).unwrap();

        let config = TuiConfig::load_from(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.detail_level, Some("basic".to_string()));
        assert_eq!(config.log_filter(), "debug");
    }

    #[test]
    fn test_load_from_malformed_file() {
        let path = temp_path("malformed");
        fs::write(&path, "{ not json").unwrap();

        let result = TuiConfig::load_from(&path);
        fs::remove_file(&path).unwrap();

        assert!(result.is_err());
    }

    #[test]
    fn test_config_path_returns_option() {
        // Just test that the function doesn't panic
        let _path = TuiConfig::config_path();
        let _dir = TuiConfig::log_dir();
    }
}
