//! UI Configuration
//!
//! Labels and log level, optionally overridden by a JSON block embedded in the page:
//! `<script id="todos-config" type="application/json">{ ... }</script>`

use serde::Deserialize;
use thiserror::Error;

/// Id of the optional config element in index.html
pub const CONFIG_ELEMENT_ID: &str = "todos-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no document available")]
    NoDocument,
    #[error("malformed config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Select option labels, one per filter mode
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FilterLabels {
    pub all: String,
    pub completed: String,
    pub active: String,
}

impl Default for FilterLabels {
    fn default() -> Self {
        Self {
            all: "All".to_string(),
            completed: "Completed".to_string(),
            active: "Active".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub title: String,
    pub input_placeholder: String,
    pub search_placeholder: String,
    pub add_label: String,
    pub remove_label: String,
    /// Shown instead of the list when nothing is visible
    pub empty_hint: String,
    pub filter_labels: FilterLabels,
    /// One of off, error, warn, info, debug, trace
    pub log_level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "Todos App".to_string(),
            input_placeholder: "add todo".to_string(),
            search_placeholder: "search todo".to_string(),
            add_label: "Add".to_string(),
            remove_label: "Remove".to_string(),
            empty_hint: "No todos!".to_string(),
            filter_labels: FilterLabels::default(),
            log_level: "info".to_string(),
        }
    }
}

impl UiConfig {
    /// Configured level, `Info` when unparsable
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

/// Parse config JSON; blank input means defaults
pub fn parse_config(raw: &str) -> Result<UiConfig, ConfigError> {
    if raw.trim().is_empty() {
        return Ok(UiConfig::default());
    }
    Ok(serde_json::from_str(raw)?)
}

/// Read the config element from the current page, defaults when it is absent
pub fn load_config() -> Result<UiConfig, ConfigError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(ConfigError::NoDocument)?;
    match document.get_element_by_id(CONFIG_ELEMENT_ID) {
        Some(element) => parse_config(&element.text_content().unwrap_or_default()),
        None => Ok(UiConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_config_is_default() {
        assert_eq!(parse_config("").unwrap(), UiConfig::default());
        assert_eq!(parse_config("  \n").unwrap(), UiConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config = parse_config(r#"{"title":"Дела","filter_labels":{"active":"Open"}}"#).unwrap();
        assert_eq!(config.title, "Дела");
        assert_eq!(config.filter_labels.active, "Open");
        assert_eq!(config.filter_labels.all, "All");
        assert_eq!(config.remove_label, "Remove");
    }

    #[test]
    fn test_malformed_config_is_error() {
        let err = parse_config("{ title: ").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(err.to_string().starts_with("malformed config JSON"));
    }

    #[test]
    fn test_level_filter() {
        let mut config = UiConfig::default();
        assert_eq!(config.level_filter(), log::LevelFilter::Info);

        config.log_level = "debug".to_string();
        assert_eq!(config.level_filter(), log::LevelFilter::Debug);

        config.log_level = "loud".to_string();
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }
}
