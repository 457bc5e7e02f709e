//! Filter Modes
//!
//! Which items the store publishes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::item::Item;

/// Visibility filter applied on publish
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    All,
    #[serde(rename = "completed")]
    CompletedOnly,
    #[serde(rename = "active")]
    ActiveOnly,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown filter mode: {0:?}")]
pub struct ParseFilterError(pub String);

impl FilterMode {
    /// All modes in select-option order
    pub const ALL: [FilterMode; 3] = [FilterMode::All, FilterMode::CompletedOnly, FilterMode::ActiveOnly];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::CompletedOnly => "completed",
            FilterMode::ActiveOnly => "active",
        }
    }

    pub fn admits(&self, item: &Item) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::CompletedOnly => item.completed,
            FilterMode::ActiveOnly => !item.completed,
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterMode {
    type Err = ParseFilterError;

    /// Accepts the option values plus the numeric ones older pages used (0 = all, 1 = completed)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "all" | "0" => Ok(FilterMode::All),
            "completed" | "1" => Ok(FilterMode::CompletedOnly),
            "active" | "2" => Ok(FilterMode::ActiveOnly),
            other => Err(ParseFilterError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemId;

    #[test]
    fn test_admits() {
        let active = Item::new(ItemId(1), "a");
        let done = active.toggled();

        assert!(FilterMode::All.admits(&active));
        assert!(FilterMode::All.admits(&done));
        assert!(FilterMode::CompletedOnly.admits(&done));
        assert!(!FilterMode::CompletedOnly.admits(&active));
        assert!(FilterMode::ActiveOnly.admits(&active));
        assert!(!FilterMode::ActiveOnly.admits(&done));
    }

    #[test]
    fn test_parse_option_values() {
        for mode in FilterMode::ALL {
            assert_eq!(mode.as_str().parse::<FilterMode>(), Ok(mode));
        }
        assert_eq!("0".parse::<FilterMode>(), Ok(FilterMode::All));
        assert_eq!("1".parse::<FilterMode>(), Ok(FilterMode::CompletedOnly));
        assert_eq!(" active ".parse::<FilterMode>(), Ok(FilterMode::ActiveOnly));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "done".parse::<FilterMode>().unwrap_err();
        assert_eq!(err, ParseFilterError("done".to_string()));
        assert_eq!(err.to_string(), "unknown filter mode: \"done\"");
    }

    #[test]
    fn test_default_is_all() {
        assert_eq!(FilterMode::default(), FilterMode::All);
    }
}
