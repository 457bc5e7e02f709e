//! User Actions
//!
//! Intents raised by the presentation layer.

use crate::filter::FilterMode;
use crate::item::ItemId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    /// Add a new item; the view only raises this for non-empty trimmed text
    Add(String),
    Remove(ItemId),
    Toggle(ItemId),
    Filter(FilterMode),
    Rename(ItemId, String),
    Search(String),
}
