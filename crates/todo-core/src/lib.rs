//! Todo Core
//!
//! Rendering-free half of the todos app:
//! - item: Item entity and id
//! - filter: visibility filter modes
//! - store: item store with a single observer
//! - action: user intents raised by the view
//! - controller: wires user actions to the store and the store to a view

mod item;
mod filter;
mod store;
mod action;
mod controller;

pub use item::{Item, ItemId};
pub use filter::{FilterMode, ParseFilterError};
pub use store::{TodoObserver, TodoStore};
pub use action::UserAction;
pub use controller::{Controller, TodoView};
