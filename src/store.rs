//! View State Store
//!
//! What the controller last published, held in a reactive_stores Store so
//! components re-render per field.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::Item;

#[derive(Clone, Debug, Default, Store)]
pub struct ViewState {
    /// Items passing the current filter and query
    pub visible: Vec<Item>,
    /// Active items in the whole store
    pub active: usize,
    /// All items in the whole store
    pub total: usize,
}

pub type ViewStore = Store<ViewState>;

/// Get the view store from context
pub fn use_view_store() -> ViewStore {
    expect_context::<ViewStore>()
}
