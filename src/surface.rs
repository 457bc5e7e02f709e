//! Leptos Surface
//!
//! `TodoView` implementation that feeds controller publishes into the view store.

use leptos::prelude::*;
use todo_core::{Item, TodoView};

use crate::store::{ViewStateStoreFields, ViewStore};

pub struct LeptosSurface {
    state: ViewStore,
}

impl LeptosSurface {
    pub fn new(state: ViewStore) -> Self {
        Self { state }
    }
}

impl TodoView for LeptosSurface {
    fn render(&self, visible: &[Item]) {
        log::debug!("[VIEW] render {} items", visible.len());
        self.state.visible().set(visible.to_vec());
    }

    fn counts_changed(&self, active: usize, total: usize) {
        self.state.active().set(active);
        self.state.total().set(total);
    }
}
