//! Controller
//!
//! Binds a view to the store: user actions go to the store, store publishes go to the view.

use std::rc::Rc;

use crate::action::UserAction;
use crate::item::Item;
use crate::store::TodoStore;

/// Rendering capability the controller drives
pub trait TodoView {
    /// Show `visible` in place of whatever was rendered before
    fn render(&self, visible: &[Item]);

    /// Totals over the whole store, sent after every action
    fn counts_changed(&self, _active: usize, _total: usize) {}
}

pub struct Controller<V: TodoView> {
    store: TodoStore,
    view: Rc<V>,
}

impl<V: TodoView + 'static> Controller<V> {
    /// Subscribe `view` to `store` and render the starting state once
    pub fn new(mut store: TodoStore, view: Rc<V>) -> Self {
        let observer_view = view.clone();
        store.subscribe(move |visible: &[Item]| observer_view.render(visible));
        store.publish_unfiltered();
        view.counts_changed(store.active_count(), store.len());
        Self { store, view }
    }

    pub fn dispatch(&mut self, action: UserAction) {
        log::debug!("[CONTROLLER] {:?}", action);
        match action {
            UserAction::Add(text) => {
                self.store.add_item(text);
            }
            UserAction::Remove(id) => self.store.remove_item(id),
            UserAction::Toggle(id) => self.store.toggle_item(id),
            UserAction::Filter(mode) => self.store.set_filter(mode),
            UserAction::Rename(id, text) => self.store.rename_item(id, text),
            UserAction::Search(query) => self.store.set_query(query),
        }
        self.view.counts_changed(self.store.active_count(), self.store.len());
    }

    pub fn store(&self) -> &TodoStore {
        &self.store
    }
}
