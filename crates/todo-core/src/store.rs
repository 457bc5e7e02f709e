//! Item Store
//!
//! Owns the ordered item list, the active filter and the search query.
//! Every mutation republishes the visible subset to the one registered observer.

use crate::filter::FilterMode;
use crate::item::{Item, ItemId};

/// Receives the visible items after every store change
pub trait TodoObserver {
    fn todos_changed(&mut self, visible: &[Item]);
}

impl<F> TodoObserver for F
where
    F: FnMut(&[Item]),
{
    fn todos_changed(&mut self, visible: &[Item]) {
        self(visible)
    }
}

/// In-memory to-do list with a single observer slot
#[derive(Default)]
pub struct TodoStore {
    items: Vec<Item>,
    filter: FilterMode,
    query: String,
    /// Last id handed out
    last_id: u64,
    observer: Option<Box<dyn TodoObserver>>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the observer. Only one is kept: the previous one, if any, is handed back.
    pub fn subscribe(&mut self, observer: impl TodoObserver + 'static) -> Option<Box<dyn TodoObserver>> {
        let previous = self.observer.replace(Box::new(observer));
        if previous.is_some() {
            log::debug!("[STORE] observer replaced");
        }
        previous
    }

    // ========================
    // Mutations
    // ========================

    /// Append a new active item. Text is taken as given.
    pub fn add_item(&mut self, text: impl Into<String>) -> ItemId {
        let id = self.next_id();
        let item = Item::new(id, text);
        log::debug!("[STORE] add #{} {:?}", id, item.text);
        self.items.push(item);
        self.publish();
        id
    }

    /// Drop the item with `id`; unknown ids change nothing but still publish
    pub fn remove_item(&mut self, id: ItemId) {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        log::debug!("[STORE] remove #{} (removed {})", id, before - self.items.len());
        self.publish();
    }

    /// Replace the item with `id` by a copy with `completed` flipped
    pub fn toggle_item(&mut self, id: ItemId) {
        self.replace_matching(id, Item::toggled);
        log::debug!("[STORE] toggle #{}", id);
        self.publish();
    }

    /// Replace the item with `id` by a copy carrying `text`
    pub fn rename_item(&mut self, id: ItemId, text: impl Into<String>) {
        let text = text.into();
        self.replace_matching(id, |item| item.renamed(text.clone()));
        log::debug!("[STORE] rename #{} {:?}", id, text);
        self.publish();
    }

    pub fn set_filter(&mut self, mode: FilterMode) {
        log::debug!("[STORE] filter {}", mode);
        self.filter = mode;
        self.publish();
    }

    /// Narrow the visible items to those containing `query`, ignoring case
    pub fn set_query(&mut self, query: impl AsRef<str>) {
        self.query = query.as_ref().trim().to_string();
        log::debug!("[STORE] query {:?}", self.query);
        self.publish();
    }

    // ========================
    // Publishing
    // ========================

    /// Send the visible items to the observer
    pub fn publish(&mut self) {
        let visible = self.visible();
        self.notify(&visible);
    }

    /// Send every item, ignoring filter and query. Used once at startup.
    pub fn publish_unfiltered(&mut self) {
        let all = self.items.clone();
        self.notify(&all);
    }

    fn notify(&mut self, items: &[Item]) {
        match self.observer.as_mut() {
            Some(observer) => {
                log::trace!("[STORE] publish {} of {} items", items.len(), self.items.len());
                observer.todos_changed(items);
            }
            None => log::trace!("[STORE] publish skipped, no observer"),
        }
    }

    // ========================
    // Queries
    // ========================

    /// Items passing the filter and the query, in insertion order
    pub fn visible(&self) -> Vec<Item> {
        let needle = self.query.to_lowercase();
        self.items
            .iter()
            .filter(|item| self.filter.admits(item))
            .filter(|item| needle.is_empty() || item.text.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.items.iter().filter(|item| !item.completed).count()
    }

    fn next_id(&mut self) -> ItemId {
        self.last_id += 1;
        ItemId(self.last_id)
    }

    fn replace_matching(&mut self, id: ItemId, update: impl Fn(&Item) -> Item) {
        self.items = self
            .items
            .iter()
            .map(|item| if item.id == id { update(item) } else { item.clone() })
            .collect();
    }
}
