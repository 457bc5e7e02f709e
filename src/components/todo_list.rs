//! Todo List Component
//!
//! Rows for the visible items, or a hint when there are none.

use leptos::prelude::*;
use todo_core::{Item, ItemId};

use crate::components::TodoRow;
use crate::context::use_app_context;
use crate::store::{use_view_store, ViewStateStoreFields};

/// Rows are keyed by id only; text and completion update in place
pub fn row_key(item: &Item) -> ItemId {
    item.id
}

#[component]
pub fn TodoList() -> impl IntoView {
    let state = use_view_store();
    let empty_hint = use_app_context().config().empty_hint;

    let visible = move || state.visible().get();

    view! {
        <Show
            when=move || !state.visible().read().is_empty()
            fallback=move || view! { <p class="title__hint">{empty_hint.clone()}</p> }
        >
            <ul class="lists">
                <For
                    each=visible
                    key=row_key
                    children=move |item| view! { <TodoRow id=item.id /> }
                />
            </ul>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_key_survives_rename_and_toggle() {
        let item = Item::new(ItemId(4), "milk");
        let key = row_key(&item);
        assert_eq!(row_key(&item.renamed("oat milk")), key);
        assert_eq!(row_key(&item.toggled()), key);
    }
}
