//! Todo Row Component
//!
//! Checkbox, editable text and remove button for one item.
//! Text and completion are read from the view store, so edits never rebuild the row.

use leptos::prelude::*;
use todo_core::{Item, ItemId, UserAction};
use wasm_bindgen::JsCast;

use crate::context::use_app_context;
use crate::store::{use_view_store, ViewStateStoreFields};

/// New text after an inline edit, or None when the edit should be discarded
pub fn rename_intent(original: &str, edited: &str) -> Option<String> {
    let text = edited.trim();
    (!text.is_empty() && text != original).then(|| text.to_string())
}

#[component]
pub fn TodoRow(id: ItemId) -> impl IntoView {
    let ctx = use_app_context();
    let state = use_view_store();
    let remove_label = ctx.config().remove_label;

    let current = move || -> Option<Item> {
        state.visible().read().iter().find(|item| item.id == id).cloned()
    };
    let completed = move || current().is_some_and(|item| item.completed);
    let text = move || current().map(|item| item.text).unwrap_or_default();

    let on_blur = move |ev: web_sys::FocusEvent| {
        let Some(span) = ev
            .current_target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return;
        };
        let original = untrack(text);
        let edited = span.inner_text();
        match rename_intent(&original, &edited) {
            Some(new_text) => ctx.dispatch(UserAction::Rename(id, new_text)),
            // Blank or whitespace-only edits snap back
            None if edited != original => span.set_inner_text(&original),
            None => {}
        }
    };

    view! {
        <li class=move || if completed() { "list completed" } else { "list" } id=id.to_string()>
            <input
                type="checkbox"
                prop:checked=completed
                on:change=move |_| ctx.dispatch(UserAction::Toggle(id))
            />
            <span
                class=move || if completed() { "list__text done" } else { "list__text" }
                contenteditable="true"
                prop:textContent=text
                on:blur=on_blur
            />
            <button class="list__button" on:click=move |_| ctx.dispatch(UserAction::Remove(id))>
                {remove_label}
            </button>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use todo_core::{Controller, TodoStore, TodoView};

    #[derive(Default)]
    struct LastRender(RefCell<Vec<Item>>);

    impl TodoView for LastRender {
        fn render(&self, visible: &[Item]) {
            *self.0.borrow_mut() = visible.to_vec();
        }
    }

    #[test]
    fn test_rename_intent() {
        assert_eq!(rename_intent("milk", "oat milk"), Some("oat milk".to_string()));
        assert_eq!(rename_intent("milk", " oat milk\n"), Some("oat milk".to_string()));
        assert_eq!(rename_intent("milk", "milk"), None);
        assert_eq!(rename_intent("milk", " milk "), None);
        assert_eq!(rename_intent("milk", "   "), None);
    }

    #[test]
    fn test_edit_then_remove_both_apply() {
        let view = Rc::new(LastRender::default());
        let mut controller = Controller::new(TodoStore::new(), view.clone());
        controller.dispatch(UserAction::Add("milk".into()));
        controller.dispatch(UserAction::Add("bread".into()));
        let id = controller.store().items()[0].id;

        // Blur commits the edit before the remove click lands
        let new_text = rename_intent("milk", "oat milk").unwrap();
        controller.dispatch(UserAction::Rename(id, new_text));
        assert_eq!(view.0.borrow()[0].text, "oat milk");
        assert_eq!(crate::components::todo_list::row_key(&view.0.borrow()[0]), id);

        controller.dispatch(UserAction::Remove(id));
        let texts: Vec<String> = view.0.borrow().iter().map(|i| i.text.clone()).collect();
        assert_eq!(texts, vec!["bread"]);
    }

    #[test]
    fn test_edit_then_toggle_both_apply() {
        let view = Rc::new(LastRender::default());
        let mut controller = Controller::new(TodoStore::new(), view.clone());
        controller.dispatch(UserAction::Add("milk".into()));
        let id = controller.store().items()[0].id;

        controller.dispatch(UserAction::Rename(id, rename_intent("milk", "oat milk").unwrap()));
        controller.dispatch(UserAction::Toggle(id));

        let item = view.0.borrow()[0].clone();
        assert_eq!(item.text, "oat milk");
        assert!(item.completed);
    }
}
