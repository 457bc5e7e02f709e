//! New Todo Form Component
//!
//! Text input plus add button.

use leptos::prelude::*;
use todo_core::UserAction;

use crate::context::use_app_context;

/// Text to add, or None when the input is blank
pub fn add_intent(raw: &str) -> Option<String> {
    let text = raw.trim();
    (!text.is_empty()).then(|| text.to_string())
}

#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_app_context();
    let config = ctx.config();

    let (new_text, set_new_text) = signal(String::new());

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(text) = add_intent(&new_text.get()) else { return };
        ctx.dispatch(UserAction::Add(text));
        set_new_text.set(String::new());
    };

    view! {
        <form class="form" on:submit=add_todo>
            <input
                type="text"
                class="form__input"
                placeholder=config.input_placeholder
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit" class="form__button">{config.add_label}</button>
        </form>
    }
}
