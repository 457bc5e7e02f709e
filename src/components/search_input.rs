//! Search Input Component

use leptos::prelude::*;
use todo_core::UserAction;

use crate::context::use_app_context;

/// Narrows the list to items containing the typed text
#[component]
pub fn SearchInput() -> impl IntoView {
    let ctx = use_app_context();
    let placeholder = ctx.config().search_placeholder;

    view! {
        <input
            type="text"
            class="input__search"
            placeholder=placeholder
            on:input=move |ev| ctx.dispatch(UserAction::Search(event_target_value(&ev)))
        />
    }
}
