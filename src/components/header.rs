//! Header Component

use leptos::prelude::*;

use crate::components::{FilterSelect, SearchInput};
use crate::context::use_app_context;

/// Title, filter select and search box
#[component]
pub fn Header() -> impl IntoView {
    let title = use_app_context().config().title;

    view! {
        <header class="header">
            <h1 class="title">{title}</h1>
            <FilterSelect />
            <SearchInput />
        </header>
    }
}
