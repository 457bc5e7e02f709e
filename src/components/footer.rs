//! Footer Component

use leptos::prelude::*;

use crate::store::{use_view_store, ViewStateStoreFields};

pub fn items_left_label(active: usize) -> String {
    match active {
        1 => "1 item left".to_string(),
        n => format!("{} items left", n),
    }
}

/// Count of active items across the whole list
#[component]
pub fn Footer() -> impl IntoView {
    let state = use_view_store();

    view! {
        <footer class="footer">
            <p class="item-count">{move || items_left_label(state.active().get())}</p>
            <p class="item-total">{move || format!("{} total", state.total().get())}</p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_left_label() {
        assert_eq!(items_left_label(0), "0 items left");
        assert_eq!(items_left_label(1), "1 item left");
        assert_eq!(items_left_label(12), "12 items left");
    }
}
