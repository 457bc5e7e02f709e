//! Filter Select Component
//!
//! Dropdown choosing which items are visible.

use leptos::prelude::*;
use todo_core::{FilterMode, UserAction};

use crate::config::FilterLabels;
use crate::context::use_app_context;

/// (option value, label) pairs in display order
pub fn filter_options(labels: &FilterLabels) -> Vec<(&'static str, String)> {
    FilterMode::ALL
        .iter()
        .map(|mode| {
            let label = match mode {
                FilterMode::All => &labels.all,
                FilterMode::CompletedOnly => &labels.completed,
                FilterMode::ActiveOnly => &labels.active,
            };
            (mode.as_str(), label.clone())
        })
        .collect()
}

#[component]
pub fn FilterSelect() -> impl IntoView {
    let ctx = use_app_context();
    let options = filter_options(&ctx.config().filter_labels);

    let on_change = move |ev: web_sys::Event| {
        match event_target_value(&ev).parse::<FilterMode>() {
            Ok(mode) => ctx.dispatch(UserAction::Filter(mode)),
            Err(e) => log::warn!("[FILTER] {}", e),
        }
    };

    view! {
        <select class="select__filter" on:change=on_change>
            {options.into_iter().map(|(value, label)| view! {
                <option value=value>{label}</option>
            }).collect_view()}
        </select>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_options_follow_mode_order() {
        let labels = FilterLabels {
            all: "Все".to_string(),
            ..FilterLabels::default()
        };
        let options = filter_options(&labels);
        assert_eq!(
            options,
            vec![
                ("all", "Все".to_string()),
                ("completed", "Completed".to_string()),
                ("active", "Active".to_string()),
            ]
        );
        for (value, _) in &options {
            assert!(value.parse::<FilterMode>().is_ok());
        }
    }
}
