//! Application Context
//!
//! Controller and config shared with components via Leptos Context API.

use leptos::prelude::*;
use todo_core::{Controller, UserAction};

use crate::config::UiConfig;
use crate::surface::LeptosSurface;

#[derive(Clone, Copy)]
pub struct AppContext {
    controller: StoredValue<Controller<LeptosSurface>, LocalStorage>,
    config: StoredValue<UiConfig>,
}

impl AppContext {
    pub fn new(controller: Controller<LeptosSurface>, config: UiConfig) -> Self {
        Self {
            controller: StoredValue::new_local(controller),
            config: StoredValue::new(config),
        }
    }

    /// Forward a user intent to the controller
    pub fn dispatch(&self, action: UserAction) {
        self.controller.update_value(|controller| controller.dispatch(action));
    }

    pub fn config(&self) -> UiConfig {
        self.config.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
