//! Todos App
//!
//! Builds the store, surface and controller, then lays out the page.

use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{Controller, TodoStore};

use crate::components::{Footer, Header, NewTodoForm, TodoList};
use crate::config::UiConfig;
use crate::context::AppContext;
use crate::store::ViewState;
use crate::surface::LeptosSurface;

#[component]
pub fn App(config: UiConfig) -> impl IntoView {
    let state = Store::new(ViewState::default());
    provide_context(state);

    // Renders the empty starting state into `state` right away
    let controller = Controller::new(TodoStore::new(), Rc::new(LeptosSurface::new(state)));
    provide_context(AppContext::new(controller, config));
    log::info!("[APP] started");

    view! {
        <div class="app">
            <Header />
            <NewTodoForm />
            <TodoList />
            <Footer />
        </div>
    }
}
