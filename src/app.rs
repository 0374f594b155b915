//! Todo App Frontend
//!
//! Composition root: builds the store, data backend and translator, then
//! mounts the routed pages.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::actions::Dispatcher;
use crate::components::LanguageSelector;
use crate::context::AppContext;
use crate::i18n::{detect_storage, initialize_i18n, I18n};
use crate::pages::{CreateTodo, EditTodo, Home};
use crate::service::Backend;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let translator = match initialize_i18n() {
        Ok(translator) => translator,
        Err(e) => {
            log::error!("[APP] Translations failed to load: {}", e);
            return view! { <p class="fatal">{e.to_string()}</p> }.into_any();
        }
    };

    let store = Store::new(AppState::default());
    let dispatcher = Dispatcher::new(store, Backend::detect());
    let i18n = I18n::new(translator, detect_storage());

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new(dispatcher, i18n));

    // Resolve the language from the URL or storage once mounted
    Effect::new(move |_| {
        let language = i18n.initial_language();
        log::debug!("[APP] Initial language {}", language.code());
        if let Err(e) = i18n.change_language(language.code()) {
            log::warn!("[APP] {}", e);
        }
    });

    // Paths mirror config::LIST_ROUTE, CREATE_ROUTE and EDIT_ROUTE_PREFIX
    view! {
        <Router>
            <header class="app-header">
                <LanguageSelector />
            </header>
            <main class="main-content">
                <Routes fallback=move || view! { <p class="not-found">{i18n.t("NOT_FOUND")}</p> }>
                    <Route path=path!("/") view=Home />
                    <Route path=path!("/create-todo") view=CreateTodo />
                    <Route path=path!("/edit-todo/:id") view=EditTodo />
                </Routes>
            </main>
        </Router>
    }
    .into_any()
}
