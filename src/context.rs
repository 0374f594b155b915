//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::actions::Dispatcher;
use crate::i18n::I18n;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Sends actions to the data layer and the store
    pub dispatcher: Dispatcher,
    /// Translator and language persistence
    pub i18n: I18n,
}

impl AppContext {
    pub fn new(dispatcher: Dispatcher, i18n: I18n) -> Self {
        Self { dispatcher, i18n }
    }
}

/// Get the app context, provided by the root component
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
