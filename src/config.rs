//! Application Configuration
//!
//! Compile-time constants shared by routing, storage and localization.

/// Storage key holding the persisted language code
pub const LANGUAGE_STORE_KEY: &str = "todo-app.language";

/// URL query parameter that overrides the language on load
pub const LANGUAGE_QUERY_PARAM: &str = "hl";

/// Language used when neither the URL nor storage provide one
pub const DEFAULT_LANGUAGE: &str = "en";

/// Language the translation engine starts in before resolution runs
pub const ENGINE_START_LANGUAGE: &str = "de";

/// Bundle consulted when a key is missing from the active language
pub const ENGINE_FALLBACK_LANGUAGE: &str = "en";

// ========================
// Routes
// ========================

pub const LIST_ROUTE: &str = "/";
pub const CREATE_ROUTE: &str = "/create-todo";
pub const EDIT_ROUTE_PREFIX: &str = "/edit-todo";

/// Path of the edit page for one todo
pub fn edit_route(id: &str) -> String {
    format!("{}/{}", EDIT_ROUTE_PREFIX, id)
}

/// Log level for the browser console
pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}
