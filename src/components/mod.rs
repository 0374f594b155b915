//! UI Components
//!
//! Reusable Leptos components.

mod card_view;
mod language_selector;
mod todo_form;
mod todo_listing;

pub use card_view::CardView;
pub use language_selector::LanguageSelector;
pub use todo_form::TodoForm;
pub use todo_listing::TodoListing;
