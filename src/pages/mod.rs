//! Routed Pages

mod create_todo;
mod edit_todo;
mod home;

pub use create_todo::CreateTodo;
pub use edit_todo::EditTodo;
pub use home::Home;
