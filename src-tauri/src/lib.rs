//! Todo App Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - commands: Tauri command handlers

mod commands;
mod domain;
mod logging;
mod repository;

use repository::TodoRepository;

/// Application state shared across commands
pub struct AppState {
    pub todo_repo: TodoRepository,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    logging::init_logger();
    tracing::info!("App setup starting");

    tauri::Builder::default()
        .manage(AppState {
            todo_repo: TodoRepository::new(),
        })
        .invoke_handler(tauri::generate_handler![
            commands::list_todos,
            commands::get_todo,
            commands::create_todo,
            commands::update_todo,
            commands::delete_todo,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
