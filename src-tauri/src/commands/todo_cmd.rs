//! Tauri Commands for Todo CRUD
//!
//! Exposes Todo operations to the frontend via Tauri IPC.

use tauri::State;

use crate::domain::{DomainError, Todo};
use crate::repository::Repository;
use crate::AppState;

/// List all todos
#[tauri::command]
pub async fn list_todos(state: State<'_, AppState>) -> Result<Vec<Todo>, String> {
    let todos = state.todo_repo.list().await.map_err(|e| e.to_string())?;
    tracing::debug!(count = todos.len(), "listed todos");
    Ok(todos)
}

/// Get todo by ID
#[tauri::command]
pub async fn get_todo(state: State<'_, AppState>, id: String) -> Result<Todo, String> {
    state
        .todo_repo
        .find_by_id(&id)
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| DomainError::NotFound(format!("todo {}", id)).to_string())
}

/// Create a new todo, the ID is assigned here
#[tauri::command]
pub async fn create_todo(state: State<'_, AppState>, todo: Todo) -> Result<Todo, String> {
    let created = state.todo_repo.create(&todo).await.map_err(|e| e.to_string())?;
    tracing::info!(id = %created.id, "created todo");
    Ok(created)
}

/// Replace an existing todo
#[tauri::command]
pub async fn update_todo(state: State<'_, AppState>, todo: Todo) -> Result<Todo, String> {
    let updated = state.todo_repo.update(&todo).await.map_err(|e| {
        tracing::warn!(id = %todo.id, error = %e, "update rejected");
        e.to_string()
    })?;
    tracing::info!(id = %updated.id, "updated todo");
    Ok(updated)
}

/// Delete todo
#[tauri::command]
pub async fn delete_todo(state: State<'_, AppState>, id: String) -> Result<(), String> {
    state.todo_repo.delete(&id).await.map_err(|e| e.to_string())?;
    tracing::info!(id = %id, "deleted todo");
    Ok(())
}
