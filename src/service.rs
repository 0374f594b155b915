//! Data Access Layer
//!
//! The [`TodoService`] trait is the seam between the UI and whoever owns the
//! todos. Fetches may be issued redundantly (two mounts racing before the
//! cache fills), so implementations must treat them as idempotent.

use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::commands;
use crate::models::Todo;

/// Errors surfaced by the data layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    #[error("todo {0} not found")]
    NotFound(String),
    #[error("backend rejected the command: {0}")]
    Invoke(String),
    #[error("could not (de)serialize payload: {0}")]
    Serialization(String),
    #[error("data store unavailable: {0}")]
    Unavailable(String),
}

pub type DataResult<T> = Result<T, DataError>;

/// Asynchronous todo operations backing the dispatched actions
#[allow(async_fn_in_trait)]
pub trait TodoService {
    /// All todos, in the order the data layer keeps them
    async fn fetch_todos(&self) -> DataResult<Vec<Todo>>;

    async fn get_todo_by_id(&self, id: &str) -> DataResult<Todo>;

    /// Create a todo; the returned value carries the assigned id
    async fn create_todo(&self, todo: &Todo) -> DataResult<Todo>;

    /// Full replace of the todo with the same id
    async fn update_todo(&self, todo: &Todo) -> DataResult<Todo>;

    async fn delete_todo(&self, id: &str) -> DataResult<()>;
}

// ========================
// Tauri IPC
// ========================

/// Talks to the Tauri host through `invoke`
#[derive(Clone, Copy, Debug, Default)]
pub struct TauriTodoService;

impl TodoService for TauriTodoService {
    async fn fetch_todos(&self) -> DataResult<Vec<Todo>> {
        commands::list_todos().await
    }

    async fn get_todo_by_id(&self, id: &str) -> DataResult<Todo> {
        commands::get_todo(id).await
    }

    async fn create_todo(&self, todo: &Todo) -> DataResult<Todo> {
        commands::create_todo(todo).await
    }

    async fn update_todo(&self, todo: &Todo) -> DataResult<Todo> {
        commands::update_todo(todo).await
    }

    async fn delete_todo(&self, id: &str) -> DataResult<()> {
        commands::delete_todo(id).await
    }
}

// ========================
// In-memory
// ========================

#[derive(Debug, Default)]
struct MemoryInner {
    todos: Vec<Todo>,
    next_id: u64,
}

/// Process-local todo list, used without a Tauri host and in tests
#[derive(Clone, Debug, Default)]
pub struct MemoryTodoService {
    inner: Arc<Mutex<MemoryInner>>,
}

impl MemoryTodoService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with existing todos (ids kept as given)
    #[cfg(test)]
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        let service = Self::new();
        if let Ok(mut inner) = service.inner.lock() {
            // Generated ids continue after the largest numeric seed
            inner.next_id = todos
                .iter()
                .filter_map(|todo| todo.id.parse::<u64>().ok())
                .max()
                .unwrap_or(0);
            inner.todos = todos;
        }
        service
    }

    fn with_inner<T>(&self, f: impl FnOnce(&mut MemoryInner) -> DataResult<T>) -> DataResult<T> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| DataError::Unavailable("memory store poisoned".to_string()))?;
        f(&mut inner)
    }
}

impl TodoService for MemoryTodoService {
    async fn fetch_todos(&self) -> DataResult<Vec<Todo>> {
        self.with_inner(|inner| Ok(inner.todos.clone()))
    }

    async fn get_todo_by_id(&self, id: &str) -> DataResult<Todo> {
        self.with_inner(|inner| {
            inner
                .todos
                .iter()
                .find(|todo| todo.id == id)
                .cloned()
                .ok_or_else(|| DataError::NotFound(id.to_string()))
        })
    }

    async fn create_todo(&self, todo: &Todo) -> DataResult<Todo> {
        self.with_inner(|inner| {
            inner.next_id += 1;
            let created = Todo {
                id: inner.next_id.to_string(),
                ..todo.clone()
            };
            inner.todos.push(created.clone());
            Ok(created)
        })
    }

    async fn update_todo(&self, todo: &Todo) -> DataResult<Todo> {
        self.with_inner(|inner| {
            let existing = inner
                .todos
                .iter_mut()
                .find(|existing| existing.id == todo.id)
                .ok_or_else(|| DataError::NotFound(todo.id.clone()))?;
            *existing = todo.clone();
            Ok(todo.clone())
        })
    }

    async fn delete_todo(&self, id: &str) -> DataResult<()> {
        self.with_inner(|inner| {
            let before = inner.todos.len();
            inner.todos.retain(|todo| todo.id != id);
            if inner.todos.len() == before {
                return Err(DataError::NotFound(id.to_string()));
            }
            Ok(())
        })
    }
}

// ========================
// Runtime selection
// ========================

/// Service chosen at startup
#[derive(Clone, Debug)]
pub enum Backend {
    Tauri(TauriTodoService),
    Memory(MemoryTodoService),
}

impl Backend {
    /// Tauri IPC inside the desktop shell, in-memory otherwise
    pub fn detect() -> Self {
        if commands::is_tauri() {
            log::info!("[DATA] Using Tauri backend");
            Backend::Tauri(TauriTodoService)
        } else {
            log::warn!("[DATA] No Tauri host found, keeping todos in memory");
            Backend::Memory(MemoryTodoService::new())
        }
    }
}

impl TodoService for Backend {
    async fn fetch_todos(&self) -> DataResult<Vec<Todo>> {
        match self {
            Backend::Tauri(service) => service.fetch_todos().await,
            Backend::Memory(service) => service.fetch_todos().await,
        }
    }

    async fn get_todo_by_id(&self, id: &str) -> DataResult<Todo> {
        match self {
            Backend::Tauri(service) => service.get_todo_by_id(id).await,
            Backend::Memory(service) => service.get_todo_by_id(id).await,
        }
    }

    async fn create_todo(&self, todo: &Todo) -> DataResult<Todo> {
        match self {
            Backend::Tauri(service) => service.create_todo(todo).await,
            Backend::Memory(service) => service.create_todo(todo).await,
        }
    }

    async fn update_todo(&self, todo: &Todo) -> DataResult<Todo> {
        match self {
            Backend::Tauri(service) => service.update_todo(todo).await,
            Backend::Memory(service) => service.update_todo(todo).await,
        }
    }

    async fn delete_todo(&self, id: &str) -> DataResult<()> {
        match self {
            Backend::Tauri(service) => service.delete_todo(id).await,
            Backend::Memory(service) => service.delete_todo(id).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn draft(title: &str) -> Todo {
        Todo {
            title: title.to_string(),
            ..Todo::default()
        }
    }

    #[test]
    fn test_memory_create_assigns_ids() {
        let service = MemoryTodoService::new();
        let first = block_on(service.create_todo(&draft("one"))).unwrap();
        let second = block_on(service.create_todo(&draft("two"))).unwrap();
        assert_eq!(first.id, "1");
        assert_eq!(second.id, "2");
        assert_eq!(block_on(service.fetch_todos()).unwrap().len(), 2);
    }

    #[test]
    fn test_memory_update_and_delete() {
        let service = MemoryTodoService::new();
        let mut created = block_on(service.create_todo(&draft("one"))).unwrap();
        created.title = "changed".to_string();
        block_on(service.update_todo(&created)).unwrap();
        assert_eq!(block_on(service.get_todo_by_id(&created.id)).unwrap().title, "changed");

        block_on(service.delete_todo(&created.id)).unwrap();
        assert_eq!(
            block_on(service.get_todo_by_id(&created.id)),
            Err(DataError::NotFound(created.id.clone()))
        );
    }

    #[test]
    fn test_memory_update_missing_fails() {
        let service = MemoryTodoService::new();
        let ghost = Todo {
            id: "404".to_string(),
            ..Todo::default()
        };
        assert!(matches!(block_on(service.update_todo(&ghost)), Err(DataError::NotFound(_))));
    }

    fn seeded(id: &str) -> Todo {
        Todo {
            id: id.to_string(),
            ..Todo::default()
        }
    }

    #[test]
    fn test_seeded_ids_do_not_collide() {
        let service = MemoryTodoService::with_todos(vec![seeded("2")]);
        let created = block_on(service.create_todo(&draft("next"))).unwrap();
        assert_eq!(created.id, "3");

        let ids: Vec<_> = block_on(service.fetch_todos()).unwrap().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["2".to_string(), "3".to_string()]);
    }

    #[test]
    fn test_generated_ids_follow_largest_numeric_seed() {
        let service = MemoryTodoService::with_todos(vec![seeded("7"), seeded("abc"), seeded("1")]);
        assert_eq!(block_on(service.create_todo(&draft("a"))).unwrap().id, "8");

        let service = MemoryTodoService::with_todos(vec![seeded("x")]);
        assert_eq!(block_on(service.create_todo(&draft("a"))).unwrap().id, "1");
    }
}
