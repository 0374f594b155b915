//! Todo Repository Implementation
//!
//! In-memory implementation of Repository<Todo>. Todos live for the lifetime
//! of the host process.

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::traits::Repository;
use crate::domain::{DomainError, DomainResult, Todo};

#[derive(Debug, Default)]
pub struct TodoRepository {
    todos: Mutex<Vec<Todo>>,
}

impl TodoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<Todo> for TodoRepository {
    async fn create(&self, entity: &Todo) -> DomainResult<Todo> {
        let created = entity.clone().with_id(Uuid::new_v4().to_string());
        self.todos.lock().await.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: &String) -> DomainResult<Option<Todo>> {
        let todos = self.todos.lock().await;
        Ok(todos.iter().find(|todo| &todo.id == id).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Todo>> {
        Ok(self.todos.lock().await.clone())
    }

    async fn update(&self, entity: &Todo) -> DomainResult<Todo> {
        if entity.id.is_empty() {
            return Err(DomainError::InvalidInput("todo id is required for update".to_string()));
        }
        let mut todos = self.todos.lock().await;
        let existing = todos
            .iter_mut()
            .find(|todo| todo.id == entity.id)
            .ok_or_else(|| DomainError::NotFound(format!("todo {}", entity.id)))?;
        *existing = entity.clone();
        Ok(entity.clone())
    }

    async fn delete(&self, id: &String) -> DomainResult<()> {
        let mut todos = self.todos.lock().await;
        let before = todos.len();
        todos.retain(|todo| &todo.id != id);
        if todos.len() == before {
            return Err(DomainError::NotFound(format!("todo {}", id)));
        }
        Ok(())
    }
}
