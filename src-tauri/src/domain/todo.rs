//! Todo Entity
//!
//! A single task with priority and completion state.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Completion {
    #[default]
    #[serde(rename = "In-progress", alias = "In-Progress")]
    InProgress,
    #[serde(rename = "Completed")]
    Completed,
}

/// A todo item as exchanged with the frontend
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Assigned on create; empty in create payloads
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub description: String,
    /// Last submission time as sent by the client
    pub created_at: String,
    pub priority: Priority,
    pub completed: Completion,
}

impl Todo {
    #[cfg(test)]
    pub fn new(title: String, description: String) -> Self {
        Self {
            title,
            description,
            ..Self::default()
        }
    }

    /// Same todo under a newly assigned id
    pub fn with_id(self, id: String) -> Self {
        Self { id, ..self }
    }
}

impl Entity for Todo {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_creation() {
        let todo = Todo::new("Write report".to_string(), "Q3".to_string());
        assert!(todo.id().is_empty());
        assert_eq!(todo.priority, Priority::Low);
        assert_eq!(todo.completed, Completion::InProgress);
    }

    #[test]
    fn test_todo_deserializes_frontend_payload() {
        let json = r#"{"title":"A","description":"d","createdAt":"2024-01-01T00:00:00.000Z","priority":"MEDIUM","completed":"In-Progress"}"#;
        let todo: Todo = serde_json::from_str(json).unwrap();
        assert!(todo.id.is_empty());
        assert_eq!(todo.priority, Priority::Medium);
        assert_eq!(todo.completed, Completion::InProgress);
        assert_eq!(todo.created_at, "2024-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_todo_serializes_camel_case() {
        let todo = Todo::new("A".to_string(), String::new()).with_id("x".to_string());
        let value = serde_json::to_value(&todo).unwrap();
        assert_eq!(value["id"], "x");
        assert!(value.get("createdAt").is_some());
        assert_eq!(value["completed"], "In-progress");
    }
}
