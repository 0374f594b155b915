//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The todo slice is
//! a plain reducer so every mutation goes through [`TodoState::apply`].

use std::collections::HashMap;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{LoadingStatus, Todo};

/// Lifecycle events emitted by dispatched actions
#[derive(Debug, Clone, PartialEq)]
pub enum TodoEvent {
    /// An action started
    Pending,
    TodosFetched(Vec<Todo>),
    /// Single fetch by id completed
    TodoLoaded(Todo),
    TodoCreated(Todo),
    TodoUpdated(Todo),
    TodoDeleted(String),
    /// An action failed with the given message
    Rejected(String),
}

/// Cached view of the todos owned by the data layer
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TodoState {
    entities: HashMap<String, Todo>,
    ids: Vec<String>,
    loading: LoadingStatus,
    selected: Option<Todo>,
    error: Option<String>,
}

impl TodoState {
    /// Reduce one action event into the state
    pub fn apply(&mut self, event: TodoEvent) {
        match event {
            TodoEvent::Pending => {
                self.loading = LoadingStatus::Loading;
                self.error = None;
            }
            TodoEvent::TodosFetched(todos) => {
                self.entities.clear();
                self.ids.clear();
                for todo in todos {
                    self.insert(todo);
                }
                self.loading = LoadingStatus::Loaded;
            }
            TodoEvent::TodoLoaded(todo) => {
                self.selected = Some(todo);
                self.loading = LoadingStatus::Loaded;
            }
            TodoEvent::TodoCreated(todo) => {
                self.insert(todo);
                self.loading = LoadingStatus::Loaded;
            }
            TodoEvent::TodoUpdated(todo) => {
                if self.selected.as_ref().is_some_and(|s| s.id == todo.id) {
                    self.selected = Some(todo.clone());
                }
                self.insert(todo);
                self.loading = LoadingStatus::Loaded;
            }
            TodoEvent::TodoDeleted(id) => {
                self.entities.remove(&id);
                self.ids.retain(|existing| existing != &id);
                if self.selected.as_ref().is_some_and(|s| s.id == id) {
                    self.selected = None;
                }
                self.loading = LoadingStatus::Loaded;
            }
            TodoEvent::Rejected(message) => {
                self.loading = LoadingStatus::Idle;
                self.error = Some(message);
            }
        }
    }

    /// Insert or fully replace, keeping the id order stable
    fn insert(&mut self, todo: Todo) {
        if !self.entities.contains_key(&todo.id) {
            self.ids.push(todo.id.clone());
        }
        self.entities.insert(todo.id.clone(), todo);
    }

    // ========================
    // Selectors
    // ========================

    pub fn entities(&self) -> &HashMap<String, Todo> {
        &self.entities
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn loading_status(&self) -> LoadingStatus {
        self.loading
    }

    pub fn selected_todo(&self) -> Option<&Todo> {
        self.selected.as_ref()
    }

    #[cfg(test)]
    pub fn last_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entities.contains_key(id)
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Todo slice, mutated only through dispatched actions
    pub todos: TodoState,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply an action event to the store
pub fn store_apply(store: &AppStore, event: TodoEvent) {
    store.todos().write().apply(event);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Completion, Priority};

    fn make_todo(id: &str, title: &str) -> Todo {
        Todo {
            id: id.to_string(),
            title: title.to_string(),
            description: format!("{} description", title),
            created_at: "2024-01-01T00:00:00+00:00".to_string(),
            priority: Priority::Low,
            completed: Completion::InProgress,
        }
    }

    fn loaded_state() -> TodoState {
        let mut state = TodoState::default();
        state.apply(TodoEvent::TodosFetched(vec![
            make_todo("b", "Second"),
            make_todo("a", "First"),
        ]));
        state
    }

    #[test]
    fn test_fetch_keeps_returned_order() {
        let state = loaded_state();
        assert_eq!(state.ids().to_vec(), vec!["b".to_string(), "a".to_string()]);
        assert_eq!(state.loading_status(), LoadingStatus::Loaded);
        assert_eq!(state.entities()["a"].title, "First");
    }

    #[test]
    fn test_fetch_replaces_previous_entities() {
        let mut state = loaded_state();
        state.apply(TodoEvent::TodosFetched(vec![make_todo("c", "Only")]));
        assert_eq!(state.ids().to_vec(), vec!["c".to_string()]);
        assert!(!state.contains("a"));
    }

    #[test]
    fn test_pending_sets_loading() {
        let mut state = loaded_state();
        state.apply(TodoEvent::Pending);
        assert!(state.loading_status().is_loading());
    }

    #[test]
    fn test_loaded_todo_only_sets_selected() {
        let mut state = TodoState::default();
        state.apply(TodoEvent::TodoLoaded(make_todo("42", "Single")));
        assert_eq!(state.selected_todo().map(|t| t.id.as_str()), Some("42"));
        assert!(!state.contains("42"));
        assert!(state.ids().is_empty());
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut state = loaded_state();
        let mut changed = make_todo("b", "Renamed");
        changed.completed = Completion::Completed;
        state.apply(TodoEvent::TodoUpdated(changed.clone()));
        assert_eq!(state.ids().to_vec(), vec!["b".to_string(), "a".to_string()]);
        assert_eq!(state.entities().get("b"), Some(&changed));
    }

    #[test]
    fn test_create_appends() {
        let mut state = loaded_state();
        state.apply(TodoEvent::TodoCreated(make_todo("z", "New")));
        assert_eq!(state.ids().last().map(String::as_str), Some("z"));
    }

    #[test]
    fn test_delete_removes_entity_and_selection() {
        let mut state = loaded_state();
        state.apply(TodoEvent::TodoLoaded(make_todo("a", "First")));
        state.apply(TodoEvent::TodoDeleted("a".to_string()));
        assert_eq!(state.ids().to_vec(), vec!["b".to_string()]);
        assert!(state.selected_todo().is_none());
    }

    #[test]
    fn test_rejected_resets_loading_and_records_error() {
        let mut state = TodoState::default();
        state.apply(TodoEvent::Pending);
        state.apply(TodoEvent::Rejected("backend down".to_string()));
        assert_eq!(state.loading_status(), LoadingStatus::Idle);
        assert_eq!(state.last_error(), Some("backend down"));
    }
}
