//! Todo Form Logic
//!
//! Mode resolution, initial values, field validation and the submission
//! payload for the create/edit form. Kept free of view code.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, SecondsFormat, Utc};

use crate::models::{Completion, Priority, Todo};
use crate::store::TodoState;

/// Create or edit, plus the routed id in edit mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(String),
}

impl FormMode {
    pub fn new(is_edit_mode: bool, id: Option<String>) -> Self {
        match (is_edit_mode, id) {
            (true, Some(id)) if !id.is_empty() => FormMode::Edit(id),
            // Edit route without an id behaves like an empty edit form
            (true, _) => FormMode::Edit(String::new()),
            (false, _) => FormMode::Create,
        }
    }

    /// Id to fetch on activation, if the cache does not have it
    pub fn fetch_target(&self, state: &TodoState) -> Option<String> {
        match self {
            FormMode::Edit(id) if !id.is_empty() && !state.contains(id) => Some(id.clone()),
            _ => None,
        }
    }

    /// Values the form starts with
    pub fn initial_values(&self, state: &TodoState) -> Todo {
        match self {
            FormMode::Create => Todo {
                priority: Priority::Low,
                completed: Completion::InProgress,
                ..Todo::default()
            },
            FormMode::Edit(id) => state
                .entities()
                .get(id)
                .or_else(|| state.selected_todo().filter(|todo| &todo.id == id))
                .cloned()
                .unwrap_or_else(|| Todo {
                    id: id.clone(),
                    ..Todo::default()
                }),
        }
    }
}

/// Fetch-by-id bookkeeping for one mounted form
#[derive(Debug, Default)]
pub struct FetchGuard {
    requested: HashSet<String>,
}

impl FetchGuard {
    /// Id to dispatch for this activation; each routed id is requested once
    pub fn next_fetch(&mut self, mode: &FormMode, state: &TodoState) -> Option<String> {
        let id = mode.fetch_target(state)?;
        self.requested.insert(id.clone()).then_some(id)
    }
}

/// Stamp the submission time and return what gets dispatched
pub fn submission_payload(values: Todo, now: DateTime<Utc>) -> Todo {
    Todo {
        created_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        ..values
    }
}

// ========================
// Fields
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Priority,
    Description,
    Completed,
}

/// Touched flag and error for one field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMeta {
    pub touched: bool,
    pub error: Option<String>,
}

impl FieldMeta {
    /// Error to render: only once the field was touched
    pub fn visible_error(&self) -> Option<&str> {
        if self.touched {
            self.error.as_deref()
        } else {
            None
        }
    }
}

/// Editable form values with per-field metadata
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub values: Todo,
    meta: HashMap<Field, FieldMeta>,
}

impl FormState {
    pub fn new(initial: Todo) -> Self {
        Self {
            values: initial,
            meta: HashMap::new(),
        }
    }

    /// Apply raw input for a field. Selects outside their option set keep
    /// the previous value and record an error.
    pub fn set(&mut self, field: Field, raw: &str) {
        let error = match field {
            Field::Title => {
                self.values.title = raw.to_string();
                None
            }
            Field::Description => {
                self.values.description = raw.to_string();
                None
            }
            Field::Priority => match raw.parse::<Priority>() {
                Ok(priority) => {
                    self.values.priority = priority;
                    None
                }
                Err(e) => Some(e),
            },
            Field::Completed => match raw.parse::<Completion>() {
                Ok(completed) => {
                    self.values.completed = completed;
                    None
                }
                Err(e) => Some(e),
            },
        };
        self.meta.entry(field).or_default().error = error;
    }

    pub fn touch(&mut self, field: Field) {
        self.meta.entry(field).or_default().touched = true;
    }

    pub fn meta(&self, field: Field) -> FieldMeta {
        self.meta.get(&field).cloned().unwrap_or_default()
    }

    pub fn has_errors(&self) -> bool {
        self.meta.values().any(|meta| meta.error.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TodoEvent;
    use chrono::TimeZone;

    fn cached(id: &str) -> Todo {
        Todo {
            id: id.to_string(),
            title: "Cached".to_string(),
            description: "from list".to_string(),
            created_at: "2024-01-01T00:00:00.000Z".to_string(),
            priority: Priority::High,
            completed: Completion::Completed,
        }
    }

    fn state_with(todo: Todo) -> TodoState {
        let mut state = TodoState::default();
        state.apply(TodoEvent::TodosFetched(vec![todo]));
        state
    }

    #[test]
    fn test_create_defaults() {
        let values = FormMode::new(false, None).initial_values(&TodoState::default());
        assert_eq!(values.priority, Priority::Low);
        assert_eq!(values.completed, Completion::InProgress);
        assert!(values.title.is_empty());
        assert!(values.id.is_empty());
    }

    #[test]
    fn test_edit_uses_cached_entity() {
        let state = state_with(cached("42"));
        let mode = FormMode::new(true, Some("42".to_string()));
        assert_eq!(mode.initial_values(&state), cached("42"));
        assert_eq!(mode.fetch_target(&state), None);
    }

    #[test]
    fn test_edit_fetches_when_missing() {
        let state = TodoState::default();
        let mode = FormMode::new(true, Some("42".to_string()));
        assert_eq!(mode.fetch_target(&state), Some("42".to_string()));
    }

    #[test]
    fn test_fetch_issued_once_per_id() {
        let empty = TodoState::default();
        let mut guard = FetchGuard::default();
        let mode = FormMode::Edit("42".to_string());

        assert_eq!(guard.next_fetch(&mode, &empty), Some("42".to_string()));
        // Re-activation while the cache is still empty
        assert_eq!(guard.next_fetch(&mode, &empty), None);
        assert_eq!(guard.next_fetch(&mode, &empty), None);

        let other = FormMode::Edit("7".to_string());
        assert_eq!(guard.next_fetch(&other, &empty), Some("7".to_string()));
        // Back to the first id within the same mount
        assert_eq!(guard.next_fetch(&mode, &empty), None);
    }

    #[test]
    fn test_fresh_mount_fetches_again() {
        let empty = TodoState::default();
        let mode = FormMode::Edit("42".to_string());
        let mut first = FetchGuard::default();
        assert!(first.next_fetch(&mode, &empty).is_some());

        let mut remounted = FetchGuard::default();
        assert_eq!(remounted.next_fetch(&mode, &empty), Some("42".to_string()));
    }

    #[test]
    fn test_guard_skips_cached_and_create() {
        let mut guard = FetchGuard::default();
        assert_eq!(guard.next_fetch(&FormMode::Edit("42".to_string()), &state_with(cached("42"))), None);
        assert_eq!(guard.next_fetch(&FormMode::Create, &TodoState::default()), None);
    }

    #[test]
    fn test_create_never_fetches() {
        let mode = FormMode::new(false, Some("42".to_string()));
        assert_eq!(mode, FormMode::Create);
        assert_eq!(mode.fetch_target(&TodoState::default()), None);
    }

    #[test]
    fn test_edit_falls_back_to_selected_todo() {
        let mut state = TodoState::default();
        state.apply(TodoEvent::TodoLoaded(cached("42")));
        let mode = FormMode::new(true, Some("42".to_string()));
        assert_eq!(mode.initial_values(&state), cached("42"));
        // Still not in the entity cache
        assert_eq!(mode.fetch_target(&state), Some("42".to_string()));
    }

    #[test]
    fn test_edit_ignores_selected_todo_for_other_id() {
        let mut state = TodoState::default();
        state.apply(TodoEvent::TodoLoaded(cached("7")));
        let values = FormMode::new(true, Some("42".to_string())).initial_values(&state);
        assert_eq!(values.id, "42");
        assert!(values.title.is_empty());
    }

    #[test]
    fn test_payload_stamps_created_at() {
        let now = Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap();
        let values = Todo {
            title: "A".to_string(),
            description: "d".to_string(),
            priority: Priority::Low,
            completed: Completion::InProgress,
            ..Todo::default()
        };
        let payload = submission_payload(values.clone(), now);
        assert_eq!(payload.created_at, "2024-05-06T07:08:09.000Z");
        assert_eq!(payload.title, values.title);
        assert_eq!(payload.description, values.description);
        assert_eq!(payload.priority, values.priority);
        assert_eq!(payload.completed, values.completed);
    }

    #[test]
    fn test_payload_overwrites_created_at_on_edit() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let payload = submission_payload(cached("42"), now);
        assert_eq!(payload.id, "42");
        assert_eq!(payload.created_at, "2025-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_select_error_shown_only_when_touched() {
        let mut form = FormState::new(Todo::default());
        form.set(Field::Priority, "URGENT");
        assert_eq!(form.values.priority, Priority::Low);
        assert!(form.has_errors());
        assert_eq!(form.meta(Field::Priority).visible_error(), None);

        form.touch(Field::Priority);
        assert!(form.meta(Field::Priority).visible_error().is_some());

        form.set(Field::Priority, "HIGH");
        assert!(!form.has_errors());
        assert_eq!(form.values.priority, Priority::High);
    }

    #[test]
    fn test_text_fields_never_error() {
        let mut form = FormState::new(Todo::default());
        form.set(Field::Title, "");
        form.set(Field::Description, "anything");
        form.touch(Field::Title);
        assert!(!form.has_errors());
        assert_eq!(form.values.description, "anything");
    }
}
