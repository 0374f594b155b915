//! Todo Actions
//!
//! Action creators dispatched by the views. Each action emits `Pending`, then
//! either its fulfilled event or `Rejected`, and hands the result back to the
//! caller so it can await completion.

use leptos::prelude::*;

use crate::models::Todo;
use crate::service::{Backend, DataResult, TodoService};
use crate::store::{store_apply, AppStore, TodoEvent};

#[derive(Debug, Clone, PartialEq)]
pub enum TodoAction {
    FetchTodos,
    GetTodoById(String),
    CreateTodo(Todo),
    UpdateTodo(Todo),
    DeleteTodo(String),
}

impl TodoAction {
    pub fn name(&self) -> &'static str {
        match self {
            TodoAction::FetchTodos => "fetchTodo",
            TodoAction::GetTodoById(_) => "getTodoById",
            TodoAction::CreateTodo(_) => "createTodo",
            TodoAction::UpdateTodo(_) => "updateTodo",
            TodoAction::DeleteTodo(_) => "deleteTodo",
        }
    }
}

/// Run an action against a service, committing lifecycle events as they happen
pub async fn run<S, F>(service: &S, action: TodoAction, mut commit: F) -> DataResult<()>
where
    S: TodoService,
    F: FnMut(TodoEvent),
{
    let name = action.name();
    log::debug!("[ACTION] {} pending", name);
    commit(TodoEvent::Pending);

    let result = match action {
        TodoAction::FetchTodos => service.fetch_todos().await.map(TodoEvent::TodosFetched),
        TodoAction::GetTodoById(id) => service.get_todo_by_id(&id).await.map(TodoEvent::TodoLoaded),
        TodoAction::CreateTodo(todo) => service.create_todo(&todo).await.map(TodoEvent::TodoCreated),
        TodoAction::UpdateTodo(todo) => service.update_todo(&todo).await.map(TodoEvent::TodoUpdated),
        TodoAction::DeleteTodo(id) => service.delete_todo(&id).await.map(|_| TodoEvent::TodoDeleted(id)),
    };

    match result {
        Ok(event) => {
            log::debug!("[ACTION] {} fulfilled", name);
            commit(event);
            Ok(())
        }
        Err(e) => {
            log::warn!("[ACTION] {} rejected: {}", name, e);
            commit(TodoEvent::Rejected(e.to_string()));
            Err(e)
        }
    }
}

/// Dispatches actions into the app store
#[derive(Clone, Copy)]
pub struct Dispatcher {
    store: AppStore,
    backend: StoredValue<Backend>,
}

impl Dispatcher {
    pub fn new(store: AppStore, backend: Backend) -> Self {
        Self {
            store,
            backend: StoredValue::new(backend),
        }
    }

    /// Dispatch and wait for the action to settle
    pub async fn dispatch(&self, action: TodoAction) -> DataResult<()> {
        let backend = self.backend.get_value();
        let store = self.store;
        run(&backend, action, |event| store_apply(&store, event)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Completion, LoadingStatus, Priority};
    use crate::service::{DataError, MemoryTodoService};
    use crate::store::TodoState;
    use futures::executor::block_on;

    fn sample(id: &str) -> Todo {
        Todo {
            id: id.to_string(),
            title: format!("Todo {}", id),
            description: String::new(),
            created_at: "2024-01-01T00:00:00+00:00".to_string(),
            priority: Priority::Medium,
            completed: Completion::InProgress,
        }
    }

    fn dispatch(service: &MemoryTodoService, state: &mut TodoState, action: TodoAction) -> DataResult<()> {
        block_on(run(service, action, |event| state.apply(event)))
    }

    #[test]
    fn test_fetch_populates_state() {
        let service = MemoryTodoService::with_todos(vec![sample("1"), sample("2")]);
        let mut state = TodoState::default();
        dispatch(&service, &mut state, TodoAction::FetchTodos).unwrap();
        assert_eq!(state.ids().to_vec(), vec!["1".to_string(), "2".to_string()]);
        assert_eq!(state.loading_status(), LoadingStatus::Loaded);
    }

    #[test]
    fn test_events_order_pending_then_fulfilled() {
        let service = MemoryTodoService::with_todos(vec![sample("1")]);
        let mut events = Vec::new();
        block_on(run(&service, TodoAction::GetTodoById("1".to_string()), |event| events.push(event))).unwrap();
        assert_eq!(events, vec![TodoEvent::Pending, TodoEvent::TodoLoaded(sample("1"))]);
    }

    #[test]
    fn test_rejection_is_returned_and_committed() {
        let service = MemoryTodoService::new();
        let mut state = TodoState::default();
        let result = dispatch(&service, &mut state, TodoAction::GetTodoById("9".to_string()));
        assert_eq!(result, Err(DataError::NotFound("9".to_string())));
        assert_eq!(state.loading_status(), LoadingStatus::Idle);
        assert!(state.last_error().is_some());
    }

    #[test]
    fn test_create_then_delete() {
        let service = MemoryTodoService::new();
        let mut state = TodoState::default();
        dispatch(&service, &mut state, TodoAction::CreateTodo(sample(""))).unwrap();
        let id = state.ids()[0].clone();
        assert!(!id.is_empty());

        dispatch(&service, &mut state, TodoAction::DeleteTodo(id.clone())).unwrap();
        assert!(!state.contains(&id));
        assert!(block_on(service.fetch_todos()).unwrap().is_empty());
    }
}
