//! View Models
//!
//! What the list and form render for a given store state.

use crate::actions::TodoAction;
use crate::config;
use crate::form::FormMode;
use crate::models::Todo;
use crate::store::TodoState;

/// Display data for one card
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardSummary {
    pub id: String,
    pub title: String,
    pub priority: String,
    pub description: String,
    pub completed: String,
    pub edit_path: String,
}

impl From<&Todo> for CardSummary {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id.clone(),
            title: todo.title.clone(),
            priority: todo.priority.to_string(),
            description: todo.description.clone(),
            completed: todo.completed.to_string(),
            edit_path: config::edit_route(&todo.id),
        }
    }
}

impl CardSummary {
    /// What the delete trigger dispatches
    pub fn delete_action(&self) -> TodoAction {
        TodoAction::DeleteTodo(self.id.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListContent {
    Placeholder,
    Cards(Vec<CardSummary>),
}

/// One card per id, in id-selector order; ids without an entity are skipped
pub fn list_content(state: &TodoState) -> ListContent {
    if state.loading_status().is_loading() {
        return ListContent::Placeholder;
    }
    let entities = state.entities();
    let cards = state
        .ids()
        .iter()
        .filter_map(|id| entities.get(id))
        .map(CardSummary::from)
        .collect();
    ListContent::Cards(cards)
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormContent {
    Placeholder,
    Form(Todo),
}

pub fn form_content(state: &TodoState, mode: &FormMode) -> FormContent {
    if state.loading_status().is_loading() {
        return FormContent::Placeholder;
    }
    FormContent::Form(mode.initial_values(state))
}
