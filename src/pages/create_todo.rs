use leptos::prelude::*;

use crate::components::TodoForm;
use crate::context::use_app_context;

/// `/create-todo`: empty form creating a new todo
#[component]
pub fn CreateTodo() -> impl IntoView {
    let i18n = use_app_context().i18n;

    view! {
        <div>
            <h2 class="page-title">{move || i18n.t("CREATE_TODO")}</h2>
            <TodoForm is_edit_mode=false />
        </div>
    }
}
