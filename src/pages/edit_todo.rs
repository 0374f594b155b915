use leptos::prelude::*;

use crate::components::TodoForm;
use crate::context::use_app_context;

/// `/edit-todo/:id`: form seeded from the routed todo
#[component]
pub fn EditTodo() -> impl IntoView {
    let i18n = use_app_context().i18n;

    view! {
        <div>
            <h2 class="page-title">{move || i18n.t("EDIT_TODO")}</h2>
            <TodoForm is_edit_mode=true />
        </div>
    }
}
