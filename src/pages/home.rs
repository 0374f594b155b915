use leptos::prelude::*;

use crate::components::TodoListing;

/// `/`: the todo list
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div>
            <TodoListing />
        </div>
    }
}
