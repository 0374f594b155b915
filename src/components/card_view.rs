//! Card View Component
//!
//! Read-only summary of one todo with edit and delete triggers.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::context::use_app_context;
use crate::views::CardSummary;

#[component]
pub fn CardView(card: CardSummary) -> impl IntoView {
    let ctx = use_app_context();
    let i18n = ctx.i18n;
    let dispatcher = ctx.dispatcher;
    let navigate = use_navigate();

    let delete = card.delete_action();
    let CardSummary {
        id,
        title,
        priority,
        description,
        completed,
        edit_path,
    } = card;

    // No confirmation and no navigation afterwards
    let delete_todo = move |_| {
        let id = id.clone();
        let action = delete.clone();
        spawn_local(async move {
            if let Err(e) = dispatcher.dispatch(action).await {
                log::error!("[CARD] Delete of {} failed: {}", id, e);
            }
        });
    };

    view! {
        <div class="card">
            <div class="card-header">
                <p class="card-title">{move || i18n.t_value("CARD_TITLE", &title)}</p>
                <p class="card-title">{move || i18n.t_value("CARD_PRIORITY", &priority)}</p>
            </div>
            <p class="card-body">{move || i18n.t_value("CARD_DESCRIPTION", &description)}</p>
            <p class="card-body">{move || i18n.t_value("CARD_COMPLETED", &completed)}</p>
            <div class="button-container">
                <button
                    class="card-btn edit"
                    on:click=move |_| navigate(&edit_path, Default::default())
                >
                    {move || i18n.t("EDIT")}
                </button>
                <button class="card-btn delete" on:click=delete_todo>
                    {move || i18n.t("DELETE")}
                </button>
            </div>
        </div>
    }
}
