//! Todo Listing Component
//!
//! Fetches all todos on mount and renders one card per id.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::actions::TodoAction;
use crate::components::CardView;
use crate::config;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::views::{list_content, ListContent};

#[component]
pub fn TodoListing() -> impl IntoView {
    let ctx = use_app_context();
    let i18n = ctx.i18n;
    let dispatcher = ctx.dispatcher;
    let store = use_app_store();
    let navigate = use_navigate();

    // Tracks nothing, so this runs once per mount
    Effect::new(move |_| {
        spawn_local(async move {
            if let Err(e) = dispatcher.dispatch(TodoAction::FetchTodos).await {
                log::warn!("[LIST] Fetching todos failed: {}", e);
            }
        });
    });

    let content = Memo::new(move |_| store.todos().with(list_content));

    view! {
        <div>
            {move || {
                let navigate = navigate.clone();
                match content.get() {
                    ListContent::Placeholder => view! {
                        <div class="loading">{i18n.t("LOADING")}</div>
                    }.into_any(),
                    ListContent::Cards(cards) => view! {
                        <div class="listing-container">
                            <div class="sub-title">
                                <h2 class="title">{move || i18n.t("TODO_LISTING")}</h2>
                                <button
                                    class="create-todo"
                                    on:click=move |_| navigate(config::CREATE_ROUTE, Default::default())
                                >
                                    {move || i18n.t("CREATE_TODO")}
                                </button>
                            </div>
                            <For
                                each=move || cards.clone()
                                key=|card| card.clone()
                                children=move |card| view! { <CardView card=card /> }
                            />
                        </div>
                    }.into_any(),
                }
            }}
        </div>
    }
}
