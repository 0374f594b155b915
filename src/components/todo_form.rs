//! Todo Form Component
//!
//! Shared create/edit form. Resolves the mode from the route, fetches the
//! routed todo when it is not cached, and dispatches create or update on
//! submit before returning to the list.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::actions::TodoAction;
use crate::config;
use crate::context::use_app_context;
use crate::form::{submission_payload, FetchGuard, Field, FormMode, FormState};
use crate::models::{Completion, Priority, Todo};
use crate::store::{use_app_store, AppStateStoreFields};
use crate::views::{form_content, FormContent};

#[component]
pub fn TodoForm(#[prop(optional)] is_edit_mode: bool) -> impl IntoView {
    let ctx = use_app_context();
    let i18n = ctx.i18n;
    let dispatcher = ctx.dispatcher;
    let store = use_app_store();
    let params = use_params_map();
    let navigate = use_navigate();

    let mode = Memo::new(move |_| FormMode::new(is_edit_mode, params.with(|p| p.get("id"))));

    // Cache is read untracked; re-runs only when the routed mode changes
    let mut guard = FetchGuard::default();
    Effect::new(move |_| {
        let mode = mode.get();
        let target = store.todos().with_untracked(|todos| guard.next_fetch(&mode, todos));
        if let Some(id) = target {
            spawn_local(async move {
                if let Err(e) = dispatcher.dispatch(TodoAction::GetTodoById(id.clone())).await {
                    log::warn!("[FORM] Loading todo {} failed: {}", id, e);
                }
            });
        }
    });

    let content = Memo::new(move |_| {
        let mode = mode.get();
        store.todos().with(|todos| form_content(todos, &mode))
    });

    let (submitting, set_submitting) = signal(false);

    let go_to_list = Callback::new(move |_: ()| navigate(config::LIST_ROUTE, Default::default()));

    let on_submit = Callback::new(move |values: Todo| {
        let payload = submission_payload(values, Utc::now());
        let action = if is_edit_mode {
            TodoAction::UpdateTodo(payload)
        } else {
            TodoAction::CreateTodo(payload)
        };
        set_submitting.set(true);
        spawn_local(async move {
            let result = dispatcher.dispatch(action).await;
            set_submitting.set(false);
            match result {
                Ok(()) => go_to_list.run(()),
                // Stays on the form; nothing is shown to the user
                Err(e) => log::error!("[FORM] Submit failed: {}", e),
            }
        });
    });

    view! {
        <div class="form-container">
            {move || match content.get() {
                FormContent::Placeholder => view! {
                    <div class="loading">{i18n.t("LOADING")}</div>
                }.into_any(),
                FormContent::Form(initial) => view! {
                    <TodoFormFields
                        initial=initial
                        is_edit_mode=is_edit_mode
                        submitting=submitting
                        on_submit=on_submit
                        on_cancel=go_to_list
                    />
                }.into_any(),
            }}
        </div>
    }
}

/// Inputs for one todo, seeded from `initial`
#[component]
fn TodoFormFields(
    initial: Todo,
    is_edit_mode: bool,
    submitting: ReadSignal<bool>,
    on_submit: Callback<Todo>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let i18n = use_app_context().i18n;
    let form = RwSignal::new(FormState::new(initial));

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let state = form.get_untracked();
        if state.has_errors() {
            form.update(|f| {
                for field in [Field::Title, Field::Priority, Field::Description, Field::Completed] {
                    f.touch(field);
                }
            });
            return;
        }
        on_submit.run(state.values);
    };

    let set_field = move |field: Field, raw: String| form.update(|f| f.set(field, &raw));
    let touch = move |field: Field| form.update(|f| f.touch(field));
    let field_error = move |field: Field| {
        form.with(|f| f.meta(field).visible_error().map(str::to_string))
            .map(|error| view! { <div class="field-error">{error}</div> })
    };

    view! {
        <form class="todo-form" on:submit=handle_submit>
            <div>
                <div>
                    <label>{move || i18n.t("FIELD_TITLE")}</label>
                    <input
                        type="text"
                        placeholder=move || i18n.t("PLACEHOLDER_TITLE")
                        prop:value=move || form.with(|f| f.values.title.clone())
                        on:input=move |ev| set_field(Field::Title, event_target_value(&ev))
                        on:blur=move |_| touch(Field::Title)
                    />
                </div>
                {move || field_error(Field::Title)}
            </div>

            <div>
                <div>
                    <label>{move || i18n.t("FIELD_PRIORITY")}</label>
                    <select
                        on:change=move |ev| set_field(Field::Priority, event_target_value(&ev))
                        on:blur=move |_| touch(Field::Priority)
                    >
                        {Priority::ALL.into_iter().map(|priority| view! {
                            <option
                                value=priority.as_str()
                                prop:selected=move || form.with(|f| f.values.priority == priority)
                            >
                                {priority.as_str()}
                            </option>
                        }).collect_view()}
                    </select>
                </div>
                {move || field_error(Field::Priority)}
            </div>

            <div>
                <div>
                    <label>{move || i18n.t("FIELD_DESCRIPTION")}</label>
                    <textarea
                        placeholder=move || i18n.t("PLACEHOLDER_DESCRIPTION")
                        prop:value=move || form.with(|f| f.values.description.clone())
                        on:input=move |ev| set_field(Field::Description, event_target_value(&ev))
                        on:blur=move |_| touch(Field::Description)
                    />
                </div>
                {move || field_error(Field::Description)}
            </div>

            <div>
                <div>
                    <label>{move || i18n.t("FIELD_COMPLETED")}</label>
                    <select
                        on:change=move |ev| set_field(Field::Completed, event_target_value(&ev))
                        on:blur=move |_| touch(Field::Completed)
                    >
                        {Completion::ALL.into_iter().map(|completed| view! {
                            <option
                                value=completed.as_str()
                                prop:selected=move || form.with(|f| f.values.completed == completed)
                            >
                                {completed.as_str()}
                            </option>
                        }).collect_view()}
                    </select>
                </div>
                {move || field_error(Field::Completed)}
            </div>

            <div class="button-container">
                <button type="submit" disabled=move || submitting.get()>
                    {move || if is_edit_mode { i18n.t("UPDATE") } else { i18n.t("SUBMIT") }}
                </button>
                <button type="button" on:click=move |_| on_cancel.run(())>
                    {move || i18n.t("CANCEL")}
                </button>
            </div>
        </form>
    }
}
