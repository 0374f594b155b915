//! Language Selector Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::i18n::Language;

/// Dropdown switching the active translation
#[component]
pub fn LanguageSelector() -> impl IntoView {
    let i18n = use_app_context().i18n;

    let on_change = move |ev: web_sys::Event| {
        let code = event_target_value(&ev);
        match i18n.change_language(&code) {
            Ok(language) => log::info!("[I18N] Switched to {}", language.code()),
            Err(e) => log::warn!("[I18N] {}", e),
        }
    };

    view! {
        <label class="language-selector">
            {move || i18n.t("LANGUAGE")}
            <select on:change=on_change>
                {Language::ALL.into_iter().map(|language| view! {
                    <option
                        value=language.code()
                        prop:selected=move || i18n.language() == language
                    >
                        {language.code()}
                    </option>
                }).collect_view()}
            </select>
        </label>
    }
}
