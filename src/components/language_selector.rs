//! Language Selector Component
//!
//! Dropdown switching display copy and the language sent to the backend.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::i18n::Language;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn LanguageSelector() -> impl IntoView {
    let store = use_app_store();
    let labels = use_app_context().labels;

    let on_change = move |ev: web_sys::Event| {
        let code = event_target_value(&ev);
        match Language::from_code(&code) {
            Some(language) if language != store.language().get_untracked() => {
                log::info!("Language changed to {}", language.code());
                store.language().set(language);
            }
            Some(_) => {}
            None => log::warn!("Unknown language code {:?}", code),
        }
    };

    view! {
        <label class="language-selector">
            <span class="language-label">{move || labels.get().language}</span>
            <select
                prop:value=move || store.language().get().code()
                on:change=on_change
            >
                {Language::ALL.iter().map(|lang| {
                    let lang = *lang;
                    view! {
                        <option
                            value=lang.code()
                            selected=move || store.language().get() == lang
                        >
                            {lang.native_name()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </label>
    }
}
