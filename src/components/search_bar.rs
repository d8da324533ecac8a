//! Search Bar Component
//!
//! Free-text search over breed name and location.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

/// Writes every keystroke straight into the store, no debounce
#[component]
pub fn SearchBar() -> impl IntoView {
    let store = use_app_store();
    let labels = use_app_context().labels;

    view! {
        <div class="search-bar">
            <span class="search-icon">"🔍"</span>
            <input
                type="text"
                class="search-input"
                placeholder=move || labels.get().search_placeholder
                prop:value=move || store.search_term().get()
                on:input=move |ev| store.search_term().set(event_target_value(&ev))
            />
        </div>
    }
}
