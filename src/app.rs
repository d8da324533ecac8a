//! Breed Directory App
//!
//! Root component: fetches breeds, filters them by the search term and
//! renders the results.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{BreedResults, LanguageSelector, SearchBar, SiteHeader};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::filter::filter_breeds;
use crate::i18n::browser_language;
use crate::store::{store_begin_fetch, store_finish_fetch, AppState, AppStateStoreFields, FetchTracker};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let language = browser_language().unwrap_or(config.default_language);
    let store = Store::new(AppState::new(language));

    // Provide store and context to all children
    provide_context(store);
    let ctx = AppContext::new(config, store);
    provide_context(ctx);
    let labels = ctx.labels;

    // Fetch on mount and again whenever the language changes
    let tracker = Rc::new(FetchTracker::default());
    Effect::new(move |_| {
        let language = store.language().get();
        let request = tracker.begin();
        log::info!("Fetching breeds (lang={}, request={})", language.code(), request);
        store_begin_fetch(&store);

        let tracker = Rc::clone(&tracker);
        spawn_local(async move {
            let result = api::fetch_breeds(&config, language).await;
            if !tracker.is_current(request) {
                log::debug!("Dropping stale response for request {}", request);
                return;
            }
            store_finish_fetch(&store, result);
        });
    });

    // Filtered set, recomputed whenever the fetched set or search term changes
    let filtered = Memo::new(move |_| {
        store.breeds().with(|breeds| {
            store.search_term().with(|term| filter_breeds(breeds, term))
        })
    });

    view! {
        <div class="app-container">
            <SiteHeader />

            <main class="main-content">
                <h1 class="page-title">{move || labels.get().title}</h1>
                <p class="page-subtitle">{move || labels.get().subtitle}</p>

                // Always visible, independent of the results state
                <div class="controls">
                    <SearchBar />
                    <LanguageSelector />
                </div>

                <BreedResults filtered=filtered />
            </main>
        </div>
    }
}
