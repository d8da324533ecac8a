//! Breed Results Component
//!
//! Loading, error, grid or empty message, in that priority.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::{BreedCard, Spinner};
use crate::context::use_app_context;
use crate::models::BreedRecord;
use crate::store::{use_app_store, AppStateStoreFields};

/// Which branch of the results area to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsView {
    Loading,
    Error,
    Grid,
    Empty,
}

impl ResultsView {
    pub fn select(loading: bool, has_error: bool, visible: usize) -> Self {
        if loading {
            ResultsView::Loading
        } else if has_error {
            ResultsView::Error
        } else if visible > 0 {
            ResultsView::Grid
        } else {
            ResultsView::Empty
        }
    }
}

#[component]
pub fn BreedResults(filtered: Memo<Vec<Arc<BreedRecord>>>) -> impl IntoView {
    let store = use_app_store();
    let labels = use_app_context().labels;

    let branch = Memo::new(move |_| {
        ResultsView::select(
            store.loading().get(),
            store.error().with(Option::is_some),
            filtered.with(Vec::len),
        )
    });

    move || match branch.get() {
        ResultsView::Loading => view! {
            <Spinner label=Signal::derive(move || labels.get().loading) />
        }.into_any(),
        ResultsView::Error => view! {
            <p class="fetch-error">{move || labels.get().fetch_error}</p>
        }.into_any(),
        ResultsView::Grid => view! {
            <p class="result-count">
                {move || (labels.get().results)(filtered.with(Vec::len))}
            </p>
            <div class="breed-grid">
                <For
                    each=move || filtered.get()
                    key=|breed| breed.id.clone()
                    children=move |breed| view! { <BreedCard breed=breed /> }
                />
            </div>
        }.into_any(),
        ResultsView::Empty => view! {
            <div class="no-results">{move || labels.get().no_results}</div>
        }.into_any(),
    }
}
