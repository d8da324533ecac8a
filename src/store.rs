//! Breed Directory State
//!
//! Fetched breeds, search input, language and fetch status, held in a
//! reactive store so each view only re-renders on the fields it reads.

use std::cell::Cell;
use std::sync::Arc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::FetchError;
use crate::i18n::Language;
use crate::models::BreedRecord;

/// Everything the page renders from
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Fetched set: replaced wholesale, never edited in place
    pub breeds: Vec<Arc<BreedRecord>>,
    /// Live search input
    pub search_term: String,
    /// Display language, also sent to the backend
    pub language: Language,
    /// A fetch for the current language is in flight
    pub loading: bool,
    /// Last fetch failure, cleared by the next success
    pub error: Option<FetchError>,
}

impl AppState {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            loading: true,
            ..Default::default()
        }
    }
}

pub type AppStore = Store<AppState>;

/// Store provided by `App`
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Hands out request numbers so only the newest fetch may update state
#[derive(Debug, Default)]
pub struct FetchTracker {
    latest: Cell<u64>,
}

impl FetchTracker {
    /// Start a new request and return its number
    pub fn begin(&self) -> u64 {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        next
    }

    pub fn is_current(&self, request: u64) -> bool {
        request == self.latest.get()
    }
}

// ========================
// Store Helper Functions
// ========================

/// Mark a fetch as started
pub fn store_begin_fetch(store: &AppStore) {
    store.loading().set(true);
}

/// Apply a finished fetch.
///
/// Success replaces the fetched set and clears the error. Failure keeps
/// whatever set was there and records the error. Loading is cleared either way.
pub fn store_finish_fetch(store: &AppStore, result: Result<Vec<BreedRecord>, FetchError>) {
    match result {
        Ok(records) => {
            log::info!("Loaded {} breeds", records.len());
            store.breeds().set(records.into_iter().map(Arc::new).collect());
            store.error().set(None);
        }
        Err(err) => {
            log::error!("API Fetch Error: {}", err);
            store.error().set(Some(err));
        }
    }
    store.loading().set(false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::parse_breed_list;

    fn make_record(id: &str, name: &str) -> BreedRecord {
        BreedRecord {
            id: id.to_string(),
            name: name.to_string(),
            locations: Vec::new(),
            main_uses: String::new(),
            physical_desc: String::new(),
            species: String::new(),
            breeding_trait: String::new(),
            count: None,
        }
    }

    #[test]
    fn test_tracker_only_latest_is_current() {
        let tracker = FetchTracker::default();
        let first = tracker.begin();
        let second = tracker.begin();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::new(Language::Odia);
        assert!(state.loading);
        assert!(state.breeds.is_empty());
        assert_eq!(state.error, None);
        assert_eq!(state.language, Language::Odia);
        assert_eq!(state.search_term, "");
    }

    #[test]
    fn test_finish_fetch_success() {
        let store = Store::new(AppState::new(Language::English));
        store.error().set(Some(FetchError::Status(500)));
        store_begin_fetch(&store);

        store_finish_fetch(&store, Ok(vec![make_record("1", "Gir"), make_record("2", "Sahiwal")]));

        assert!(!store.loading().get_untracked());
        assert_eq!(store.error().get_untracked(), None);
        let breeds = store.breeds().get_untracked();
        assert_eq!(breeds.len(), 2);
        assert_eq!(breeds[0].name, "Gir");
    }

    #[test]
    fn test_finish_fetch_failure_on_first_load() {
        let store = Store::new(AppState::new(Language::English));

        store_finish_fetch(&store, parse_breed_list(200, "{}"));

        assert!(!store.loading().get_untracked());
        assert!(store.breeds().get_untracked().is_empty());
        assert!(matches!(store.error().get_untracked(), Some(FetchError::Shape(_))));
    }

    #[test]
    fn test_finish_fetch_failure_keeps_previous_set() {
        let store = Store::new(AppState::new(Language::English));
        store_finish_fetch(&store, Ok(vec![make_record("1", "Gir")]));

        store_begin_fetch(&store);
        assert!(store.loading().get_untracked());
        store_finish_fetch(&store, Err(FetchError::Status(502)));

        assert_eq!(store.breeds().get_untracked().len(), 1);
        assert_eq!(store.error().get_untracked(), Some(FetchError::Status(502)));
        assert!(!store.loading().get_untracked());
    }
}
