//! Application Context
//!
//! Shared values provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::i18n::{labels, Labels};
use crate::store::{AppStateStoreFields, AppStore};

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub config: AppConfig,
    /// Copy for the currently selected language
    pub labels: Signal<&'static Labels>,
}

impl AppContext {
    pub fn new(config: AppConfig, store: AppStore) -> Self {
        Self {
            config,
            labels: Signal::derive(move || labels(store.language().get())),
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
