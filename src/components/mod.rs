//! UI Components
//!
//! Leptos components making up the breed directory page.

mod site_header;
mod search_bar;
mod language_selector;
mod spinner;
mod breed_card;
mod breed_results;

pub use site_header::SiteHeader;
pub use search_bar::SearchBar;
pub use language_selector::LanguageSelector;
pub use spinner::Spinner;
pub use breed_card::BreedCard;
pub use breed_results::BreedResults;
