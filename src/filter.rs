//! Breed Search Filter
//!
//! Pure function from (fetched set, search term) to the displayed subset.

use std::sync::Arc;

use crate::models::BreedRecord;

/// True when the lowercased `term` is in the name or in any location
fn matches(breed: &BreedRecord, term: &str) -> bool {
    let name_match = breed.name.to_lowercase().contains(term);
    let location_match = breed
        .locations
        .iter()
        .any(|loc| loc.to_lowercase().contains(term));
    name_match || location_match
}

/// Records whose name or a location contains `search_term`, ignoring case.
///
/// Order of `breeds` is preserved and the returned handles point at the
/// same records. An empty term keeps everything.
pub fn filter_breeds(breeds: &[Arc<BreedRecord>], search_term: &str) -> Vec<Arc<BreedRecord>> {
    let term = search_term.to_lowercase();
    breeds
        .iter()
        .filter(|breed| matches(breed, &term))
        .cloned()
        .collect()
}
