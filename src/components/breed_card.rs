//! Breed Card Component
//!
//! One breed rendered as a card in the results grid.

use std::sync::Arc;

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::BreedRecord;

/// Card with name, origin, uses, description and (when known) headcount
#[component]
pub fn BreedCard(breed: Arc<BreedRecord>) -> impl IntoView {
    let labels = use_app_context().labels;
    let locations = breed.locations.join(", ");
    let count = breed.count;

    view! {
        <div class="breed-card">
            <h3 class="breed-name">{breed.name.clone()}</h3>
            <div class="breed-field breed-location">
                <span class="breed-label">{move || labels.get().location}</span>
                " " {locations}
            </div>
            <div class="breed-field">
                <span class="breed-label">{move || labels.get().main_uses}</span>
                " " {breed.main_uses.clone()}
            </div>
            <div class="breed-field">
                <span class="breed-label">{move || labels.get().physical}</span>
                " " {breed.physical_desc.clone()}
            </div>
            <div class="breed-field">
                <span class="breed-label">{move || labels.get().species}</span>
                " " {breed.species.clone()}
            </div>
            <div class="breed-field">
                <span class="breed-label">{move || labels.get().breeding_trait}</span>
                " " {breed.breeding_trait.clone()}
            </div>
            {count.map(|count| view! {
                <div class="breed-field breed-count">
                    <span class="breed-label">{move || labels.get().count}</span>
                    " " {count}
                </div>
            })}
        </div>
    }
}
