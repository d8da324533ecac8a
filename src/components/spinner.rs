//! Loading Spinner Component

use leptos::prelude::*;

/// Animated spinner with an accessible label
#[component]
pub fn Spinner(#[prop(into)] label: Signal<&'static str>) -> impl IntoView {
    view! {
        <div class="spinner-wrap" role="status">
            <div class="spinner"></div>
            <span class="visually-hidden">{move || label.get()}</span>
        </div>
    }
}
