//! Site Header Component
//!
//! Sticky header with the logo link and page navigation.

use leptos::prelude::*;

use crate::context::use_app_context;

const HOME_URL: &str = "https://under-cooked-25.vercel.app/";
const LOGO_SRC: &str = "/namelogo1.png";
const LOGO_FALLBACK_SRC: &str = "/logo.svg";

#[component]
pub fn SiteHeader() -> impl IntoView {
    let ctx = use_app_context();
    let labels = ctx.labels;

    view! {
        <header class="site-header">
            <div class="site-header-inner">
                <a href=HOME_URL class="site-logo-link">
                    // Falls back to the bundled logo once if the main image is missing
                    <img
                        src=LOGO_SRC
                        alt="Cattle Labs Logo"
                        class="site-logo"
                        on:error=move |ev| {
                            let img = event_target::<web_sys::HtmlImageElement>(&ev);
                            if !img.src().ends_with(LOGO_FALLBACK_SRC) {
                                img.set_src(LOGO_FALLBACK_SRC);
                            }
                        }
                    />
                </a>
                <nav class="site-nav">
                    <a href="#">{move || labels.get().nav_home}</a>
                    <a href="#">{move || labels.get().nav_about}</a>
                    <a href="#">{move || labels.get().nav_contact}</a>
                </nav>
            </div>
        </header>
    }
}
