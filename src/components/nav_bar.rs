//! Navigation Bar Component

use leptos::prelude::*;

use crate::context::{use_app_context, Section};

/// One button per page section; the active one is highlighted
#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="nav">
            {Section::ALL.iter().map(|&section| view! {
                <button
                    class=move || if ctx.section.get() == section { "nav-btn active" } else { "nav-btn" }
                    on:click=move |_| ctx.navigate(section)
                >
                    {section.label()}
                </button>
            }).collect_view()}
        </nav>
    }
}
