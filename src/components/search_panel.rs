//! Search Panel
//!
//! Search medicines by name, company or supplier.

use leptos::prelude::*;
use leptos::task::spawn_local;
use medvault_core::expiry::today;
use medvault_core::{or_notice, Medicine, TableMode, TableView};

use crate::components::MedicineTable;
use crate::context::use_app_context;
use crate::store::{store_show_notice, use_app_store};

#[component]
pub fn SearchPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (query, set_query) = signal(String::new());
    // None until a search has run
    let (results, set_results) = signal::<Option<Vec<Medicine>>>(None);
    let (needs_term, set_needs_term) = signal(false);

    let run_search = move || {
        let term = query.get_untracked();
        if term.trim().is_empty() {
            set_results.set(None);
            set_needs_term.set(true);
            return;
        }
        set_needs_term.set(false);
        spawn_local(async move {
            let (found, notice) = or_notice(ctx.api().search_medicines(&term).await, "Error searching medicines");
            log::debug!("Search {:?} matched {} medicines", term, found.len());
            set_results.set(Some(found));
            if let Some(notice) = notice {
                store_show_notice(&store, notice);
            }
        });
    };

    // Re-run an active search after edits and deletes elsewhere
    Effect::new(move |prev: Option<u32>| {
        let trigger = ctx.reload_trigger.get();
        if prev.is_some() && results.get_untracked().is_some() {
            run_search();
        }
        trigger
    });

    let table = Signal::derive(move || {
        results.with(|found| TableView::build(found.as_deref().unwrap_or_default(), today(), TableMode::Search))
    });

    view! {
        <section class="section">
            <h2>"Search Medicines"</h2>
            <form
                class="search-box"
                on:submit=move |ev: web_sys::SubmitEvent| {
                    ev.prevent_default();
                    run_search();
                }
            >
                <input
                    type="search"
                    class="form-control"
                    placeholder="Search by name, company or supplier..."
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn-primary">"🔍 Search"</button>
            </form>
            <Show when=move || needs_term.get()>
                <p class="no-data">"Please enter a search term"</p>
            </Show>
            <Show when=move || results.with(Option::is_some)>
                <MedicineTable table=table with_actions=true />
            </Show>
        </section>
    }
}
