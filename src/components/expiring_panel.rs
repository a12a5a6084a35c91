//! Expiring Panel
//!
//! Medicines that expire within a chosen number of days.

use leptos::prelude::*;
use leptos::task::spawn_local;
use medvault_core::expiry::today;
use medvault_core::{or_notice, Medicine, TableMode, TableView};

use crate::components::MedicineTable;
use crate::context::use_app_context;
use crate::store::{store_show_notice, use_app_store};

#[component]
pub fn ExpiringPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (days_input, set_days_input) = signal(ctx.expiring_days.to_string());
    let (medicines, set_medicines) = signal(Vec::<Medicine>::new());
    let (window, set_window) = signal(ctx.expiring_days);

    let load = move || {
        let days = days_input
            .get_untracked()
            .trim()
            .parse::<u32>()
            .unwrap_or(ctx.expiring_days);
        set_window.set(days);
        spawn_local(async move {
            let (found, notice) = or_notice(ctx.api().list_expiring(days).await, "Error loading expiring medicines");
            set_medicines.set(found);
            if let Some(notice) = notice {
                store_show_notice(&store, notice);
            }
        });
    };

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        load();
    });

    let table = Signal::derive(move || medicines.with(|m| TableView::build(m, today(), TableMode::Expiring)));

    view! {
        <section class="section">
            <h2>"Expiring Soon"</h2>
            <form
                class="search-box"
                on:submit=move |ev: web_sys::SubmitEvent| {
                    ev.prevent_default();
                    load();
                }
            >
                <label for="expiry-days">"Within days"</label>
                <input
                    id="expiry-days"
                    type="number"
                    min="1"
                    class="form-control"
                    prop:value=move || days_input.get()
                    on:input=move |ev| set_days_input.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn-primary">"Show"</button>
            </form>
            <p class="table-caption">
                {move || format!("{} medicine(s) expiring within {} days", medicines.with(Vec::len), window.get())}
            </p>
            <MedicineTable table=table with_actions=true />
        </section>
    }
}
