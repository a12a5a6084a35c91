//! Inventory Panel
//!
//! Two tables: expired medicines and everything still usable.

use leptos::prelude::*;
use medvault_core::expiry::today;
use medvault_core::table::inventory_tables;

use crate::components::MedicineTable;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn InventoryPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let split = Memo::new(move |_| inventory_tables(&store.inventory().read().medicines, today()));
    let expired = Signal::derive(move || split.with(|(expired, _)| expired.clone()));
    let good = Signal::derive(move || split.with(|(_, good)| good.clone()));

    view! {
        <section class="section">
            <div class="section-header">
                <h2>"Medicine Inventory"</h2>
                <button class="btn btn-secondary" on:click=move |_| ctx.reload()>"🔄 Refresh"</button>
            </div>
            {move || store.loading().get().then(|| view! {
                <div class="loading">
                    <div class="spinner"></div>
                    <p>"Loading..."</p>
                </div>
            })}
            <h3 class="table-title expired-title">
                {move || format!("⚠️ Expired Medicines ({})", split.with(|(expired, _)| expired.len()))}
            </h3>
            <MedicineTable table=expired with_actions=true />
            <h3 class="table-title good-title">
                {move || format!("✅ Good Medicines ({})", split.with(|(_, good)| good.len()))}
            </h3>
            <MedicineTable table=good with_actions=true />
        </section>
    }
}
