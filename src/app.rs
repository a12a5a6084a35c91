//! MedVault Frontend App
//!
//! Page controller: owns the store, provides context and switches between
//! sections.

use leptos::prelude::*;
use leptos::task::spawn_local;
use medvault_core::Notice;
use reactive_stores::Store;

use crate::actions::{self, SaveMode};
use crate::components::{
    AlertBanner, ExpiringPanel, InventoryPanel, MedicineEditor, NavBar, SearchPanel, SupplierPanel, UpdatePanel,
};
use crate::config::AppConfig;
use crate::context::{AppContext, Section};
use crate::store::{store_show_notice, AppState};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(AppState::default());
    let ctx = AppContext::new(&config);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Check the backend once on mount
    spawn_local(async move {
        match ctx.api().health().await {
            Ok(health) if health.is_healthy() => log::info!("Backend healthy"),
            Ok(health) => log::warn!("Backend reports status {:?}", health.status),
            Err(err) => {
                log::error!("Backend health check failed: {}", err);
                store_show_notice(&store, Notice::error(format!("Cannot reach the server: {}", err)));
            }
        }
    });

    // Load suppliers on mount and whenever one is added
    Effect::new(move |_| {
        let _ = ctx.suppliers_trigger.get();
        spawn_local(actions::load_suppliers(ctx, store));
    });

    // Load medicines on mount and whenever the trigger changes
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        log::debug!("Loading medicines, trigger={}", trigger);
        spawn_local(actions::load_medicines(ctx, store));
    });

    view! {
        <div class="container">
            <header class="app-header">
                <h1>"🏥 MedVault"</h1>
                <p>"Medical Storage Management System"</p>
            </header>

            <NavBar />
            <AlertBanner />

            <main class="main-content">
                {move || match ctx.section.get() {
                    Section::Inventory => view! { <InventoryPanel /> }.into_any(),
                    Section::Add => view! {
                        <section class="section">
                            <h2>"Add New Medicine"</h2>
                            <MedicineEditor mode=SaveMode::Create />
                        </section>
                    }
                    .into_any(),
                    Section::Update => view! { <UpdatePanel /> }.into_any(),
                    Section::Search => view! { <SearchPanel /> }.into_any(),
                    Section::Expiring => view! { <ExpiringPanel /> }.into_any(),
                    Section::Suppliers => view! { <SupplierPanel /> }.into_any(),
                }}
            </main>
        </div>
    }
}
