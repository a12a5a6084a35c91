//! Page Actions
//!
//! Async handlers that call the backend and fold the outcome into the
//! store. Reads degrade to an empty list plus a notice.

use medvault_core::{or_notice, ApiError, MedicinePayload, MutationResponse};

use crate::context::{AppContext, Section};
use crate::store::{
    store_apply_delete, store_set_editing, store_set_medicines, store_set_suppliers, store_show_notice, AppStateStoreFields,
    AppStore,
};
use leptos::prelude::*;

/// Which backend call the medicine form submits to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveMode {
    Create,
    Update(u32),
}

pub async fn load_medicines(ctx: AppContext, store: AppStore) {
    store.loading().set(true);
    let (medicines, notice) = or_notice(ctx.api().list_medicines().await, "Error loading medicines");
    log::info!("Loaded {} medicines", medicines.len());
    store_set_medicines(&store, medicines);
    store.loading().set(false);
    if let Some(notice) = notice {
        store_show_notice(&store, notice);
    }
}

pub async fn load_suppliers(ctx: AppContext, store: AppStore) {
    let (suppliers, notice) = or_notice(ctx.api().list_suppliers().await, "Error loading suppliers");
    log::info!("Loaded {} suppliers", suppliers.len());
    store_set_suppliers(&store, suppliers);
    if let Some(notice) = notice {
        store_show_notice(&store, notice);
    }
}

/// Delete after the typed confirmation; the row disappears only when the
/// backend confirms
pub async fn delete_medicine(ctx: AppContext, store: AppStore, medicine_id: u32) {
    let result = ctx.api().delete_medicine(medicine_id).await;
    let notice = store_apply_delete(&store, medicine_id, &result);
    store_show_notice(&store, notice);
    if result.is_ok() {
        ctx.reload();
    }
}

/// Create or update; the error goes back to the form
pub async fn save_medicine(ctx: AppContext, mode: SaveMode, payload: MedicinePayload) -> Result<MutationResponse, ApiError> {
    match mode {
        SaveMode::Create => ctx.api().create_medicine(&payload).await,
        SaveMode::Update(id) => ctx.api().update_medicine(id, &payload).await,
    }
}

/// Open the update section with `medicine_id` loaded
pub fn edit_medicine(ctx: AppContext, store: AppStore, medicine_id: u32) {
    store_set_editing(&store, Some(medicine_id));
    ctx.navigate(Section::Update);
}
