//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The inventory
//! view-model lives here, owned by the page controller, instead of in
//! page-level globals.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use medvault_core::notice::NOTICE_TIMEOUT_MS;
use medvault_core::{ApiError, InventoryState, Medicine, MutationResponse, Notice, Supplier};
use reactive_stores::Store;

/// Page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Medicines, suppliers, pending delete and the medicine being edited
    pub inventory: InventoryState,
    /// A medicine listing request is in flight
    pub loading: bool,
    /// Alert banner content
    pub notice: Option<Notice>,
    /// Bumped on every new notice so a stale auto-hide timer leaves it alone
    pub notice_seq: u32,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_medicines(store: &AppStore, medicines: Vec<Medicine>) {
    store.inventory().write().set_medicines(medicines);
}

pub fn store_set_suppliers(store: &AppStore, suppliers: Vec<Supplier>) {
    store.inventory().write().set_suppliers(suppliers);
}

pub fn store_request_delete(store: &AppStore, medicine_id: u32) {
    store.inventory().write().request_delete(medicine_id);
}

pub fn store_cancel_delete(store: &AppStore) {
    store.inventory().write().take_pending_delete();
}

/// Close an open confirmation; true when the delete should be sent
pub fn store_confirm_delete(store: &AppStore, medicine_id: u32) -> bool {
    store.inventory().write().confirm_delete(medicine_id)
}

/// Fold a delete result into the list; returns the notice to show
pub fn store_apply_delete(store: &AppStore, medicine_id: u32, result: &Result<MutationResponse, ApiError>) -> Notice {
    store.inventory().write().apply_delete(medicine_id, result)
}

pub fn store_set_editing(store: &AppStore, medicine_id: Option<u32>) {
    store.inventory().write().editing = medicine_id;
}

/// Show a notice and hide it again after five seconds unless a newer
/// notice replaced it in the meantime
pub fn store_show_notice(store: &AppStore, notice: Notice) {
    store.notice_seq().update(|seq| *seq = seq.wrapping_add(1));
    let seq = store.notice_seq().get_untracked();
    store.notice().set(Some(notice));

    let store = *store;
    spawn_local(async move {
        TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
        if store.notice_seq().get_untracked() == seq {
            store.notice().set(None);
        }
    });
}

pub fn store_dismiss_notice(store: &AppStore) {
    store.notice().set(None);
}
