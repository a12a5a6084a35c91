//! Delete Confirm Button Component
//!
//! Inline delete confirmation that requires typing the confirmation phrase.

use leptos::prelude::*;
use leptos::task::spawn_local;
use medvault_core::inventory::DELETE_PHRASE;
use medvault_core::{ConfirmOutcome, DeleteConfirmation};

use crate::actions;
use crate::context::use_app_context;
use crate::store::{
    store_cancel_delete, store_confirm_delete, store_request_delete, store_show_notice, use_app_store, AppStateStoreFields,
};

/// Delete button for one medicine row
///
/// Shows "Delete" initially. When clicked, asks for the phrase with
/// confirm/cancel buttons. Only one row can have its confirmation open,
/// since the pending id lives in the shared view-model.
///
/// # Arguments
/// * `medicine_id` - Medicine to delete once confirmed
#[component]
pub fn DeleteConfirmButton(medicine_id: u32) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (typed, set_typed) = signal(String::new());

    let is_open = move || store.inventory().read().pending_delete == Some(medicine_id);

    let resolve = move |input: Option<String>| {
        match DeleteConfirmation::evaluate(input.as_deref()) {
            ConfirmOutcome::Confirmed => {
                if store_confirm_delete(&store, medicine_id) {
                    log::info!("Deleting medicine #{}", medicine_id);
                    spawn_local(actions::delete_medicine(ctx, store, medicine_id));
                }
            }
            ConfirmOutcome::Dismissed => store_cancel_delete(&store),
            ConfirmOutcome::Cancelled(notice) => {
                store_cancel_delete(&store);
                store_show_notice(&store, notice);
            }
        }
        set_typed.set(String::new());
    };

    view! {
        <Show when=move || !is_open()>
            <button
                class="btn btn-danger"
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_typed.set(String::new());
                    store_request_delete(&store, medicine_id);
                }
            >
                "🗑️ Delete"
            </button>
        </Show>
        <Show when=is_open>
            <span class="delete-confirm">
                <input
                    type="text"
                    class="delete-confirm-input"
                    placeholder=format!("Type \"{}\" to confirm", DELETE_PHRASE)
                    prop:value=move || typed.get()
                    on:input=move |ev| set_typed.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            resolve(Some(typed.get_untracked()));
                        } else if ev.key() == "Escape" {
                            resolve(None);
                        }
                    }
                />
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        resolve(Some(typed.get_untracked()));
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        resolve(None);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
