//! Inventory Page View-Model
//!
//! State owned by the page controller and passed to whatever renders or
//! updates it: the current medicine list, the supplier list for the
//! selection control, and the medicine awaiting delete confirmation.

use crate::api::ApiError;
use crate::domain::{remove_by_id, Medicine, MutationResponse, Supplier};
use crate::notice::Notice;

/// Phrase the user must type to confirm a delete
pub const DELETE_PHRASE: &str = "DELETE";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryState {
    pub medicines: Vec<Medicine>,
    pub suppliers: Vec<Supplier>,
    /// Medicine whose delete confirmation is open
    pub pending_delete: Option<u32>,
    /// Medicine loaded into the update form
    pub editing: Option<u32>,
}

impl InventoryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_medicines(&mut self, medicines: Vec<Medicine>) {
        self.medicines = medicines;
    }

    pub fn set_suppliers(&mut self, suppliers: Vec<Supplier>) {
        self.suppliers = suppliers;
    }

    pub fn request_delete(&mut self, id: u32) {
        self.pending_delete = Some(id);
    }

    pub fn take_pending_delete(&mut self) -> Option<u32> {
        self.pending_delete.take()
    }

    /// Close the confirmation for `id` once it has been confirmed. Returns
    /// false when it was not open, so a repeated confirmation sends nothing.
    pub fn confirm_delete(&mut self, id: u32) -> bool {
        if self.pending_delete == Some(id) {
            self.pending_delete = None;
            true
        } else {
            false
        }
    }

    /// Fold the outcome of `DELETE /medicines/{id}` into the list.
    ///
    /// The row is dropped only when the backend confirmed the delete; any
    /// error, not-found included, leaves the list as it was.
    pub fn apply_delete(&mut self, id: u32, result: &Result<MutationResponse, ApiError>) -> Notice {
        if self.pending_delete == Some(id) {
            self.pending_delete = None;
        }
        match result {
            Ok(resp) => {
                remove_by_id(&mut self.medicines, id);
                Notice::from_message(resp.message.as_deref(), "Medicine deleted successfully!")
            }
            Err(err) => Notice::from_error("Error", err),
        }
    }

    pub fn medicine(&self, id: u32) -> Option<&Medicine> {
        self.medicines.iter().find(|m| m.id == id)
    }

    /// `"{name} ({contact})"` for a cached supplier
    pub fn supplier_label(&self, id: u32) -> Option<String> {
        self.suppliers.iter().find(|s| s.id == id).map(Supplier::label)
    }

    /// `(value, label, selected)` triples for the supplier select, led by
    /// the empty placeholder option
    pub fn supplier_options(&self, selected: Option<u32>) -> Vec<(String, String, bool)> {
        let mut options = Vec::with_capacity(self.suppliers.len() + 1);
        options.push((String::new(), "Select Supplier".to_string(), selected.is_none()));
        options.extend(
            self.suppliers
                .iter()
                .map(|s| (s.id.to_string(), s.label(), selected == Some(s.id))),
        );
        options
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Confirmed,
    /// Prompt dismissed; nothing to report
    Dismissed,
    /// Wrong phrase typed; tell the user how to confirm
    Cancelled(Notice),
}

/// Typed delete confirmation
pub struct DeleteConfirmation;

impl DeleteConfirmation {
    pub fn evaluate(input: Option<&str>) -> ConfirmOutcome {
        match input {
            Some(DELETE_PHRASE) => ConfirmOutcome::Confirmed,
            None => ConfirmOutcome::Dismissed,
            Some(_) => ConfirmOutcome::Cancelled(Notice::info(format!(
                "Deletion cancelled. Please type \"{}\" exactly to confirm.",
                DELETE_PHRASE
            ))),
        }
    }
}
