//! Domain Layer
//!
//! Records exchanged with the inventory backend.
//! This layer has no DOM dependencies (serde and chrono only).

mod entity;
mod medicine;
mod supplier;
mod wire;

pub use entity::{remove_by_id, Entity};
pub use medicine::{Medicine, MedicinePayload};
pub use supplier::{NewSupplier, Supplier};
pub use wire::{parse_date, HealthStatus, MutationResponse};
