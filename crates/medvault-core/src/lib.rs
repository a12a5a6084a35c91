//! MedVault Inventory Core
//!
//! Everything the browser app needs that does not touch the DOM: domain
//! types, expiry classification, form validation, table view-models and
//! the REST client.

pub mod api;
pub mod domain;
pub mod expiry;
pub mod inventory;
pub mod notice;
pub mod table;
pub mod validation;

pub use api::{or_notice, ApiClient, ApiError, ApiRequest, ApiResponse, Method, Transport, DEFAULT_BASE_URL};
pub use domain::{Entity, HealthStatus, Medicine, MedicinePayload, MutationResponse, NewSupplier, Supplier};
pub use expiry::{classify, classify_str, Expiry, ExpiryStatus, EXPIRING_WINDOW_DAYS};
pub use inventory::{ConfirmOutcome, DeleteConfirmation, InventoryState};
pub use notice::{Notice, NoticeKind};
pub use table::{EmptyState, MedicineRow, TableMode, TableView};
pub use validation::{validate_medicine, validate_supplier, FieldError, FormField, MedicineForm, SupplierForm, ValidationReport};
