//! UI Components
//!
//! Reusable Leptos components.

mod alert_banner;
mod delete_confirm_button;
mod expiring_panel;
mod field_input;
mod inventory_panel;
mod medicine_editor;
mod medicine_table;
mod nav_bar;
mod search_panel;
mod supplier_panel;
mod supplier_select;
mod update_panel;

pub use alert_banner::AlertBanner;
pub use delete_confirm_button::DeleteConfirmButton;
pub use expiring_panel::ExpiringPanel;
pub use inventory_panel::InventoryPanel;
pub use medicine_editor::MedicineEditor;
pub use medicine_table::MedicineTable;
pub use nav_bar::NavBar;
pub use search_panel::SearchPanel;
pub use supplier_panel::SupplierPanel;
pub use supplier_select::SupplierSelect;
pub use update_panel::UpdatePanel;
