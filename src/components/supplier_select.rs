//! Supplier Select Component

use leptos::html;
use leptos::prelude::*;
use medvault_core::{FormField, MedicineForm, ValidationReport};

use crate::components::field_input::FieldErrors;
use crate::store::{use_app_store, AppStateStoreFields};

/// Supplier dropdown bound to the medicine form, filled from the store
#[component]
pub fn SupplierSelect(
    form: RwSignal<MedicineForm>,
    report: RwSignal<ValidationReport>,
    select_ref: NodeRef<html::Select>,
) -> impl IntoView {
    let store = use_app_store();
    let field = FormField::Supplier;

    let options = move || {
        let selected = form.with(|f| f.supplier_id.trim().parse::<u32>().ok());
        store.inventory().read().supplier_options(selected)
    };

    view! {
        <div class="form-group">
            <label for=field.as_str()>"Supplier *"</label>
            <select
                id=field.as_str()
                name=field.as_str()
                node_ref=select_ref
                class=move || if report.with(|r| r.is_invalid(field)) { "form-control invalid" } else { "form-control" }
                prop:value=move || form.with(|f| f.supplier_id.clone())
                on:change=move |ev| {
                    form.update(|f| f.set(field, event_target_value(&ev)));
                    report.update(|r| r.clear(field));
                }
            >
                {move || options()
                    .into_iter()
                    .map(|(value, label, selected)| view! {
                        <option value=value selected=selected>{label}</option>
                    })
                    .collect_view()}
            </select>
            <FieldErrors field=field report=report />
        </div>
    }
}
