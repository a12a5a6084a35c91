//! Supplier Panel
//!
//! Supplier list plus the add supplier form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use medvault_core::validation::validate_supplier;
use medvault_core::{FormField, Notice, SupplierForm, ValidationReport};

use crate::context::use_app_context;
use crate::store::{store_show_notice, use_app_store, AppStateStoreFields};

#[component]
pub fn SupplierPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let form = RwSignal::new(SupplierForm::default());
    let report = RwSignal::new(ValidationReport::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let new_supplier = match validate_supplier(&form.get_untracked()) {
            Ok(new_supplier) => new_supplier,
            Err(found) => {
                report.set(found);
                store_show_notice(&store, Notice::error(ValidationReport::SUMMARY));
                return;
            }
        };
        report.set(ValidationReport::new());
        set_submitting.set(true);
        spawn_local(async move {
            let result = ctx.api().create_supplier(&new_supplier).await;
            set_submitting.set(false);
            match result {
                Ok(resp) => {
                    log::info!("Added supplier {:?} (id {:?})", new_supplier.supplier_name, resp.id);
                    store_show_notice(&store, Notice::from_message(resp.message.as_deref(), "Supplier added successfully!"));
                    form.set(SupplierForm::default());
                    ctx.reload_suppliers();
                }
                Err(err) => store_show_notice(&store, Notice::from_error("Error", &err)),
            }
        });
    };

    let field_class = move |field: FormField| {
        if report.with(|r| r.is_invalid(field)) { "form-control invalid" } else { "form-control" }
    };
    let field_message = move |field: FormField| report.with(|r| r.messages_for(field).join(" "));

    view! {
        <section class="section">
            <h2>"Suppliers"</h2>
            {move || {
                let suppliers = store.inventory().read().suppliers.clone();
                if suppliers.is_empty() {
                    view! {
                        <div class="empty-state"><p>"🏭 No suppliers yet"</p></div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="table-container">
                            <table>
                                <thead>
                                    <tr>
                                        <th class="center">"ID"</th>
                                        <th>"Name"</th>
                                        <th>"Contact"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {suppliers.into_iter().map(|s| view! {
                                        <tr>
                                            <td class="center">{format!("#{}", s.id)}</td>
                                            <td><strong>{s.name}</strong></td>
                                            <td>{s.contact_no}</td>
                                        </tr>
                                    }).collect_view()}
                                </tbody>
                            </table>
                        </div>
                    }
                    .into_any()
                }
            }}

            <h3>"Add Supplier"</h3>
            <form class="supplier-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="supplier_name">"Supplier Name *"</label>
                    <input
                        id="supplier_name"
                        type="text"
                        class=move || field_class(FormField::SupplierName)
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| {
                            form.update(|f| f.name = event_target_value(&ev));
                            report.update(|r| r.clear(FormField::SupplierName));
                        }
                    />
                    <small class="field-error">{move || field_message(FormField::SupplierName)}</small>
                </div>
                <div class="form-group">
                    <label for="contact_no">"Contact No *"</label>
                    <input
                        id="contact_no"
                        type="tel"
                        class=move || field_class(FormField::ContactNo)
                        prop:value=move || form.with(|f| f.contact_no.clone())
                        on:input=move |ev| {
                            form.update(|f| f.contact_no = event_target_value(&ev));
                            report.update(|r| r.clear(FormField::ContactNo));
                        }
                    />
                    <small class="field-error">{move || field_message(FormField::ContactNo)}</small>
                </div>
                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    "➕ Add Supplier"
                </button>
            </form>
        </section>
    }
}
