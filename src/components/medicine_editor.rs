//! Medicine Editor Component
//!
//! Add/update form. Validates everything client-side first, marks every
//! invalid field and focuses the first one; only a clean form is sent.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use medvault_core::expiry::today;
use medvault_core::validation::validate_medicine;
use medvault_core::{classify_str, FormField, MedicineForm, Notice, ValidationReport};

use crate::actions::{self, SaveMode};
use crate::components::field_input::FieldInput;
use crate::components::SupplierSelect;
use crate::context::{use_app_context, Section};
use crate::store::{store_set_editing, store_show_notice, use_app_store};

/// Medicine form for creating (`SaveMode::Create`) or editing a record
#[component]
pub fn MedicineEditor(
    mode: SaveMode,
    #[prop(optional)] initial: MedicineForm,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let form = RwSignal::new(initial.clone());
    let report = RwSignal::new(ValidationReport::new());
    let (submitting, set_submitting) = signal(false);
    let (server_error, set_server_error) = signal::<Option<String>>(None);

    let name_ref = NodeRef::<html::Input>::new();
    let company_ref = NodeRef::<html::Input>::new();
    let mfg_ref = NodeRef::<html::Input>::new();
    let exp_ref = NodeRef::<html::Input>::new();
    let quantity_ref = NodeRef::<html::Input>::new();
    let price_ref = NodeRef::<html::Input>::new();
    let supplier_ref = NodeRef::<html::Select>::new();

    let focus_field = move |field: FormField| {
        let element: Option<web_sys::HtmlElement> = match field {
            FormField::Name => name_ref.get().map(Into::into),
            FormField::Company => company_ref.get().map(Into::into),
            FormField::MfgDate => mfg_ref.get().map(Into::into),
            FormField::ExpDate => exp_ref.get().map(Into::into),
            FormField::Quantity => quantity_ref.get().map(Into::into),
            FormField::Price => price_ref.get().map(Into::into),
            FormField::Supplier => supplier_ref.get().map(Into::into),
            FormField::SupplierName | FormField::ContactNo => None,
        };
        if let Some(element) = element {
            element.scroll_into_view();
            let _ = element.focus();
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        set_server_error.set(None);

        let payload = match validate_medicine(&form.get_untracked()) {
            Ok(payload) => payload,
            Err(found) => {
                log::debug!("Medicine form rejected with {} problem(s)", found.errors.len());
                let first = found.first_invalid();
                report.set(found);
                store_show_notice(&store, Notice::error(ValidationReport::SUMMARY));
                if let Some(field) = first {
                    focus_field(field);
                }
                return;
            }
        };

        report.set(ValidationReport::new());
        set_submitting.set(true);
        spawn_local(async move {
            let result = actions::save_medicine(ctx, mode, payload).await;
            set_submitting.set(false);
            match result {
                Ok(resp) => {
                    let fallback = match mode {
                        SaveMode::Create => "Medicine added successfully!",
                        SaveMode::Update(_) => "Medicine updated successfully!",
                    };
                    store_show_notice(&store, Notice::from_message(resp.message.as_deref(), fallback));
                    match mode {
                        SaveMode::Create => form.set(MedicineForm::default()),
                        SaveMode::Update(_) => store_set_editing(&store, None),
                    }
                    ctx.reload();
                    ctx.navigate(Section::Inventory);
                }
                Err(err) => {
                    set_server_error.set(Some(err.to_string()));
                    store_show_notice(&store, Notice::from_error("Error", &err));
                }
            }
        });
    };

    let reset = move |_| {
        form.set(initial.clone());
        report.set(ValidationReport::new());
        set_server_error.set(None);
    };

    let expiry_hint = move || {
        let expiry = form.with(|f| classify_str(Some(&f.exp_date), today()));
        expiry
            .hint()
            .map(|text| view! { <p class=format!("expiry-hint {}", expiry.status.row_class())>{text}</p> })
    };

    let submit_label = match mode {
        SaveMode::Create => "➕ Add Medicine",
        SaveMode::Update(_) => "💾 Update Medicine",
    };

    view! {
        <form class="medicine-form" on:submit=on_submit>
            <div class="form-grid">
                <FieldInput label="Medicine Name *" field=FormField::Name input_type="text"
                    form=form report=report input_ref=name_ref />
                <FieldInput label="Company *" field=FormField::Company input_type="text"
                    form=form report=report input_ref=company_ref />
                <FieldInput label="Manufacture Date *" field=FormField::MfgDate input_type="date"
                    form=form report=report input_ref=mfg_ref />
                <FieldInput label="Expiry Date *" field=FormField::ExpDate input_type="date"
                    form=form report=report input_ref=exp_ref />
                <FieldInput label="Quantity *" field=FormField::Quantity input_type="number"
                    form=form report=report input_ref=quantity_ref step="1" min="0" />
                <FieldInput label="Price (USD) *" field=FormField::Price input_type="number"
                    form=form report=report input_ref=price_ref step="0.01" min="0" />
                <SupplierSelect form=form report=report select_ref=supplier_ref />
            </div>
            {expiry_hint}
            {move || server_error.get().map(|msg| view! { <div class="message error">{msg}</div> })}
            <div class="form-actions">
                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    {submit_label}
                </button>
                <button type="button" class="btn btn-secondary" on:click=reset>"Reset"</button>
            </div>
        </form>
    }
}
