//! Form Field Components
//!
//! Labelled input bound to one [`FormField`] of the medicine form, with the
//! invalid marker and messages taken from the validation report.

use leptos::html;
use leptos::prelude::*;
use medvault_core::{FormField, MedicineForm, ValidationReport};

#[component]
pub fn FieldInput(
    label: &'static str,
    field: FormField,
    input_type: &'static str,
    form: RwSignal<MedicineForm>,
    report: RwSignal<ValidationReport>,
    input_ref: NodeRef<html::Input>,
    #[prop(optional)] step: Option<&'static str>,
    #[prop(optional)] min: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=field.as_str()>{label}</label>
            <input
                id=field.as_str()
                name=field.as_str()
                type=input_type
                step=step
                min=min
                node_ref=input_ref
                class=move || if report.with(|r| r.is_invalid(field)) { "form-control invalid" } else { "form-control" }
                prop:value=move || form.with(|f| f.value(field).to_string())
                on:input=move |ev| {
                    form.update(|f| f.set(field, event_target_value(&ev)));
                    report.update(|r| r.clear(field));
                }
            />
            <FieldErrors field=field report=report />
        </div>
    }
}

/// Messages for one field, if any
#[component]
pub fn FieldErrors(field: FormField, report: RwSignal<ValidationReport>) -> impl IntoView {
    move || {
        let messages = report.with(|r| r.messages_for(field).join(" "));
        (!messages.is_empty()).then(|| view! { <small class="field-error">{messages}</small> })
    }
}
