//! Update Panel
//!
//! Pick a medicine, load its current record and edit it.

use leptos::prelude::*;
use leptos::task::spawn_local;
use medvault_core::{MedicineForm, Notice};

use crate::actions::SaveMode;
use crate::components::MedicineEditor;
use crate::context::use_app_context;
use crate::store::{store_set_editing, store_show_notice, use_app_store, AppStateStoreFields};

#[component]
pub fn UpdatePanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let editing = Memo::new(move |_| store.inventory().read().editing);
    let (loaded, set_loaded) = signal::<Option<(u32, MedicineForm)>>(None);

    // Fetch the selected medicine fresh from the backend
    Effect::new(move |_| {
        let Some(id) = editing.get() else {
            set_loaded.set(None);
            return;
        };
        spawn_local(async move {
            match ctx.api().get_medicine(id).await {
                Ok(medicine) => set_loaded.set(Some((id, MedicineForm::from(&medicine)))),
                Err(err) => {
                    set_loaded.set(None);
                    store_show_notice(&store, Notice::from_error("Error loading medicine", &err));
                }
            }
        });
    });

    let choices = move || {
        store
            .inventory()
            .read()
            .medicines
            .iter()
            .map(|m| (m.id, format!("#{} {}", m.id, m.name)))
            .collect::<Vec<_>>()
    };

    let current_supplier = move || {
        let id = editing.get()?;
        let inventory = store.inventory().read();
        let supplier_id = inventory.medicine(id)?.supplier_id;
        inventory.supplier_label(supplier_id)
    };

    view! {
        <section class="section">
            <h2>"Update Medicine"</h2>
            <div class="form-group">
                <label for="update-select">"Medicine"</label>
                <select
                    id="update-select"
                    class="form-control"
                    prop:value=move || editing.get().map(|id| id.to_string()).unwrap_or_default()
                    on:change=move |ev| {
                        let id = event_target_value(&ev).parse::<u32>().ok();
                        store_set_editing(&store, id);
                    }
                >
                    <option value="" selected=move || editing.get().is_none()>"Select Medicine"</option>
                    {move || choices()
                        .into_iter()
                        .map(|(id, label)| view! {
                            <option value=id.to_string() selected=move || editing.get() == Some(id)>{label}</option>
                        })
                        .collect_view()}
                </select>
            </div>
            {move || current_supplier().map(|label| view! {
                <p class="table-caption">"Current supplier: " {label}</p>
            })}
            {move || match loaded.get() {
                Some((id, initial)) => view! {
                    <MedicineEditor mode=SaveMode::Update(id) initial=initial />
                }
                .into_any(),
                None => view! {
                    <p class="empty-detail">"Choose a medicine, or use Edit in the inventory table."</p>
                }
                .into_any(),
            }}
        </section>
    }
}
