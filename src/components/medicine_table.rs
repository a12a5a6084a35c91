//! Medicine Table Component
//!
//! Paints a [`TableView`]; all row state comes precomputed from the core.

use leptos::prelude::*;
use medvault_core::{MedicineRow, TableView};

use crate::actions;
use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::store::use_app_store;

/// Medicine table or its empty state
///
/// # Arguments
/// * `table` - View-model to render
/// * `with_actions` - Show the edit/delete column
#[component]
pub fn MedicineTable(
    #[prop(into)] table: Signal<TableView>,
    #[prop(optional)] with_actions: bool,
) -> impl IntoView {
    move || match table.get() {
        TableView::Empty(empty) => view! {
            <div class="empty-state">
                <p>{empty.title}</p>
                <p class="empty-detail">{empty.detail}</p>
            </div>
        }
        .into_any(),
        TableView::Rows { mode, rows } => view! {
            <div class=mode.container_class()>
                <table>
                    <thead>
                        <tr>
                            <th class="center">"ID"</th>
                            <th>"Name"</th>
                            <th>"Company"</th>
                            <th>"Mfg Date"</th>
                            <th>"Expiry Date"</th>
                            {mode.shows_days_left().then(|| view! { <th class="center">"Days Left"</th> })}
                            <th class="center">"Quantity"</th>
                            <th class="right">"Price"</th>
                            <th>"Supplier"</th>
                            {with_actions.then(|| view! { <th class="center">"Actions"</th> })}
                        </tr>
                    </thead>
                    <tbody>
                        {rows
                            .into_iter()
                            .map(|row| view! {
                                <MedicineTableRow row=row days_left=mode.shows_days_left() with_actions=with_actions />
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn MedicineTableRow(row: MedicineRow, days_left: bool, with_actions: bool) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let id = row.id;
    let badge = row.badge.map(|badge| view! { <span class=badge.kind.class()>{badge.text}</span> });

    view! {
        <tr class=row.row_class>
            <td><strong>{row.id_label}</strong></td>
            <td><strong>{row.name}</strong></td>
            <td>{row.company}</td>
            <td>{row.mfg_date}</td>
            <td>{row.exp_date} " " {badge}</td>
            {days_left.then(|| view! { <td class=format!("center {}", row.row_class)>{row.days_left}</td> })}
            <td class="center"><strong>{row.quantity}</strong></td>
            <td class="right"><strong>{row.price}</strong></td>
            <td>{row.supplier}</td>
            {with_actions.then(|| view! {
                <td>
                    <div class="action-buttons">
                        <button
                            class="btn btn-warning"
                            on:click=move |_| actions::edit_medicine(ctx, store, id)
                        >
                            "✏️ Edit"
                        </button>
                        <DeleteConfirmButton medicine_id=id />
                    </div>
                </td>
            })}
        </tr>
    }
}
