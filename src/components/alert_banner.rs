//! Alert Banner Component
//!
//! Shows the current notice; click to dismiss early.

use leptos::prelude::*;

use crate::store::{store_dismiss_notice, use_app_store, AppStateStoreFields};

#[component]
pub fn AlertBanner() -> impl IntoView {
    let store = use_app_store();

    move || {
        store.notice().get().map(|notice| view! {
            <div
                class=notice.kind.class()
                role="alert"
                on:click=move |_| store_dismiss_notice(&store)
            >
                <strong>{notice.kind.icon()}</strong>
                " "
                {notice.message}
            </div>
        })
    }
}
