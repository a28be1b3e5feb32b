//! Header Component

use leptos::prelude::*;

use crate::store::{store_open_add, use_app_store};

/// Title bar with the "new dish" action
#[component]
pub fn Header() -> impl IntoView {
    let store = use_app_store();

    view! {
        <header class="header">
            <h1 class="logo">"Food Dashboard"</h1>
            <button
                type="button"
                class="new-food-btn"
                data-testid="open-add-food"
                on:click=move |_| store_open_add(&store)
            >
                "New dish"
            </button>
        </header>
    }
}
