//! Add Food Modal
//!
//! Collects a new dish and runs the add flow.

use leptos::prelude::*;
use leptos::task::spawn_local;

use food_core::ModalKind;

use crate::components::{FoodFields, FoodFormFields, Modal};
use crate::context::use_app_context;
use crate::store::{
    store_after_submit, store_close_modal, store_is_add_open, store_settle, store_ticket,
    use_app_store,
};

#[component]
pub fn ModalAddFood() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let fields = FoodFields::new();

    // Start each opening from an empty form
    let opening = Memo::new(move |_| store_ticket(&store).filter(|t| t.kind == ModalKind::Add));
    Effect::new(move |_| {
        if opening.get().is_some() {
            fields.clear();
        }
    });

    let add_food = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(ticket) = opening.get_untracked() else {
            return;
        };
        let draft = fields.draft();
        let policy = ctx.policy();
        let flows = ctx.flows();

        // Closes before the result is known unless reconciling on confirmation
        store_after_submit(&store, ticket, policy);

        spawn_local(async move {
            let settled = flows.add(draft).await;
            ctx.if_live(|| store_settle(&store, ticket, policy, settled));
        });
    };

    view! {
        <Modal
            is_open=Signal::derive(move || store_is_add_open(&store))
            on_close=Callback::new(move |_| store_close_modal(&store))
        >
            <form class="food-form" on:submit=add_food>
                <h1>"New dish"</h1>
                <FoodFormFields fields=fields />
                <button type="submit" data-testid="add-food-button">
                    <p class="text">"Add dish"</p>
                </button>
            </form>
        </Modal>
    }
}
