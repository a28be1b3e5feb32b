//! Edit Food Modal
//!
//! Pre-fills the form from the selected dish and runs the edit flow.

use leptos::prelude::*;
use leptos::task::spawn_local;

use food_core::ModalKind;

use crate::components::{FoodFields, FoodFormFields, Modal};
use crate::context::use_app_context;
use crate::store::{
    store_after_submit, store_close_modal, store_editing, store_is_edit_open, store_settle,
    store_ticket, use_app_store,
};

#[component]
pub fn ModalEditFood() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let fields = FoodFields::new();

    // Refill on each opening, not on every modal write
    let opening = Memo::new(move |_| store_ticket(&store).filter(|t| t.kind == ModalKind::Edit));
    Effect::new(move |_| {
        if opening.get().is_some() {
            if let Some(food) = untrack(|| store_editing(&store)) {
                fields.fill(&food);
            }
        }
    });

    let update_food = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(ticket) = opening.get_untracked() else {
            return;
        };
        let Some(selected) = untrack(|| store_editing(&store)) else {
            return;
        };
        let patch = fields.patch_against(&selected);
        if patch.is_empty() {
            log::debug!("[EDIT] Food {} submitted unchanged", selected.id);
        }
        let policy = ctx.policy();
        let flows = ctx.flows();

        store_after_submit(&store, ticket, policy);

        spawn_local(async move {
            let settled = flows.update(&selected, patch).await;
            ctx.if_live(|| store_settle(&store, ticket, policy, settled));
        });
    };

    view! {
        <Modal
            is_open=Signal::derive(move || store_is_edit_open(&store))
            on_close=Callback::new(move |_| store_close_modal(&store))
        >
            <form class="food-form" on:submit=update_food>
                <h1>"Edit dish"</h1>
                <FoodFormFields fields=fields />
                <button type="submit" data-testid="edit-food-button">
                    <p class="text">"Save changes"</p>
                </button>
            </form>
        </Modal>
    }
}
