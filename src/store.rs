//! Dashboard State Store
//!
//! Uses Leptos reactive_stores so the list and the modal re-render independently.

use leptos::prelude::*;
use reactive_stores::Store;

use food_core::{FoodList, FoodRecord, ModalState, ModalTicket, Mutation, Reconcile, Settled};

/// Dashboard state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Foods currently known to the page, in server order
    pub foods: FoodList,
    /// Which modal is open, if any
    pub modal: ModalState,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Reads (tracked)
// ========================

pub fn store_foods(store: &AppStore) -> Vec<FoodRecord> {
    store.foods().read().as_slice().to_vec()
}

pub fn store_is_add_open(store: &AppStore) -> bool {
    store.modal().read().is_add_open()
}

pub fn store_is_edit_open(store: &AppStore) -> bool {
    store.modal().read().is_edit_open()
}

/// The opening of the modal currently on screen
pub fn store_ticket(store: &AppStore) -> Option<ModalTicket> {
    store.modal().read().ticket()
}

/// The record selected for editing, while the edit modal is open
pub fn store_editing(store: &AppStore) -> Option<FoodRecord> {
    store.modal().read().editing().cloned()
}

// ========================
// Writes
// ========================

pub fn store_apply(store: &AppStore, mutation: Mutation<FoodRecord>) {
    if !mutation.is_nothing() {
        store.foods().write().apply(mutation);
    }
}

pub fn store_open_add(store: &AppStore) {
    store.modal().write().open_add();
}

pub fn store_select_for_edit(store: &AppStore, food: FoodRecord) {
    store.modal().write().select_for_edit(food);
}

pub fn store_close_modal(store: &AppStore) {
    store.modal().write().close();
}

pub fn store_after_submit(store: &AppStore, ticket: ModalTicket, policy: Reconcile) {
    store.modal().write().after_submit(ticket, policy);
}

/// Apply a finished add/edit flow. Modal first, then the list.
pub fn store_settle(store: &AppStore, ticket: ModalTicket, policy: Reconcile, settled: Settled) {
    let mutation = settled.settle(ticket, policy, &mut store.modal().write());
    store_apply(store, mutation);
}
