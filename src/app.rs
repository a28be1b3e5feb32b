//! Food Dashboard App
//!
//! Header, the two modals and the food list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use food_core::{CancelToken, FoodFlows, HttpFoodService};

use crate::components::{FoodCard, Header, ModalAddFood, ModalEditFood};
use crate::config;
use crate::context::AppContext;
use crate::store::{store_apply, store_foods, AppState};

#[component]
pub fn App() -> impl IntoView {
    let config = config::page_config();
    log::info!(
        "[APP] Food service at {} ({} reconcile)",
        config.api_base,
        config.reconcile.as_str()
    );

    // State
    let store = Store::new(AppState::default());
    let token = CancelToken::new();
    let ctx = AppContext::new(
        FoodFlows::new(HttpFoodService::new(&config), config.reconcile),
        token.clone(),
    );

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Requests in flight keep running; their results are dropped
    on_cleanup(move || token.cancel());

    // Load foods on mount
    Effect::new(move |_| {
        let flows = ctx.flows();
        spawn_local(async move {
            let mutation = flows.load().await;
            ctx.if_live(|| store_apply(&store, mutation));
        });
    });

    view! {
        <Header />
        <ModalAddFood />
        <ModalEditFood />

        <main class="foods-container" data-testid="foods-list">
            <For
                each=move || store_foods(&store)
                key=|food| {
                    // Every field, so an edit re-renders its card
                    (
                        food.id,
                        food.name.clone(),
                        food.image.clone(),
                        food.price.clone(),
                        food.description.clone(),
                        food.available,
                    )
                }
                children=move |food| view! { <FoodCard food=food /> }
            />
        </main>
    }
}
