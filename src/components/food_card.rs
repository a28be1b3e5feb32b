//! Food Card Component
//!
//! One dish in the list, with edit and delete controls.

use leptos::prelude::*;
use leptos::task::spawn_local;

use food_core::{format_price, FoodRecord};

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::store::{store_apply, store_select_for_edit, use_app_store};

#[component]
pub fn FoodCard(food: FoodRecord) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let id = food.id;
    let available = food.available;
    let card_class = if available { "food" } else { "food unavailable" };
    let price = format_price(&food.price);
    let FoodRecord { name, image, description, .. } = food.clone();
    let alt = name.clone();
    let selected = food;

    let delete_food = Callback::new(move |_| {
        let flows = ctx.flows();
        spawn_local(async move {
            let settled = flows.delete(id).await;
            ctx.if_live(|| store_apply(&store, settled.mutation));
        });
    });

    view! {
        <div class=card_class data-testid=format!("food-{}", id)>
            <header>
                <img src=image alt=alt />
            </header>
            <section class="body">
                <h2>{name}</h2>
                <p>{description}</p>
                <p class="price">"$ " <b>{price}</b></p>
            </section>
            <section class="footer">
                <div class="icon-container">
                    <button
                        type="button"
                        class="icon edit-btn"
                        data-testid=format!("edit-food-{}", id)
                        on:click=move |_| store_select_for_edit(&store, selected.clone())
                    >
                        "✎"
                    </button>
                    <DeleteConfirmButton
                        button_class="icon delete-btn"
                        test_id=format!("remove-food-{}", id)
                        on_confirm=delete_food
                    />
                </div>
                <div class="availability-container">
                    <p>{if available { "Available" } else { "Unavailable" }}</p>
                </div>
            </section>
        </div>
    }
}
