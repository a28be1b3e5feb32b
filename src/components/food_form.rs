//! Food Form Fields
//!
//! The four free-text inputs shared by the add and edit modals.

use leptos::prelude::*;

use food_core::{FoodDraft, FoodPatch, FoodRecord};

/// Input values of a food form
#[derive(Clone, Copy)]
pub struct FoodFields {
    pub image: RwSignal<String>,
    pub name: RwSignal<String>,
    pub price: RwSignal<String>,
    pub description: RwSignal<String>,
}

impl FoodFields {
    pub fn new() -> Self {
        Self {
            image: RwSignal::new(String::new()),
            name: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
        }
    }

    pub fn fill(&self, food: &FoodRecord) {
        self.image.set(food.image.clone());
        self.name.set(food.name.clone());
        self.price.set(food.price.clone());
        self.description.set(food.description.clone());
    }

    pub fn clear(&self) {
        for field in [self.image, self.name, self.price, self.description] {
            field.set(String::new());
        }
    }

    pub fn draft(&self) -> FoodDraft {
        FoodDraft {
            image: self.image.get_untracked(),
            name: self.name.get_untracked(),
            price: self.price.get_untracked(),
            description: self.description.get_untracked(),
        }
    }

    /// Only the fields that differ from `selected`
    pub fn patch_against(&self, selected: &FoodRecord) -> FoodPatch {
        let changed = |value: RwSignal<String>, current: &str| {
            let value = value.get_untracked();
            (value != current).then_some(value)
        };
        FoodPatch {
            name: changed(self.name, &selected.name),
            image: changed(self.image, &selected.image),
            price: changed(self.price, &selected.price),
            description: changed(self.description, &selected.description),
        }
    }
}

#[component]
pub fn FoodFormFields(fields: FoodFields) -> impl IntoView {
    view! {
        <FoodInput name="image" placeholder="Paste the image link" value=fields.image />
        <FoodInput name="name" placeholder="e.g. Italian style" value=fields.name />
        <FoodInput name="price" placeholder="e.g. 19.90" value=fields.price />
        <FoodInput name="description" placeholder="Description" value=fields.description />
    }
}

#[component]
fn FoodInput(name: &'static str, placeholder: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="input-container">
            <input
                type="text"
                name=name
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}
