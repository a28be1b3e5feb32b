//! Food Entity
//!
//! A dish on the menu, plus the payloads the add and edit forms produce.

use serde::{Deserialize, Deserializer, Serialize};

use super::entity::Entity;

/// Server-assigned food identifier
pub type FoodId = u32;

/// A food record as the remote service stores it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodRecord {
    pub id: FoodId,
    pub name: String,
    /// Image URL
    pub image: String,
    /// Decimal string, e.g. "19.90"
    #[serde(deserialize_with = "price_from_text_or_number")]
    pub price: String,
    pub description: String,
    #[serde(default = "default_true")]
    pub available: bool,
}

impl Entity for FoodRecord {
    type Id = FoodId;

    fn id(&self) -> FoodId {
        self.id
    }
}

fn default_true() -> bool {
    true
}

/// Fixtures often store prices as JSON numbers; keep them as text either way
fn price_from_text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Price {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Price::deserialize(deserializer)? {
        Price::Text(text) => text,
        Price::Number(number) => number.to_string(),
    })
}

/// Add form output: everything but `id` and `available`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodDraft {
    pub image: String,
    pub name: String,
    pub price: String,
    pub description: String,
}

/// Create request body. `available` is always true on creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewFood {
    pub image: String,
    pub name: String,
    pub price: String,
    pub description: String,
    pub available: bool,
}

impl From<FoodDraft> for NewFood {
    fn from(draft: FoodDraft) -> Self {
        Self {
            image: draft.image,
            name: draft.name,
            price: draft.price,
            description: draft.description,
            available: true,
        }
    }
}

/// Edit form output. Unset fields keep the selected record's value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodPatch {
    pub name: Option<String>,
    pub image: Option<String>,
    pub price: Option<String>,
    pub description: Option<String>,
}

impl FoodPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.image.is_none()
            && self.price.is_none()
            && self.description.is_none()
    }

    /// Overlay this patch on `selected`; `id` and `available` are never touched
    pub fn apply_to(&self, selected: &FoodRecord) -> FoodRecord {
        FoodRecord {
            id: selected.id,
            name: self.name.clone().unwrap_or_else(|| selected.name.clone()),
            image: self.image.clone().unwrap_or_else(|| selected.image.clone()),
            price: self.price.clone().unwrap_or_else(|| selected.price.clone()),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| selected.description.clone()),
            available: selected.available,
        }
    }
}

/// Render a price for display. Unparsable input is shown as typed.
pub fn format_price(price: &str) -> String {
    match price.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => format!("{:.2}", value),
        _ => price.to_string(),
    }
}
