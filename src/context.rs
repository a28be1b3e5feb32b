//! Application Context
//!
//! Flows and the view's cancel token, provided via Leptos Context API.

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

use food_core::{CancelToken, FoodFlows, HttpFoodService, Reconcile};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// reqwest futures are not `Send` in the browser, so keep flows local
    flows: StoredValue<FoodFlows<HttpFoodService>, LocalStorage>,
    /// Cancelled when the dashboard is torn down
    token: StoredValue<CancelToken>,
    policy: Reconcile,
}

impl AppContext {
    pub fn new(flows: FoodFlows<HttpFoodService>, token: CancelToken) -> Self {
        Self {
            policy: flows.policy(),
            flows: StoredValue::new_local(flows),
            token: StoredValue::new(token),
        }
    }

    /// A handle to the flows to move into a spawned task
    pub fn flows(&self) -> FoodFlows<HttpFoodService> {
        self.flows.get_value()
    }

    pub fn policy(&self) -> Reconcile {
        self.policy
    }

    /// Apply a late flow result unless the dashboard was torn down
    pub fn if_live(&self, apply: impl FnOnce()) -> bool {
        self.token
            .try_with_value(|token| token.run_unless_cancelled(apply))
            .unwrap_or(false)
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
