//! Client Configuration
//!
//! Where the remote food service lives and how flows reconcile local state
//! with request outcomes.

use std::str::FromStr;

/// json-server default used during development
pub const DEFAULT_API_BASE: &str = "http://localhost:3333";

/// How add/edit/delete results are reflected locally
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Reconcile {
    /// Close the submitting modal at once and drop deleted records whatever
    /// the server says. Failed adds and deletes leave the list out of sync.
    #[default]
    Optimistic,
    /// Touch modal and list only after the server confirmed the change
    Confirmed,
}

impl Reconcile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Reconcile::Optimistic => "optimistic",
            Reconcile::Confirmed => "confirmed",
        }
    }
}

impl FromStr for Reconcile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "optimistic" => Ok(Reconcile::Optimistic),
            "confirmed" => Ok(Reconcile::Confirmed),
            other => Err(format!("unknown reconcile policy: {:?}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without trailing slash, e.g. `http://localhost:3333`
    pub api_base: String,
    pub reconcile: Reconcile,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl ClientConfig {
    pub fn new(api_base: &str) -> Self {
        Self {
            api_base: api_base.trim().trim_end_matches('/').to_string(),
            reconcile: Reconcile::default(),
        }
    }

    pub fn with_reconcile(mut self, reconcile: Reconcile) -> Self {
        self.reconcile = reconcile;
        self
    }
}
