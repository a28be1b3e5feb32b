//! Page Configuration
//!
//! Reads client settings from `<meta>` tags in index.html, falling back to
//! the defaults when a tag is missing or unparsable.

use food_core::{ClientConfig, Reconcile};
use log::LevelFilter;

const META_API_BASE: &str = "food-api-base";
const META_RECONCILE: &str = "food-reconcile";
const META_LOG_LEVEL: &str = "food-log-level";

/// Content of `<meta name="{name}" content="...">`, if present
fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()??;
    element.get_attribute("content")
}

pub fn page_config() -> ClientConfig {
    resolve(meta_content(META_API_BASE), meta_content(META_RECONCILE))
}

pub fn page_log_level() -> LevelFilter {
    resolve_log_level(meta_content(META_LOG_LEVEL))
}

fn resolve(api_base: Option<String>, reconcile: Option<String>) -> ClientConfig {
    let config = match api_base.as_deref().map(str::trim) {
        Some(base) if !base.is_empty() => ClientConfig::new(base),
        _ => ClientConfig::default(),
    };
    let reconcile = match reconcile {
        Some(raw) => raw.parse::<Reconcile>().unwrap_or_else(|e| {
            log::warn!("[CONFIG] {}, using {}", e, Reconcile::default().as_str());
            Reconcile::default()
        }),
        None => Reconcile::default(),
    };
    config.with_reconcile(reconcile)
}

fn resolve_log_level(raw: Option<String>) -> LevelFilter {
    raw.and_then(|level| level.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}
