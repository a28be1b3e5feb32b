//! Food Dashboard Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod logger;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(config::page_log_level());
    mount_to_body(App);
}
