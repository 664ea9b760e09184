//! Campus Market Frontend Entry Point

mod config;
mod session;
mod api;
mod router;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&format!("[APP] Starting, API at {}", config::api_base_url()).into());
    mount_to_body(App);
}
