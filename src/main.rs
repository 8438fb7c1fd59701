//! Todo Pager Entry Point

mod app;
mod components;
mod http;
mod models;
mod state;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
