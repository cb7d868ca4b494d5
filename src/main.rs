#![allow(warnings)]
//! Rubric Editor Frontend Entry Point

mod app;
mod automation;
mod components;
mod context;
mod dom;
mod logging;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Debug);
    mount_to_body(App);
}
