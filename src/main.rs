//! Todos Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod store;

use app::App;
use leptos::prelude::*;
use tracing::Level;
use wasm_bindgen::JsValue;
use web_sys::console;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = rolling_logger::init(Level::DEBUG, log_to_console) {
        console::warn_1(&format!("logger not installed: {}", err).into());
    }
    mount_to_body(App);
}

fn log_to_console(level: &Level, line: &str) {
    let line = JsValue::from_str(line);
    if *level == Level::ERROR {
        console::error_1(&line);
    } else if *level == Level::WARN {
        console::warn_1(&line);
    } else if *level == Level::INFO {
        console::info_1(&line);
    } else {
        console::debug_1(&line);
    }
}
