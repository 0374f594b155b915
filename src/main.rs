//! Todo App Frontend Entry Point

mod actions;
mod app;
mod commands;
mod components;
mod config;
mod context;
mod form;
mod i18n;
mod models;
mod pages;
mod service;
mod store;
mod views;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::warn_1(&format!("Logger already initialized: {}", e).into());
    }
    mount_to_body(App);
}
