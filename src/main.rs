#![allow(warnings)]
//! SwipeSmart Popup Entry Point

mod app;
mod backend;
mod catalog;
mod chrome;
mod components;
mod models;
mod prefs;
mod store;
mod view;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
