mod app;
mod components;
mod pages;

use leptos::logging::log;
use shared::CONFIG;

fn main() {
    console_error_panic_hook::set_once();
    log!("mounting {}", CONFIG.name);
    leptos::mount::mount_to_body(app::App);
}
