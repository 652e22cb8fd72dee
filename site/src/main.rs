//! WASM client entry point

use dioxus::logger::tracing::Level;

fn main() {
    dioxus::logger::init(Level::INFO).ok();
    ggjc_site::viewport::clear_mount_root();
    dioxus::launch(ggjc_site::App);
}
