//! Dioxus web UI for the GGJ Cochabamba site

pub mod components;
pub mod icons;
pub mod layout;
pub mod pages;
pub mod registry;
pub mod theme;
pub mod viewport;

use dioxus::prelude::*;
use ggjc_core::ShellState;

use crate::layout::{Footer, Navbar};
use crate::registry::{ViewContext, REGISTRY};
use crate::theme::{inject_global_css, Backdrop};

/// Id of the element the client mounts into. The host prerenders into the
/// same element and the client clears it before launching.
pub const MOUNT_ROOT_ID: &str = "main";

/// Main app component
#[allow(non_snake_case)]
pub fn App() -> Element {
    rsx! {
        PageShell {}
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct PageShellProps {
    /// State the shell starts from. Defaults to home with the menu closed;
    /// prerendering and tests pass other snapshots.
    #[props(default)]
    pub initial: ShellState,
}

/// Root component.
///
/// Sole owner of the shell state. Children get plain values plus request
/// handlers, and every request lands in a single `write()` on the signal, so
/// each input event produces exactly one redraw.
#[allow(non_snake_case)]
pub fn PageShell(props: PageShellProps) -> Element {
    let mut shell = use_signal(move || props.initial);

    // Scroll reset runs after the navigation has been committed and
    // rendered. Keyed on the epoch so menu toggles don't trigger it but
    // re-navigating to the active view does.
    let epoch = use_memo(move || shell.read().epoch());
    use_effect(move || {
        let epoch = epoch();
        viewport::scroll_to_top();
        tracing::trace!(epoch, "Scroll offset reset");
    });

    let on_navigate = use_callback(move |id: String| shell.write().navigate(&id));
    let (view, menu_open) = {
        let state = shell.read();
        (state.view(), state.menu_open())
    };

    rsx! {
        {inject_global_css()}

        div { class: "app-container",
            Backdrop {}

            Navbar {
                active: view,
                menu_open,
                on_navigate,
                on_toggle_menu: move |_| shell.write().toggle_menu(),
            }

            main { class: "shell-main", "data-view": view.id(),
                {REGISTRY.render(view.id(), ViewContext { on_navigate })}
            }

            Footer {}
        }
    }
}
