//! Shared chrome: navigation bar and footer

use dioxus::prelude::*;
use ggjc_core::{View, NAV_LINKS};

use crate::components::decorative_action;
use crate::icons::{Glyph, Icon};

fn nav_link_class(selected: bool) -> &'static str {
    if selected {
        "nav-link active"
    } else {
        "nav-link"
    }
}

/// Fixed header bar.
///
/// Reads the shell state for display only. Every link click is sent back
/// through `on_navigate`; the shell closes the menu as part of committing
/// the navigation, so a link picked from the collapsed menu never needs a
/// separate close request.
#[component]
pub fn Navbar(
    active: View,
    menu_open: bool,
    on_navigate: EventHandler<String>,
    on_toggle_menu: EventHandler<()>,
) -> Element {
    let toggle_glyph = if menu_open { Glyph::X } else { Glyph::Menu };

    rsx! {
        nav { class: "navbar",
            div { class: "navbar-inner",
                // Brand
                button {
                    class: "brand",
                    onclick: move |_| on_navigate.call(View::Home.id().to_string()),
                    img { src: "/assets/LogoGGJC.svg", alt: "GGJ Logo" }
                    span { "GGJ" span { class: "brand-accent", "C" } }
                }

                // Desktop links
                div { class: "nav-links",
                    for link in NAV_LINKS.iter() {
                        button {
                            key: "{link.view.id()}",
                            class: nav_link_class(link.view == active),
                            onclick: move |_| on_navigate.call(link.view.id().to_string()),
                            "{link.label}"
                        }
                    }
                    button {
                        class: "login-btn",
                        onclick: move |_| decorative_action("login"),
                        "Login"
                    }
                }

                // Narrow viewport toggle
                button {
                    class: "menu-toggle",
                    aria_expanded: "{menu_open}",
                    onclick: move |_| on_toggle_menu.call(()),
                    Icon { glyph: toggle_glyph }
                }
            }

            if menu_open {
                div { class: "mobile-menu",
                    for link in NAV_LINKS.iter() {
                        button {
                            key: "{link.view.id()}",
                            class: "mobile-link",
                            onclick: move |_| on_navigate.call(link.view.id().to_string()),
                            "{link.label}"
                        }
                    }
                }
            }
        }
    }
}

const FOOTER_LINKS: [&str; 3] = ["Código de Conducta", "Kit de Prensa", "Recursos para Jammers"];
const SOCIALS: [&str; 3] = ["IG", "FB", "X"];

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "footer-grid",
                div {
                    h3 { "GGJ Cochabamba" }
                    p { class: "footer-text",
                        "Parte del evento de creación de juegos más grande del mundo. Organizado por la comunidad de desarrolladores de Bolivia."
                    }
                }
                div {
                    h4 { "Enlaces" }
                    ul { class: "footer-links",
                        for label in FOOTER_LINKS {
                            li { key: "{label}", "{label}" }
                        }
                    }
                }
                div {
                    h4 { "Síguenos" }
                    div { class: "socials",
                        for social in SOCIALS {
                            div { key: "{social}", class: "social", "{social}" }
                        }
                    }
                }
            }
            div { class: "copyright font-mono",
                "© 2025 Global Game Jam Cochabamba. Built with Rust & ☕."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_link_class() {
        assert_eq!(nav_link_class(true), "nav-link active");
        assert_eq!(nav_link_class(false), "nav-link");
    }

    #[test]
    fn test_footer_renders_links_and_socials() {
        let html = dioxus_ssr::render_element(rsx! { Footer {} });
        assert!(html.contains("GGJ Cochabamba"));
        assert!(html.contains("Kit de Prensa"));
        assert_eq!(html.matches("class=\"social\"").count(), 3);
    }
}
