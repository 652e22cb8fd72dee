//! Landing page - hero and value pillars

use dioxus::prelude::*;
use ggjc_core::PILLARS;

use crate::components::{ActionButton, Card};
use crate::icons::{Glyph, Icon};

/// Registration is not part of the site; the request falls back to home.
const REGISTER_VIEW_ID: &str = "register";

const PILLAR_GLYPHS: [Glyph; 3] = [Glyph::Zap, Glyph::Users, Glyph::Code];

#[component]
pub fn HomePage(on_navigate: EventHandler<String>) -> Element {
    rsx! {
        div { class: "view view-home",
            section { class: "hero",
                div { class: "hero-backdrop",
                    img { src: "/assets/foto1.jpg", alt: "Background Ambient" }
                    div { class: "hero-overlay" }
                }

                div { class: "hero-content",
                    div { class: "status-badge font-mono", "< System.Ready />" }

                    h1 { class: "hero-title",
                        "GLOBAL GAME JAM"
                        span { class: "hero-subtitle text-glow", "COCHABAMBA 2026" }
                    }

                    p { class: "hero-tagline",
                        "48 horas para crear, colaborar e innovar. El evento de desarrollo de videojuegos más grande del mundo aterriza en la Llajta."
                    }

                    div { class: "hero-actions",
                        ActionButton {
                            primary: true,
                            on_press: move |_| on_navigate.call(REGISTER_VIEW_ID.to_string()),
                            "Inscribirse Ahora"
                            Icon { glyph: Glyph::ChevronRight, size: 18 }
                        }
                        ActionButton {
                            on_press: move |_| on_navigate.call("schedule".to_string()),
                            "Ver Cronograma"
                        }
                    }

                    div { class: "hero-glyph animate-float",
                        Icon { glyph: Glyph::Gamepad, size: 120 }
                    }
                }
            }

            section { class: "pillars",
                for (idx, (pillar, glyph)) in PILLARS.iter().zip(PILLAR_GLYPHS).enumerate() {
                    Card {
                        key: "{pillar.title}",
                        title: pillar.title.to_string(),
                        glyph,
                        delay: idx as u32 + 1,
                        "{pillar.body}"
                    }
                }
            }
        }
    }
}
