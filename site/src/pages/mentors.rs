//! Mentor and jury roster

use dioxus::prelude::*;
use ggjc_core::MENTORS;

use crate::components::{decorative_action, ActionButton};
use crate::icons::{Glyph, Icon};

#[component]
pub fn MentorsPage() -> Element {
    rsx! {
        div { class: "view view-mentors page page-wide",
            h2 { class: "view-heading",
                Icon { glyph: Glyph::Terminal, class: "accent-green" }
                "Mentores & Jurados"
            }

            div { class: "mentor-grid",
                for mentor in MENTORS.iter() {
                    div { key: "{mentor.name}", class: "mentor-card",
                        div { class: "mentor-avatar", "{mentor.initial()}" }
                        h3 { class: "mentor-name", "{mentor.name}" }
                        p { class: "mentor-role font-mono", "{mentor.role}" }
                        p { class: "mentor-affiliation", "{mentor.affiliation}" }
                    }
                }
            }

            div { class: "mentor-cta",
                h3 { "¿Quieres ser mentor?" }
                p { "Buscamos expertos locales para guiar a la próxima generación de desarrolladores." }
                ActionButton {
                    on_press: move |_| decorative_action("mentor-application"),
                    "Aplicar como Mentor"
                }
            }
        }
    }
}
