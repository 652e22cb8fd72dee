//! Event timeline

use dioxus::prelude::*;
use ggjc_core::SCHEDULE;

use crate::icons::{Glyph, Icon};

#[component]
pub fn SchedulePage() -> Element {
    rsx! {
        div { class: "view view-schedule page page-narrow",
            h2 { class: "view-heading",
                Icon { glyph: Glyph::Calendar, class: "accent-cyan" }
                "Cronograma"
            }

            div { class: "timeline",
                for (idx, entry) in SCHEDULE.iter().enumerate() {
                    div {
                        key: "{idx}",
                        class: "timeline-entry entry-{entry.kind.as_str()}",
                        div { class: "timeline-dot dot-{entry.kind.dot()}" }

                        div { class: "timeline-card",
                            span { class: "timeline-time font-mono", "{entry.time}" }
                            h3 { class: "timeline-title", "{entry.title}" }
                            p { class: "timeline-desc", "{entry.description}" }
                        }
                    }
                }
            }
        }
    }
}
