//! Feature card with tech-corner decorations

use dioxus::prelude::*;

use crate::icons::{Glyph, Icon};

#[component]
pub fn Card(
    title: String,
    glyph: Glyph,
    // Fade-in delay in tenths of a second
    #[props(default)]
    delay: u32,
    children: Element,
) -> Element {
    let delay_secs = delay as f32 / 10.0;

    rsx! {
        div {
            class: "card",
            style: "animation-delay: {delay_secs}s;",

            // Watermark glyph
            div { class: "card-watermark",
                Icon { glyph, size: 48 }
            }

            h3 { class: "card-title",
                Icon { glyph, size: 20 }
                "{title}"
            }
            div { class: "card-body", {children} }

            div { class: "corner-tl" }
            div { class: "corner-br" }
        }
    }
}
