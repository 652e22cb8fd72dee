//! Venue page

use dioxus::prelude::*;
use ggjc_core::VENUE;

use crate::components::decorative_action;
use crate::icons::{Glyph, Icon};

#[component]
pub fn LocationPage() -> Element {
    rsx! {
        div { class: "view view-location page page-medium",
            div { class: "location-grid",
                div {
                    h2 { class: "view-heading",
                        Icon { glyph: Glyph::MapPin, class: "accent-purple" }
                        "Ubicación"
                    }
                    div { class: "venue-copy",
                        p {
                            "La GGJ Cochabamba se llevará a cabo en las instalaciones de la "
                            strong { "{VENUE.name}" }
                            "."
                        }
                        div { class: "venue-panel",
                            h4 { class: "font-mono", "// DIRECCIÓN" }
                            p { "{VENUE.address}" }
                            h4 { class: "font-mono", "// AMBIENTES" }
                            ul {
                                for amenity in VENUE.amenities.iter() {
                                    li { key: "{amenity}", "{amenity}" }
                                }
                            }
                        }
                    }
                }

                // Map mock-up, no real map integration
                div { class: "map-mock",
                    div { class: "map-photo" }
                    div { class: "map-pin",
                        Icon { glyph: Glyph::MapPin, size: 64 }
                        button {
                            class: "map-btn",
                            onclick: move |_| decorative_action("google-maps"),
                            "Ver en Google Maps"
                        }
                    }
                }
            }
        }
    }
}
