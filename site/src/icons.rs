//! Line icon glyphs
//!
//! Every glyph is drawn on a 24x24 grid with a 2px round stroke in
//! `currentColor`, so icons pick up the text color of their parent.

use dioxus::prelude::*;

/// Named vector glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Gamepad,
    Code,
    MapPin,
    Calendar,
    Users,
    Zap,
    ChevronRight,
    Terminal,
    Menu,
    X,
}

impl Glyph {
    /// Symbolic name, e.g. `"map-pin"`
    pub fn name(&self) -> &'static str {
        match self {
            Glyph::Gamepad => "gamepad",
            Glyph::Code => "code",
            Glyph::MapPin => "map-pin",
            Glyph::Calendar => "calendar",
            Glyph::Users => "users",
            Glyph::Zap => "zap",
            Glyph::ChevronRight => "chevron-right",
            Glyph::Terminal => "terminal",
            Glyph::Menu => "menu",
            Glyph::X => "x",
        }
    }

    /// SVG path data
    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            Glyph::Gamepad => &[
                "M6 11h4",
                "M8 9v4",
                "M15 12h.01",
                "M18 10h.01",
                "M17.32 5H6.68a4 4 0 0 0-3.978 3.59C2.604 9.416 2 14.456 2 16a3 3 0 0 0 3 3c1 0 1.5-.5 2-1l1.414-1.414A2 2 0 0 1 9.828 16h4.344a2 2 0 0 1 1.414.586L17 18c.5.5 1 1 2 1a3 3 0 0 0 3-3c0-1.545-.604-6.584-.685-7.258A4 4 0 0 0 17.32 5z",
            ],
            Glyph::Code => &["m18 16 4-4-4-4", "m6 8-4 4 4 4", "m14.5 4-5 16"],
            Glyph::MapPin => &[
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z",
                "M15 10a3 3 0 1 1-6 0a3 3 0 0 1 6 0z",
            ],
            Glyph::Calendar => &[
                "M8 2v4",
                "M16 2v4",
                "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "M3 10h18",
            ],
            Glyph::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M13 7a4 4 0 1 1-8 0a4 4 0 0 1 8 0z",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            Glyph::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
            Glyph::ChevronRight => &["m9 18 6-6-6-6"],
            Glyph::Terminal => &["m4 17 6-6-6-6", "M12 19h8"],
            Glyph::Menu => &["M4 12h16", "M4 6h16", "M4 18h16"],
            Glyph::X => &["M18 6 6 18", "m6 6 12 12"],
        }
    }
}

#[component]
pub fn Icon(
    glyph: Glyph,
    #[props(default = 24)] size: u32,
    #[props(default)] class: String,
) -> Element {
    let paths = glyph.paths();

    rsx! {
        svg {
            class: "icon icon-{glyph.name()} {class}",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            for d in paths.iter() {
                path { d: *d }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GLYPHS: [Glyph; 10] = [
        Glyph::Gamepad,
        Glyph::Code,
        Glyph::MapPin,
        Glyph::Calendar,
        Glyph::Users,
        Glyph::Zap,
        Glyph::ChevronRight,
        Glyph::Terminal,
        Glyph::Menu,
        Glyph::X,
    ];

    #[test]
    fn test_every_glyph_has_a_unique_name_and_paths() {
        let mut names: Vec<&str> = GLYPHS.iter().map(Glyph::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), GLYPHS.len());

        for glyph in GLYPHS {
            assert!(!glyph.paths().is_empty(), "{glyph:?} has no paths");
        }
        assert_eq!(Glyph::MapPin.name(), "map-pin");
    }

    #[test]
    fn test_icon_renders_svg() {
        let html = dioxus_ssr::render_element(rsx! {
            Icon { glyph: Glyph::Menu, size: 20 }
        });
        assert!(html.contains("<svg"));
        assert!(html.contains("icon-menu"));
        assert_eq!(html.matches("<path").count(), 3);
    }
}
