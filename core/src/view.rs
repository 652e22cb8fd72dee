//! The closed set of top-level views

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// A top-level page of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Home,
    Schedule,
    Location,
    Mentors,
}

impl View {
    /// Every registered view, in navigation order
    pub const ALL: [View; 4] = [View::Home, View::Schedule, View::Location, View::Mentors];

    /// Stable identifier used in navigation requests
    pub fn id(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Schedule => "schedule",
            View::Location => "location",
            View::Mentors => "mentors",
        }
    }

    /// Resolve an identifier, falling back to [`View::Home`] when it is not
    /// registered. Never fails.
    pub fn resolve(id: &str) -> View {
        match id.parse() {
            Ok(view) => view,
            Err(_) => {
                tracing::debug!(view_id = %id, "Unknown view, falling back to home");
                View::default()
            }
        }
    }
}

impl FromStr for View {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        View::ALL
            .into_iter()
            .find(|view| view.id() == s)
            .ok_or_else(|| Error::UnknownView(s.to_string()))
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Entry in the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub view: View,
    pub label: &'static str,
}

/// Navigation targets in display order
pub static NAV_LINKS: [NavLink; 4] = [
    NavLink {
        view: View::Home,
        label: "Inicio",
    },
    NavLink {
        view: View::Schedule,
        label: "Cronograma",
    },
    NavLink {
        view: View::Location,
        label: "Ubicación",
    },
    NavLink {
        view: View::Mentors,
        label: "Mentores",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_ids_round_trip() {
        for view in View::ALL {
            assert_eq!(view.id().parse::<View>().unwrap(), view);
            assert_eq!(View::resolve(view.id()), view);
        }
    }

    #[test]
    fn test_unknown_id_is_rejected_strictly() {
        let err = "register".parse::<View>().unwrap_err();
        assert!(matches!(err, Error::UnknownView(ref id) if id == "register"));
        assert_eq!(err.to_string(), "Unknown view: register");
    }

    #[test]
    fn test_unknown_id_resolves_home() {
        assert_eq!(View::resolve("nonexistent-id"), View::Home);
        assert_eq!(View::resolve(""), View::Home);
        assert_eq!(View::resolve("Schedule"), View::Home); // Case-sensitive
    }

    #[test]
    fn test_nav_links_cover_every_view_once() {
        let views: Vec<View> = NAV_LINKS.iter().map(|link| link.view).collect();
        assert_eq!(views, View::ALL.to_vec());
        assert_eq!(NAV_LINKS[2].label, "Ubicación");
    }
}
