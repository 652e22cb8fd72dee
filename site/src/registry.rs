//! View registry: maps each view to its render strategy

use dioxus::prelude::*;
use ggjc_core::View;

use crate::pages::{HomePage, LocationPage, MentorsPage, SchedulePage};

/// Handles a view may need to talk back to the shell
#[derive(Clone, Copy)]
pub struct ViewContext {
    pub on_navigate: EventHandler<String>,
}

/// Render strategy for one view
pub type RenderFn = fn(ViewContext) -> Element;

fn render_home(ctx: ViewContext) -> Element {
    rsx! { HomePage { on_navigate: ctx.on_navigate } }
}

fn render_schedule(_: ViewContext) -> Element {
    rsx! { SchedulePage {} }
}

fn render_location(_: ViewContext) -> Element {
    rsx! { LocationPage {} }
}

fn render_mentors(_: ViewContext) -> Element {
    rsx! { MentorsPage {} }
}

/// Lookup table from view to render strategy
pub struct ViewRegistry {
    entries: [(View, RenderFn); 4],
    default: View,
}

/// The site's registry. Adding a view means adding a `View` variant and an
/// entry here.
pub static REGISTRY: ViewRegistry = ViewRegistry {
    entries: [
        (View::Home, render_home),
        (View::Schedule, render_schedule),
        (View::Location, render_location),
        (View::Mentors, render_mentors),
    ],
    default: View::Home,
};

impl ViewRegistry {
    /// Render strategy for a view identifier.
    ///
    /// Unknown identifiers fall back to the default view's strategy, so this
    /// never yields a blank page.
    pub fn lookup(&self, id: &str) -> RenderFn {
        let entry = self
            .entries
            .iter()
            .find(|(view, _)| view.id() == id)
            .or_else(|| {
                tracing::debug!(id, fallback = %self.default, "Unregistered view, using default");
                self.entries.iter().find(|(view, _)| *view == self.default)
            });

        match entry {
            Some((_, render)) => *render,
            None => render_home,
        }
    }

    /// Render the view registered under `id` with the given shell handles
    pub fn render(&self, id: &str, ctx: ViewContext) -> Element {
        (self.lookup(id))(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_view_has_its_own_strategy() {
        let mut strategies: Vec<usize> = View::ALL
            .iter()
            .map(|view| REGISTRY.lookup(view.id()) as usize)
            .collect();
        strategies.sort_unstable();
        strategies.dedup();
        assert_eq!(strategies.len(), View::ALL.len());
    }

    #[test]
    fn test_lookup_unknown_id_uses_default() {
        let home = REGISTRY.lookup(REGISTRY.default.id()) as usize;
        assert_eq!(REGISTRY.default, View::Home);
        assert_eq!(REGISTRY.lookup("nonexistent-id") as usize, home);
        assert_eq!(REGISTRY.lookup("register") as usize, home);
        assert_eq!(REGISTRY.lookup("") as usize, home);
    }

    #[test]
    fn test_lookup_is_exact_match() {
        let schedule = REGISTRY.lookup("schedule") as usize;
        assert_ne!(REGISTRY.lookup("Schedule") as usize, schedule);
        assert_ne!(REGISTRY.lookup(" schedule") as usize, schedule);
    }
}
