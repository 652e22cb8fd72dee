//! Page shell state
//!
//! The shell owns exactly two pieces of state: the current view and whether
//! the collapsed mobile menu is open. Children never write to it; they send
//! requests that end up in [`ShellState::navigate`] or
//! [`ShellState::toggle_menu`].

use crate::View;

/// State owned by the page shell
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShellState {
    view: View,
    menu_open: bool,
    epoch: u64,
}

impl ShellState {
    /// Fresh shell: home view, menu closed
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently committed view
    pub fn view(&self) -> View {
        self.view
    }

    /// Whether the collapsed menu is open
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Number of committed navigations.
    ///
    /// Bumped on every call to [`navigate`](Self::navigate), including
    /// navigations to the view that is already active, so effects keyed on
    /// it (the scroll reset) fire once per navigation.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Commit a navigation request.
    ///
    /// Unknown identifiers resolve to [`View::Home`]. The menu is always
    /// closed afterwards, regardless of its previous state.
    pub fn navigate(&mut self, id: &str) {
        self.navigate_to(View::resolve(id));
    }

    /// Commit a navigation to an already-resolved view
    pub fn navigate_to(&mut self, view: View) {
        self.view = view;
        self.menu_open = false;
        self.epoch = self.epoch.wrapping_add(1);
        tracing::debug!(view = %view, epoch = self.epoch, "Navigation committed");
    }

    /// Flip the collapsed menu
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let shell = ShellState::new();
        assert_eq!(shell.view(), View::Home);
        assert!(!shell.menu_open());
        assert_eq!(shell.epoch(), 0);
    }

    #[test]
    fn test_navigate_sets_view() {
        let mut shell = ShellState::new();
        for view in View::ALL {
            shell.navigate(view.id());
            assert_eq!(shell.view(), view);
        }
    }

    #[test]
    fn test_unknown_navigation_matches_home() {
        let mut unknown = ShellState::new();
        unknown.navigate("schedule");
        unknown.navigate("nonexistent-id");

        let mut home = ShellState::new();
        home.navigate("schedule");
        home.navigate("home");

        assert_eq!(unknown, home);
    }

    #[test]
    fn test_navigate_always_closes_menu() {
        for target in ["home", "schedule", "location", "mentors", "register"] {
            let mut shell = ShellState::new();
            shell.toggle_menu();
            assert!(shell.menu_open());
            shell.navigate(target);
            assert!(!shell.menu_open(), "menu left open after navigating to {target}");

            // Closed menu stays closed
            shell.navigate(target);
            assert!(!shell.menu_open());
        }
    }

    #[test]
    fn test_toggle_menu_is_involution() {
        let mut shell = ShellState::new();
        let before = shell.clone();
        shell.toggle_menu();
        shell.toggle_menu();
        assert_eq!(shell, before);

        shell.toggle_menu();
        let open = shell.clone();
        shell.toggle_menu();
        shell.toggle_menu();
        assert_eq!(shell, open);
    }

    #[test]
    fn test_toggle_does_not_bump_epoch() {
        let mut shell = ShellState::new();
        shell.toggle_menu();
        assert_eq!(shell.epoch(), 0);
    }

    #[test]
    fn test_same_view_navigation_bumps_epoch() {
        let mut shell = ShellState::new();
        shell.navigate("home");
        shell.navigate("home");
        assert_eq!(shell.view(), View::Home);
        assert_eq!(shell.epoch(), 2);
    }

    #[test]
    fn test_collapsed_menu_selection() {
        let mut shell = ShellState::new();
        shell.toggle_menu();
        shell.navigate("location");
        assert_eq!(shell.view(), View::Location);
        assert!(!shell.menu_open());
    }
}
