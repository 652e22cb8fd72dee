//! Core library for the GGJ Cochabamba site
//!
//! This crate holds everything that does not depend on a UI framework:
//! the closed set of views and their fallback resolution, the page shell
//! state machine, and the static content rendered by each view.

pub mod content;
pub mod error;
pub mod shell;
pub mod view;

// Re-exports
pub use content::{
    EntryKind, Mentor, Pillar, ScheduleEntry, Venue, MENTORS, PILLARS, SCHEDULE, VENUE,
};
pub use error::{Error, Result};
pub use shell::ShellState;
pub use view::{NavLink, View, NAV_LINKS};
