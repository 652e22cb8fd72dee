//! Top-level views

pub mod home;
pub mod location;
pub mod mentors;
pub mod schedule;

pub use home::HomePage;
pub use location::LocationPage;
pub use mentors::MentorsPage;
pub use schedule::SchedulePage;
