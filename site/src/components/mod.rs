//! Reusable UI components

mod button;
mod card;

pub use button::{ActionButton, decorative_action};
pub use card::Card;
