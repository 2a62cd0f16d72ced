//! Domain contracts
//!
//! Data shapes exchanged between the oracle and the views. Every field is
//! required; a failed lookup is represented by a sentinel value, never by
//! a missing field.

pub mod calendar;
pub mod chat;
pub mod compatibility;
pub mod lunar;

pub use calendar::{month_grid, CalendarDay, GRID_CELLS};
pub use chat::{ChatMessage, MessageIdSource, Sender};
pub use compatibility::CompatibilityResult;
pub use lunar::LunarDetails;
