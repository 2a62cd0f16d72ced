//! View controllers
//!
//! Explicit state machines for the calendar, compatibility and assistant
//! views. Each view owns its state exclusively and talks to the model only
//! through an `Oracle`.
//!
//! The calendar and compatibility views hand out a ticket per request and
//! apply only the result of the latest one, so an overtaken response never
//! overwrites newer state. The assistant view refuses a second message while
//! a reply is being composed.

pub mod assistant;
pub mod calendar;
pub mod compatibility;

pub use assistant::{AssistantView, PendingReply, SendRejected, ASSISTANT_GREETING};
pub use calendar::{CalendarState, CalendarView, DayNotifier, LogNotifier, LunarTicket};
pub use compatibility::{CheckTicket, CompatibilityState, CompatibilityView};
