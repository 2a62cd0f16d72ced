//! Lunar Almanac Backend Library
//!
//! Contract layer between the lunar calendar, compatibility and assistant
//! views and a hosted generative model. The main binary is in `src/main.rs`.

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod gemini;
pub mod oracle;
pub mod views;
