//! Core library for the `weather-now` CLI.
//!
//! This crate defines:
//! - Settings & feature-flag resolution from the environment
//! - The normalized current-conditions model
//! - Weather sources (mock fixture, custom backend, Open-Meteo)
//! - The search view-state machine and unit presentation helpers
//!
//! It is used by `weather-now-cli`, but can also be reused by other binaries or services.

pub mod codes;
pub mod error;
pub mod model;
pub mod search;
pub mod settings;
pub mod source;
pub mod units;

pub use codes::Condition;
pub use error::FetchError;
pub use model::{WeatherQuery, WeatherReport};
pub use search::{SearchSession, Ticket, ViewState};
pub use settings::{FlagValue, Settings};
pub use source::{WeatherClient, WeatherSource};
pub use units::Unit;
