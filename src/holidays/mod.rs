//! Holiday calendar and its configuration

mod calendar;
pub mod config;

pub use calendar::*;
pub use config::HolidayConfig;
