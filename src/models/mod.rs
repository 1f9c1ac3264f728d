//! Input data models
//!
//! Calendar date parsing and conversion shared by the metrics engine,
//! the holiday calendar and the command boundary.

pub mod date;

pub use date::*;
