//! Presentation-layer commands
//!
//! Exposes the metrics engine to a UI or CLI shell through plain,
//! serializable request and response types.

mod metrics;

pub use metrics::*;
