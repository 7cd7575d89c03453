//! Lead scoring, ranking, suggestion, and feedback pipeline for outbound sales outreach.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
