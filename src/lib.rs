//! circular-chart-rs: circular charting engine.
//!
//! This crate provides a Rust-idiomatic API and a strict architectural split
//! for circular charts (pie, doughnut, gauge): pure geometry in `core`,
//! chart domain logic in `chart`, a backend-agnostic scene in `render`, and
//! a public facade in `api`.

pub mod api;
pub mod chart;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
