//! splash-rs: deterministic splash-page motion engine.
//!
//! This crate provides a Rust-idiomatic, host-stepped rework of the classic
//! landing-page duo: a scroll/reveal controller (navbar collapse, eased
//! anchor scrolling, timed intro fades) and a one-shot 3D scatter chart fed
//! by a CSV dataset. All timing runs on a virtual clock driven by the host.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "remote-data")]
pub mod fetch;

pub use api::{ChartView, ChartViewConfig, PageEngine, PageEngineConfig};
pub use error::{SplashError, SplashResult};
