//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Display-frame callbacks
//! - Fixed wall-clock intervals

pub mod scheduler;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use scheduler::{FrameHandle, IntervalHandle, ManualScheduler, Scheduler};
#[cfg(target_arch = "wasm32")]
pub use web::WebScheduler;
