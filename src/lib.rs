//! Minimal sidecar HTTP service.
//!
//! Runs next to a primary service and answers two fixed JSON routes:
//!
//! ```text
//! GET /api/v1/health-check  ->  200 {"code":0,"message":"success"}
//! GET /api/v1/test          ->  200 {"code":0,"message":"test"}
//! ```
//!
//! The listener binds `0.0.0.0:8060`. A bind failure is fatal.
//!
//! # Modules
//!
//! - [`api`]: Route registration and handlers
//! - [`config`]: Fixed listen address and logging settings
//! - [`error`]: Unified error types
//! - [`server`]: Listener binding and the serve loop
//! - [`utils`]: Shutdown signal handling

pub mod api;
pub mod config;
pub mod error;
pub mod server;
pub mod utils;

pub use config::Config;
pub use error::{Result, SidecarError};
