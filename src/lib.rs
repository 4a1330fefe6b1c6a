//! Shared plumbing for the catalog and inventory health services.
//!
//! Each binary under `src/bin/` picks a [`config::ServiceConfig`] and hands
//! it to [`app::run`]; everything else lives here.

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod telemetry;

pub use config::ServiceConfig;
pub use error::{ServiceError, ServiceResult};
