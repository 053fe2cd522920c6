//! # Middleware
//!
//! Axum middleware shared across routes.

// region: --- Modules
pub mod mw_req_stamp;
// endregion: --- Modules

// region: --- Re-exports
pub use mw_req_stamp::{stamp_req, RequestStamp};
// endregion: --- Re-exports
