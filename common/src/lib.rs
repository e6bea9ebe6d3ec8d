//! Shared building blocks for the material-properties workspace.
//!
//! ## Architecture
//!
//! - **common** (this crate): error locations, HTTP status helpers
//! - **models**: pure data (operations, requests, responses, timings)
//! - **client-core**: wire codec, channels and the dispatcher
//! - **matprops**: command-line host wiring everything together

pub mod error;
pub mod http_status;


pub use error::error_location::ErrorLocation;
pub use http_status::HttpStatusCode;
