use client_core::{ChannelKind, ComputeFailed, FailureKind};
use common::ErrorLocation;

use std::panic::Location;

use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the command-line host.
///
/// With `--json` the host prints these as `{"type": ..., "data": {...}}` on stdout.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum MatpropsError {
    /// Error from this App (logger, directories)
    #[error("Matprops Error: {message} {location}")]
    Matprops {
        message: String,
        location: ErrorLocation,
    },

    /// Configuration could not be loaded or is invalid
    #[error("Config Error: {message} {location}")]
    Config {
        message: String,
        location: ErrorLocation,
    },

    /// Command-line input does not form a valid request
    #[error("Invalid Request Error: {message} {location}")]
    InvalidRequest {
        message: String,
        location: ErrorLocation,
    },

    /// The answering channel failed
    #[error("Compute Error: {kind} on {channel} channel: {message} {location}")]
    Compute {
        kind: FailureKind,
        channel: ChannelKind,
        message: String,
        location: ErrorLocation,
    },
}

impl MatpropsError {
    /// Failure kind of a computation, if this error came from one.
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            MatpropsError::Compute { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

impl From<ComputeFailed> for MatpropsError {
    #[track_caller]
    fn from(failed: ComputeFailed) -> Self {
        MatpropsError::Compute {
            kind: failed.kind,
            channel: failed.channel,
            message: failed.source.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
