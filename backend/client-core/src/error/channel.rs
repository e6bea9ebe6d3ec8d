use crate::channel::ChannelKind;
use crate::error::{CodecError, FailureKind};

use common::{ErrorLocation, HttpStatusCode};
use models::Operation;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ChannelError {
    #[error("Channel Unavailable Error: {channel} channel is not bound {location}")]
    Unavailable {
        channel: ChannelKind,
        location: ErrorLocation,
    },

    #[error("Network Error: {message} {location}")]
    Network {
        message: String,
        status: Option<HttpStatusCode>,
        location: ErrorLocation,
    },

    #[error("Empty Response Error: {operation} returned no body {location}")]
    EmptyResponse {
        operation: Operation,
        location: ErrorLocation,
    },

    #[error("Command Error: {message} {location}")]
    Command {
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl ChannelError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ChannelError::Unavailable { .. } => FailureKind::ChannelUnavailable,
            ChannelError::Network { .. } => FailureKind::NetworkFailure,
            ChannelError::EmptyResponse { .. } => FailureKind::EmptyResponse,
            ChannelError::Command { .. } => FailureKind::CommandFailed,
            ChannelError::Codec(error) => error.kind(),
        }
    }

    /// HTTP status of a rejected remote call, if the engine answered at all.
    pub fn status(&self) -> Option<HttpStatusCode> {
        match self {
            ChannelError::Network { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ChannelError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        let message = if error.is_timeout() {
            format!("Request timed out: {error}")
        } else {
            error.to_string()
        };

        ChannelError::Network {
            message,
            status: error.status().map(|s| HttpStatusCode(s.as_u16())),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<url::ParseError> for ChannelError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        ChannelError::Network {
            message: format!("Invalid engine URL: {error}"),
            status: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for ChannelError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        ChannelError::Command {
            message: format!("Malformed command return value: {error}"),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
