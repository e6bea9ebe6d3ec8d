pub mod channel;
pub mod codec;
pub mod compute;
pub mod config;

pub use channel::ChannelError;
pub use codec::CodecError;
pub use compute::ComputeFailed;
pub use config::ConfigError;

use serde::Serialize;
use thiserror::Error;

/// Inspectable category of a failed computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FailureKind {
    /// Request parameter count does not match the operation.
    EncodingError,
    /// The channel is not bound in this environment.
    ChannelUnavailable,
    /// Transport failure: connection, DNS, timeout, non-2xx, bad URL.
    NetworkFailure,
    /// The engine answered without a body.
    EmptyResponse,
    /// Response size does not match the operation.
    ShapeMismatch,
    /// Message carries an endianness tag other than 0 or 1.
    InvalidEndianness,
    /// The local command surface rejected the call or returned garbage.
    CommandFailed,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Channel(#[from] ChannelError),

    #[error(transparent)]
    Compute(#[from] ComputeFailed),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
