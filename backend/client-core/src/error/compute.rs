use crate::channel::ChannelKind;
use crate::error::{ChannelError, FailureKind};

use common::ErrorLocation;

use thiserror::Error as ThisError;

/// Outcome of a dispatch where the answering channel failed.
///
/// `kind` and `channel` stay inspectable; `source` keeps the full error.
#[derive(Debug, ThisError)]
#[error("Compute Error: {kind} on {channel} channel: {source} {location}")]
pub struct ComputeFailed {
    pub kind: FailureKind,
    pub channel: ChannelKind,
    #[source]
    pub source: ChannelError,
    pub location: ErrorLocation,
}

impl ComputeFailed {
    #[track_caller]
    pub fn new(channel: ChannelKind, source: ChannelError) -> Self {
        Self {
            kind: source.kind(),
            channel,
            source,
            location: ErrorLocation::caller(),
        }
    }
}
