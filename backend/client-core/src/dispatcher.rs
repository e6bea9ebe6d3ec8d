//! "Local first, then remote" policy.

use crate::channel::{Channel, ChannelKind, CommandRegistry, LocalChannel, RemoteChannel};
use crate::config::ComputeConfig;
use crate::error::{ChannelError, ComputeFailed};

use models::{BenchmarkedResult, ComputationRequest, ComputationResponse, Elapsed};

use log::{debug, info, warn};
use uuid::Uuid;

/// Routes each computation to exactly one channel.
///
/// The local channel is tried first. Only a `ChannelUnavailable` answer
/// sends the request to the remote channel, once. Any other outcome of the
/// local channel is final.
#[derive(Debug)]
pub struct Dispatcher<L = LocalChannel<CommandRegistry>, R = RemoteChannel> {
    local: L,
    remote: R,
}

impl<L: Channel, R: Channel> Dispatcher<L, R> {
    pub fn new(local: L, remote: R) -> Self {
        Self { local, remote }
    }

    pub fn local(&self) -> &L {
        &self.local
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    /// Run one computation.
    ///
    /// # Errors
    ///
    /// Returns [`ComputeFailed`] carrying the failure kind and the channel
    /// whose outcome was final.
    pub async fn compute(
        &self,
        request: &ComputationRequest,
    ) -> Result<BenchmarkedResult<ComputationResponse>, ComputeFailed> {
        let call_id = Uuid::new_v4();
        let operation = request.operation();

        debug!("[{call_id}] {operation} (model {}) via {}", request.model(), self.local.kind());

        match self.local.invoke(request).await {
            Ok(result) => {
                info!("[{call_id}] {operation} answered by {} in {}", self.local.kind(), result.elapsed);
                return Ok(result);
            }
            Err(ChannelError::Unavailable { .. }) => {
                debug!("[{call_id}] {} channel unavailable, falling back to {}", self.local.kind(), self.remote.kind());
            }
            Err(error) => {
                warn!("[{call_id}] {operation} failed on {}: {error}", self.local.kind());
                return Err(ComputeFailed::new(self.local.kind(), error));
            }
        }

        match self.remote.invoke(request).await {
            Ok(mut result) => {
                result.elapsed = Elapsed::ZERO;
                info!("[{call_id}] {operation} answered by {}", self.remote.kind());
                Ok(result)
            }
            Err(error) => {
                warn!("[{call_id}] {operation} failed on {}: {error}", self.remote.kind());
                Err(ComputeFailed::new(self.remote.kind(), error))
            }
        }
    }
}

impl Dispatcher {
    /// Dispatcher whose remote channel follows `config`.
    pub fn from_config(
        config: &ComputeConfig,
        local: LocalChannel<CommandRegistry>,
    ) -> Result<Self, ChannelError> {
        Ok(Self::new(local, RemoteChannel::from_config(&config.remote)?))
    }

    /// Dispatcher for hosts without an in-process engine.
    pub fn remote_only(config: &ComputeConfig) -> Result<Self, ChannelError> {
        Self::from_config(config, LocalChannel::unbound())
    }
}
