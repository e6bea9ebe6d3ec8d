//! The two transports a computation can take.
//!
//! Both implement [`Channel`] and hand back the same
//! `BenchmarkedResult<ComputationResponse>` shape, so the dispatcher never
//! needs to know which one answered beyond the [`ChannelKind`] tag.

mod local;
mod number;
mod registry;
mod remote;

pub use local::{CommandSurface, LocalChannel, command_args};
pub use number::CommandReturn;
pub use registry::{CommandHandler, CommandRegistry, request_from_args};
pub use remote::RemoteChannel;

use crate::error::ChannelError;

use models::{BenchmarkedResult, ComputationRequest, ComputationResponse};

use std::fmt::{Display, Formatter, Result as FormatResult};
use std::future::Future;

use serde::Serialize;

pub type ChannelResult = Result<BenchmarkedResult<ComputationResponse>, ChannelError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    Local,
    Remote,
}

impl Display for ChannelKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        match self {
            ChannelKind::Local => formatter.write_str("local"),
            ChannelKind::Remote => formatter.write_str("remote"),
        }
    }
}

/// A transport able to run one computation.
pub trait Channel: Send + Sync {
    fn kind(&self) -> ChannelKind;

    fn invoke(&self, request: &ComputationRequest) -> impl Future<Output = ChannelResult> + Send;
}
