//! Client-side transport core for material-properties computations.
//!
//! Requests are encoded into fixed-size binary messages, sent through the
//! local command channel or the remote HTTP channel, and decoded back into a
//! uniform [`models::BenchmarkedResult`]. The [`dispatcher::Dispatcher`] owns
//! the "local first, then remote" policy.

pub mod channel;
pub mod codec;
pub mod config;
pub mod dispatcher;
pub mod endianness;
pub mod error;

#[cfg(test)]
mod tests;

use std::time::Duration;

pub use channel::{Channel, ChannelKind, CommandRegistry, CommandSurface, LocalChannel, RemoteChannel};
pub use codec::{WireCodec, WireMessage};
pub use config::ComputeConfig;
pub use dispatcher::Dispatcher;
pub use endianness::{Endianness, HostByteOrder, host_byte_order};
pub use error::{ChannelError, CodecError, ComputeFailed, ConfigError, CoreError, FailureKind};

pub const ENGINE_HOSTNAME: &str = "localhost";
pub const ENGINE_PORT: u16 = 8080;
pub const DEFAULT_BASE_URL: &str =
    const_format::concatcp!("http://", ENGINE_HOSTNAME, ":", ENGINE_PORT);
pub const DEFAULT_REMOTE_TIMEOUT: Duration = Duration::from_secs(10);
