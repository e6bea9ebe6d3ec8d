use crate::DEFAULT_REMOTE_TIMEOUT;
use crate::channel::{Channel, ChannelKind, ChannelResult};
use crate::codec::WireCodec;
use crate::config::RemoteConfig;
use crate::error::ChannelError;

use common::{ErrorLocation, HttpStatusCode};
use models::{BenchmarkedResult, ComputationRequest, Operation};

use std::time::Duration;

use log::debug;
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use url::Url;

const COMPUTE_ENDPOINT: &str = "compute";

/// Channel that posts wire messages to a computation engine over HTTP.
///
/// One attempt per call. Remote results carry a zero elapsed time.
#[derive(Debug, Clone)]
pub struct RemoteChannel {
    base_url: Url,
    client: Client,
    codec: WireCodec,
}

impl RemoteChannel {
    pub fn new(base_url: &str) -> Result<Self, ChannelError> {
        Self::with_timeout(base_url, DEFAULT_REMOTE_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ChannelError> {
        let base_url = Url::parse(base_url)?;
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            client,
            codec: WireCodec::native(),
        })
    }

    pub fn from_config(config: &RemoteConfig) -> Result<Self, ChannelError> {
        Self::with_timeout(&config.base_url, config.timeout())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base_url}/compute/{operation}`, keeping any path prefix and query of the base.
    #[track_caller]
    pub fn endpoint(&self, operation: Operation) -> Result<Url, ChannelError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| ChannelError::Network {
                message: format!("Invalid engine URL: {} cannot be a base", self.base_url),
                status: None,
                location: ErrorLocation::caller(),
            })?;
            segments
                .pop_if_empty()
                .push(COMPUTE_ENDPOINT)
                .push(operation.name());
        }
        Ok(url)
    }
}

impl Channel for RemoteChannel {
    fn kind(&self) -> ChannelKind {
        ChannelKind::Remote
    }

    async fn invoke(&self, request: &ComputationRequest) -> ChannelResult {
        let operation = request.operation();
        let message = self.codec.encode(request)?;
        let url = self.endpoint(operation)?;
        let spec = operation.spec();

        debug!("POST {url} ({} bytes)", message.len());

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, spec.request_content_type)
            .header(ACCEPT, spec.response_content_type)
            .body(message.into_bytes())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChannelError::Network {
                message: format!(
                    "HTTP {} - {}",
                    status.as_u16(),
                    response.text().await.unwrap_or_default()
                ),
                status: Some(HttpStatusCode(status.as_u16())),
                location: ErrorLocation::caller(),
            });
        }

        let body = response.bytes().await?;
        if body.is_empty() {
            return Err(ChannelError::EmptyResponse {
                operation,
                location: ErrorLocation::caller(),
            });
        }

        let decoded = self.codec.decode(&body, operation)?;

        Ok(BenchmarkedResult::untimed(decoded))
    }
}
