use crate::channel::number::{self, CommandReturn};
use crate::channel::{Channel, ChannelKind, ChannelResult};
use crate::error::{ChannelError, CodecError};

use common::ErrorLocation;
use models::{
    BenchmarkedResult, ComputationRequest, ComputationResponse, MODEL_SELECTOR_PARAMETER,
};

use std::future::Future;

use log::debug;
use serde_json::{Map, Value};

/// An in-process command bus, addressed by command name with structured
/// JSON arguments.
///
/// A successful call returns `[values, {"secs": s, "nanos": n}]`. A rejected
/// call returns the surface's message. Non-finite doubles travel as `"NaN"`,
/// `"inf"` and `"-inf"` in both directions.
pub trait CommandSurface: Send + Sync {
    fn invoke(
        &self,
        command: &str,
        args: Value,
    ) -> impl Future<Output = Result<Value, String>> + Send;
}

/// Channel backed by a [`CommandSurface`], when one is bound.
#[derive(Debug)]
pub struct LocalChannel<S> {
    surface: Option<S>,
}

impl<S: CommandSurface> LocalChannel<S> {
    pub fn bound(surface: S) -> Self {
        Self {
            surface: Some(surface),
        }
    }

    /// A channel for environments without an in-process engine.
    /// Every call answers `ChannelUnavailable` without side effects.
    pub fn unbound() -> Self {
        Self { surface: None }
    }

    pub fn is_bound(&self) -> bool {
        self.surface.is_some()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }
}

impl<S: CommandSurface> Default for LocalChannel<S> {
    fn default() -> Self {
        Self::unbound()
    }
}

/// Structured arguments for the command surface: the model selector under
/// `numberOfModel` plus every parameter under its declared name. Non-finite
/// parameters are written as strings.
#[track_caller]
pub fn command_args(request: &ComputationRequest) -> Result<Value, CodecError> {
    let operation = request.operation();

    if !request.has_declared_arity() {
        return Err(CodecError::Encoding {
            operation,
            expected: operation.arity(),
            actual: request.parameters().len(),
            location: ErrorLocation::caller(),
        });
    }

    let mut args = Map::with_capacity(operation.arity() + 1);
    args.insert(MODEL_SELECTOR_PARAMETER.to_string(), Value::from(request.model()));
    for (name, value) in request.named_parameters() {
        args.insert(name.to_string(), number::to_value(value));
    }

    Ok(Value::Object(args))
}

impl<S: CommandSurface> Channel for LocalChannel<S> {
    fn kind(&self) -> ChannelKind {
        ChannelKind::Local
    }

    async fn invoke(&self, request: &ComputationRequest) -> ChannelResult {
        let Some(surface) = self.surface.as_ref() else {
            return Err(ChannelError::Unavailable {
                channel: ChannelKind::Local,
                location: ErrorLocation::caller(),
            });
        };

        let operation = request.operation();
        let args = command_args(request)?;

        debug!("Invoking local command {operation}");

        let returned = surface
            .invoke(operation.name(), args)
            .await
            .map_err(|message| ChannelError::Command {
                message: format!("{operation} rejected: {message}"),
                location: ErrorLocation::caller(),
            })?;

        let CommandReturn(values, elapsed) = serde_json::from_value(returned)?;

        if values.len() != operation.response_doubles() {
            return Err(CodecError::ShapeMismatch {
                operation,
                message: format!(
                    "expected {} values, got {}",
                    operation.response_doubles(),
                    values.len()
                ),
                location: ErrorLocation::caller(),
            }
            .into());
        }

        Ok(BenchmarkedResult::new(
            ComputationResponse::new(operation, values),
            elapsed,
        ))
    }
}
