//! In-process implementation of the command surface.

use crate::channel::number::{self, CommandReturn};
use crate::channel::CommandSurface;

use models::{
    ComputationRequest, ComputationRequestBuilder, Elapsed, MODEL_SELECTOR_PARAMETER, Operation,
};

use std::collections::HashMap;
use std::fmt::{Debug, Formatter, Result as FormatResult};
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use log::trace;
use serde_json::Value;

pub type CommandHandler =
    Arc<dyn Fn(&ComputationRequest) -> Result<Vec<f64>, String> + Send + Sync>;

/// Handlers keyed by operation. The registry parses the structured arguments
/// back into a request and times each handler call.
#[derive(Clone, Default)]
pub struct CommandRegistry {
    handlers: HashMap<Operation, CommandHandler>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the handler for `operation`.
    pub fn register<F>(&mut self, operation: Operation, handler: F)
    where
        F: Fn(&ComputationRequest) -> Result<Vec<f64>, String> + Send + Sync + 'static,
    {
        self.handlers.insert(operation, Arc::new(handler));
    }

    pub fn with_command<F>(mut self, operation: Operation, handler: F) -> Self
    where
        F: Fn(&ComputationRequest) -> Result<Vec<f64>, String> + Send + Sync + 'static,
    {
        self.register(operation, handler);
        self
    }

    pub fn is_registered(&self, operation: Operation) -> bool {
        self.handlers.contains_key(&operation)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    fn resolve(&self, command: &str) -> Result<(Operation, CommandHandler), String> {
        let operation: Operation = command
            .parse()
            .map_err(|_| format!("Command '{command}' not found"))?;

        self.handlers
            .get(&operation)
            .map(|handler| (operation, Arc::clone(handler)))
            .ok_or_else(|| format!("Command '{command}' not found"))
    }
}

impl Debug for CommandRegistry {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        let mut commands: Vec<&str> = self.handlers.keys().map(|op| op.name()).collect();
        commands.sort_unstable();

        formatter
            .debug_struct("CommandRegistry")
            .field("commands", &commands)
            .finish()
    }
}

/// Rebuild a request from the structured command arguments.
///
/// Parameters are JSON numbers or one of the non-finite spellings.
pub fn request_from_args(operation: Operation, args: &Value) -> Result<ComputationRequest, String> {
    let object = args
        .as_object()
        .ok_or_else(|| format!("Arguments for {operation} must be an object"))?;

    let mut builder = ComputationRequestBuilder::new(operation);

    for (name, value) in object {
        if name == MODEL_SELECTOR_PARAMETER {
            let model = value
                .as_u64()
                .and_then(|model| u8::try_from(model).ok())
                .ok_or_else(|| format!("'{MODEL_SELECTOR_PARAMETER}' must fit in a byte"))?;
            builder = builder.with_model(model);
        } else {
            let parameter = number::from_value(value).ok_or_else(|| {
                format!("Parameter '{name}' must be a number, \"NaN\", \"inf\" or \"-inf\"")
            })?;
            builder = builder.with_parameter(name.as_str(), parameter);
        }
    }

    builder.build().map_err(|e| e.to_string())
}

impl CommandSurface for CommandRegistry {
    fn invoke(
        &self,
        command: &str,
        args: Value,
    ) -> impl Future<Output = Result<Value, String>> + Send {
        let resolved = self.resolve(command);

        async move {
            let (operation, handler) = resolved?;
            let request = request_from_args(operation, &args)?;

            let started = Instant::now();
            let values = handler(&request)?;
            let elapsed = Elapsed::from(started.elapsed());

            trace!("Command {operation} answered {} values in {elapsed}", values.len());

            serde_json::to_value(CommandReturn(values, elapsed)).map_err(|e| e.to_string())
        }
    }
}
