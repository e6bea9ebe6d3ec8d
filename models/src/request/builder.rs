use crate::{ComputationRequest, ModelError, Operation};

/// Builder for creating validated requests from named parameters.
///
/// Parameters may be supplied in any order; `build()` places them in the
/// operation's wire order and fails on unknown, duplicate or missing names.
#[derive(Debug)]
pub struct ComputationRequestBuilder {
    operation: Operation,
    model: Option<u8>,
    parameters: Vec<(String, f64)>,
}

impl ComputationRequestBuilder {
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            model: None,
            parameters: Vec::with_capacity(operation.arity()),
        }
    }

    pub fn with_model(mut self, model: u8) -> Self {
        self.model = Some(model);
        self
    }

    pub fn with_parameter(mut self, name: impl Into<String>, value: f64) -> Self {
        self.parameters.push((name.into(), value));
        self
    }

    /// Build the request with validation.
    #[track_caller]
    pub fn build(self) -> Result<ComputationRequest, ModelError> {
        let operation = self.operation;

        let model = self
            .model
            .ok_or_else(|| ModelError::validation("Model selector is required"))?;

        if model == 0 {
            return Err(ModelError::validation("Model selector must be non-zero"));
        }

        let mut slots: Vec<Option<f64>> = vec![None; operation.arity()];

        for (name, value) in self.parameters {
            let index = operation.parameter_index(&name).ok_or_else(|| {
                ModelError::validation(format!(
                    "Unknown parameter '{name}' for {operation} (expected one of: {})",
                    operation.parameters().join(", ")
                ))
            })?;

            if slots[index].replace(value).is_some() {
                return Err(ModelError::validation(format!(
                    "Parameter '{name}' given more than once"
                )));
            }
        }

        let missing: Vec<&str> = operation
            .parameters()
            .iter()
            .zip(&slots)
            .filter(|(_, slot)| slot.is_none())
            .map(|(name, _)| *name)
            .collect();

        if !missing.is_empty() {
            return Err(ModelError::validation(format!(
                "Missing parameters for {operation}: {}",
                missing.join(", ")
            )));
        }

        let parameters = slots.into_iter().flatten().collect();

        Ok(ComputationRequest::new(operation, model, parameters))
    }
}
