mod builder;

pub use builder::ComputationRequestBuilder;

use crate::Operation;

use serde::{Deserialize, Serialize};

/// A request for one computation: which operation, which closed-form model
/// and the operation's double parameters in declared order.
///
/// [`ComputationRequest::new`] does not check the parameter count; the wire
/// codec rejects a mismatched arity at encode time. The typed constructors
/// and [`ComputationRequestBuilder`] always produce a well-formed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputationRequest {
    operation: Operation,
    model: u8,
    parameters: Vec<f64>,
}

impl ComputationRequest {
    pub fn new(operation: Operation, model: u8, parameters: Vec<f64>) -> Self {
        Self {
            operation,
            model,
            parameters,
        }
    }

    pub fn builder(operation: Operation) -> ComputationRequestBuilder {
        ComputationRequestBuilder::new(operation)
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Model selector (1: rule of mixtures, 2: Vanin-type model).
    pub fn model(&self) -> u8 {
        self.model
    }

    pub fn parameters(&self) -> &[f64] {
        &self.parameters
    }

    pub fn has_declared_arity(&self) -> bool {
        self.parameters.len() == self.operation.arity()
    }

    /// Look up a parameter by its command-surface name.
    pub fn parameter(&self, name: &str) -> Option<f64> {
        self.operation
            .parameter_index(name)
            .and_then(|index| self.parameters.get(index).copied())
    }

    /// Parameters paired with their names, in wire order.
    pub fn named_parameters(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.operation
            .parameters()
            .iter()
            .copied()
            .zip(self.parameters.iter().copied())
    }

    pub fn elastic_modules_for_unidirectional_composite(
        model: u8,
        fiber_content: f64,
        e_for_fiber: f64,
        nu_for_fiber: f64,
        e_for_matrix: f64,
        nu_for_matrix: f64,
    ) -> Self {
        Self::new(
            Operation::ElasticModulesForUnidirectionalComposite,
            model,
            vec![fiber_content, e_for_fiber, nu_for_fiber, e_for_matrix, nu_for_matrix],
        )
    }

    pub fn thermal_conductivity_for_unidirectional_composite(
        model: u8,
        fiber_content: f64,
        k_for_fiber: f64,
        k_for_matrix: f64,
    ) -> Self {
        Self::new(
            Operation::ThermalConductivityForUnidirectionalComposite,
            model,
            vec![fiber_content, k_for_fiber, k_for_matrix],
        )
    }

    pub fn elastic_modules_for_honeycomb(
        model: u8,
        l_cell_side_size: f64,
        h_cell_side_size: f64,
        wall_thickness: f64,
        angle: f64,
        e_for_honeycomb: f64,
        nu_for_honeycomb: f64,
    ) -> Self {
        Self::new(
            Operation::ElasticModulesForHoneycomb,
            model,
            vec![
                l_cell_side_size,
                h_cell_side_size,
                wall_thickness,
                angle,
                e_for_honeycomb,
                nu_for_honeycomb,
            ],
        )
    }

    pub fn thermal_expansion_for_honeycomb(
        model: u8,
        l_cell_side_size: f64,
        h_cell_side_size: f64,
        wall_thickness: f64,
        angle: f64,
        alpha_for_honeycomb: f64,
    ) -> Self {
        Self::new(
            Operation::ThermalExpansionForHoneycomb,
            model,
            vec![
                l_cell_side_size,
                h_cell_side_size,
                wall_thickness,
                angle,
                alpha_for_honeycomb,
            ],
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn thermal_expansion_for_unidirectional_composite(
        model: u8,
        fiber_content: f64,
        e_for_fiber: f64,
        nu_for_fiber: f64,
        alpha_for_fiber: f64,
        e_for_matrix: f64,
        nu_for_matrix: f64,
        alpha_for_matrix: f64,
    ) -> Self {
        Self::new(
            Operation::ThermalExpansionForUnidirectionalComposite,
            model,
            vec![
                fiber_content,
                e_for_fiber,
                nu_for_fiber,
                alpha_for_fiber,
                e_for_matrix,
                nu_for_matrix,
                alpha_for_matrix,
            ],
        )
    }
}
