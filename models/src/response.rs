use crate::Operation;

use serde::{Deserialize, Serialize};

/// Doubles returned by the engine for one operation, in wire order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputationResponse {
    operation: Operation,
    values: Vec<f64>,
}

/// Anisotropic elastic constants along axes 1, 2, 3.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ElasticModules {
    pub e1: f64,
    pub e2: f64,
    pub e3: f64,
    pub nu12: f64,
    pub nu13: f64,
    pub nu23: f64,
    pub g12: f64,
    pub g13: f64,
    pub g23: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThermalConductivity {
    pub k1: f64,
    pub k2: f64,
    pub k3: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThermalExpansion {
    pub alpha1: f64,
    pub alpha2: f64,
    pub alpha3: f64,
}

impl ComputationResponse {
    pub fn new(operation: Operation, values: Vec<f64>) -> Self {
        Self { operation, values }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    pub fn has_declared_shape(&self) -> bool {
        self.values.len() == self.operation.response_doubles()
    }

    /// Values paired with their labels (`E1`, `K2`, `alpha3`, ...).
    pub fn labelled(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.operation
            .spec()
            .response_fields
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }

    pub fn as_elastic_modules(&self) -> Option<ElasticModules> {
        match self.operation {
            Operation::ElasticModulesForUnidirectionalComposite
            | Operation::ElasticModulesForHoneycomb => {}
            _ => return None,
        }

        match self.values[..] {
            [e1, e2, e3, nu12, nu13, nu23, g12, g13, g23] => Some(ElasticModules {
                e1,
                e2,
                e3,
                nu12,
                nu13,
                nu23,
                g12,
                g13,
                g23,
            }),
            _ => None,
        }
    }

    pub fn as_thermal_conductivity(&self) -> Option<ThermalConductivity> {
        if self.operation != Operation::ThermalConductivityForUnidirectionalComposite {
            return None;
        }

        match self.values[..] {
            [k1, k2, k3] => Some(ThermalConductivity { k1, k2, k3 }),
            _ => None,
        }
    }

    pub fn as_thermal_expansion(&self) -> Option<ThermalExpansion> {
        match self.operation {
            Operation::ThermalExpansionForHoneycomb
            | Operation::ThermalExpansionForUnidirectionalComposite => {}
            _ => return None,
        }

        match self.values[..] {
            [alpha1, alpha2, alpha3] => Some(ThermalExpansion {
                alpha1,
                alpha2,
                alpha3,
            }),
            _ => None,
        }
    }
}
