//! The catalogue of computations the engine understands.
//!
//! Every operation is described by one [`OperationSpec`] row. The codec, the
//! local command surface and the remote endpoint all derive their layout from
//! this table, so field order lives in exactly one place.

use crate::ModelError;

use common::ErrorLocation;

use std::fmt::{Display, Formatter, Result as FormatResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Name of the model selector argument on the local command surface.
pub const MODEL_SELECTOR_PARAMETER: &str = "numberOfModel";

/// Bytes preceding the first double: endianness tag, model selector, padding.
pub const HEADER_SIZE: usize = 8;

pub const DOUBLE_SIZE: usize = size_of::<f64>();

const ELASTIC_MODULES_FIELDS: &[&str] = &[
    "E1", "E2", "E3", "nu12", "nu13", "nu23", "G12", "G13", "G23",
];
const THERMAL_CONDUCTIVITY_FIELDS: &[&str] = &["K1", "K2", "K3"];
const THERMAL_EXPANSION_FIELDS: &[&str] = &["alpha1", "alpha2", "alpha3"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    ElasticModulesForUnidirectionalComposite,
    ThermalConductivityForUnidirectionalComposite,
    ElasticModulesForHoneycomb,
    ThermalExpansionForHoneycomb,
    ThermalExpansionForUnidirectionalComposite,
}

/// Static description of one operation's schema.
#[derive(Debug)]
pub struct OperationSpec {
    /// Symbolic name used for the local command and the `/compute/{name}` route.
    pub name: &'static str,
    /// Double parameters in wire order. The model selector is not listed.
    pub parameters: &'static [&'static str],
    /// Labels of the response doubles in wire order.
    pub response_fields: &'static [&'static str],
    pub request_content_type: &'static str,
    pub response_content_type: &'static str,
}

const ELASTIC_MODULES_FOR_UNIDIRECTIONAL_COMPOSITE: OperationSpec = OperationSpec {
    name: "elastic_modules_for_unidirectional_composite",
    parameters: &[
        "fiberContent",
        "eForFiber",
        "nuForFiber",
        "eForMatrix",
        "nuForMatrix",
    ],
    response_fields: ELASTIC_MODULES_FIELDS,
    request_content_type: "application/x.elastic-modules-for-unidirectional-composite-args-message",
    response_content_type:
        "application/x.elastic-modules-for-unidirectional-composite-response-message",
};

const THERMAL_CONDUCTIVITY_FOR_UNIDIRECTIONAL_COMPOSITE: OperationSpec = OperationSpec {
    name: "thermal_conductivity_for_unidirectional_composite",
    parameters: &["fiberContent", "kForFiber", "kForMatrix"],
    response_fields: THERMAL_CONDUCTIVITY_FIELDS,
    request_content_type:
        "application/x.thermal-conductivity-for-unidirectional-composite-args-message",
    response_content_type:
        "application/x.thermal-conductivity-for-unidirectional-composite-response-message",
};

const ELASTIC_MODULES_FOR_HONEYCOMB: OperationSpec = OperationSpec {
    name: "elastic_modules_for_honeycomb",
    parameters: &[
        "lCellSideSize",
        "hCellSideSize",
        "wallThickness",
        "angle",
        "eForHoneycomb",
        "nuForHoneycomb",
    ],
    response_fields: ELASTIC_MODULES_FIELDS,
    request_content_type: "application/x.elastic-modules-for-honeycomb-args-message",
    response_content_type: "application/x.elastic-modules-for-honeycomb-response-message",
};

const THERMAL_EXPANSION_FOR_HONEYCOMB: OperationSpec = OperationSpec {
    name: "thermal_expansion_for_honeycomb",
    parameters: &[
        "lCellSideSize",
        "hCellSideSize",
        "wallThickness",
        "angle",
        "alphaForHoneycomb",
    ],
    response_fields: THERMAL_EXPANSION_FIELDS,
    request_content_type: "application/x.thermal-expansion-for-honeycomb-args-message",
    response_content_type: "application/x.thermal-expansion-for-honeycomb-response-message",
};

const THERMAL_EXPANSION_FOR_UNIDIRECTIONAL_COMPOSITE: OperationSpec = OperationSpec {
    name: "thermal_expansion_for_unidirectional_composite",
    parameters: &[
        "fiberContent",
        "eForFiber",
        "nuForFiber",
        "alphaForFiber",
        "eForMatrix",
        "nuForMatrix",
        "alphaForMatrix",
    ],
    response_fields: THERMAL_EXPANSION_FIELDS,
    request_content_type:
        "application/x.thermal-expansion-for-unidirectional-composite-args-message",
    response_content_type:
        "application/x.thermal-expansion-for-unidirectional-composite-response-message",
};

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::ElasticModulesForUnidirectionalComposite,
        Operation::ThermalConductivityForUnidirectionalComposite,
        Operation::ElasticModulesForHoneycomb,
        Operation::ThermalExpansionForHoneycomb,
        Operation::ThermalExpansionForUnidirectionalComposite,
    ];

    pub const fn spec(self) -> &'static OperationSpec {
        match self {
            Operation::ElasticModulesForUnidirectionalComposite => {
                &ELASTIC_MODULES_FOR_UNIDIRECTIONAL_COMPOSITE
            }
            Operation::ThermalConductivityForUnidirectionalComposite => {
                &THERMAL_CONDUCTIVITY_FOR_UNIDIRECTIONAL_COMPOSITE
            }
            Operation::ElasticModulesForHoneycomb => &ELASTIC_MODULES_FOR_HONEYCOMB,
            Operation::ThermalExpansionForHoneycomb => &THERMAL_EXPANSION_FOR_HONEYCOMB,
            Operation::ThermalExpansionForUnidirectionalComposite => {
                &THERMAL_EXPANSION_FOR_UNIDIRECTIONAL_COMPOSITE
            }
        }
    }

    pub const fn name(self) -> &'static str {
        self.spec().name
    }

    pub const fn parameters(self) -> &'static [&'static str] {
        self.spec().parameters
    }

    /// Number of double parameters a request must carry.
    pub const fn arity(self) -> usize {
        self.spec().parameters.len()
    }

    /// Exact byte length of the request message.
    pub const fn request_size(self) -> usize {
        HEADER_SIZE + self.arity() * DOUBLE_SIZE
    }

    pub const fn response_doubles(self) -> usize {
        self.spec().response_fields.len()
    }

    /// Exact byte length of the response body.
    pub const fn response_size(self) -> usize {
        self.response_doubles() * DOUBLE_SIZE
    }

    pub fn parameter_index(self, name: &str) -> Option<usize> {
        self.parameters().iter().position(|p| *p == name)
    }

    /// Layout of the request in Python `struct` notation, e.g. `BBxxxxxxddd`.
    pub fn request_struct_format(self) -> String {
        let mut format = String::from("BB");
        format.push_str(&"x".repeat(HEADER_SIZE - 2));
        format.push_str(&"d".repeat(self.arity()));
        format
    }

    /// Layout of the response in Python `struct` notation, e.g. `ddd`.
    pub fn response_struct_format(self) -> String {
        "d".repeat(self.response_doubles())
    }
}

impl Display for Operation {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        formatter.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = ModelError;

    #[track_caller]
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == name)
            .ok_or_else(|| ModelError::UnknownOperation {
                name: name.to_string(),
                location: ErrorLocation::caller(),
            })
    }
}
