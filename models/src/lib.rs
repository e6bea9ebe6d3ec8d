//! Domain models for material-properties computations.
//!
//! Pure data passed between the wire codec, the channels and the host:
//! the operation catalogue, requests, responses and timing results.
//! Nothing in here performs I/O.

pub mod benchmark;
pub mod error;
pub mod operation;
pub mod request;
pub mod response;

#[cfg(test)]
mod tests;

pub use benchmark::{BenchmarkedResult, Elapsed};
pub use error::ModelError;
pub use operation::{
    DOUBLE_SIZE, HEADER_SIZE, MODEL_SELECTOR_PARAMETER, Operation, OperationSpec,
};
pub use request::{ComputationRequest, ComputationRequestBuilder};
pub use response::{ComputationResponse, ElasticModules, ThermalConductivity, ThermalExpansion};
