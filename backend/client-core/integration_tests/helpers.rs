use models::{ComputationRequest, Operation};

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockBuilder, MockServer};

pub const THERMAL_CONDUCTIVITY_ROUTE: &str =
    "/compute/thermal_conductivity_for_unidirectional_composite";

pub fn thermal_conductivity_request() -> ComputationRequest {
    ComputationRequest::thermal_conductivity_for_unidirectional_composite(1, 0.2, 100.0, 5.0)
}

/// Response body in host byte order, as the engine answers a host-tagged request.
pub fn engine_body(values: &[f64]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_ne_bytes()).collect()
}

/// POST matcher for one operation's compute route.
pub fn compute_route(operation: Operation) -> MockBuilder {
    Mock::given(method("POST"))
        .and(path(format!("/compute/{}", operation.name())))
        .and(header("content-type", operation.spec().request_content_type))
}

pub async fn start_engine() -> MockServer {
    MockServer::start().await
}
