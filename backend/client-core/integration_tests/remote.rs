use crate::helpers::{
    THERMAL_CONDUCTIVITY_ROUTE, compute_route, engine_body, start_engine,
    thermal_conductivity_request,
};

use client_core::channel::{Channel, RemoteChannel};
use client_core::codec;
use client_core::error::{ChannelError, FailureKind};

use common::HttpStatusCode;
use models::Operation;

use std::time::Duration;

use wiremock::matchers::{body_bytes, header, method, path};
use wiremock::{Mock, ResponseTemplate};

/// **VALUE**: Verifies the full HTTP exchange of the remote channel.
///
/// **WHY THIS MATTERS**: The engine routes by path and reads the body as a packed struct.
/// Path, headers and body must all be exact.
///
/// **BUG THIS CATCHES**: Would catch a wrong route, a JSON body instead of raw bytes,
/// missing content types or a non-zero elapsed on the remote path.
#[tokio::test]
async fn given_engine_answers_when_invoked_then_values_decoded_and_elapsed_zero() {
    // GIVEN: An engine expecting the exact encoded request
    let server = start_engine().await;
    let request = thermal_conductivity_request();
    let expected_body = codec::encode(&request).unwrap().into_bytes();
    let operation = Operation::ThermalConductivityForUnidirectionalComposite;

    Mock::given(method("POST"))
        .and(path(THERMAL_CONDUCTIVITY_ROUTE))
        .and(header("content-type", operation.spec().request_content_type))
        .and(header("accept", operation.spec().response_content_type))
        .and(body_bytes(expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(engine_body(&[12.5, 6.25, 6.25])))
        .expect(1)
        .mount(&server)
        .await;

    let channel = RemoteChannel::new(&server.uri()).unwrap();

    // WHEN: Invoking
    let result = channel.invoke(&request).await.unwrap();

    // THEN: K values decoded, no timing
    let conductivity = result.values.unwrap().as_thermal_conductivity().unwrap();
    assert_eq!((conductivity.k1, conductivity.k2, conductivity.k3), (12.5, 6.25, 6.25));
    assert!(result.elapsed.is_zero());
}

/// **VALUE**: Verifies that an empty body is an error and not a zero-filled result.
///
/// **BUG THIS CATCHES**: Would catch a decoder that pads missing bytes with zeros.
#[tokio::test]
async fn given_empty_body_when_invoked_then_empty_response() {
    // GIVEN: An engine answering 200 with nothing
    let server = start_engine().await;
    compute_route(Operation::ThermalConductivityForUnidirectionalComposite)
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let channel = RemoteChannel::new(&server.uri()).unwrap();

    // WHEN: Invoking
    let err = channel.invoke(&thermal_conductivity_request()).await.unwrap_err();

    // THEN: EmptyResponse
    assert_eq!(err.kind(), FailureKind::EmptyResponse);
    assert!(matches!(err, ChannelError::EmptyResponse { .. }));
}

#[tokio::test]
async fn given_server_error_when_invoked_then_network_failure_with_status() {
    let server = start_engine().await;
    compute_route(Operation::ThermalConductivityForUnidirectionalComposite)
        .respond_with(ResponseTemplate::new(500).set_body_string("model diverged"))
        .expect(1)
        .mount(&server)
        .await;

    let channel = RemoteChannel::new(&server.uri()).unwrap();

    let err = channel.invoke(&thermal_conductivity_request()).await.unwrap_err();

    assert_eq!(err.kind(), FailureKind::NetworkFailure);
    assert_eq!(err.status(), Some(HttpStatusCode(500)));
    assert!(err.to_string().contains("HTTP 500 - model diverged"));
}

#[tokio::test]
async fn given_truncated_body_when_invoked_then_shape_mismatch() {
    let server = start_engine().await;
    compute_route(Operation::ThermalConductivityForUnidirectionalComposite)
        .respond_with(ResponseTemplate::new(200).set_body_bytes(engine_body(&[12.5, 6.25])))
        .mount(&server)
        .await;

    let channel = RemoteChannel::new(&server.uri()).unwrap();

    let err = channel.invoke(&thermal_conductivity_request()).await.unwrap_err();

    assert_eq!(err.kind(), FailureKind::ShapeMismatch);
    assert!(err.to_string().contains("expected 24 response bytes, got 16"));
}

/// **VALUE**: Verifies that a slow engine surfaces as a network failure after the
/// configured timeout, with a single attempt.
///
/// **BUG THIS CATCHES**: Would catch a missing client timeout (call hangs) or a hidden
/// retry loop (more than one request reaches the engine).
#[tokio::test]
async fn given_slow_engine_when_invoked_then_times_out_once() {
    // GIVEN: An engine slower than the client's timeout
    let server = start_engine().await;
    compute_route(Operation::ThermalConductivityForUnidirectionalComposite)
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(engine_body(&[1.0, 2.0, 3.0]))
                .set_delay(Duration::from_secs(2)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let channel =
        RemoteChannel::with_timeout(&server.uri(), Duration::from_millis(200)).unwrap();

    // WHEN: Invoking
    let err = channel.invoke(&thermal_conductivity_request()).await.unwrap_err();

    // THEN: Network failure mentioning the timeout
    assert_eq!(err.kind(), FailureKind::NetworkFailure);
    assert!(err.to_string().contains("timed out"));
}

#[tokio::test]
async fn given_elastic_modules_when_invoked_then_nine_values_in_order() {
    // GIVEN: Engine answer for EMUC model 2 (0.2, 100, 0.3, 5, 0.2)
    let server = start_engine().await;
    let values = [
        24.011723329425557,
        7.5,
        7.5,
        0.22,
        0.22,
        0.38,
        2.4,
        2.4,
        2.7,
    ];
    compute_route(Operation::ElasticModulesForUnidirectionalComposite)
        .respond_with(ResponseTemplate::new(200).set_body_bytes(engine_body(&values)))
        .expect(1)
        .mount(&server)
        .await;

    let request = models::ComputationRequest::elastic_modules_for_unidirectional_composite(
        2, 0.2, 100.0, 0.3, 5.0, 0.2,
    );
    let channel = RemoteChannel::new(&server.uri()).unwrap();

    // WHEN: Invoking
    let result = channel.invoke(&request).await.unwrap();

    // THEN: Labelled in wire order
    let response = result.values.unwrap();
    let labels: Vec<&str> = response.labelled().map(|(label, _)| label).collect();
    assert_eq!(
        labels,
        ["E1", "E2", "E3", "nu12", "nu13", "nu23", "G12", "G13", "G23"]
    );
    assert_eq!(response.as_elastic_modules().unwrap().e1, 24.011723329425557);
}
