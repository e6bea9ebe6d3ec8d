use crate::helpers::{compute_route, engine_body, start_engine, thermal_conductivity_request};

use client_core::channel::{ChannelKind, CommandRegistry, LocalChannel, RemoteChannel};
use client_core::config::{ComputeConfig, RemoteConfig};
use client_core::dispatcher::Dispatcher;
use client_core::error::FailureKind;

use models::{BenchmarkedResult, ComputationRequest, Operation};

use std::time::Duration;

use wiremock::ResponseTemplate;

/// **VALUE**: Verifies the fallback path against a real HTTP engine.
///
/// **BUG THIS CATCHES**: Would catch the dispatcher giving up when no in-process engine
/// exists instead of asking the remote one.
#[tokio::test]
async fn given_no_local_engine_when_computing_then_remote_engine_answers_once() {
    // GIVEN: An unbound local channel and an engine behind HTTP
    let server = start_engine().await;
    compute_route(Operation::ThermalConductivityForUnidirectionalComposite)
        .respond_with(ResponseTemplate::new(200).set_body_bytes(engine_body(&[12.5, 6.25, 6.25])))
        .expect(1)
        .mount(&server)
        .await;

    let config = ComputeConfig {
        version: 1,
        remote: RemoteConfig {
            base_url: server.uri(),
            timeout_secs: 5,
        },
    };
    let dispatcher = Dispatcher::remote_only(&config).unwrap();

    // WHEN: Computing
    let result = dispatcher
        .compute(&thermal_conductivity_request())
        .await
        .unwrap();

    // THEN: Remote values, zero elapsed
    assert_eq!(result.values.unwrap().values(), &[12.5, 6.25, 6.25]);
    assert!(result.elapsed.is_zero());
}

#[tokio::test]
async fn given_local_engine_bound_when_computing_then_remote_engine_untouched() {
    // GIVEN: A local handler and a remote engine that must not be called
    let server = start_engine().await;
    compute_route(Operation::ThermalConductivityForUnidirectionalComposite)
        .respond_with(ResponseTemplate::new(200).set_body_bytes(engine_body(&[0.0, 0.0, 0.0])))
        .expect(0)
        .mount(&server)
        .await;

    let registry = CommandRegistry::new().with_command(
        Operation::ThermalConductivityForUnidirectionalComposite,
        |_: &ComputationRequest| Ok(vec![20.8, 1.3300670235932428, 1.3300670235932428]),
    );
    let dispatcher = Dispatcher::new(
        LocalChannel::bound(registry),
        RemoteChannel::new(&server.uri()).unwrap(),
    );

    // WHEN: Computing
    let result = dispatcher
        .compute(&thermal_conductivity_request())
        .await
        .unwrap();

    // THEN: Local values
    assert_eq!(result.values.unwrap().values()[0], 20.8);
}

/// **VALUE**: Verifies the "nothing listening" scenario end to end.
///
/// **BUG THIS CATCHES**: Would catch a connection error being reported as an empty or
/// zero-filled result.
#[tokio::test]
async fn given_no_local_engine_and_unreachable_remote_when_computing_then_network_failure() {
    // GIVEN: Nothing listening on the remote port
    let remote = RemoteChannel::with_timeout("http://127.0.0.1:65534", Duration::from_secs(2))
        .unwrap();
    let dispatcher = Dispatcher::new(LocalChannel::<CommandRegistry>::unbound(), remote);

    // WHEN: Computing
    let outcome = dispatcher.compute(&thermal_conductivity_request()).await;

    // THEN: Network failure on the remote channel, no values
    let slot: BenchmarkedResult<_> = match &outcome {
        Ok(result) => result.clone(),
        Err(_) => BenchmarkedResult::default(),
    };
    let err = outcome.unwrap_err();
    assert_eq!(err.kind, FailureKind::NetworkFailure);
    assert_eq!(err.channel, ChannelKind::Remote);
    assert!(!slot.is_ready());
}
