use matprops::app::run;
use matprops::cli::Args;
use matprops::report::render_failure;

use client_core::FailureKind;

use clap::Parser;
use serde_json::Value;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ROUTE: &str = "/compute/thermal_conductivity_for_unidirectional_composite";

fn compute_args(server: &MockServer, config_dir: &TempDir, json: bool) -> Args {
    let mut argv = vec![
        "matprops".to_string(),
        "compute".to_string(),
        "thermal_conductivity_for_unidirectional_composite".to_string(),
        "--model".to_string(),
        "2".to_string(),
        "fiberContent=0.2".to_string(),
        "kForFiber=100".to_string(),
        "kForMatrix=1".to_string(),
        "--base-url".to_string(),
        server.uri(),
        "--config-dir".to_string(),
        config_dir.path().display().to_string(),
    ];
    if json {
        argv.push("--json".to_string());
    }
    Args::try_parse_from(argv).unwrap()
}

fn engine_body(values: &[f64]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_ne_bytes()).collect()
}

/// **VALUE**: Tests the command-line host end to end against an HTTP engine double.
///
/// **BUG THIS CATCHES**: Would catch the host building a different request than the core
/// expects, or printing values under the wrong labels.
#[tokio::test]
async fn given_engine_running_when_compute_run_then_labelled_values_printed() {
    // GIVEN: An engine answering the thermal conductivity route once
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ROUTE))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(engine_body(&[
            20.8,
            1.3300670235932428,
            1.3300670235932428,
        ])))
        .expect(1)
        .mount(&server)
        .await;
    let config_dir = TempDir::new().unwrap();

    // WHEN: Running the compute command
    let output = run(&compute_args(&server, &config_dir, false)).await.unwrap();

    // THEN: Labelled output with a zero elapsed from the remote path
    assert!(output.contains("K1 = 20.8000000000"));
    assert!(output.contains("K3 = 1.3300670236"));
    assert!(output.ends_with("elapsed: 0s 0ms 0us 0ns"));
}

#[tokio::test]
async fn given_json_flag_when_compute_run_then_tuple_printed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ROUTE))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(engine_body(&[1.5, 2.5, 2.5])))
        .mount(&server)
        .await;
    let config_dir = TempDir::new().unwrap();

    let output = run(&compute_args(&server, &config_dir, true)).await.unwrap();

    assert_eq!(output, r#"[[1.5,2.5,2.5],{"secs":0,"nanos":0}]"#);
}

#[tokio::test]
async fn given_engine_failing_when_compute_run_then_network_failure_kind() {
    // GIVEN: An engine answering 503
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ROUTE))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;
    let config_dir = TempDir::new().unwrap();

    // WHEN: Running
    let err = run(&compute_args(&server, &config_dir, false)).await.unwrap_err();

    // THEN: Failure kind exposed for the exit message
    assert_eq!(err.failure_kind(), Some(FailureKind::NetworkFailure));
}

/// **VALUE**: Tests that a failed `--json` run yields a machine-readable error.
///
/// **BUG THIS CATCHES**: Would catch JSON callers receiving only the plain
/// "Computation failed" line with no failure kind or channel to parse.
#[tokio::test]
async fn given_json_flag_and_engine_failing_when_compute_run_then_error_rendered_as_json() {
    // GIVEN: An engine answering 503 and a --json invocation
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ROUTE))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let config_dir = TempDir::new().unwrap();
    let args = compute_args(&server, &config_dir, true);

    // WHEN: Running and rendering the failure the way the binary does
    let err = run(&args).await.unwrap_err();
    let rendered = render_failure(&err, args.wants_json());

    // THEN: Tagged error object with kind and channel
    let json: Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(json["type"], "Compute");
    assert_eq!(json["data"]["kind"], "NetworkFailure");
    assert_eq!(json["data"]["channel"], "remote");
    assert!(json["data"]["location"].is_object());
}
