use crate::channel::{Channel, ChannelKind, RemoteChannel};
use crate::config::RemoteConfig;
use crate::error::FailureKind;

use models::{ComputationRequest, Operation};

#[test]
fn given_base_url_without_trailing_slash_when_endpoint_built_then_compute_route() {
    let channel = RemoteChannel::new("http://localhost:8080").unwrap();

    let url = channel
        .endpoint(Operation::ThermalConductivityForUnidirectionalComposite)
        .unwrap();

    assert_eq!(
        url.as_str(),
        "http://localhost:8080/compute/thermal_conductivity_for_unidirectional_composite"
    );
    assert_eq!(channel.kind(), ChannelKind::Remote);
}

#[test]
fn given_base_url_with_path_prefix_when_endpoint_built_then_prefix_kept() {
    let channel = RemoteChannel::new("https://engine.example.org/api/").unwrap();

    let url = channel.endpoint(Operation::ElasticModulesForHoneycomb).unwrap();

    assert_eq!(
        url.as_str(),
        "https://engine.example.org/api/compute/elastic_modules_for_honeycomb"
    );
}

/// **VALUE**: Verifies the route is built on the path, not appended to the raw string.
///
/// **BUG THIS CATCHES**: Would catch the operation name landing inside the query string of a
/// base such as `http://h/api?k=v`.
#[test]
fn given_base_url_with_query_when_endpoint_built_then_query_kept_after_route() {
    let channel = RemoteChannel::new("http://engine.local/api?key=abc").unwrap();

    let url = channel.endpoint(Operation::ElasticModulesForHoneycomb).unwrap();

    assert_eq!(
        url.as_str(),
        "http://engine.local/api/compute/elastic_modules_for_honeycomb?key=abc"
    );
}

#[test]
fn given_cannot_be_a_base_url_when_endpoint_built_then_network_failure() {
    let channel = RemoteChannel::new("mailto:engine@example.org").unwrap();

    let err = channel
        .endpoint(Operation::ElasticModulesForHoneycomb)
        .unwrap_err();

    assert_eq!(err.kind(), FailureKind::NetworkFailure);
    assert!(err.to_string().contains("cannot be a base"));
}

#[test]
fn given_invalid_base_url_when_created_then_network_failure() {
    let err = RemoteChannel::new("not a url").unwrap_err();

    assert_eq!(err.kind(), FailureKind::NetworkFailure);
    assert!(err.to_string().contains("Invalid engine URL"));
}

#[test]
fn given_config_when_channel_built_then_uses_its_base_url() {
    let config = RemoteConfig {
        base_url: "http://127.0.0.1:9000".to_string(),
        timeout_secs: 3,
    };

    let channel = RemoteChannel::from_config(&config).unwrap();

    assert_eq!(channel.base_url().as_str(), "http://127.0.0.1:9000/");
}

#[tokio::test]
async fn given_wrong_arity_when_invoked_then_encoding_error_before_any_request() {
    // Port 9 (discard) is never contacted: encoding fails first.
    let channel = RemoteChannel::new("http://127.0.0.1:9").unwrap();
    let request = ComputationRequest::new(Operation::ThermalExpansionForHoneycomb, 1, vec![]);

    let err = channel.invoke(&request).await.unwrap_err();

    assert_eq!(err.kind(), FailureKind::EncodingError);
}
