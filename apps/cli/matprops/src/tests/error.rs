use crate::error::MatpropsError;

use client_core::error::{ChannelError, ComputeFailed};
use client_core::{ChannelKind, FailureKind};
use common::ErrorLocation;
use models::Operation;

use std::panic::Location;

/// **VALUE**: Tests that errors serialize for `--json` callers.
///
/// **BUG THIS CATCHES**: Would catch a non-serializable field being added to an error
/// variant.
#[test]
fn given_matprops_error_when_serialized_then_tagged_json() {
    // GIVEN: An invalid request error
    let err = MatpropsError::InvalidRequest {
        message: String::from("Missing parameters"),
        location: ErrorLocation::from(Location::caller()),
    };

    // WHEN: Serializing
    let json = serde_json::to_string(&err).unwrap();

    // THEN: Variant tag and message present
    assert!(json.contains(r#""type":"InvalidRequest""#));
    assert!(json.contains("Missing parameters"));
}

#[test]
fn given_compute_failed_when_converted_then_kind_and_channel_kept() {
    // GIVEN: A remote empty response
    let failed = ComputeFailed::new(
        ChannelKind::Remote,
        ChannelError::EmptyResponse {
            operation: Operation::ElasticModulesForHoneycomb,
            location: ErrorLocation::caller(),
        },
    );

    // WHEN: Converting
    let err = MatpropsError::from(failed);

    // THEN: Inspectable and rendered
    assert_eq!(err.failure_kind(), Some(FailureKind::EmptyResponse));
    assert!(err.to_string().starts_with("Compute Error: EmptyResponse on remote channel"));

    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["data"]["kind"], "EmptyResponse");
    assert_eq!(json["data"]["channel"], "remote");
}
