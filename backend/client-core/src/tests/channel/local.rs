use crate::channel::{Channel, ChannelKind, CommandRegistry, CommandSurface, LocalChannel, command_args};
use crate::error::{ChannelError, FailureKind};

use models::{ComputationRequest, Elapsed, Operation};

use std::sync::Mutex;

use serde_json::{Value, json};

/// Surface double that records what it was asked and answers a canned reply.
struct CannedSurface {
    reply: Result<Value, String>,
    seen: Mutex<Vec<(String, Value)>>,
}

impl CannedSurface {
    fn replying(reply: Result<Value, String>) -> Self {
        Self {
            reply,
            seen: Mutex::new(Vec::new()),
        }
    }
}

impl CommandSurface for CannedSurface {
    async fn invoke(&self, command: &str, args: Value) -> Result<Value, String> {
        self.seen.lock().unwrap().push((command.to_string(), args));
        self.reply.clone()
    }
}

fn request() -> ComputationRequest {
    ComputationRequest::thermal_conductivity_for_unidirectional_composite(2, 0.2, 100.0, 1.0)
}

/// **VALUE**: Verifies that an unbound channel reports unavailability and nothing else.
///
/// **WHY THIS MATTERS**: Unavailability is the only signal that lets the dispatcher fall
/// back to the remote engine.
///
/// **BUG THIS CATCHES**: Would catch an unbound channel returning an empty result or a
/// different failure kind, which would suppress the fallback.
#[tokio::test]
async fn given_unbound_channel_when_invoked_then_channel_unavailable() {
    // GIVEN: No surface
    let channel = LocalChannel::<CommandRegistry>::unbound();

    // WHEN: Invoking
    let err = channel.invoke(&request()).await.unwrap_err();

    // THEN: Unavailable on the local channel
    assert!(!channel.is_bound());
    assert_eq!(err.kind(), FailureKind::ChannelUnavailable);
    assert!(matches!(
        err,
        ChannelError::Unavailable {
            channel: ChannelKind::Local,
            ..
        }
    ));
}

/// **VALUE**: Verifies the command name and argument object sent to the surface.
///
/// **BUG THIS CATCHES**: Would catch a renamed argument key (`kFiber` instead of
/// `kForFiber`) or a missing model selector.
#[tokio::test]
async fn given_bound_channel_when_invoked_then_surface_receives_named_arguments() {
    // GIVEN: A surface answering three values
    let surface = CannedSurface::replying(Ok(json!([
        [20.8, 1.3300670235932428, 1.3300670235932428],
        {"secs": 0, "nanos": 4_500}
    ])));
    let channel = LocalChannel::bound(surface);

    // WHEN: Invoking
    let result = channel.invoke(&request()).await.unwrap();

    // THEN: Named arguments went out under the operation's name
    let seen = channel.surface().unwrap().seen.lock().unwrap().clone();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, "thermal_conductivity_for_unidirectional_composite");
    assert_eq!(
        seen[0].1,
        json!({"numberOfModel": 2, "fiberContent": 0.2, "kForFiber": 100.0, "kForMatrix": 1.0})
    );

    // THEN: Values and elapsed passed through unchanged
    let response = result.values.unwrap();
    assert_eq!(response.values(), &[20.8, 1.3300670235932428, 1.3300670235932428]);
    assert_eq!(result.elapsed, Elapsed::new(0, 4_500).unwrap());
}

#[tokio::test]
async fn given_surface_rejects_when_invoked_then_command_failed() {
    let channel = LocalChannel::bound(CannedSurface::replying(Err("engine busy".to_string())));

    let err = channel.invoke(&request()).await.unwrap_err();

    assert_eq!(err.kind(), FailureKind::CommandFailed);
    assert!(err.to_string().contains("engine busy"));
}

#[tokio::test]
async fn given_malformed_return_when_invoked_then_command_failed() {
    let channel = LocalChannel::bound(CannedSurface::replying(Ok(json!({"values": [1.0]}))));

    let err = channel.invoke(&request()).await.unwrap_err();

    assert_eq!(err.kind(), FailureKind::CommandFailed);
    assert!(err.to_string().contains("Malformed command return value"));
}

#[tokio::test]
async fn given_wrong_value_count_when_invoked_then_shape_mismatch() {
    let channel = LocalChannel::bound(CannedSurface::replying(Ok(json!([
        [1.0, 2.0],
        {"secs": 0, "nanos": 0}
    ]))));

    let err = channel.invoke(&request()).await.unwrap_err();

    assert_eq!(err.kind(), FailureKind::ShapeMismatch);
}

/// **VALUE**: Verifies that an out-of-range elapsed from the surface is refused.
///
/// **BUG THIS CATCHES**: Would catch `nanos` of a full second or more being accepted and
/// rendered as a nonsensical breakdown.
#[tokio::test]
async fn given_elapsed_nanos_out_of_range_when_invoked_then_command_failed() {
    let channel = LocalChannel::bound(CannedSurface::replying(Ok(json!([
        [1.0, 2.0, 3.0],
        {"secs": 0, "nanos": 1_000_000_000u32}
    ]))));

    let err = channel.invoke(&request()).await.unwrap_err();

    assert_eq!(err.kind(), FailureKind::CommandFailed);
}

#[tokio::test]
async fn given_wrong_arity_when_invoked_then_encoding_error_without_calling_surface() {
    // GIVEN: A request one parameter short
    let short = ComputationRequest::new(Operation::ThermalExpansionForHoneycomb, 1, vec![1.0; 4]);
    let channel = LocalChannel::bound(CannedSurface::replying(Ok(Value::Null)));

    // WHEN: Invoking
    let err = channel.invoke(&short).await.unwrap_err();

    // THEN: Rejected before reaching the surface
    assert_eq!(err.kind(), FailureKind::EncodingError);
    assert!(channel.surface().unwrap().seen.lock().unwrap().is_empty());
}

#[test]
fn given_request_when_args_built_then_one_key_per_parameter_plus_model() {
    let request = ComputationRequest::elastic_modules_for_honeycomb(
        1, 9.24, 8.4619, 0.4, std::f64::consts::FRAC_PI_6, 3.0, 0.3,
    );

    let args = command_args(&request).unwrap();
    let object = args.as_object().unwrap();

    assert_eq!(object.len(), 7);
    assert_eq!(object["numberOfModel"], json!(1));
    assert_eq!(object["hCellSideSize"], json!(8.4619));
    assert_eq!(object["angle"], json!(std::f64::consts::FRAC_PI_6));
}

#[test]
fn given_non_finite_parameter_when_args_built_then_written_as_string() {
    let request = ComputationRequest::thermal_conductivity_for_unidirectional_composite(
        1,
        f64::NAN,
        f64::INFINITY,
        f64::NEG_INFINITY,
    );

    let args = command_args(&request).unwrap();

    assert_eq!(args["fiberContent"], json!("NaN"));
    assert_eq!(args["kForFiber"], json!("inf"));
    assert_eq!(args["kForMatrix"], json!("-inf"));
}

#[tokio::test]
async fn given_surface_returns_non_finite_values_when_invoked_then_decoded() {
    // GIVEN: A surface answering NaN and +inf as strings
    let channel = LocalChannel::bound(CannedSurface::replying(Ok(json!([
        ["NaN", "inf", 2.0],
        {"secs": 0, "nanos": 10}
    ]))));

    // WHEN: Invoking
    let result = channel.invoke(&request()).await.unwrap();

    // THEN: Same doubles the remote codec would produce
    let values = result.values.unwrap().into_values();
    assert!(values[0].is_nan());
    assert_eq!(values[1], f64::INFINITY);
    assert_eq!(values[2], 2.0);
}
