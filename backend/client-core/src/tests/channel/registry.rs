use crate::channel::{Channel, CommandRegistry, CommandSurface, LocalChannel, request_from_args};

use models::{ComputationRequest, Operation};

use serde_json::json;

fn rule_of_mixtures(request: &ComputationRequest) -> Result<Vec<f64>, String> {
    let fiber = request.parameter("fiberContent").ok_or("fiberContent")?;
    let k_fiber = request.parameter("kForFiber").ok_or("kForFiber")?;
    let k_matrix = request.parameter("kForMatrix").ok_or("kForMatrix")?;

    let k1 = fiber * k_fiber + (1.0 - fiber) * k_matrix;
    let k2 = 1.0 / (fiber / k_fiber + (1.0 - fiber) / k_matrix);
    Ok(vec![k1, k2, k2])
}

/// **VALUE**: Verifies the in-process path end to end: arguments out, request rebuilt,
/// handler run, timed result back.
///
/// **BUG THIS CATCHES**: Would catch the registry and the local channel disagreeing on the
/// argument or return shape.
#[tokio::test]
async fn given_registered_handler_when_invoked_through_channel_then_values_returned() {
    // GIVEN: A registry with a thermal conductivity handler
    let registry = CommandRegistry::new().with_command(
        Operation::ThermalConductivityForUnidirectionalComposite,
        rule_of_mixtures,
    );
    let channel = LocalChannel::bound(registry);
    let request =
        ComputationRequest::thermal_conductivity_for_unidirectional_composite(1, 0.2, 100.0, 1.0);

    // WHEN: Invoking
    let result = channel.invoke(&request).await.unwrap();

    // THEN: Handler output with K2 == K3
    let response = result.values.unwrap();
    assert_eq!(response.values().len(), 3);
    assert!((response.values()[0] - 20.8).abs() < 1e-12);
    assert_eq!(response.values()[1], response.values()[2]);
}

#[tokio::test]
async fn given_unregistered_operation_when_invoked_then_not_found() {
    let registry = CommandRegistry::new();

    let reply = registry
        .invoke("elastic_modules_for_honeycomb", json!({}))
        .await;

    assert_eq!(
        reply.unwrap_err(),
        "Command 'elastic_modules_for_honeycomb' not found"
    );
}

#[tokio::test]
async fn given_unknown_command_name_when_invoked_then_not_found() {
    let registry = CommandRegistry::new();

    let reply = registry.invoke("compute_everything", json!({})).await;

    assert!(reply.unwrap_err().contains("compute_everything"));
}

#[tokio::test]
async fn given_handler_error_when_invoked_then_message_returned() {
    let registry = CommandRegistry::new().with_command(
        Operation::ThermalExpansionForHoneycomb,
        |_: &ComputationRequest| Err("singular geometry".to_string()),
    );

    let reply = registry
        .invoke(
            "thermal_expansion_for_honeycomb",
            json!({
                "numberOfModel": 1,
                "lCellSideSize": 9.24,
                "hCellSideSize": 8.4619,
                "wallThickness": 0.4,
                "angle": 0.5235987755982988,
                "alphaForHoneycomb": 1.0e-5
            }),
        )
        .await;

    assert_eq!(reply.unwrap_err(), "singular geometry");
}

#[test]
fn given_registrations_when_counted_then_replacement_does_not_duplicate() {
    let mut registry = CommandRegistry::new();
    registry.register(Operation::ThermalExpansionForHoneycomb, |_: &ComputationRequest| {
        Ok(vec![0.0; 3])
    });
    registry.register(Operation::ThermalExpansionForHoneycomb, |_: &ComputationRequest| {
        Ok(vec![1.0; 3])
    });

    assert_eq!(registry.len(), 1);
    assert!(registry.is_registered(Operation::ThermalExpansionForHoneycomb));
    assert!(!registry.is_registered(Operation::ElasticModulesForHoneycomb));
    assert!(format!("{registry:?}").contains("thermal_expansion_for_honeycomb"));
}

#[test]
fn given_args_with_fractional_model_when_parsed_then_rejected() {
    let args = json!({"numberOfModel": 1.5, "fiberContent": 0.2, "kForFiber": 1.0, "kForMatrix": 1.0});

    let err = request_from_args(Operation::ThermalConductivityForUnidirectionalComposite, &args)
        .unwrap_err();

    assert!(err.contains("numberOfModel"));
}

#[test]
fn given_args_with_text_parameter_when_parsed_then_rejected() {
    let args = json!({"numberOfModel": 1, "fiberContent": "0.2", "kForFiber": 1.0, "kForMatrix": 1.0});

    let err = request_from_args(Operation::ThermalConductivityForUnidirectionalComposite, &args)
        .unwrap_err();

    assert!(err.contains("fiberContent"));
}

#[test]
fn given_args_missing_parameter_when_parsed_then_names_it() {
    let args = json!({"numberOfModel": 1, "fiberContent": 0.2, "kForFiber": 1.0});

    let err = request_from_args(Operation::ThermalConductivityForUnidirectionalComposite, &args)
        .unwrap_err();

    assert!(err.contains("kForMatrix"));
}

fn echo_with_non_finite(request: &ComputationRequest) -> Result<Vec<f64>, String> {
    let k_fiber = request.parameter("kForFiber").ok_or("kForFiber")?;
    Ok(vec![k_fiber, f64::NAN, f64::NEG_INFINITY])
}

/// **VALUE**: Verifies that non-finite doubles survive the in-process path both ways.
///
/// **WHY THIS MATTERS**: The remote channel carries NaN and infinities bit-exact. The local
/// channel must give the same outcome for the same request.
///
/// **BUG THIS CATCHES**: Would catch an infinite parameter turning into JSON `null` and
/// being rejected, or a NaN result failing to deserialize.
#[tokio::test]
async fn given_non_finite_values_when_invoked_through_channel_then_carried_both_ways() {
    // GIVEN: A handler echoing kForFiber and answering NaN
    let registry = CommandRegistry::new().with_command(
        Operation::ThermalConductivityForUnidirectionalComposite,
        echo_with_non_finite,
    );
    let channel = LocalChannel::bound(registry);
    let request = ComputationRequest::thermal_conductivity_for_unidirectional_composite(
        1,
        0.2,
        f64::INFINITY,
        5.0,
    );

    // WHEN: Invoking
    let result = channel.invoke(&request).await.unwrap();

    // THEN: Infinity went in, NaN and -inf came back
    let response = result.values.unwrap();
    assert_eq!(response.values()[0], f64::INFINITY);
    assert!(response.values()[1].is_nan());
    assert_eq!(response.values()[2], f64::NEG_INFINITY);
}

#[test]
fn given_non_finite_spellings_when_parsed_then_accepted() {
    let args = json!({"numberOfModel": 1, "fiberContent": "NaN", "kForFiber": "inf", "kForMatrix": "-inf"});

    let request = request_from_args(Operation::ThermalConductivityForUnidirectionalComposite, &args)
        .unwrap();

    assert!(request.parameters()[0].is_nan());
    assert_eq!(request.parameters()[1], f64::INFINITY);
    assert_eq!(request.parameters()[2], f64::NEG_INFINITY);
}
