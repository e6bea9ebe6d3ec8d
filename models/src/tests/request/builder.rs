use crate::{ComputationRequest, ModelError, Operation};

/// **VALUE**: Verifies that named parameters given in any order land in wire order.
///
/// **WHY THIS MATTERS**: Callers (CLI, local command arguments) hold parameters by name.
/// The wire format only knows positions.
///
/// **BUG THIS CATCHES**: Would catch a builder that keeps insertion order instead of the
/// operation's declared order.
#[test]
fn given_parameters_out_of_order_when_built_then_placed_in_declared_order() {
    // GIVEN: Parameters supplied in reverse
    let builder = ComputationRequest::builder(Operation::ThermalConductivityForUnidirectionalComposite)
        .with_model(1)
        .with_parameter("kForMatrix", 5.0)
        .with_parameter("kForFiber", 100.0)
        .with_parameter("fiberContent", 0.2);

    // WHEN: Building
    let request = builder.build().unwrap();

    // THEN: Declared order, same as the typed constructor
    assert_eq!(request.parameters(), &[0.2, 100.0, 5.0]);
    assert_eq!(
        request,
        ComputationRequest::thermal_conductivity_for_unidirectional_composite(1, 0.2, 100.0, 5.0)
    );
}

#[test]
fn given_missing_model_when_built_then_returns_validation_error() {
    let result = ComputationRequest::builder(Operation::ThermalConductivityForUnidirectionalComposite)
        .with_parameter("fiberContent", 0.2)
        .with_parameter("kForFiber", 100.0)
        .with_parameter("kForMatrix", 5.0)
        .build();

    let err = result.unwrap_err();
    assert!(matches!(err, ModelError::Validation { .. }));
    assert!(err.to_string().contains("Model selector is required"));
}

#[test]
fn given_zero_model_when_built_then_returns_validation_error() {
    let result = ComputationRequest::builder(Operation::ThermalExpansionForHoneycomb)
        .with_model(0)
        .build();

    assert!(result.unwrap_err().to_string().contains("non-zero"));
}

/// **VALUE**: Verifies that unknown names are rejected instead of ignored.
///
/// **BUG THIS CATCHES**: Would catch a typo such as `fibreContent` being silently dropped,
/// which would then surface later as a confusing "missing parameter".
#[test]
fn given_unknown_parameter_when_built_then_error_names_it() {
    // GIVEN: A misspelt parameter
    let result = ComputationRequest::builder(Operation::ThermalConductivityForUnidirectionalComposite)
        .with_model(2)
        .with_parameter("fibreContent", 0.2)
        .build();

    // THEN: The error mentions the bad name and the accepted ones
    let message = result.unwrap_err().to_string();
    assert!(message.contains("fibreContent"), "{message}");
    assert!(message.contains("fiberContent"), "{message}");
}

#[test]
fn given_duplicate_parameter_when_built_then_returns_validation_error() {
    let result = ComputationRequest::builder(Operation::ThermalConductivityForUnidirectionalComposite)
        .with_model(1)
        .with_parameter("kForFiber", 100.0)
        .with_parameter("kForFiber", 90.0)
        .build();

    assert!(result.unwrap_err().to_string().contains("more than once"));
}

#[test]
fn given_partial_parameters_when_built_then_error_lists_every_missing_name() {
    let result = ComputationRequest::builder(Operation::ElasticModulesForHoneycomb)
        .with_model(1)
        .with_parameter("angle", 0.5)
        .build();

    let message = result.unwrap_err().to_string();
    for missing in ["lCellSideSize", "hCellSideSize", "wallThickness", "eForHoneycomb", "nuForHoneycomb"] {
        assert!(message.contains(missing), "should list {missing}: {message}");
    }
    assert!(!message.contains("angle,"), "{message}");
}
