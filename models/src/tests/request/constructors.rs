use crate::{ComputationRequest, Operation};

#[test]
fn given_typed_constructors_when_called_then_arity_matches_operation() {
    let requests = [
        ComputationRequest::elastic_modules_for_unidirectional_composite(2, 0.2, 100.0, 0.3, 5.0, 0.2),
        ComputationRequest::thermal_conductivity_for_unidirectional_composite(1, 0.2, 100.0, 5.0),
        ComputationRequest::elastic_modules_for_honeycomb(1, 9.24, 8.4619, 0.4, 0.5236, 7.07, 0.2),
        ComputationRequest::thermal_expansion_for_honeycomb(1, 9.24, 8.4619, 0.4, 0.5236, 20e-5),
        ComputationRequest::thermal_expansion_for_unidirectional_composite(
            1, 0.2, 100.0, 0.3, 1e-6, 5.0, 0.2, 20e-5,
        ),
    ];

    for (request, operation) in requests.iter().zip(Operation::ALL) {
        assert_eq!(request.operation(), operation);
        assert!(request.has_declared_arity(), "{operation}");
    }
}

#[test]
fn given_request_when_parameter_looked_up_by_name_then_returns_value() {
    let request =
        ComputationRequest::elastic_modules_for_unidirectional_composite(2, 0.2, 100.0, 0.3, 5.0, 0.25);

    assert_eq!(request.model(), 2);
    assert_eq!(request.parameter("eForMatrix"), Some(5.0));
    assert_eq!(request.parameter("nuForMatrix"), Some(0.25));
    assert_eq!(request.parameter("kForFiber"), None);
}

#[test]
fn given_request_when_named_parameters_iterated_then_pairs_follow_wire_order() {
    let request = ComputationRequest::thermal_conductivity_for_unidirectional_composite(1, 0.2, 100.0, 5.0);

    let pairs: Vec<_> = request.named_parameters().collect();

    assert_eq!(
        pairs,
        vec![("fiberContent", 0.2), ("kForFiber", 100.0), ("kForMatrix", 5.0)]
    );
}

/// **VALUE**: Verifies that the unchecked constructor really is unchecked.
///
/// **BUG THIS CATCHES**: Would catch someone adding a panic to `new()`; arity is a codec
/// concern reported as an encoding error, not a crash at construction.
#[test]
fn given_wrong_arity_when_constructed_directly_then_flagged_but_not_rejected() {
    let request = ComputationRequest::new(
        Operation::ThermalConductivityForUnidirectionalComposite,
        1,
        vec![0.2, 100.0],
    );

    assert!(!request.has_declared_arity());
}
