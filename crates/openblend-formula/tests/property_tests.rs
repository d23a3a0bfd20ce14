//! Property-based tests for formula parsing and evaluation.
//!
//! These verify totality (no panics on arbitrary input), determinism,
//! and agreement with directly computed arithmetic.

use openblend_formula::{Formula, eval};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

/// Generator for formulas built only from total operations, so
/// evaluation over bounded coordinates must succeed.
fn arb_total_formula() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        Just("x".to_string()),
        Just("frames".to_string()),
        Just("pi".to_string()),
        (0u32..100).prop_map(|n| n.to_string()),
    ];
    leaf.prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone(), prop::sample::select(vec!["+", "-", "*"]))
                .prop_map(|(a, b, op)| format!("({a} {op} {b})")),
            inner.clone().prop_map(|a| format!("sin({a})")),
            inner.clone().prop_map(|a| format!("abs({a})")),
            inner.prop_map(|a| format!("-({a})")),
        ]
    })
}

proptest! {
    #[test]
    fn prop_parse_never_panics(text in ".*") {
        // Outcome does not matter; reaching the assertion does.
        let outcome = Formula::parse(&text);
        prop_assert!(outcome.is_ok() || outcome.is_err());
    }

    #[test]
    fn prop_identity_formula_echoes_coordinates(
        coords in prop::collection::vec(-1e6f64..1e6, 0..64)
    ) {
        let values = eval("x", &coords);
        prop_assert_eq!(values.as_deref(), Ok(coords.as_slice()));
    }

    #[test]
    fn prop_affine_formula_matches_direct_computation(
        coords in prop::collection::vec(-1e3f64..1e3, 1..32)
    ) {
        let values = match eval("2 * x + 1", &coords) {
            Ok(values) => values,
            Err(err) => return Err(TestCaseError::fail(err.to_string())),
        };
        for (value, coord) in values.iter().zip(&coords) {
            prop_assert!((value - (2.0 * coord + 1.0)).abs() < 1e-9);
        }
    }

    #[test]
    fn prop_total_formulas_evaluate(
        text in arb_total_formula(),
        coords in prop::collection::vec(-1e6f64..1e6, 1..16)
    ) {
        let formula = match Formula::parse(&text) {
            Ok(formula) => formula,
            Err(err) => return Err(TestCaseError::fail(err.to_string())),
        };
        let values = match formula.eval_sequence(&coords) {
            Ok(values) => values,
            Err(err) => return Err(TestCaseError::fail(err.to_string())),
        };
        prop_assert_eq!(values.len(), coords.len());
    }

    #[test]
    fn prop_evaluation_is_deterministic(
        text in arb_total_formula(),
        coords in prop::collection::vec(-1e6f64..1e6, 1..16)
    ) {
        let first = eval(&text, &coords);
        let second = eval(&text, &coords);
        match (first, second) {
            (Ok(a), Ok(b)) => {
                // Bit-compare so NaN still counts as equal to itself.
                let a_bits: Vec<u64> = a.iter().map(|v| v.to_bits()).collect();
                let b_bits: Vec<u64> = b.iter().map(|v| v.to_bits()).collect();
                prop_assert_eq!(a_bits, b_bits);
            }
            (Err(a), Err(b)) => prop_assert_eq!(a, b),
            (a, b) => {
                return Err(TestCaseError::fail(format!(
                    "outcomes diverged: {a:?} vs {b:?}"
                )));
            }
        }
    }

    #[test]
    fn prop_output_length_matches_input_length(
        coords in prop::collection::vec(-100.0f64..100.0, 0..128)
    ) {
        let values = match eval("x * x", &coords) {
            Ok(values) => values,
            Err(err) => return Err(TestCaseError::fail(err.to_string())),
        };
        prop_assert_eq!(values.len(), coords.len());
    }
}
