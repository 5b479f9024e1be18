//! Unit tests for query parameter validation

use super::*;

// ===== validate: happy path =====

#[test]
fn test_validate_accepts_valid_triple() {
    let params = QueryParams::validate(&["1", "100", "50"]).unwrap();
    assert_eq!(params.min(), 1);
    assert_eq!(params.max(), 100);
    assert_eq!(params.n(), 50);
}

#[test]
fn test_validate_accepts_negative_bounds() {
    let params = QueryParams::validate(&["-10", "-5", "3"]).unwrap();
    assert_eq!(params.min(), -10);
    assert_eq!(params.max(), -5);
}

#[test]
fn test_validate_accepts_degenerate_range() {
    // min == max is a valid (single-value) range
    let params = QueryParams::validate(&["7", "7", "1"]).unwrap();
    assert_eq!(params.min(), 7);
    assert_eq!(params.max(), 7);
}

#[test]
fn test_validate_tolerates_surrounding_whitespace() {
    let params = QueryParams::validate(&[" 1 ", "\t100", "5\n"]).unwrap();
    assert_eq!(params.min(), 1);
    assert_eq!(params.max(), 100);
    assert_eq!(params.n(), 5);
}

// ===== validate: rejections =====

#[test]
fn test_validate_rejects_non_integer_field() {
    let err = QueryParams::validate(&["1", "abc", "5"]).unwrap_err();
    assert_eq!(
        err,
        ParamError::InvalidInput {
            field: "max".to_string(),
            value: "abc".to_string(),
        }
    );
}

#[test]
fn test_validate_rejects_float_field() {
    let err = QueryParams::validate(&["1.5", "10", "5"]).unwrap_err();
    assert!(matches!(err, ParamError::InvalidInput { ref field, .. } if field == "min"));
}

#[test]
fn test_validate_rejects_empty_field() {
    let err = QueryParams::validate(&["1", "10", ""]).unwrap_err();
    assert!(matches!(err, ParamError::InvalidInput { ref field, .. } if field == "n"));
}

#[test]
fn test_validate_rejects_wrong_arity() {
    let err = QueryParams::validate(&["1", "10"]).unwrap_err();
    assert!(matches!(err, ParamError::InvalidInput { ref field, .. } if field == "fields"));

    let err = QueryParams::validate(&["1", "10", "5", "extra"]).unwrap_err();
    assert!(matches!(err, ParamError::InvalidInput { ref field, .. } if field == "fields"));
}

#[test]
fn test_validate_rejects_inverted_range() {
    let err = QueryParams::validate(&["10", "5", "3"]).unwrap_err();
    assert_eq!(err, ParamError::InvalidRange { min: 10, max: 5 });
}

#[test]
fn test_validate_rejects_zero_count() {
    let err = QueryParams::validate(&["1", "10", "0"]).unwrap_err();
    assert_eq!(err, ParamError::InvalidCount { n: 0 });
}

#[test]
fn test_validate_rejects_negative_count() {
    let err = QueryParams::validate(&["1", "10", "-3"]).unwrap_err();
    assert_eq!(err, ParamError::InvalidCount { n: -3 });
}

#[test]
fn test_validate_error_precedence_parse_before_range() {
    // An unparsable field surfaces before the cross-field range check
    let err = QueryParams::validate(&["10", "5", "oops"]).unwrap_err();
    assert!(matches!(err, ParamError::InvalidInput { ref field, .. } if field == "n"));
}

// ===== numeric constructor =====

#[test]
fn test_new_enforces_invariants() {
    assert!(QueryParams::new(1, 100, 50).is_ok());
    assert_eq!(
        QueryParams::new(5, 1, 3).unwrap_err(),
        ParamError::InvalidRange { min: 5, max: 1 }
    );
    assert_eq!(
        QueryParams::new(1, 10, 0).unwrap_err(),
        ParamError::InvalidCount { n: 0 }
    );
}

#[test]
fn test_new_rejects_count_beyond_u32() {
    let n = i64::from(u32::MAX) + 1;
    assert_eq!(
        QueryParams::new(1, 10, n).unwrap_err(),
        ParamError::InvalidCount { n }
    );
}

#[test]
fn test_contains() {
    let params = QueryParams::new(1, 10, 5).unwrap();
    assert!(params.contains(1));
    assert!(params.contains(10));
    assert!(!params.contains(0));
    assert!(!params.contains(11));
}

#[test]
fn test_error_display() {
    let err = ParamError::invalid_input("min", "abc");
    assert_eq!(err.to_string(), "invalid input for min: abc");

    let err = ParamError::InvalidRange { min: 10, max: 5 };
    assert_eq!(err.to_string(), "invalid range: min 10 exceeds max 5");

    let err = ParamError::InvalidCount { n: -3 };
    assert_eq!(err.to_string(), "invalid count: -3");
}

// ===== property tests =====

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any min <= max triple with positive count round-trips through
        /// string validation
        #[test]
        fn prop_valid_triple_roundtrips(
            min in -1_000_000_000i64..=1_000_000_000,
            span in 0i64..=1_000_000,
            n in 1i64..=10_000,
        ) {
            let max = min + span;
            let raw = [min.to_string(), max.to_string(), n.to_string()];
            let params = QueryParams::validate(&raw).unwrap();
            prop_assert_eq!(params.min(), min);
            prop_assert_eq!(params.max(), max);
            prop_assert_eq!(i64::from(params.n()), n);
        }

        /// Inverted ranges are always rejected with InvalidRange
        #[test]
        fn prop_inverted_range_rejected(
            max in -1_000_000i64..=1_000_000,
            gap in 1i64..=1_000_000,
            n in 1i64..=100,
        ) {
            let min = max + gap;
            let raw = [min.to_string(), max.to_string(), n.to_string()];
            let err = QueryParams::validate(&raw).unwrap_err();
            prop_assert_eq!(err, ParamError::InvalidRange { min, max });
        }
    }
}
