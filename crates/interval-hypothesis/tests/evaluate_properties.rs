//! Property-based tests for the interval comparison rules

use interval_confidence::ConfidenceInterval;
use interval_hypothesis::{evaluate, HypothesisTestKind};
use proptest::prelude::*;

fn interval() -> impl Strategy<Value = ConfidenceInterval> {
    (-100.0f64..100.0, 0.0f64..50.0)
        .prop_map(|(center, margin)| ConfidenceInterval::symmetric(center, margin).unwrap())
}

proptest! {
    #[test]
    fn prop_not_equal_is_disjunction(x in interval(), y in interval()) {
        let less = evaluate(&x, &y, HypothesisTestKind::LessThan);
        let greater = evaluate(&x, &y, HypothesisTestKind::GreaterThan);
        prop_assert_eq!(evaluate(&x, &y, HypothesisTestKind::NotEqual), less || greater);
    }

    #[test]
    fn prop_directions_mutually_exclusive(x in interval(), y in interval()) {
        let less = evaluate(&x, &y, HypothesisTestKind::LessThan);
        let greater = evaluate(&x, &y, HypothesisTestKind::GreaterThan);
        prop_assert!(!(less && greater));
    }

    #[test]
    fn prop_less_than_mirrors_greater_than(x in interval(), y in interval()) {
        prop_assert_eq!(
            evaluate(&x, &y, HypothesisTestKind::LessThan),
            evaluate(&y, &x, HypothesisTestKind::GreaterThan)
        );
        prop_assert_eq!(
            evaluate(&x, &y, HypothesisTestKind::NotEqual),
            evaluate(&y, &x, HypothesisTestKind::NotEqual)
        );
    }

    #[test]
    fn prop_overlapping_never_significant(x in interval(), y in interval()) {
        if x.overlaps(&y) {
            for kind in HypothesisTestKind::ALL {
                prop_assert!(!evaluate(&x, &y, kind));
            }
        } else {
            prop_assert!(evaluate(&x, &y, HypothesisTestKind::NotEqual));
        }
    }

    #[test]
    fn prop_interval_never_differs_from_itself(x in interval()) {
        for kind in HypothesisTestKind::ALL {
            prop_assert!(!evaluate(&x, &x, kind));
        }
    }
}
