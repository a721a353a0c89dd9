//! Property tests for classification scoring
//!
//! Ensures score tables satisfy their invariants:
//! - Scores bounded to [0, 1], never NaN or Infinity
//! - Count slots consistent with the sample count
//! - Macro column derived from rounded per-class values
//! - One-hot and label-array inputs agree

use ndarray::{Array1, Array2};
use prfacc::eval::classification::{f1_score, round_to};
use prfacc::{Analysis, ClassificationScorer, Column};
use proptest::collection::vec;
use proptest::prelude::*;

// =============================================================================
// Strategy Helpers
// =============================================================================

/// Generate a vector of class labels in range [0, n_classes)
fn class_labels(
    n_classes: usize,
    len: impl Into<proptest::collection::SizeRange>,
) -> impl Strategy<Value = Vec<usize>> {
    vec(0..n_classes, len)
}

/// Generate pair of true/predicted labels with same length
fn label_pair(
    n_classes: usize,
    len: std::ops::Range<usize>,
) -> impl Strategy<Value = (Vec<usize>, Vec<usize>)> {
    len.prop_flat_map(move |l| (vec(0..n_classes, l), vec(0..n_classes, l)))
}

fn one_hot(labels: &[usize], width: usize) -> Array2<usize> {
    let mut m = Array2::zeros((labels.len(), width));
    for (i, &l) in labels.iter().enumerate() {
        m[[i, l]] = 1;
    }
    m
}

fn analyze(y_true: &[usize], y_pred: &[usize], digits: u32) -> Analysis {
    Analysis::from_labels(y_true.to_vec(), y_pred.to_vec(), digits).unwrap()
}

// =============================================================================
// Scoring Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1_000))]

    #[test]
    fn prop_scores_bounded(
        (y_true, y_pred) in label_pair(6, 1..100)
    ) {
        let a = analyze(&y_true, &y_pred, 4);
        for series in [a.precision(), a.recall(), a.f1()] {
            prop_assert_eq!(series.len(), a.n_classes() + 2);
            for &v in series {
                prop_assert!(v.is_finite(), "score {} is NaN or Inf", v);
                prop_assert!((0.0..=1.0).contains(&v), "score {} not in [0, 1]", v);
            }
        }
        prop_assert!((0.0..=1.0).contains(&a.accuracy()));
    }

    #[test]
    fn prop_count_slots_consistent(
        (y_true, y_pred) in label_pair(6, 1..100)
    ) {
        let a = analyze(&y_true, &y_pred, 4);
        let counts = a.counts();
        let n = y_true.len();

        prop_assert_eq!(counts.correct.per_class().iter().sum::<usize>(), counts.correct.sum());
        prop_assert!(counts.correct.sum() <= counts.truth.sum());
        prop_assert_eq!(counts.truth.sum(), n);
        prop_assert_eq!(counts.predicted.sum(), n);

        let slots = counts.correct.slots();
        prop_assert_eq!(slots.len(), a.n_classes() + 2);
        prop_assert_eq!(slots[a.n_classes() + 1], counts.correct.sum() as f64);
    }

    #[test]
    fn prop_correct_never_exceeds_label_or_prediction(
        (y_true, y_pred) in label_pair(6, 1..100)
    ) {
        let a = analyze(&y_true, &y_pred, 4);
        let counts = a.counts();
        for c in 0..a.n_classes() {
            prop_assert!(counts.correct.get(c) <= counts.truth.get(c));
            prop_assert!(counts.correct.get(c) <= counts.predicted.get(c));
        }
    }

    #[test]
    fn prop_perfect_predictions(
        y in class_labels(6, 1..100)
    ) {
        let a = analyze(&y, &y, 4);
        prop_assert_eq!(a.accuracy(), 1.0);

        for c in 0..a.n_classes() {
            let expected = if y.contains(&c) { 1.0 } else { 0.0 };
            prop_assert_eq!(a.precision_at(Column::Class(c)), expected);
            prop_assert_eq!(a.recall_at(Column::Class(c)), expected);
            prop_assert_eq!(a.f1_at(Column::Class(c)), expected);
        }
    }

    #[test]
    fn prop_macro_from_rounded_class_values(
        (y_true, y_pred) in label_pair(6, 1..100),
        digits in 1u32..6
    ) {
        let a = analyze(&y_true, &y_pred, digits);
        let n = a.n_classes();

        let macro_p = a.precision()[..n].iter().sum::<f64>() / n as f64;
        let macro_r = a.recall()[..n].iter().sum::<f64>() / n as f64;

        prop_assert_eq!(a.precision_at(Column::Macro), round_to(macro_p, digits));
        prop_assert_eq!(a.recall_at(Column::Macro), round_to(macro_r, digits));
        prop_assert_eq!(
            a.f1_at(Column::Macro),
            round_to(f1_score(macro_p, macro_r), digits)
        );
    }

    #[test]
    fn prop_class_f1_from_rounded_ratios(
        (y_true, y_pred) in label_pair(6, 1..100)
    ) {
        let a = analyze(&y_true, &y_pred, 4);
        for c in 0..a.n_classes() {
            let col = Column::Class(c);
            prop_assert_eq!(
                a.f1_at(col),
                round_to(f1_score(a.precision_at(col), a.recall_at(col)), 4)
            );
        }
    }

    #[test]
    fn prop_micro_matches_accuracy(
        (y_true, y_pred) in label_pair(6, 1..100)
    ) {
        let a = analyze(&y_true, &y_pred, 4);
        let tolerance = 1e-4 + 1e-9;
        prop_assert!((a.precision_at(Column::Micro) - a.accuracy()).abs() <= tolerance);
        prop_assert!((a.recall_at(Column::Micro) - a.accuracy()).abs() <= tolerance);
    }

    #[test]
    fn prop_one_hot_matches_labels(
        (y_true, y_pred) in label_pair(5, 1..50)
    ) {
        let (t, p) = (one_hot(&y_true, 5), one_hot(&y_pred, 5));
        let mut scorer = ClassificationScorer::new();
        let from_one_hot = scorer
            .analyze(t.view().into_dyn(), p.view().into_dyn(), true, 4)
            .unwrap();

        let (t, p) = (Array1::from(y_true), Array1::from(y_pred));
        let from_labels = scorer
            .analyze(t.view().into_dyn(), p.view().into_dyn(), false, 4)
            .unwrap();

        prop_assert_eq!(from_one_hot, from_labels);
    }

    #[test]
    fn prop_report_has_all_keys(
        (y_true, y_pred) in label_pair(6, 1..100)
    ) {
        let a = analyze(&y_true, &y_pred, 4);
        let report = a.report();
        prop_assert_eq!(report.iter().count(), 3 * (a.n_classes() + 2));
        prop_assert_eq!(report.correct(), a.counts().correct.per_class());
    }
}
