// tests/unit_score.rs
use vulnscore_core::score::{self, average, f_measure, precision, recall};
use vulnscore_core::types::{CountMap, ScoreMap};

const EPS: f64 = 1e-9;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

#[test]
fn test_identical_maps_score_one_everywhere() {
    let truth = CountMap::from([(1, 3), (2, 1), (8, 12)]);
    let observed = truth.clone();

    let p = precision(&observed, &truth);
    let r = recall(&observed, &truth);
    let f = f_measure(&p, &r);

    for id in observed.keys() {
        assert!(close(p[&id], 1.0), "precision {id}");
        assert!(close(r[&id], 1.0), "recall {id}");
        assert!(close(f[&id], 1.0), "f-measure {id}");
    }
}

#[test]
fn test_over_reporting_without_truth_scores_zero() {
    let truth = CountMap::from([(3, 0)]);
    let observed = CountMap::from([(3, 4), (9, 2)]);

    let p = precision(&observed, &truth);
    let r = recall(&observed, &truth);
    for id in [3, 9] {
        assert_eq!(p[&id], 0.0);
        assert_eq!(r[&id], 0.0);
    }
}

#[test]
fn test_average_of_empty_map() {
    assert_eq!(average(&ScoreMap::new()), 0.0);
}

#[test]
fn test_subtract_is_not_commutative() {
    let a = CountMap::from([(1, 5), (2, 3)]);
    let b = CountMap::from([(1, 2), (3, 9)]);

    let ab = score::subtract(&a, &b);
    assert_eq!(ab, CountMap::from([(1, 3), (2, 3)]));
    assert!(!ab.contains(3));
    assert_ne!(ab, score::subtract(&b, &a));
}

#[test]
fn test_scenario_exact_match_skips_truth_only_key() {
    let truth = CountMap::from([(1, 3), (2, 0)]);
    let observed = CountMap::from([(1, 3)]);

    let p = precision(&observed, &truth);
    let r = recall(&observed, &truth);
    let f = f_measure(&p, &r);

    assert!(close(p[&1], 1.0));
    assert!(close(r[&1], 1.0));
    assert!(close(f[&1], 1.0));
    assert!(!p.contains_key(&2));
    assert!(close(average(&p), 1.0));
}

#[test]
fn test_scenario_over_reporting() {
    let truth = CountMap::from([(5, 2)]);
    let observed = CountMap::from([(5, 5)]);

    let p = precision(&observed, &truth);
    let r = recall(&observed, &truth);
    let f = f_measure(&p, &r);

    assert!(close(p[&5], 0.4));
    assert!(close(r[&5], 1.0));
    assert!((f[&5] - 0.571_428_571_4).abs() < 1e-6);
}

#[test]
fn test_scenario_under_reporting() {
    let truth = CountMap::from([(7, 4)]);
    let observed = CountMap::from([(7, 1)]);

    let p = precision(&observed, &truth);
    let r = recall(&observed, &truth);

    assert_eq!(p[&7], 0.0);
    assert!(close(r[&7], 0.25));
    assert_eq!(f_measure(&p, &r)[&7], 0.0);
}

#[test]
fn test_averages_over_observed_keys_only() {
    let truth = CountMap::from([(1, 1), (2, 2), (3, 5)]);
    let observed = CountMap::from([(1, 1), (2, 4)]);

    let p = precision(&observed, &truth);
    assert_eq!(p.len(), 2);
    // 1.0 and 2/4
    assert!(close(average(&p), 0.75));
}
