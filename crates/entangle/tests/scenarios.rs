//! End-to-end entanglement scenarios on fixed generator lists.
//!
//! The expected indices were computed independently by brute force over
//! the same groups.

use entangle::prelude::*;

/// Index-2 subgroup of GL(2, Z/30Z): the sign of the mod-2 image (as a
/// permutation in GL(2, F_2) ≅ S_3) equals the Legendre symbol of the
/// determinant mod 5. Order 69120.
const LEVEL_30_ENTANGLED: [[i64; 4]; 6] = [
    [11, 0, 0, 1],
    [1, 1, 1, 0],
    [1, 6, 0, 1],
    [1, 0, 6, 1],
    [7, 15, 0, 1],
    [1, 10, 0, 1],
];

/// Generators of all of GL(2, Z/30Z).
const LEVEL_30_FULL: [[i64; 4]; 4] = [[1, 1, 0, 1], [1, 0, 1, 1], [7, 0, 0, 1], [11, 0, 0, 1]];

/// Index-2 subgroup of GL(2, Z/6Z): the sign of the mod-2 image equals
/// the determinant mod 3. Order 144.
const LEVEL_6_ENTANGLED: [[i64; 4]; 4] = [[5, 3, 0, 1], [1, 2, 0, 1], [1, 0, 2, 1], [0, 1, 1, 0]];

/// Index-2 subgroup of GL(2, Z/12Z): the character of the determinant
/// mod 4 equals the Legendre symbol of the determinant mod 3. Order 2304.
const LEVEL_12_ENTANGLED: [[i64; 4]; 3] = [[1, 1, 0, 1], [1, 0, 1, 1], [11, 0, 0, 1]];

/// Generators of all of GL(2, Z/12Z).
const LEVEL_12_FULL: [[i64; 4]; 4] = [[1, 1, 0, 1], [1, 0, 1, 1], [5, 0, 0, 1], [7, 0, 0, 1]];

fn pair(a: u64, b: u64) -> DivisorPair {
    DivisorPair::new(a, b).unwrap()
}

#[test]
fn level_30_pair_2_15_is_entangled() {
    let detector = EntanglementDetector::default();
    let result = detector
        .detect_coprime(30, &LEVEL_30_ENTANGLED, pair(2, 15))
        .unwrap();
    assert_eq!(result, Entanglement::Present { index: 2 });
}

#[test]
fn level_30_survey() {
    let detector = EntanglementDetector::default();
    let reports = detector.survey_coprime(30, &LEVEL_30_ENTANGLED).unwrap();

    let found: Vec<_> = reports
        .iter()
        .map(|r| (r.pair.a(), r.pair.b(), r.index()))
        .collect();
    assert_eq!(
        found,
        vec![
            (2, 3, None),
            (2, 5, Some(2)),
            (2, 15, Some(2)),
            (3, 5, None),
            (3, 10, None),
            (5, 6, Some(2)),
        ]
    );

    let lines: Vec<_> = reports
        .iter()
        .filter(|r| r.is_notable())
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        lines,
        vec![
            "(2, 5): entanglement of index 2",
            "(2, 15): entanglement of index 2",
            "(5, 6): entanglement of index 2",
        ]
    );
}

#[test]
fn full_group_is_not_entangled() {
    let detector = EntanglementDetector::default();
    for p in [pair(3, 5), pair(2, 15)] {
        let result = detector.detect_coprime(30, &LEVEL_30_FULL, p).unwrap();
        assert_eq!(result, Entanglement::Absent, "pair {p}");
    }
}

#[test]
fn degenerate_pair_equal_to_level() {
    // a = b = n: both kernels are trivial, so the index is |G| itself.
    let detector = EntanglementDetector::default();
    let result = detector
        .detect_coprime(6, &LEVEL_6_ENTANGLED, pair(6, 6))
        .unwrap();
    assert_eq!(result, Entanglement::Present { index: 144 });

    let result = detector
        .detect_coprime(6, &LEVEL_6_ENTANGLED, pair(2, 3))
        .unwrap();
    assert_eq!(result, Entanglement::Present { index: 2 });
}

#[test]
fn non_coprime_pair() {
    // c = 12, d = 2: Nab has order 192 inside ker(12 → 2) of order 768.
    let detector = EntanglementDetector::default();
    let result = detector
        .detect_general(&LEVEL_12_ENTANGLED, pair(4, 6))
        .unwrap();
    assert_eq!(result, Entanglement::Present { index: 4 });

    let result = detector.detect_general(&LEVEL_12_FULL, pair(4, 6)).unwrap();
    assert_eq!(result, Entanglement::Absent);
}

#[test]
fn general_survey_agrees_with_direct_detection() {
    let detector = EntanglementDetector::default();
    let reports = detector.survey_general(12, &LEVEL_12_ENTANGLED).unwrap();
    let report = reports.iter().find(|r| r.pair == pair(4, 6)).unwrap();
    assert_eq!(report.index(), Some(4));
    assert!(reports.iter().all(|r| r.outcome.is_ok()));
}

#[test]
fn malformed_generator_aborts_only_affected_pairs() {
    // det = 5 is a unit mod 6 but not mod 5.
    let mut generators = LEVEL_30_FULL.to_vec();
    generators.push([5, 0, 0, 1]);

    let detector = EntanglementDetector::default();
    let reports = detector.survey_coprime(30, &generators).unwrap();
    assert_eq!(reports.len(), 6);

    for report in &reports {
        if report.pair.lcm() % 5 == 0 {
            let err = report.outcome.as_ref().unwrap_err();
            assert!(err.is_invariant_violation(), "pair {}", report.pair);
        } else {
            assert!(report.outcome.is_ok(), "pair {}", report.pair);
        }
    }
}

#[test]
fn sequential_and_parallel_agree() {
    let parallel = EntanglementDetector::default();
    let sequential = EntanglementDetector::new(
        DetectorConfig::sequential().with_memoize_kernels(false),
    );
    assert_eq!(
        parallel.survey_coprime(6, &LEVEL_6_ENTANGLED).unwrap(),
        sequential.survey_coprime(6, &LEVEL_6_ENTANGLED).unwrap()
    );
}

#[test]
fn invalid_level_fails_fast() {
    let detector = EntanglementDetector::default();
    assert!(detector.survey_coprime(0, &LEVEL_6_ENTANGLED).is_err());
    assert!(detector.survey_general(-12, &LEVEL_12_ENTANGLED).is_err());
    assert!(detector.cache().is_empty());
}

/// Index-2 subgroup of GL(2, Z/42Z): SL(2) together with the determinants
/// whose Legendre symbols mod 3 and mod 7 agree, which diag(5, 1) generates.
/// Order 290304.
const LEVEL_42_ENTANGLED: [[i64; 4]; 3] = [[1, 1, 0, 1], [1, 0, 1, 1], [5, 0, 0, 1]];

#[test]
fn non_coprime_level_42() {
    // c = 42, d = 7: Nab has order 24 * 6 = 144 inside ker(42 → 7) of
    // order 288.
    let detector = EntanglementDetector::default();
    let result = detector
        .detect_general(&LEVEL_42_ENTANGLED, pair(14, 21))
        .unwrap();
    assert_eq!(result, Entanglement::Present { index: 2 });
}

#[test]
fn non_coprime_level_42_full_group() {
    // Generators of GL(2, Z/42Z): SL(2) plus diag(u, 1) for u = 5, 13, 29,
    // which generate (Z/42Z)*.
    let gens = [
        [1, 1, 0, 1],
        [1, 0, 1, 1],
        [5, 0, 0, 1],
        [13, 0, 0, 1],
        [29, 0, 0, 1],
    ];
    let detector = EntanglementDetector::default();
    let result = detector.detect_general(&gens, pair(14, 21)).unwrap();
    assert_eq!(result, Entanglement::Absent);
}
