//! Property-based tests for entanglement detection.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use proptest::sample::Index;

    use entangle_groups::{Gl2, Subgroup};
    use entangle_integers::{coprime_divisor_pairs, DivisorPair};

    use crate::{DetectorConfig, Entanglement, EntanglementDetector};

    // Random generator lists for subgroups of GL(2, Z/nZ).
    fn generators(n: i64, picks: &[Index]) -> Vec<[i64; 4]> {
        let all: Vec<_> = Gl2::new(n).unwrap().elements().collect();
        picks
            .iter()
            .map(|i| all[i.index(all.len())].entries().map(|e| e as i64))
            .collect()
    }

    fn level() -> impl Strategy<Value = i64> {
        prop_oneof![Just(6i64), Just(10i64), Just(12i64)]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn index_divides_image_order(
            n in level(),
            picks in proptest::collection::vec(any::<Index>(), 1..4),
        ) {
            let gens = generators(n, &picks);
            let detector = EntanglementDetector::new(DetectorConfig::sequential());

            for pair in coprime_divisor_pairs(n).unwrap() {
                let c = Gl2::new(pair.lcm() as i64).unwrap();
                let reduced: Vec<_> = gens
                    .iter()
                    .map(|e| c.element(*e).unwrap())
                    .collect();
                let gc = Subgroup::from_generators(&reduced, c).unwrap();

                match detector.detect_coprime(n, &gens, pair).unwrap() {
                    Entanglement::Present { index } => {
                        prop_assert!(index > 1);
                        prop_assert_eq!(gc.order() % index, 0);
                    }
                    Entanglement::Absent => {}
                }
            }
        }

        #[test]
        fn general_matches_coprime_baseline_for_full_kernels(
            n in level(),
            picks in proptest::collection::vec(any::<Index>(), 1..4),
        ) {
            // For a coprime pair d = 1, so the general baseline is all of
            // GL(2, Z/cZ) and never smaller than the coprime one.
            let gens = generators(n, &picks);
            let detector = EntanglementDetector::new(DetectorConfig::sequential());

            for pair in coprime_divisor_pairs(n).unwrap() {
                let coprime = detector.detect_coprime(n, &gens, pair).unwrap();
                let c = pair.lcm() as i64;
                let reduced: Vec<_> = gens
                    .iter()
                    .map(|e| (*e).map(|x| x % c))
                    .collect();
                let general = detector.detect_general(&reduced, pair).unwrap();
                prop_assert!(general.index().unwrap_or(1) >= coprime.index().unwrap_or(1));
            }
        }

        #[test]
        fn self_pairs_are_never_surveyed(n in 1i64..500i64) {
            for pair in coprime_divisor_pairs(n).unwrap() {
                prop_assert_ne!(pair, DivisorPair::new(pair.a(), pair.a()).unwrap());
            }
        }
    }
}
