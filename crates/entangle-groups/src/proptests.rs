//! Property-based tests for kernels and subgroup closure.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use proptest::sample::Index;

    use entangle_integers::{divisors, Modulus};

    use crate::{kernel, reduce, Gl2, ModMatrix, Subgroup};

    // Levels small enough that N⁴ enumeration stays cheap.
    fn small_level() -> impl Strategy<Value = i64> {
        1i64..=12i64
    }

    fn pick_divisor(n: i64, index: &Index) -> i64 {
        let divs = divisors(n).unwrap();
        divs[index.index(divs.len())] as i64
    }

    fn m(value: i64) -> Modulus {
        Modulus::new(value).unwrap()
    }

    // Random elements of GL(2, Z/nZ), drawn from the enumeration.
    fn random_elements(n: i64, picks: &[Index]) -> Vec<ModMatrix> {
        let all: Vec<_> = Gl2::new(n).unwrap().elements().collect();
        picks.iter().map(|i| all[i.index(all.len())]).collect()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn kernel_is_subgroup_of_lagrange_order(n in small_level(), d in any::<Index>()) {
            let target = pick_divisor(n, &d);
            let group = Gl2::new(n).unwrap();
            let k = kernel(m(n), m(target)).unwrap();

            prop_assert!(k.contains(&group.identity()));
            prop_assert!(k.iter().all(|x| group.contains(x)));
            prop_assert_eq!(group.order().unwrap() % k.order() as u64, 0);
        }

        #[test]
        fn reduction_is_transitive(n in small_level(), d1 in any::<Index>(), d2 in any::<Index>()) {
            let mid = pick_divisor(n, &d1);
            let low = pick_divisor(mid, &d2);
            let k = kernel(m(n), m(mid)).unwrap();
            for x in &k {
                prop_assert!(reduce(x, m(n), m(low)).unwrap().is_identity());
            }
        }

        #[test]
        fn closure_of_closed_set_is_itself(n in small_level(), d in any::<Index>()) {
            let target = pick_divisor(n, &d);
            let k = kernel(m(n), m(target)).unwrap();
            let regenerated = Subgroup::from_generators(k.elements(), k.ambient()).unwrap();
            prop_assert_eq!(regenerated.order(), k.order());
            prop_assert!(regenerated.is_subgroup_of(&k));
        }

        #[test]
        fn generated_order_divides_group_order(
            n in 2i64..=8i64,
            picks in proptest::collection::vec(any::<Index>(), 0..4),
        ) {
            let group = Gl2::new(n).unwrap();
            let gens = random_elements(n, &picks);
            let h = Subgroup::from_generators(&gens, group).unwrap();

            prop_assert_eq!(group.order().unwrap() % h.order() as u64, 0);
            for g in &gens {
                prop_assert!(h.contains(g));
            }
            for x in &h {
                for y in &gens {
                    prop_assert!(h.contains(&(*x * *y)));
                }
            }
        }
    }
}
