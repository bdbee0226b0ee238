//! Property-based tests for divisor enumeration.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{coprime_divisor_pairs, divisors, gcd, prime_factors, Modulus};

    fn level() -> impl Strategy<Value = i64> {
        1i64..2000i64
    }

    proptest! {
        #[test]
        fn divisors_are_sorted_and_divide(n in level()) {
            let divs = divisors(n).unwrap();
            prop_assert_eq!(divs.first().copied(), Some(1));
            prop_assert_eq!(divs.last().copied(), Some(n as u64));
            for w in divs.windows(2) {
                prop_assert!(w[0] < w[1]);
            }
            for d in divs {
                prop_assert_eq!(n as u64 % d, 0);
            }
        }

        #[test]
        fn coprime_pairs_are_valid(n in level()) {
            for p in coprime_divisor_pairs(n).unwrap() {
                prop_assert_eq!(n as u64 % p.a(), 0);
                prop_assert_eq!(n as u64 % p.b(), 0);
                prop_assert!(p.a() != 1 && p.b() != 1);
                prop_assert!(p.a() < p.b());
                prop_assert_eq!(gcd(p.a(), p.b()), 1);
                prop_assert_eq!(n as u64 % p.lcm(), 0);
            }
        }

        #[test]
        fn prime_factors_reconstruct_radical(n in 2u64..5000u64) {
            let radical: u64 = prime_factors(n).iter().product();
            prop_assert_eq!(n % radical, 0);
            for p in prime_factors(n) {
                prop_assert_eq!(prime_factors(p), vec![p]);
            }
        }

        #[test]
        fn inverse_is_inverse(m in 1i64..500i64, a in 0u64..1000u64) {
            let modulus = Modulus::new(m).unwrap();
            match modulus.inv(a) {
                Some(inv) => prop_assert_eq!(modulus.mul(a % modulus.get(), inv), modulus.one()),
                None => prop_assert!(!modulus.is_unit(a)),
            }
        }
    }
}
