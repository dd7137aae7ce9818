//! Property-based tests across the calculator registry.

use num_bigint::BigUint;
use proptest::prelude::*;

use fibdev_core::calculator::Calculator;
use fibdev_core::registry::{CalculatorFactory, DefaultFactory};
use fibdev_core::FixedBigNumber;

fn compute(algo: &str, n: u64) -> FixedBigNumber {
    DefaultFactory::new()
        .get(algo)
        .expect("registered algorithm")
        .compute(n)
}

fn reference_mod_capacity(n: u64) -> BigUint {
    let (mut a, mut b) = (BigUint::from(0u32), BigUint::from(1u32));
    for _ in 0..n {
        let next = &a + &b;
        a = std::mem::replace(&mut b, next);
    }
    a % BigUint::from(10u32).pow(64)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Fast doubling and iteration agree for random n.
    #[test]
    fn fast_equals_iterative(n in 0u64..3000) {
        prop_assert_eq!(compute("fast", n), compute("iterative", n), "F({}) differs", n);
    }

    /// The result equals F(n) mod 10^64.
    #[test]
    fn matches_reference(n in 0u64..1500) {
        prop_assert_eq!(compute("fast", n).to_biguint(), reference_mod_capacity(n));
    }

    /// F(n) + F(n+1) == F(n+2), wrapping included.
    #[test]
    fn fibonacci_recurrence(n in 0u64..10_000) {
        let sum = compute("fast", n) + compute("fast", n + 1);
        prop_assert_eq!(sum, compute("fast", n + 2));
    }
}
