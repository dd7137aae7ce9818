//! Golden file integration tests.
//!
//! Reads tests/testdata/fibonacci_golden.json and checks every registered
//! calculator, and the device read path, against known Fibonacci values.

use std::io::{Read, Seek, SeekFrom};
use std::sync::Arc;

use num_bigint::BigUint;
use serde::Deserialize;

use fibdev_core::calculator::Calculator;
use fibdev_core::constants::{fib_digits, required_limbs, LIMBS, MAX_EXACT_INDEX, MAX_LENGTH};
use fibdev_core::registry::{CalculatorFactory, DefaultFactory};
use fibdev_core::FixedBigNumber;
use fibdev_device::FibDevice;

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    values: Vec<GoldenEntry>,
}

#[derive(Deserialize)]
struct GoldenEntry {
    n: u64,
    fib_digits: usize,
    /// Exact value, present while F(n) fits in the fixed width.
    #[serde(default)]
    fib: Option<String>,
    /// F(n) mod 10^64 otherwise.
    #[serde(default)]
    fib_mod: Option<String>,
    limbs: Vec<u64>,
}

impl GoldenEntry {
    fn expected_decimal(&self) -> &str {
        self.fib
            .as_deref()
            .or(self.fib_mod.as_deref())
            .expect("entry without a value")
    }
}

fn load_golden_data() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/fibonacci_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

fn calculators() -> Vec<Arc<dyn Calculator>> {
    let factory = DefaultFactory::new();
    factory
        .available()
        .into_iter()
        .map(|name| factory.get(name).expect("registered calculator"))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn golden_file_is_consistent() {
    let data = load_golden_data();
    assert!(!data.values.is_empty());
    for entry in &data.values {
        assert_eq!(entry.limbs.len(), LIMBS, "F({})", entry.n);
        assert_eq!(
            entry.fib.is_some(),
            entry.n <= MAX_EXACT_INDEX,
            "F({}) exactness",
            entry.n
        );
        let from_limbs = entry
            .limbs
            .iter()
            .fold(BigUint::from(0u32), |acc, &limb| acc * 100_000_000u32 + limb);
        assert_eq!(from_limbs.to_string(), entry.expected_decimal());
    }
}

#[test]
fn all_calculators_match_golden() {
    let data = load_golden_data();
    for calc in calculators() {
        for entry in &data.values {
            let value = calc.compute(entry.n);
            assert_eq!(
                value.to_string(),
                entry.expected_decimal(),
                "{} F({})",
                calc.name(),
                entry.n
            );
            let limbs: Vec<u64> = value.limbs_msb_first().collect();
            assert_eq!(limbs, entry.limbs, "{} F({}) limbs", calc.name(), entry.n);
        }
    }
}

#[test]
fn digit_estimates_match_golden() {
    let data = load_golden_data();
    for entry in &data.values {
        assert_eq!(fib_digits(entry.n), entry.fib_digits, "F({})", entry.n);
        assert_eq!(
            required_limbs(entry.n) <= LIMBS,
            entry.fib.is_some(),
            "F({}) fits",
            entry.n
        );
    }
}

#[test]
fn exact_values_keep_their_digit_count() {
    let data = load_golden_data();
    for entry in data.values.iter().filter(|e| e.fib.is_some()) {
        let value = fibdev_core::fibonacci(entry.n);
        assert_eq!(value.digit_count(), entry.fib_digits, "F({})", entry.n);
    }
}

#[test]
fn device_reads_match_golden() {
    let data = load_golden_data();
    let device = FibDevice::new(Arc::new(fibdev_core::fastdoubling::FastDoubling::new()));
    let mut session = device.open().expect("device free");
    let mut buf = vec![0u8; <FixedBigNumber>::ENCODED_LEN];

    for entry in data.values.iter().filter(|e| e.n <= MAX_LENGTH) {
        session.seek(SeekFrom::Start(entry.n)).unwrap();
        let n = session.read(&mut buf).unwrap();
        let value: FixedBigNumber = FixedBigNumber::decode(&buf[..n]).expect("valid encoding");
        assert_eq!(value.to_string(), entry.expected_decimal(), "offset {}", entry.n);
    }
}
