//! Cross-validation: run several calculators on one index and compare.

use std::sync::Arc;

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::debug;

use fibdev_core::calculator::{Calculator, FibError};

use crate::interfaces::CalculationResult;

fn run_one(calc: &Arc<dyn Calculator>, k: u64) -> CalculationResult {
    let measurement = calc.measure(k);
    debug!(
        algorithm = calc.name(),
        k,
        elapsed_ns = measurement.elapsed.as_nanos(),
        "calculation finished"
    );
    CalculationResult {
        algorithm: calc.name().to_string(),
        index: k,
        value: measurement.value,
        duration: measurement.elapsed,
    }
}

/// Execute F(k) with all given calculators.
///
/// A single calculator runs on the calling thread; several run in parallel.
pub fn execute_calculations(calculators: &[Arc<dyn Calculator>], k: u64) -> Vec<CalculationResult> {
    if let [calc] = calculators {
        return vec![run_one(calc, k)];
    }

    calculators.par_iter().map(|calc| run_one(calc, k)).collect()
}

/// Analyze comparison results for mismatches.
pub fn analyze_comparison_results(results: &[CalculationResult]) -> Result<(), FibError> {
    let Some((first, rest)) = results.split_first() else {
        return Err(FibError::Calculation("no valid results".into()));
    };

    if rest.iter().any(|r| r.value != first.value) {
        return Err(FibError::Mismatch { index: first.index });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use fibdev_core::fastdoubling::FastDoubling;
    use fibdev_core::iterative::Iterative;
    use fibdev_core::FixedBigNumber;

    fn result(algorithm: &str, value: u64) -> CalculationResult {
        CalculationResult {
            algorithm: algorithm.into(),
            index: 10,
            value: FixedBigNumber::from_u64(value),
            duration: Duration::from_millis(1),
        }
    }

    #[test]
    fn execute_single_calculator() {
        let calc: Arc<dyn Calculator> = Arc::new(FastDoubling::new());
        let results = execute_calculations(&[calc], 100);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].algorithm, "FastDoubling");
        assert_eq!(results[0].value.to_string(), "354224848179261915075");
    }

    #[test]
    fn execute_multiple_calculators_parallel() {
        let fast: Arc<dyn Calculator> = Arc::new(FastDoubling::new());
        let slow: Arc<dyn Calculator> = Arc::new(Iterative::new());
        let results = execute_calculations(&[fast, slow], 92);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].algorithm, "FastDoubling");
        assert_eq!(results[1].algorithm, "Iterative");
        assert_eq!(results[0].value, results[1].value);
        assert!(analyze_comparison_results(&results).is_ok());
    }

    #[test]
    fn execute_no_calculators() {
        assert!(execute_calculations(&[], 5).is_empty());
    }

    #[test]
    fn analyze_matching_results() {
        let results = vec![result("A", 55), result("B", 55)];
        assert!(analyze_comparison_results(&results).is_ok());
    }

    #[test]
    fn analyze_single_result() {
        assert!(analyze_comparison_results(&[result("A", 55)]).is_ok());
    }

    #[test]
    fn analyze_mismatching_results() {
        let results = vec![result("A", 55), result("B", 56)];
        assert_eq!(
            analyze_comparison_results(&results),
            Err(FibError::Mismatch { index: 10 })
        );
    }

    #[test]
    fn analyze_third_result_mismatches() {
        let results = vec![result("A", 55), result("B", 55), result("C", 56)];
        assert!(matches!(
            analyze_comparison_results(&results),
            Err(FibError::Mismatch { .. })
        ));
    }

    #[test]
    fn analyze_empty_results() {
        assert!(matches!(
            analyze_comparison_results(&[]),
            Err(FibError::Calculation(_))
        ));
    }
}
