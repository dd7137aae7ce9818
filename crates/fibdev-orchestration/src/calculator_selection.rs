//! Calculator selection logic.

use std::sync::Arc;

use tracing::warn;

use fibdev_core::calculator::{Calculator, FibError};
use fibdev_core::registry::CalculatorFactory;

/// Resolve `--algo` to the calculators that will compute F(n).
///
/// `"all"` selects every registered calculator whose `max_index` covers `n`,
/// skipping the rest with a warning. A calculator named explicitly must
/// cover `n` or selection fails with [`FibError::Config`].
pub fn get_calculators_to_run(
    algo: &str,
    factory: &dyn CalculatorFactory,
    n: u64,
) -> Result<Vec<Arc<dyn Calculator>>, FibError> {
    match algo {
        "all" => {
            let mut calcs = Vec::new();
            for name in factory.available() {
                let calc = factory.get(name)?;
                if n > calc.max_index() {
                    warn!(
                        algorithm = calc.name(),
                        n,
                        max_index = calc.max_index(),
                        "skipping calculator past its index limit"
                    );
                    continue;
                }
                calcs.push(calc);
            }
            Ok(calcs)
        }
        name => {
            let calc = factory.get(name)?;
            if n > calc.max_index() {
                return Err(FibError::Config(format!(
                    "{} is limited to n <= {}",
                    calc.name(),
                    calc.max_index()
                )));
            }
            Ok(vec![calc])
        }
    }
}
