//! Application entry point and dispatch.

use anyhow::{Context, Result};
use serde_json::json;
use tracing::{debug, info};

use fibdev_cli::output::{format_limbs, write_timing_files, write_to_file};
use fibdev_cli::presenter::{CLIProgressReporter, CLIResultPresenter};
use fibdev_core::calculator::FibError;
use fibdev_core::constants::MAX_EXACT_INDEX;
use fibdev_core::registry::{CalculatorFactory, DefaultFactory};
use fibdev_device::FibDevice;
use fibdev_orchestration::interfaces::{CalculationResult, ResultPresenter};
use fibdev_orchestration::{
    analyze_comparison_results, execute_calculations, get_calculators_to_run, run_sweep,
    SweepConfig,
};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        fibdev_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    if config.sweep {
        return run_device_sweep(config);
    }

    run_cli(config)
}

/// Print a failure the way the selected output mode expects.
pub fn report_error(config: &AppConfig, err: &anyhow::Error) {
    presenter(config).present_error(&format!("{err:#}"));
}

fn presenter(config: &AppConfig) -> CLIResultPresenter {
    CLIResultPresenter::new(config.verbose, config.quiet, config.format)
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let factory = DefaultFactory::new();
    let calculators = get_calculators_to_run(&config.algo, &factory, config.n)?;
    debug!(n = config.n, count = calculators.len(), "running calculators");

    let results = execute_calculations(&calculators, config.n);
    let comparison = if results.len() > 1 {
        analyze_comparison_results(&results)
    } else {
        Ok(())
    };

    if config.json {
        println!("{}", serde_json::to_string_pretty(&results_json(config.n, &results))?);
    } else {
        let presenter = presenter(config);
        for result in &results {
            presenter.present_result(result, config.details);
            if config.quiet {
                break;
            }
        }
        if results.len() > 1 {
            presenter.present_comparison(&results);
        }
    }

    comparison?;

    if let Some(ref path) = config.output {
        if let Some(result) = results.first() {
            write_to_file(path, &result.value)
                .with_context(|| format!("writing {}", path.display()))?;
        }
    }

    Ok(())
}

fn results_json(n: u64, results: &[CalculationResult]) -> serde_json::Value {
    let entries: Vec<_> = results
        .iter()
        .map(|r| {
            json!({
                "algorithm": r.algorithm,
                "value": r.value,
                "decimal": r.value.to_string(),
                "limbs": format_limbs(&r.value),
                "duration_ns": u64::try_from(r.duration.as_nanos()).unwrap_or(u64::MAX),
            })
        })
        .collect();
    json!({
        "index": n,
        "truncated": n > MAX_EXACT_INDEX,
        "results": entries,
    })
}

fn run_device_sweep(config: &AppConfig) -> Result<()> {
    if config.algo == "all" {
        return Err(FibError::Config("a sweep drives a single algorithm".into()).into());
    }
    let calculator = DefaultFactory::new().get(&config.algo)?;
    let device = FibDevice::new(calculator);

    let reporter = CLIProgressReporter::new(config.quiet || config.json);
    let report = run_sweep(&device, &SweepConfig::new(config.max_offset), &reporter)?;

    if config.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        presenter(config).present_sweep(&report);
    }

    if let Some(ref dir) = config.output_dir {
        let written = write_timing_files(dir, &report)
            .with_context(|| format!("writing timing files to {}", dir.display()))?;
        info!(files = written.len(), dir = %dir.display(), "timing files written");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use fibdev_orchestration::SweepError;

    fn config(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("fibdev").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn run_single_algorithm() {
        assert!(run(&config(&["-n", "50", "-q"])).is_ok());
    }

    #[test]
    fn run_unknown_algorithm_is_config_error() {
        let err = run(&config(&["--algo", "matrix", "-q"])).unwrap_err();
        assert!(matches!(err.downcast_ref::<FibError>(), Some(FibError::Config(_))));
    }

    #[test]
    fn sweep_rejects_all() {
        let err = run(&config(&["--sweep", "--algo", "all", "-q"])).unwrap_err();
        assert!(matches!(err.downcast_ref::<FibError>(), Some(FibError::Config(_))));
    }

    #[test]
    fn sweep_writes_timing_files() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("timings");
        let out_arg = out.to_str().unwrap();
        run(&config(&["--sweep", "--max-offset", "8", "-q", "--output-dir", out_arg])).unwrap();
        for name in fibdev_cli::output::TIMING_FILES {
            let text = std::fs::read_to_string(out.join(name)).unwrap();
            assert_eq!(text.lines().count(), 9);
        }
    }

    #[test]
    fn sweep_largest_offset_is_config_error() {
        let err = run(&config(&["--sweep", "--max-offset", "18446744073709551615", "-q"]))
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SweepError>(),
            Some(SweepError::OffsetOutOfRange { .. })
        ));
        assert_eq!(crate::errors::exit_code(&err), 4);
    }

    #[test]
    fn results_json_shape() {
        let factory = DefaultFactory::new();
        let calcs = get_calculators_to_run("all", &factory, 400).unwrap();
        let results = execute_calculations(&calcs, 400);
        let value = results_json(400, &results);
        assert_eq!(value["index"], 400);
        assert_eq!(value["truncated"], true);
        assert_eq!(value["results"].as_array().unwrap().len(), 2);
        assert_eq!(value["results"][0]["value"].as_array().unwrap().len(), 8);
    }
}
