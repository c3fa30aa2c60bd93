//! Runs the nested and coalesced kernels and reports whether they agree
//! with the expected product.

mod cli;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use log::debug;
use loop_coalesce::driver::{self, Report};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let config = cli.run_config();
    debug!("run config: {:#?}", config);

    let report = driver::run(&config)
        .with_context(|| format!("could not run the kernels on the {} device", config.device))?;

    for failure in &report.failures {
        eprintln!("{failure}");
    }
    let (status, banner) = outcome(&report);
    println!("{banner}");
    Ok(ExitCode::from(status))
}

/// Process exit status and stdout banner for a finished run.
fn outcome(report: &Report) -> (u8, &'static str) {
    if report.passed() {
        (0, "PASSED: The results are correct")
    } else {
        (1, "FAILED: The results are incorrect")
    }
}
