//! End-to-end run: pick a device, build inputs, execute every variant,
//! check every output.

use crate::coalesce::CoalesceFactor;
use crate::config::RunConfig;
use crate::device::{Device, select_device};
use crate::error::{Error, Result};
use crate::matrix::NUM_ELEMENTS;
use crate::matrix::fill::{expected_output, initialize_matrices};
use crate::verify::verify;
use log::{info, warn};
use std::thread;

/// Output of one variant.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantOutput {
    pub factor: CoalesceFactor,
    pub output: Vec<f32>,
}

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub device: String,
    pub expected: Vec<f32>,
    pub outputs: Vec<VariantOutput>,
    /// Verification failures. Fatal errors never end up here; they abort
    /// the run instead.
    pub failures: Vec<Error>,
}

impl Report {
    /// True when at least one variant ran and every output matched.
    pub fn passed(&self) -> bool {
        !self.outputs.is_empty() && self.failures.is_empty()
    }
}

/// Run `config` on the device it names.
///
/// Returns `Err` only for fatal conditions (device unavailable, malformed
/// buffers). Result mismatches, including ones a device reports from
/// `submit`, are collected in the [`Report`].
pub fn run(config: &RunConfig) -> Result<Report> {
    let device = select_device(config.device)?;
    run_on(device.as_ref(), config)
}

/// Run `config` on an already selected device.
pub fn run_on(device: &dyn Device, config: &RunConfig) -> Result<Report> {
    let (a, b) = initialize_matrices(config.fill);
    let expected = expected_output(config.fill, &a, &b);

    if config.factors.is_empty() {
        warn!("no coalesce factors configured, nothing to run");
    }

    let results = if config.concurrent {
        submit_concurrent(device, &config.factors, &a, &b)
    } else {
        config
            .factors
            .iter()
            .map(|&factor| submit_one(device, factor, &a, &b))
            .collect()
    };

    let mut outputs = Vec::with_capacity(results.len());
    let mut failures = Vec::new();
    for (factor, result) in config.factors.iter().copied().zip(results) {
        match result {
            Ok(output) => outputs.push(VariantOutput { factor, output }),
            Err(err) => {
                device.report_fault(&err);
                if err.is_fatal() {
                    return Err(err);
                }
                failures.push(err);
            }
        }
    }

    for variant in &outputs {
        match verify(variant.factor, &variant.output, &expected) {
            Ok(()) => info!("{}: all {} cells match", variant.factor, NUM_ELEMENTS),
            Err(err) => failures.push(err),
        }
    }

    Ok(Report {
        device: device.name().to_string(),
        expected,
        outputs,
        failures,
    })
}

fn submit_one(device: &dyn Device, factor: CoalesceFactor, a: &[f32], b: &[f32]) -> Result<Vec<f32>> {
    info!("Running on device: {} ({})", device.name(), factor);
    let mut out = vec![0.0f32; NUM_ELEMENTS];
    device.submit(factor, a, b, &mut out)?;
    Ok(out)
}

/// One scoped thread per variant. Every thread owns its output buffer and
/// nothing is read until all of them have joined.
fn submit_concurrent(
    device: &dyn Device,
    factors: &[CoalesceFactor],
    a: &[f32],
    b: &[f32],
) -> Vec<Result<Vec<f32>>> {
    thread::scope(|scope| {
        let handles: Vec<_> = factors
            .iter()
            .map(|&factor| scope.spawn(move || submit_one(device, factor, a, b)))
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
            .collect()
    })
}
