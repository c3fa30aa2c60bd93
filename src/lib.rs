//! Loop coalescing on a fixed-size matrix multiply.
//!
//! Merging nested loop levels ("coalescing") is a classic trick for
//! shrinking the control logic a hardware compiler generates for a kernel.
//! This crate keeps the observable part of that transformation: the same
//! 4×4 `f32` matrix multiply is written with its loops nested, with the
//! outer two levels merged, and with the whole compute pass merged, and
//! every variant must agree bit for bit.
//!
//! ## Usage
//!
//! ```
//! use loop_coalesce::{CoalesceFactor, multiply};
//!
//! let mut a = vec![0.0f32; 16];
//! for i in 0..4 {
//!     a[i * 4 + i] = 1.0;
//! }
//! let b: Vec<f32> = (0..16).map(|i| i as f32).collect();
//! let mut c = vec![0.0f32; 16];
//!
//! multiply(&a, &b, &mut c, CoalesceFactor::Coalesced).unwrap();
//! assert_eq!(c, b);
//! ```
//!
//! To run the full comparison and check the results, use [`driver::run`]:
//!
//! ```
//! use loop_coalesce::{RunConfig, driver};
//!
//! let report = driver::run(&RunConfig::default()).unwrap();
//! assert!(report.passed());
//! ```
//!
//! ## What's inside
//!
//! - Nested, coalesced and fully coalesced kernel variants
//! - A device abstraction with a host emulator
//! - Exact verification against analytic or reference results

pub mod coalesce;
pub mod config;
pub mod device;
pub mod driver;
pub mod error;
pub mod matrix;
pub mod verify;

pub use coalesce::CoalesceFactor;
pub use config::RunConfig;
pub use device::{Device, DeviceKind, HostDevice, select_device};
pub use error::{Error, Result};
pub use matrix::fill::Fill;
pub use matrix::{NUM_COLS, NUM_ELEMENTS, NUM_ROWS};

/// Matrix multiply: C = A * B, using the loop structure selected by `factor`.
///
/// All three matrices are 4×4 and row-major. `c` is fully overwritten.
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`] if any slice does not hold exactly
/// [`NUM_ELEMENTS`] values. Nothing is written in that case.
pub fn multiply(a: &[f32], b: &[f32], c: &mut [f32], factor: CoalesceFactor) -> Result<()> {
    check_len("A", a)?;
    check_len("B", b)?;
    check_len("C", c)?;

    factor.kernel()(a, b, c);
    Ok(())
}

fn check_len(matrix: &'static str, buf: &[f32]) -> Result<()> {
    if buf.len() != NUM_ELEMENTS {
        return Err(Error::ShapeMismatch {
            matrix,
            expected: NUM_ELEMENTS,
            actual: buf.len(),
        });
    }
    Ok(())
}
