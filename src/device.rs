//! Execution devices a kernel can be submitted to.
//!
//! The kernel itself knows nothing about where it runs. A [`Device`]
//! supplies the two capabilities a run needs from its environment: execute
//! one multiply, and report a fault. Only the host emulator is backed by
//! real code; the accelerator targets report themselves unavailable.

use crate::coalesce::CoalesceFactor;
use crate::error::{Error, Result};
use log::{debug, error};
use std::fmt;
use std::time::Instant;

/// Which execution target a run asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceKind {
    /// Run the kernel on the host CPU.
    #[default]
    Emulator,
    /// Cycle-level simulator of the accelerator.
    Simulator,
    /// A physical accelerator board.
    Hardware,
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DeviceKind::Emulator => "emulator",
            DeviceKind::Simulator => "simulator",
            DeviceKind::Hardware => "hardware",
        };
        f.write_str(name)
    }
}

/// Somewhere a matrix multiply can be executed.
///
/// Implementations must be shareable across threads so that independent
/// variants can be submitted concurrently.
pub trait Device: Sync {
    /// Human readable device name.
    fn name(&self) -> &str;

    /// Run `factor`'s kernel to completion, writing A * B into `out`.
    fn submit(&self, factor: CoalesceFactor, a: &[f32], b: &[f32], out: &mut [f32]) -> Result<()>;

    /// Surface a fault raised while using this device.
    fn report_fault(&self, err: &Error) {
        error!("{}: {}", self.name(), err);
    }
}

/// Runs kernels synchronously on the calling thread.
#[derive(Debug, Default)]
pub struct HostDevice;

impl Device for HostDevice {
    fn name(&self) -> &str {
        "host cpu (emulator)"
    }

    fn submit(&self, factor: CoalesceFactor, a: &[f32], b: &[f32], out: &mut [f32]) -> Result<()> {
        let start = Instant::now();
        crate::multiply(a, b, out, factor)?;
        debug!("{} finished on {} in {:?}", factor, self.name(), start.elapsed());
        Ok(())
    }
}

/// Resolve `kind` to a usable device.
///
/// Failing to find a device is fatal for the run; nothing falls back to a
/// different target.
pub fn select_device(kind: DeviceKind) -> Result<Box<dyn Device>> {
    match kind {
        DeviceKind::Emulator => Ok(Box::new(HostDevice)),
        DeviceKind::Simulator => Err(Error::ResourceUnavailable {
            device: format!("fpga {kind}"),
            hint: "no simulator backend is available in this build; use the emulator device".into(),
        }),
        DeviceKind::Hardware => Err(Error::ResourceUnavailable {
            device: format!("fpga {kind}"),
            hint: "make sure the system has a correctly configured accelerator board, \
                   or target the emulator device instead"
                .into(),
        }),
    }
}
