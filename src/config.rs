//! Run configuration.

use crate::coalesce::CoalesceFactor;
use crate::device::DeviceKind;
use crate::matrix::fill::Fill;

/// Everything a single driver run needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub device: DeviceKind,
    /// Variants to execute, in order.
    pub factors: Vec<CoalesceFactor>,
    pub fill: Fill,
    /// Submit the variants from separate threads instead of one after another.
    pub concurrent: bool,
}

impl Default for RunConfig {
    /// The classic comparison: no coalescing against coalesce factor 2,
    /// on identity inputs, run one after the other on the emulator.
    fn default() -> Self {
        Self {
            device: DeviceKind::default(),
            factors: vec![CoalesceFactor::Nested, CoalesceFactor::Coalesced],
            fill: Fill::default(),
            concurrent: false,
        }
    }
}
