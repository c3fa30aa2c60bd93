//! The fixed-size matrix multiply kernel and its loop structurings.
//!
//! Every variant runs the same three passes over invocation-local scratch
//! memory: load the flattened inputs into 2-D arrays, accumulate the
//! products, then flatten the result back out. They differ only in how the
//! nested loops that drive each pass are laid out.
//!
//! Available variants:
//! - `nested`: one loop level per index (coalesce factor 1)
//! - `coalesced`: outer two levels merged (coalesce factor 2)
//! - `fully_coalesced`: all three compute levels merged (coalesce factor 3)

pub mod coalesced;
pub mod fill;
pub mod fully_coalesced;
pub mod naive_ijk;
pub mod nested;

/// Rows of every matrix in the kernel.
pub const NUM_ROWS: usize = 4;
/// Columns of every matrix in the kernel. Also the inner (k) dimension,
/// since the kernel only handles square operands.
pub const NUM_COLS: usize = 4;
/// Length of a flattened matrix buffer.
pub const NUM_ELEMENTS: usize = NUM_ROWS * NUM_COLS;

/// Invocation-local 2-D scratch storage.
pub(crate) type Scratch = [[f32; NUM_COLS]; NUM_ROWS];

/// Every variant rejects a malformed buffer the same way, before touching
/// `out`.
#[inline]
pub(crate) fn check_dims(a: &[f32], b: &[f32], out: &[f32]) {
    assert_eq!(a.len(), NUM_ELEMENTS, "A: expected {}x{}={} elements", NUM_ROWS, NUM_COLS, NUM_ELEMENTS);
    assert_eq!(b.len(), NUM_ELEMENTS, "B: expected {}x{}={} elements", NUM_ROWS, NUM_COLS, NUM_ELEMENTS);
    assert_eq!(out.len(), NUM_ELEMENTS, "C: expected {}x{}={} elements", NUM_ROWS, NUM_COLS, NUM_ELEMENTS);
}
