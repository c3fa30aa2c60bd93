use super::{NUM_COLS, NUM_ELEMENTS, NUM_ROWS, Scratch, check_dims};

/// Matrix multiply with the two outermost loop levels of every pass merged.
///
/// A single loop walks the flat `(i, j)` index and recovers the row and
/// column from it, so the load and store passes become one loop each and
/// the compute pass becomes a doubly nested loop with `k` innermost. The
/// per-cell accumulation order is the same as [`matmul_nested`], so the
/// results are bit-identical.
///
/// # Panics
///
/// Panics if any slice does not hold exactly 16 elements. Nothing is
/// written to `out` in that case; use [`crate::multiply`] for a checked call.
///
/// [`matmul_nested`]: super::nested::matmul_nested
pub fn matmul_coalesced(a: &[f32], b: &[f32], out: &mut [f32]) {
    check_dims(a, b, out);

    let mut a_local: Scratch = [[0.0; NUM_COLS]; NUM_ROWS];
    let mut b_local: Scratch = [[0.0; NUM_COLS]; NUM_ROWS];
    let mut tmp: Scratch = [[0.0; NUM_COLS]; NUM_ROWS];

    for idx in 0..NUM_ELEMENTS {
        let (i, j) = (idx / NUM_COLS, idx % NUM_COLS);
        a_local[i][j] = a[idx];
        b_local[i][j] = b[idx];
        tmp[i][j] = 0.0;
    }

    for ij in 0..NUM_ELEMENTS {
        let (i, j) = (ij / NUM_COLS, ij % NUM_COLS);
        let mut sum = 0.0f32;
        for k in 0..NUM_COLS {
            sum += a_local[i][k] * b_local[k][j];
        }
        tmp[i][j] = sum;
    }

    for (idx, slot) in out.iter_mut().enumerate() {
        *slot = tmp[idx / NUM_COLS][idx % NUM_COLS];
    }
}
