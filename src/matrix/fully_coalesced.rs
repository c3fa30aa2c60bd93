use super::{NUM_COLS, NUM_ELEMENTS, NUM_ROWS, Scratch, check_dims};

/// Matrix multiply with all three levels of the compute pass merged.
///
/// The compute pass is one loop over the flat `(i, j, k)` space with `k`
/// varying fastest, accumulating straight into `tmp`. Load and store only
/// have two levels, so they are merged exactly as in
/// [`matmul_coalesced`](super::coalesced::matmul_coalesced).
///
/// # Panics
///
/// Panics if any slice does not hold exactly 16 elements. Nothing is
/// written to `out` in that case; use [`crate::multiply`] for a checked call.
pub fn matmul_fully_coalesced(a: &[f32], b: &[f32], out: &mut [f32]) {
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

    // tmp[i][j] starts at +0.0, matching the nested path's `sum` seed.
    for ijk in 0..NUM_ELEMENTS * NUM_COLS {
        let k = ijk % NUM_COLS;
        let ij = ijk / NUM_COLS;
        let (i, j) = (ij / NUM_COLS, ij % NUM_COLS);
        tmp[i][j] += a_local[i][k] * b_local[k][j];
    }

    for (idx, slot) in out.iter_mut().enumerate() {
        *slot = tmp[idx / NUM_COLS][idx % NUM_COLS];
    }
}
