use super::{NUM_COLS, NUM_ROWS, Scratch, check_dims};

/// Matrix multiply with every pass in its natural loop nesting.
///
/// This is the uncoalesced reference: the load and store passes are a
/// doubly nested `i`/`j` loop and the compute pass a triply nested
/// `i`/`j`/`k` loop. `out` is fully overwritten.
///
/// # Arguments
///
/// * `a` - Matrix A (4 × 4), row-major
/// * `b` - Matrix B (4 × 4), row-major
/// * `out` - Matrix C (4 × 4), row-major, overwritten with A * B
///
/// # Panics
///
/// Panics if any slice does not hold exactly 16 elements. Nothing is
/// written to `out` in that case; use [`crate::multiply`] for a checked call.
pub fn matmul_nested(a: &[f32], b: &[f32], out: &mut [f32]) {
    check_dims(a, b, out);

    let mut a_local: Scratch = [[0.0; NUM_COLS]; NUM_ROWS];
    let mut b_local: Scratch = [[0.0; NUM_COLS]; NUM_ROWS];
    let mut tmp: Scratch = [[0.0; NUM_COLS]; NUM_ROWS];

    let mut idx = 0;
    for i in 0..NUM_ROWS {
        for j in 0..NUM_COLS {
            a_local[i][j] = a[idx];
            b_local[i][j] = b[idx];
            tmp[i][j] = 0.0;
            idx += 1;
        }
    }

    for i in 0..NUM_ROWS {
        for j in 0..NUM_COLS {
            let mut sum = 0.0f32;
            for k in 0..NUM_COLS {
                sum += a_local[i][k] * b_local[k][j];
            }
            tmp[i][j] = sum;
        }
    }

    idx = 0;
    for row in &tmp {
        for &value in row {
            out[idx] = value;
            idx += 1;
        }
    }
}
