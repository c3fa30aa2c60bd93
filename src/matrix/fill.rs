//! Input matrices for a run and the result each one should produce.

use super::naive_ijk::matmul_naive_ijk;
use super::{NUM_COLS, NUM_ELEMENTS, NUM_ROWS};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// How the two input matrices are populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fill {
    /// A is the identity, `B[i][j] = i * j + 1`.
    #[default]
    Identity,
    /// Both matrices all zero.
    Zeros,
    /// Both matrices uniform in `[0, 1)`, drawn from a seeded RNG.
    Random { seed: u64 },
}

/// Build the flattened A and B for `fill`.
pub fn initialize_matrices(fill: Fill) -> (Vec<f32>, Vec<f32>) {
    match fill {
        Fill::Identity => {
            let mut a = vec![0.0f32; NUM_ELEMENTS];
            let mut b = vec![0.0f32; NUM_ELEMENTS];
            for i in 0..NUM_ROWS {
                let pos = i * NUM_COLS;
                a[pos + i] = 1.0;
                for j in 0..NUM_COLS {
                    b[pos + j] = (i * j + 1) as f32;
                }
            }
            (a, b)
        }
        Fill::Zeros => (vec![0.0f32; NUM_ELEMENTS], vec![0.0f32; NUM_ELEMENTS]),
        Fill::Random { seed } => {
            let mut rng = StdRng::seed_from_u64(seed);
            let a: Vec<f32> = (0..NUM_ELEMENTS).map(|_| rng.gen_range(0.0..1.0)).collect();
            let b: Vec<f32> = (0..NUM_ELEMENTS).map(|_| rng.gen_range(0.0..1.0)).collect();
            (a, b)
        }
    }
}

/// The product every variant must produce for inputs built by `fill`.
///
/// Identity and zero inputs have an analytic answer. Random inputs fall
/// back to the flat i-j-k reference loop on the host.
pub fn expected_output(fill: Fill, a: &[f32], b: &[f32]) -> Vec<f32> {
    match fill {
        Fill::Identity => b.to_vec(),
        Fill::Zeros => vec![0.0f32; NUM_ELEMENTS],
        Fill::Random { .. } => {
            let mut c = vec![0.0f32; NUM_ELEMENTS];
            matmul_naive_ijk(a, b, &mut c, NUM_ROWS, NUM_COLS, NUM_COLS);
            c
        }
    }
}
