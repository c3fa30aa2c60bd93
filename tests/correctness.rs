use loop_coalesce::matrix::coalesced::matmul_coalesced;
use loop_coalesce::matrix::fully_coalesced::matmul_fully_coalesced;
use loop_coalesce::matrix::naive_ijk::matmul_naive_ijk;
use loop_coalesce::matrix::nested::matmul_nested;
use loop_coalesce::{CoalesceFactor, Error, Fill, NUM_ELEMENTS, RunConfig, driver, multiply};

fn assert_matrices_equal(expected: &[f32], actual: &[f32], name: &str) {
    assert_eq!(expected.len(), actual.len(), "{}: length mismatch", name);
    for i in 0..expected.len() {
        assert!(
            expected[i].to_bits() == actual[i].to_bits(),
            "{}: mismatch at index {}: expected {}, got {}",
            name,
            i,
            expected[i],
            actual[i]
        );
    }
}

fn identity() -> Vec<f32> {
    let mut a = vec![0.0f32; NUM_ELEMENTS];
    for i in 0..4 {
        a[i * 4 + i] = 1.0;
    }
    a
}

fn patterned(modulus: usize, offset: f32) -> Vec<f32> {
    (0..NUM_ELEMENTS).map(|i| (i % modulus) as f32 * 0.37 - offset).collect()
}

// ============================================================
// Known-value scenario
// ============================================================

#[test]
fn test_identity_times_pattern_is_pattern() {
    let a = identity();
    let mut b = vec![0.0f32; NUM_ELEMENTS];
    for i in 0..4 {
        for j in 0..4 {
            b[i * 4 + j] = (i * j + 1) as f32;
        }
    }

    for factor in CoalesceFactor::ALL {
        let mut c = vec![0.0f32; NUM_ELEMENTS];
        multiply(&a, &b, &mut c, factor).unwrap();
        assert_eq!(
            c,
            vec![1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 3.0, 4.0, 1.0, 3.0, 5.0, 7.0, 1.0, 4.0, 7.0, 10.0],
            "{factor}"
        );
    }
}

#[test]
fn test_identity_on_the_right() {
    let a = patterned(7, 1.0);
    let b = identity();

    for factor in CoalesceFactor::ALL {
        let mut c = vec![0.0f32; NUM_ELEMENTS];
        multiply(&a, &b, &mut c, factor).unwrap();
        assert_matrices_equal(&a, &c, &format!("A*I {factor}"));
    }
}

#[test]
fn test_all_zero_inputs() {
    let zeros = vec![0.0f32; NUM_ELEMENTS];
    for factor in CoalesceFactor::ALL {
        let mut c = vec![9.0f32; NUM_ELEMENTS];
        multiply(&zeros, &zeros, &mut c, factor).unwrap();
        assert_matrices_equal(&zeros, &c, &format!("zeros {factor}"));
    }
}

#[test]
fn test_known_product() {
    // A = [[1..4], [5..8], ...], B = all twos: every cell of row i is 2 * row sum.
    let a: Vec<f32> = (1..=16).map(|v| v as f32).collect();
    let b = vec![2.0f32; NUM_ELEMENTS];
    let mut c = vec![0.0f32; NUM_ELEMENTS];

    multiply(&a, &b, &mut c, CoalesceFactor::FullyCoalesced).unwrap();

    let expected: Vec<f32> = [20.0, 52.0, 84.0, 116.0]
        .iter()
        .flat_map(|&v| [v; 4])
        .collect();
    assert_eq!(c, expected);
}

// ============================================================
// Variant equivalence
// ============================================================

#[test]
fn test_variants_bit_identical() {
    let cases = [
        (patterned(5, 0.0), patterned(3, 0.5)),
        (patterned(11, 2.0), patterned(13, -1.25)),
        (
            (0..NUM_ELEMENTS).map(|i| 1.0e-7 * (i as f32 + 1.0)).collect(),
            (0..NUM_ELEMENTS).map(|i| 3.0e7 / (i as f32 + 1.0)).collect(),
        ),
    ];

    for (case, (a, b)) in cases.iter().enumerate() {
        let mut c_nested = vec![0.0f32; NUM_ELEMENTS];
        let mut c_coalesced = vec![0.0f32; NUM_ELEMENTS];
        let mut c_fully = vec![0.0f32; NUM_ELEMENTS];
        let mut c_reference = vec![0.0f32; NUM_ELEMENTS];

        matmul_nested(a, b, &mut c_nested);
        matmul_coalesced(a, b, &mut c_coalesced);
        matmul_fully_coalesced(a, b, &mut c_fully);
        matmul_naive_ijk(a, b, &mut c_reference, 4, 4, 4);

        assert_matrices_equal(&c_nested, &c_coalesced, &format!("case {case} coalesced"));
        assert_matrices_equal(&c_nested, &c_fully, &format!("case {case} fully coalesced"));
        assert_matrices_equal(&c_nested, &c_reference, &format!("case {case} reference"));
    }
}

#[test]
fn test_non_finite_inputs_propagate_identically() {
    let mut a = patterned(7, 1.0);
    let mut b = patterned(3, 0.0);
    a[2] = f32::INFINITY;
    b[9] = f32::NAN;
    b[15] = f32::NEG_INFINITY;

    let mut c_nested = vec![0.0f32; NUM_ELEMENTS];
    let mut c_coalesced = vec![0.0f32; NUM_ELEMENTS];
    matmul_nested(&a, &b, &mut c_nested);
    matmul_coalesced(&a, &b, &mut c_coalesced);

    assert_matrices_equal(&c_nested, &c_coalesced, "non-finite");
    assert!(c_nested.iter().any(|v| v.is_nan()));
}

// ============================================================
// Overwrite and determinism (C = A*B, not C += A*B)
// ============================================================

#[test]
fn test_output_is_overwritten() {
    let a = patterned(5, 0.0);
    let b = patterned(3, 0.0);

    let mut c_clean = vec![0.0f32; NUM_ELEMENTS];
    matmul_nested(&a, &b, &mut c_clean);

    for factor in CoalesceFactor::ALL {
        let mut c_dirty = vec![5.0f32; NUM_ELEMENTS];
        multiply(&a, &b, &mut c_dirty, factor).unwrap();
        assert_matrices_equal(&c_clean, &c_dirty, &format!("overwrite {factor}"));
    }
}

#[test]
fn test_repeated_calls_are_deterministic() {
    let a = patterned(7, 0.3);
    let b = patterned(4, 0.9);

    for factor in CoalesceFactor::ALL {
        let mut first = vec![0.0f32; NUM_ELEMENTS];
        multiply(&a, &b, &mut first, factor).unwrap();
        for _ in 0..10 {
            let mut again = vec![0.0f32; NUM_ELEMENTS];
            multiply(&a, &b, &mut again, factor).unwrap();
            assert_matrices_equal(&first, &again, &format!("repeat {factor}"));
        }
    }
}

// ============================================================
// Shape checks
// ============================================================

#[test]
fn test_wrong_lengths_are_rejected() {
    let ok = vec![0.0f32; NUM_ELEMENTS];
    let short = vec![0.0f32; NUM_ELEMENTS - 1];
    let mut out = vec![3.0f32; NUM_ELEMENTS];

    let err = multiply(&short, &ok, &mut out, CoalesceFactor::Nested).unwrap_err();
    assert_eq!(err, Error::ShapeMismatch { matrix: "A", expected: 16, actual: 15 });

    let err = multiply(&ok, &short, &mut out, CoalesceFactor::Coalesced).unwrap_err();
    assert_eq!(err, Error::ShapeMismatch { matrix: "B", expected: 16, actual: 15 });

    let mut long = vec![0.0f32; NUM_ELEMENTS + 4];
    let err = multiply(&ok, &ok, &mut long, CoalesceFactor::FullyCoalesced).unwrap_err();
    assert_eq!(err, Error::ShapeMismatch { matrix: "C", expected: 16, actual: 20 });

    // Rejected before anything is written.
    assert!(out.iter().all(|&v| v == 3.0));
}

#[test]
#[should_panic(expected = "C: expected 4x4=16 elements")]
fn test_nested_panics_on_short_output() {
    let a = vec![1.0f32; NUM_ELEMENTS];
    let mut out = vec![0.0f32; NUM_ELEMENTS - 1];
    matmul_nested(&a, &a, &mut out);
}

#[test]
#[should_panic(expected = "C: expected 4x4=16 elements")]
fn test_coalesced_panics_on_short_output() {
    let a = vec![1.0f32; NUM_ELEMENTS];
    let mut out = vec![0.0f32; NUM_ELEMENTS - 1];
    matmul_coalesced(&a, &a, &mut out);
}

#[test]
#[should_panic(expected = "C: expected 4x4=16 elements")]
fn test_fully_coalesced_panics_on_short_output() {
    let a = vec![1.0f32; NUM_ELEMENTS];
    let mut out = vec![0.0f32; NUM_ELEMENTS - 1];
    matmul_fully_coalesced(&a, &a, &mut out);
}

#[test]
#[should_panic(expected = "B: expected 4x4=16 elements")]
fn test_kernel_panics_on_long_input() {
    let a = vec![1.0f32; NUM_ELEMENTS];
    let b = vec![1.0f32; NUM_ELEMENTS + 1];
    let mut out = vec![0.0f32; NUM_ELEMENTS];
    CoalesceFactor::Coalesced.kernel()(&a, &b, &mut out);
}

#[test]
fn test_every_kernel_rejects_before_writing() {
    let a = vec![1.0f32; NUM_ELEMENTS];
    for factor in CoalesceFactor::ALL {
        let mut out = vec![-1.0f32; NUM_ELEMENTS - 1];
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            factor.kernel()(&a, &a, &mut out);
        }));
        assert!(result.is_err(), "{factor} accepted a short output");
        assert!(out.iter().all(|&v| v == -1.0), "{factor} wrote before panicking");
    }
}

// ============================================================
// Reference loop on other shapes
// ============================================================

#[test]
fn test_reference_2x3_times_3x2() {
    let a = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]; // 2x3
    let b = vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0]; // 3x2
    let mut c = vec![0.0; 4];

    matmul_naive_ijk(&a, &b, &mut c, 2, 2, 3);

    assert_eq!(c, vec![58.0, 64.0, 139.0, 154.0]);
}

// ============================================================
// Driver
// ============================================================

#[test]
fn test_driver_every_fill_passes() {
    for fill in [Fill::Identity, Fill::Zeros, Fill::Random { seed: 1 }, Fill::Random { seed: 99 }] {
        let config = RunConfig {
            factors: CoalesceFactor::ALL.to_vec(),
            fill,
            ..RunConfig::default()
        };
        let report = driver::run(&config).unwrap();
        assert!(report.passed(), "{fill:?}: {:?}", report.failures);
        for variant in &report.outputs {
            assert_eq!(variant.output.len(), NUM_ELEMENTS);
        }
    }
}

#[test]
fn test_driver_default_outputs_equal_b() {
    let report = driver::run(&RunConfig::default()).unwrap();
    let (_, b) = loop_coalesce::matrix::fill::initialize_matrices(Fill::Identity);
    assert_eq!(report.expected, b);
    for variant in &report.outputs {
        assert_matrices_equal(&b, &variant.output, &variant.factor.to_string());
    }
}
