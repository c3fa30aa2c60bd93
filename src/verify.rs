//! Exact, cell-by-cell result checking.

use crate::coalesce::CoalesceFactor;
use crate::error::{Error, Result};
use log::warn;

/// Compare `actual` against `expected` with exact float equality.
///
/// Every mismatching cell is logged; the first one is returned as
/// [`Error::ResultMismatch`]. A length difference is reported as a
/// [`Error::ShapeMismatch`] on the output.
pub fn verify(variant: CoalesceFactor, actual: &[f32], expected: &[f32]) -> Result<()> {
    if actual.len() != expected.len() {
        return Err(Error::ShapeMismatch {
            matrix: "C",
            expected: expected.len(),
            actual: actual.len(),
        });
    }

    let mut first = None;
    for (index, (&got, &want)) in actual.iter().zip(expected).enumerate() {
        if got != want {
            warn!("{variant}: cell {index} expected {want}, got {got}");
            first.get_or_insert(Error::ResultMismatch {
                variant,
                index,
                expected: want,
                actual: got,
            });
        }
    }

    match first {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_accepts_equal() {
        let v = [1.0f32, 2.0, 3.0];
        assert_eq!(verify(CoalesceFactor::Nested, &v, &v), Ok(()));
    }

    #[test]
    fn test_verify_reports_first_mismatch() {
        let expected = [1.0f32, 2.0, 3.0, 4.0];
        let actual = [1.0f32, 2.5, 3.0, 0.0];
        let err = verify(CoalesceFactor::Coalesced, &actual, &expected).unwrap_err();
        assert_eq!(
            err,
            Error::ResultMismatch {
                variant: CoalesceFactor::Coalesced,
                index: 1,
                expected: 2.0,
                actual: 2.5,
            }
        );
    }

    #[test]
    fn test_verify_is_exact() {
        let expected = [1.0f32];
        let actual = [1.0f32 + f32::EPSILON];
        assert!(verify(CoalesceFactor::Nested, &actual, &expected).is_err());
    }
}
