//! Selecting a loop structuring at runtime.

use crate::matrix::coalesced::matmul_coalesced;
use crate::matrix::fully_coalesced::matmul_fully_coalesced;
use crate::matrix::nested::matmul_nested;
use std::fmt;
use std::str::FromStr;

/// How many nested loop levels the kernel merges.
///
/// Every variant computes the same result bit for bit; only the loop
/// control structure differs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CoalesceFactor {
    /// Factor 1: no coalescing.
    #[default]
    Nested,
    /// Factor 2: the two outermost levels merged.
    Coalesced,
    /// Factor 3: every level of the compute pass merged.
    FullyCoalesced,
}

impl CoalesceFactor {
    pub const ALL: [CoalesceFactor; 3] = [
        CoalesceFactor::Nested,
        CoalesceFactor::Coalesced,
        CoalesceFactor::FullyCoalesced,
    ];

    /// Number of loop levels merged into one.
    pub fn levels(self) -> u32 {
        match self {
            CoalesceFactor::Nested => 1,
            CoalesceFactor::Coalesced => 2,
            CoalesceFactor::FullyCoalesced => 3,
        }
    }

    /// The unchecked kernel for this variant.
    pub fn kernel(self) -> fn(&[f32], &[f32], &mut [f32]) {
        match self {
            CoalesceFactor::Nested => matmul_nested,
            CoalesceFactor::Coalesced => matmul_coalesced,
            CoalesceFactor::FullyCoalesced => matmul_fully_coalesced,
        }
    }
}

impl fmt::Display for CoalesceFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "coalesce factor {}", self.levels())
    }
}

impl TryFrom<u32> for CoalesceFactor {
    type Error = String;

    fn try_from(levels: u32) -> Result<Self, Self::Error> {
        match levels {
            1 => Ok(CoalesceFactor::Nested),
            2 => Ok(CoalesceFactor::Coalesced),
            3 => Ok(CoalesceFactor::FullyCoalesced),
            other => Err(format!(
                "coalesce factor must be 1, 2 or 3 (the kernel nests at most 3 levels), got {other}"
            )),
        }
    }
}

impl FromStr for CoalesceFactor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let levels: u32 = s
            .trim()
            .parse()
            .map_err(|_| format!("invalid coalesce factor '{s}'"))?;
        CoalesceFactor::try_from(levels)
    }
}
