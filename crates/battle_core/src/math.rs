//! Fixed-point math utilities for deterministic resolution.
//!
//! All battle math uses fixed-point arithmetic to ensure
//! deterministic behavior across platforms. Floating-point
//! operations can produce different results on different CPUs.

use fixed::types::I32F32;

/// Fixed-point number type for all battle math.
///
/// Uses 32 bits for integer part and 32 bits for fractional part.
/// Range: approximately -2,147,483,648 to 2,147,483,647
/// Precision: approximately 0.00000000023
pub type Fixed = I32F32;

/// The full win-share scale (win shares run from 0 to 100).
pub const HUNDRED: Fixed = Fixed::from_bits(100i64 << 32);

/// Convert an integer percentage-scale numerator/denominator pair into a
/// 0-100 win share. Returns zero when the denominator is zero; that case is
/// a defined degenerate outcome, not an error.
///
/// The ratio is taken before scaling, so any `part <= whole` pair within the
/// fixed-point range yields an in-range share; totals in the hundreds of
/// millions are fine.
#[must_use]
pub fn percent_share(part: Fixed, whole: Fixed) -> Fixed {
    if whole == Fixed::ZERO {
        Fixed::ZERO
    } else {
        part / whole * HUNDRED
    }
}

/// Serde support for fixed-point numbers.
///
/// Serializes fixed-point numbers as their raw bit representation (i64)
/// to preserve exact precision across serialization boundaries.
pub mod fixed_serde {
    use super::Fixed;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Serialize a fixed-point number as its raw bit representation.
    pub fn serialize<S>(value: &Fixed, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value.to_bits().serialize(serializer)
    }

    /// Deserialize a fixed-point number from its raw bit representation.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Fixed, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = i64::deserialize(deserializer)?;
        Ok(Fixed::from_bits(bits))
    }
}
