// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Signed decimal operations over decimal strings.
//!
//! Every function parses its operands, applies the sign rules on top of the unsigned
//! magnitude core, and formats the result. No state is held between calls, so all
//! functions may be called concurrently without synchronization.
//!
//! # Output form
//!
//! | Function     | Output                                                          |
//! |--------------|-----------------------------------------------------------------|
//! | [`div`]      | Exactly `precision` fractional digits, truncated toward zero.   |
//! | all others   | Canonical: no trailing fractional zeros, no negative zero.      |
//!
//! # Errors
//!
//! Arithmetic on well-formed input is total except for [`div`] and [`modulo`], which
//! reject a zero divisor and (for [`div`]) an out of range precision.

use std::cmp::Ordering;

use crate::{
    compare::compare_values,
    decimal::{DecimalValue, Sign},
    error::{PreciseError, division_by_zero},
    magnitude,
};

/// The number of fractional digits produced by division when the caller has no
/// particular precision in mind.
pub const DEFAULT_DIV_PRECISION: i32 = 18;

/// The maximum number of fractional digits a division may be asked to produce.
pub const MAX_DIV_PRECISION: i32 = 1024;

/// Checks that `precision` is an accepted number of fractional digits for division.
///
/// # Errors
///
/// Returns an error if `precision` is negative or exceeds [`MAX_DIV_PRECISION`].
pub fn check_div_precision(precision: i32) -> anyhow::Result<()> {
    if precision < 0 {
        anyhow::bail!("`precision` was negative, was {precision}")
    }

    if precision > MAX_DIV_PRECISION {
        anyhow::bail!(
            "`precision` exceeded maximum `MAX_DIV_PRECISION` ({MAX_DIV_PRECISION}), was {precision}"
        )
    }

    Ok(())
}

impl DecimalValue {
    /// Returns the sum of `self` and `other`, at the larger of the two scales.
    #[must_use]
    pub(crate) fn add(&self, other: &Self) -> Self {
        let (lhs, rhs, scale) = magnitude::align(self, other);

        if self.sign == other.sign {
            return Self::from_parts(self.sign, magnitude::add(&lhs, &rhs), scale);
        }

        match magnitude::cmp(&lhs, &rhs) {
            Ordering::Less => Self::from_parts(other.sign, magnitude::sub(&rhs, &lhs), scale),
            Ordering::Greater => Self::from_parts(self.sign, magnitude::sub(&lhs, &rhs), scale),
            Ordering::Equal => Self::from_parts(Sign::NonNegative, Vec::new(), scale),
        }
    }

    /// Returns `self - other`.
    #[must_use]
    pub(crate) fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Returns the product of `self` and `other`, at the sum of the two scales.
    #[must_use]
    pub(crate) fn mul(&self, other: &Self) -> Self {
        Self::from_parts(
            self.sign.product(other.sign),
            magnitude::mul(&self.digits, &other.digits),
            self.scale + other.scale,
        )
    }

    /// Returns `self / other` truncated toward zero after `precision` fractional digits.
    ///
    /// # Errors
    ///
    /// Returns [`PreciseError::DivisionByZero`] if `other` has a zero magnitude.
    pub(crate) fn div(&self, other: &Self, precision: usize) -> Result<Self, PreciseError> {
        if other.is_zero() {
            return Err(division_by_zero(&self.to_string()));
        }

        let quotient = magnitude::div_to_precision(
            &self.digits,
            self.scale,
            &other.digits,
            other.scale,
            precision,
        );

        Ok(Self::from_parts(
            self.sign.product(other.sign),
            quotient,
            precision,
        ))
    }

    /// Returns the remainder of truncating division, `self - other * trunc(self / other)`.
    ///
    /// The remainder carries the sign of `self`.
    ///
    /// # Errors
    ///
    /// Returns [`PreciseError::DivisionByZero`] if `other` has a zero magnitude.
    pub(crate) fn rem(&self, other: &Self) -> Result<Self, PreciseError> {
        if other.is_zero() {
            return Err(division_by_zero(&self.to_string()));
        }

        let quotient =
            magnitude::div_to_precision(&self.digits, self.scale, &other.digits, other.scale, 0);
        let product = Self::from_parts(
            Sign::NonNegative,
            magnitude::mul(&other.digits, &quotient),
            other.scale,
        );
        let dividend = self.clone().with_sign(Sign::NonNegative);

        let (lhs, rhs, scale) = magnitude::align(&dividend, &product);
        Ok(Self::from_parts(
            self.sign,
            magnitude::sub(&lhs, &rhs),
            scale,
        ))
    }

    /// Returns the value with its sign flipped (zero stays non-negative).
    #[must_use]
    pub(crate) fn neg(&self) -> Self {
        self.clone().with_sign(self.sign.flip())
    }

    /// Returns the magnitude of the value.
    #[must_use]
    pub(crate) fn abs(&self) -> Self {
        self.clone().with_sign(Sign::NonNegative)
    }
}

fn parse_pair(a: &str, b: &str) -> Result<(DecimalValue, DecimalValue), PreciseError> {
    Ok((DecimalValue::parse(a)?, DecimalValue::parse(b)?))
}

/// Validates `precision` and converts it into a digit count.
pub(crate) fn to_precision(precision: i32) -> Result<usize, PreciseError> {
    check_div_precision(precision).map_err(|e| {
        log::debug!("Rejected division: {e}");
        PreciseError::InvalidPrecision(precision)
    })?;
    usize::try_from(precision).map_err(|_| PreciseError::InvalidPrecision(precision))
}

/// Returns `a + b`.
///
/// # Errors
///
/// Returns [`PreciseError::Malformed`] if either input is not a decimal literal.
///
/// # Examples
///
/// ```
/// assert_eq!(nexuscore_precise::add("0.1", "0.2").unwrap(), "0.3");
/// ```
pub fn add(a: &str, b: &str) -> Result<String, PreciseError> {
    let (a, b) = parse_pair(a, b)?;
    Ok(a.add(&b).canonical().to_string())
}

/// Returns `a - b`.
///
/// # Errors
///
/// Returns [`PreciseError::Malformed`] if either input is not a decimal literal.
pub fn sub(a: &str, b: &str) -> Result<String, PreciseError> {
    let (a, b) = parse_pair(a, b)?;
    Ok(a.sub(&b).canonical().to_string())
}

/// Returns `a * b`.
///
/// # Errors
///
/// Returns [`PreciseError::Malformed`] if either input is not a decimal literal.
///
/// # Examples
///
/// ```
/// assert_eq!(nexuscore_precise::mul("-2.5", "4").unwrap(), "-10");
/// ```
pub fn mul(a: &str, b: &str) -> Result<String, PreciseError> {
    let (a, b) = parse_pair(a, b)?;
    Ok(a.mul(&b).canonical().to_string())
}

/// Returns `a / b` truncated (not rounded) to exactly `precision` fractional digits.
///
/// Use [`DEFAULT_DIV_PRECISION`] when no particular precision is required.
///
/// # Errors
///
/// Returns an error if:
/// - Either input is not a decimal literal.
/// - `precision` is negative or exceeds [`MAX_DIV_PRECISION`].
/// - `b` has a zero magnitude.
///
/// # Examples
///
/// ```
/// assert_eq!(nexuscore_precise::div("1", "3", 8).unwrap(), "0.33333333");
/// assert_eq!(nexuscore_precise::div("10", "4", 3).unwrap(), "2.500");
/// ```
pub fn div(a: &str, b: &str, precision: i32) -> Result<String, PreciseError> {
    let (a, b) = parse_pair(a, b)?;
    let precision = to_precision(precision)?;
    Ok(a.div(&b, precision)?.to_string())
}

/// Returns the remainder of `a / b` under truncating division.
///
/// The identity `a == b * trunc(a / b) + modulo(a, b)` holds exactly, and a non-zero
/// remainder carries the sign of `a`.
///
/// # Errors
///
/// Returns an error if either input is not a decimal literal, or if `b` has a zero magnitude.
pub fn modulo(a: &str, b: &str) -> Result<String, PreciseError> {
    let (a, b) = parse_pair(a, b)?;
    Ok(a.rem(&b)?.canonical().to_string())
}

/// Returns the absolute value of `a`.
///
/// # Errors
///
/// Returns [`PreciseError::Malformed`] if `a` is not a decimal literal.
pub fn abs(a: &str) -> Result<String, PreciseError> {
    Ok(DecimalValue::parse(a)?.abs().canonical().to_string())
}

/// Returns `-a` (zero stays `"0"`).
///
/// # Errors
///
/// Returns [`PreciseError::Malformed`] if `a` is not a decimal literal.
pub fn neg(a: &str) -> Result<String, PreciseError> {
    Ok(DecimalValue::parse(a)?.neg().canonical().to_string())
}

/// Returns the smaller of `a` and `b` in canonical form.
///
/// # Errors
///
/// Returns [`PreciseError::Malformed`] if either input is not a decimal literal.
pub fn min(a: &str, b: &str) -> Result<String, PreciseError> {
    let (a, b) = parse_pair(a, b)?;
    let smaller = match compare_values(&a, &b) {
        Ordering::Greater => b,
        _ => a,
    };
    Ok(smaller.canonical().to_string())
}

/// Returns the larger of `a` and `b` in canonical form.
///
/// # Errors
///
/// Returns [`PreciseError::Malformed`] if either input is not a decimal literal.
pub fn max(a: &str, b: &str) -> Result<String, PreciseError> {
    let (a, b) = parse_pair(a, b)?;
    let larger = match compare_values(&a, &b) {
        Ordering::Less => b,
        _ => a,
    };
    Ok(larger.canonical().to_string())
}

/// Returns the canonical form of `a`.
///
/// Strips redundant leading and trailing zeros and an explicit `+` sign, and maps
/// negative zero to `"0"`.
///
/// # Errors
///
/// Returns [`PreciseError::Malformed`] if `a` is not a decimal literal.
///
/// # Examples
///
/// ```
/// assert_eq!(nexuscore_precise::normalize("0012.3400").unwrap(), "12.34");
/// ```
pub fn normalize(a: &str) -> Result<String, PreciseError> {
    Ok(DecimalValue::parse(a)?.canonical().to_string())
}
