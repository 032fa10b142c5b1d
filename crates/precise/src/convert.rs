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

//! Conversions between engine decimal strings and [`rust_decimal::Decimal`].
//!
//! `Decimal` is a 96-bit mantissa with a scale of at most 28, so conversion *into* it can
//! fail for values the engine handles without loss. Conversion out of it is always exact.

use rust_decimal::Decimal;

use crate::{
    decimal::{DecimalValue, Sign},
    error::PreciseError,
    value::Precise,
};

#[cold]
fn out_of_range(value: &str, reason: impl std::fmt::Display) -> PreciseError {
    log::debug!("Decimal conversion of {value} failed: {reason}");
    PreciseError::Overflow(format!("{value} ({reason})"))
}

/// Converts decimal text into a [`Decimal`] without rounding.
///
/// # Errors
///
/// Returns an error if:
/// - `value` is not a decimal literal.
/// - `value` has more significant digits or fractional digits than `Decimal` can hold.
pub fn to_decimal(value: &str) -> Result<Decimal, PreciseError> {
    let canonical = DecimalValue::parse(value)?.canonical().to_string();
    Decimal::from_str_exact(&canonical).map_err(|e| out_of_range(&canonical, e))
}

/// Converts a [`Decimal`] into canonical decimal text.
#[must_use]
pub fn from_decimal(value: Decimal) -> String {
    Precise::from(value).to_string()
}

impl From<Decimal> for Precise {
    fn from(value: Decimal) -> Self {
        let sign = if value.is_sign_negative() {
            Sign::Negative
        } else {
            Sign::NonNegative
        };
        let digits = value
            .mantissa()
            .unsigned_abs()
            .to_string()
            .bytes()
            .map(|b| b - b'0')
            .collect();
        Self::from_value(DecimalValue::from_parts(sign, digits, value.scale() as usize))
    }
}

impl TryFrom<&Precise> for Decimal {
    type Error = PreciseError;

    fn try_from(value: &Precise) -> Result<Self, Self::Error> {
        let text = value.as_value().to_string();
        Self::from_str_exact(&text).map_err(|e| out_of_range(&text, e))
    }
}

impl TryFrom<Precise> for Decimal {
    type Error = PreciseError;

    fn try_from(value: Precise) -> Result<Self, Self::Error> {
        Self::try_from(&value)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;

    #[rstest]
    #[case("0.1", dec!(0.1))]
    #[case("-2.50", dec!(-2.5))]
    #[case("007", dec!(7))]
    #[case("-0", dec!(0))]
    #[case("5086.58101322", dec!(5086.58101322))]
    fn test_to_decimal(#[case] input: &str, #[case] expected: Decimal) {
        assert_eq!(to_decimal(input).unwrap(), expected);
    }

    #[rstest]
    #[case("1.00000000000000000000000000001")] // scale 29
    #[case("1000000000000000000000000000000")] // beyond the 96-bit mantissa
    fn test_to_decimal_out_of_range(#[case] input: &str) {
        assert!(matches!(to_decimal(input), Err(PreciseError::Overflow(_))));
    }

    #[rstest]
    fn test_to_decimal_malformed() {
        assert!(matches!(
            to_decimal("1e5"),
            Err(PreciseError::Malformed { .. })
        ));
    }

    #[rstest]
    #[case(dec!(0.30), "0.3")]
    #[case(dec!(-10.0), "-10")]
    #[case(dec!(0), "0")]
    #[case(dec!(-0.0005), "-0.0005")]
    #[case(Decimal::MAX, "79228162514264337593543950335")]
    fn test_from_decimal(#[case] input: Decimal, #[case] expected: &str) {
        assert_eq!(from_decimal(input), expected);
    }

    #[rstest]
    fn test_precise_round_trip() {
        let precise = Precise::from(dec!(123.4500));
        assert_eq!(precise.to_string(), "123.45");
        assert_eq!(Decimal::try_from(precise).unwrap(), dec!(123.45));
    }

    #[rstest]
    fn test_engine_result_into_decimal() {
        let sum = crate::add("0.1", "0.2").unwrap();
        assert_eq!(to_decimal(&sum).unwrap(), dec!(0.3));
    }
}
