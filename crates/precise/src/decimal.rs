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

//! Parsing, normalization and canonical formatting of decimal text.
//!
//! A [`DecimalValue`] holds a sign, the unscaled magnitude as decimal digits (most
//! significant first) and a scale giving the number of those digits which sit after
//! the decimal point. The value `-12.50` is therefore held as:
//!
//! | Field    | Value              |
//! |----------|--------------------|
//! | `sign`   | `Sign::Negative`   |
//! | `digits` | `[1, 2, 5, 0]`     |
//! | `scale`  | `2`                |
//!
//! # Invariants
//!
//! - `digits` is never empty and carries no leading zeros, except the single `0` of a
//!   zero magnitude.
//! - A zero magnitude always has `Sign::NonNegative`.
//! - `scale` is the number of fractional digits present in the source text. Only
//!   [`DecimalValue::canonical`] reduces it, by trimming trailing fractional zeros.

use std::fmt::Display;

use crate::error::{PreciseError, malformed};

/// The sign of a decimal value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Sign {
    Negative,
    NonNegative,
}

impl Sign {
    /// Returns the opposite sign.
    #[must_use]
    pub(crate) const fn flip(self) -> Self {
        match self {
            Self::Negative => Self::NonNegative,
            Self::NonNegative => Self::Negative,
        }
    }

    /// Returns the sign of a product or quotient of values with signs `self` and `other`.
    #[must_use]
    pub(crate) const fn product(self, other: Self) -> Self {
        match (self, other) {
            (Self::Negative, Self::NonNegative) | (Self::NonNegative, Self::Negative) => {
                Self::Negative
            }
            _ => Self::NonNegative,
        }
    }
}

/// A parsed decimal value, built fresh for every engine call.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct DecimalValue {
    pub(crate) sign: Sign,
    pub(crate) digits: Vec<u8>,
    pub(crate) scale: usize,
}

impl DecimalValue {
    /// Returns the canonical zero.
    #[must_use]
    pub(crate) fn zero() -> Self {
        Self {
            sign: Sign::NonNegative,
            digits: vec![0],
            scale: 0,
        }
    }

    /// Creates a value from raw parts, enforcing the representation invariants.
    #[must_use]
    pub(crate) fn from_parts(sign: Sign, mut digits: Vec<u8>, scale: usize) -> Self {
        let leading = digits
            .iter()
            .take_while(|d| **d == 0)
            .count()
            .min(digits.len().saturating_sub(1));
        digits.drain(..leading);

        if digits.is_empty() {
            digits.push(0);
        }

        let sign = if digits == [0] {
            Sign::NonNegative
        } else {
            sign
        };

        Self {
            sign,
            digits,
            scale,
        }
    }

    /// Parses `text` as an optionally signed decimal literal.
    ///
    /// Accepts an optional leading `+` or `-`, an integer part and an optional `.`
    /// followed by a fractional part. Either the integer or the fractional part may be
    /// empty, but not both. Whitespace, exponents and digit separators are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`PreciseError::Malformed`] if `text` is not a well-formed decimal literal.
    pub(crate) fn parse(text: &str) -> Result<Self, PreciseError> {
        if text.is_empty() {
            return Err(malformed(text, "empty string"));
        }

        let (sign, body) = if let Some(rest) = text.strip_prefix('-') {
            (Sign::Negative, rest)
        } else if let Some(rest) = text.strip_prefix('+') {
            (Sign::NonNegative, rest)
        } else {
            (Sign::NonNegative, text)
        };

        let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));

        if int_part.is_empty() && frac_part.is_empty() {
            return Err(malformed(text, "no digits"));
        }

        if frac_part.contains('.') {
            return Err(malformed(text, "multiple decimal points"));
        }

        let mut digits = Vec::with_capacity(int_part.len() + frac_part.len());
        for byte in int_part.bytes().chain(frac_part.bytes()) {
            if !byte.is_ascii_digit() {
                return Err(malformed(text, "unexpected character"));
            }
            digits.push(byte - b'0');
        }

        Ok(Self::from_parts(sign, digits, frac_part.len()))
    }

    /// Returns `true` if the magnitude is zero.
    #[must_use]
    pub(crate) fn is_zero(&self) -> bool {
        self.digits.iter().all(|d| *d == 0)
    }

    /// Returns `true` if the value is strictly negative.
    #[must_use]
    pub(crate) fn is_negative(&self) -> bool {
        self.sign == Sign::Negative && !self.is_zero()
    }

    /// Returns this value with `sign` applied (zero stays non-negative).
    #[must_use]
    pub(crate) fn with_sign(self, sign: Sign) -> Self {
        Self::from_parts(sign, self.digits, self.scale)
    }

    /// Trims trailing fractional zeros, yielding the shortest exact representation.
    #[must_use]
    pub(crate) fn canonical(mut self) -> Self {
        while self.scale > 0 && self.digits.last() == Some(&0) {
            self.digits.pop();
            self.scale -= 1;
        }

        if self.digits.is_empty() {
            return Self::zero();
        }

        self
    }
}

impl Display for DecimalValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut out = String::with_capacity(self.digits.len() + self.scale + 2);

        if self.is_negative() {
            out.push('-');
        }

        let to_char = |d: &u8| char::from(b'0' + d);
        let len = self.digits.len();

        if self.scale == 0 {
            out.extend(self.digits.iter().map(to_char));
        } else if len > self.scale {
            let (int_digits, frac_digits) = self.digits.split_at(len - self.scale);
            out.extend(int_digits.iter().map(to_char));
            out.push('.');
            out.extend(frac_digits.iter().map(to_char));
        } else {
            out.push_str("0.");
            out.extend(std::iter::repeat_n('0', self.scale - len));
            out.extend(self.digits.iter().map(to_char));
        }

        f.write_str(&out)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("0", Sign::NonNegative, vec![0], 0)]
    #[case("-0", Sign::NonNegative, vec![0], 0)]
    #[case("-0.000", Sign::NonNegative, vec![0], 3)]
    #[case("007", Sign::NonNegative, vec![7], 0)]
    #[case("+1.5", Sign::NonNegative, vec![1, 5], 1)]
    #[case("-12.50", Sign::Negative, vec![1, 2, 5, 0], 2)]
    #[case(".05", Sign::NonNegative, vec![5], 2)]
    #[case("0.05", Sign::NonNegative, vec![5], 2)]
    #[case("5.", Sign::NonNegative, vec![5], 0)]
    #[case("100", Sign::NonNegative, vec![1, 0, 0], 0)]
    fn test_parse(
        #[case] input: &str,
        #[case] sign: Sign,
        #[case] digits: Vec<u8>,
        #[case] scale: usize,
    ) {
        let value = DecimalValue::parse(input).unwrap();
        assert_eq!(value.sign, sign);
        assert_eq!(value.digits, digits);
        assert_eq!(value.scale, scale);
    }

    #[rstest]
    #[case("", "empty string")]
    #[case(".", "no digits")]
    #[case("-", "no digits")]
    #[case("+.", "no digits")]
    #[case("1.2.3", "multiple decimal points")]
    #[case(" 1", "unexpected character")]
    #[case("1 ", "unexpected character")]
    #[case("1e5", "unexpected character")]
    #[case("1,000", "unexpected character")]
    #[case("0x1F", "unexpected character")]
    #[case("--1", "unexpected character")]
    #[case("+-1", "unexpected character")]
    #[case("١٢", "unexpected character")]
    fn test_parse_malformed(#[case] input: &str, #[case] reason: &str) {
        match DecimalValue::parse(input) {
            Err(PreciseError::Malformed { input: got, reason: r }) => {
                assert_eq!(got, input);
                assert_eq!(r, reason);
            }
            other => panic!("expected malformed error, was {other:?}"),
        }
    }

    #[rstest]
    #[case("0")]
    #[case("1")]
    #[case("-1")]
    #[case("0.3")]
    #[case("-0.0005")]
    #[case("5086.58101322")]
    #[case("1.50")]
    #[case("123456789012345678901234567890.123456789012345678901234567890")]
    fn test_format_round_trip(#[case] input: &str) {
        assert_eq!(DecimalValue::parse(input).unwrap().to_string(), input);
    }

    #[rstest]
    #[case("+1.5", "1.5")]
    #[case(".5", "0.5")]
    #[case("-0", "0")]
    #[case("-0.00", "0.00")]
    #[case("0007.10", "7.10")]
    fn test_format_normalizes(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(DecimalValue::parse(input).unwrap().to_string(), expected);
    }

    #[rstest]
    #[case("1.500", "1.5")]
    #[case("-10.0", "-10")]
    #[case("0.000", "0")]
    #[case("-0.000", "0")]
    #[case("100", "100")]
    #[case("0.0100", "0.01")]
    fn test_canonical(#[case] input: &str, #[case] expected: &str) {
        let value = DecimalValue::parse(input).unwrap().canonical();
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    fn test_canonical_zero_is_zero() {
        assert_eq!(
            DecimalValue::parse("-0.00").unwrap().canonical(),
            DecimalValue::zero()
        );
    }

    #[rstest]
    #[case(Sign::Negative, Sign::Negative, Sign::NonNegative)]
    #[case(Sign::Negative, Sign::NonNegative, Sign::Negative)]
    #[case(Sign::NonNegative, Sign::Negative, Sign::Negative)]
    #[case(Sign::NonNegative, Sign::NonNegative, Sign::NonNegative)]
    fn test_sign_product(#[case] a: Sign, #[case] b: Sign, #[case] expected: Sign) {
        assert_eq!(a.product(b), expected);
    }

    #[rstest]
    fn test_with_sign_keeps_zero_non_negative() {
        let zero = DecimalValue::parse("0.0").unwrap().with_sign(Sign::Negative);
        assert_eq!(zero.sign, Sign::NonNegative);
        assert!(!zero.is_negative());
    }
}
