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

//! Unsigned digit-sequence arithmetic.
//!
//! Magnitudes are slices of decimal digits (`0..=9`), most significant first. Functions in
//! this module ignore sign and scale entirely: callers align operands to a common scale
//! with [`align`] before adding, subtracting or comparing them.
//!
//! | Operation              | Cost                  |
//! |------------------------|-----------------------|
//! | [`add`], [`sub`]       | O(n)                  |
//! | [`mul`]                | O(n * m)              |
//! | [`div_to_precision`]   | O(n * m) per digit    |

use std::cmp::Ordering;

use crate::decimal::DecimalValue;

/// Returns `digits` without its leading zeros (empty for a zero magnitude).
#[inline]
fn strip_leading(digits: &[u8]) -> &[u8] {
    let zeros = digits.iter().take_while(|d| **d == 0).count();
    &digits[zeros..]
}

fn trim_leading_in_place(digits: &mut Vec<u8>) {
    let zeros = digits.iter().take_while(|d| **d == 0).count();
    digits.drain(..zeros);
}

/// Right-pads `digits` with zeros, lifting the scale from `from` to `to`.
#[must_use]
pub(crate) fn rescale(digits: &[u8], from: usize, to: usize) -> Vec<u8> {
    debug_assert!(to >= from, "cannot reduce scale from {from} to {to}");
    let mut out = Vec::with_capacity(digits.len() + to - from);
    out.extend_from_slice(digits);
    out.resize(digits.len() + to - from, 0);
    out
}

/// Aligns the magnitudes of `a` and `b` to the larger of their two scales.
///
/// Returns both padded digit sequences and the common scale.
#[must_use]
pub(crate) fn align(a: &DecimalValue, b: &DecimalValue) -> (Vec<u8>, Vec<u8>, usize) {
    let scale = a.scale.max(b.scale);
    (
        rescale(&a.digits, a.scale, scale),
        rescale(&b.digits, b.scale, scale),
        scale,
    )
}

/// Compares two aligned magnitudes.
///
/// Leading zeros are ignored, so the longer significant sequence is the larger, and
/// sequences of equal length compare digit by digit.
#[must_use]
pub(crate) fn cmp(a: &[u8], b: &[u8]) -> Ordering {
    let a = strip_leading(a);
    let b = strip_leading(b);
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Adds two aligned magnitudes with carry, right to left.
#[must_use]
pub(crate) fn add(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(a.len().max(b.len()) + 1);
    let mut lhs = a.iter().rev();
    let mut rhs = b.iter().rev();
    let mut carry = 0u8;

    loop {
        let (x, y) = match (lhs.next(), rhs.next()) {
            (None, None) => break,
            (x, y) => (x.copied().unwrap_or(0), y.copied().unwrap_or(0)),
        };
        let sum = x + y + carry;
        result.push(sum % 10);
        carry = sum / 10;
    }

    if carry > 0 {
        result.push(carry);
    }

    result.reverse();
    result
}

/// Subtracts the aligned magnitude `b` from `a` with borrow, right to left.
///
/// The caller guarantees `a >= b` (see [`cmp`]).
#[must_use]
pub(crate) fn sub(a: &[u8], b: &[u8]) -> Vec<u8> {
    debug_assert!(cmp(a, b) != Ordering::Less, "minuend smaller than subtrahend");

    let mut result = Vec::with_capacity(a.len());
    let mut rhs = b.iter().rev();
    let mut borrow = 0i8;

    for &x in a.iter().rev() {
        let y = rhs.next().copied().unwrap_or(0);
        let mut diff = x as i8 - y as i8 - borrow;
        if diff < 0 {
            diff += 10;
            borrow = 1;
        } else {
            borrow = 0;
        }
        result.push(diff as u8);
    }

    result.reverse();
    result
}

/// Multiplies two magnitudes by long multiplication.
///
/// Digit products are accumulated per column and carries are propagated once at the
/// end. The result scale is the sum of the operand scales.
#[must_use]
pub(crate) fn mul(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut columns = vec![0u64; a.len() + b.len()];

    for (i, &x) in a.iter().rev().enumerate() {
        if x == 0 {
            continue;
        }
        for (j, &y) in b.iter().rev().enumerate() {
            columns[i + j] += u64::from(x) * u64::from(y);
        }
    }

    let mut carry = 0u64;
    for column in &mut columns {
        let value = *column + carry;
        *column = value % 10;
        carry = value / 10;
    }

    while carry > 0 {
        columns.push(carry % 10);
        carry /= 10;
    }

    columns.iter().rev().map(|d| *d as u8).collect()
}

/// Divides integer `numerator` by non-zero integer `denominator`, discarding the remainder.
///
/// Produces one quotient digit per numerator digit by repeatedly subtracting the
/// denominator from the running remainder and counting.
fn div_integer(numerator: &[u8], denominator: &[u8]) -> Vec<u8> {
    let denominator = strip_leading(denominator);
    debug_assert!(!denominator.is_empty(), "division by a zero magnitude");

    let mut quotient = Vec::with_capacity(numerator.len());
    let mut remainder: Vec<u8> = Vec::with_capacity(denominator.len() + 1);

    for &digit in numerator {
        remainder.push(digit);
        trim_leading_in_place(&mut remainder);

        let mut count = 0u8;
        while cmp(&remainder, denominator) != Ordering::Less {
            remainder = sub(&remainder, denominator);
            trim_leading_in_place(&mut remainder);
            count += 1;
        }
        quotient.push(count);
    }

    quotient
}

/// Divides magnitude `a` (with scale `a_scale`) by non-zero magnitude `b` (with scale
/// `b_scale`), truncating the quotient after `precision` fractional digits.
///
/// The returned digits carry scale `precision`. The dividend is extended with synthetic
/// zeros so that long division continues past its last digit until the requested
/// fractional digits have been produced.
#[must_use]
pub(crate) fn div_to_precision(
    a: &[u8],
    a_scale: usize,
    b: &[u8],
    b_scale: usize,
    precision: usize,
) -> Vec<u8> {
    // q * 10^p = (A * 10^(b_scale + p)) / (B * 10^a_scale), with common powers cancelled
    let numerator_shift = b_scale + precision;
    let common = numerator_shift.min(a_scale);
    let numerator = rescale(a, 0, numerator_shift - common);
    let denominator = rescale(b, 0, a_scale - common);
    div_integer(&numerator, &denominator)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn digits(s: &str) -> Vec<u8> {
        s.bytes().map(|b| b - b'0').collect()
    }

    fn text(d: &[u8]) -> String {
        let stripped = strip_leading(d);
        if stripped.is_empty() {
            return "0".to_string();
        }
        stripped.iter().map(|d| char::from(b'0' + d)).collect()
    }

    #[rstest]
    #[case("0", "0", Ordering::Equal)]
    #[case("000", "0", Ordering::Equal)]
    #[case("0010", "10", Ordering::Equal)]
    #[case("9", "10", Ordering::Less)]
    #[case("100", "99", Ordering::Greater)]
    #[case("123", "124", Ordering::Less)]
    fn test_cmp(#[case] a: &str, #[case] b: &str, #[case] expected: Ordering) {
        assert_eq!(cmp(&digits(a), &digits(b)), expected);
    }

    #[rstest]
    #[case("0", "0", "0")]
    #[case("1", "2", "3")]
    #[case("999", "1", "1000")]
    #[case("5", "995", "1000")]
    #[case("123456789", "987654321", "1111111110")]
    fn test_add(#[case] a: &str, #[case] b: &str, #[case] expected: &str) {
        assert_eq!(text(&add(&digits(a), &digits(b))), expected);
    }

    #[rstest]
    #[case("0", "0", "0")]
    #[case("1000", "1", "999")]
    #[case("500", "500", "0")]
    #[case("508658101322", "000001908720", "508656192602")]
    #[case("10", "09", "1")]
    fn test_sub(#[case] a: &str, #[case] b: &str, #[case] expected: &str) {
        assert_eq!(text(&sub(&digits(a), &digits(b))), expected);
    }

    #[rstest]
    #[case("0", "12345", "0")]
    #[case("25", "4", "100")]
    #[case("99", "99", "9801")]
    #[case("123456789", "987654321", "121932631112635269")]
    fn test_mul(#[case] a: &str, #[case] b: &str, #[case] expected: &str) {
        assert_eq!(text(&mul(&digits(a), &digits(b))), expected);
    }

    #[rstest]
    #[case("1", 0, "3", 0, 8, "33333333")]
    #[case("10", 0, "2", 0, 0, "5")]
    #[case("7", 0, "2", 0, 0, "3")]
    #[case("15", 1, "5", 1, 2, "300")] // 1.5 / 0.5 = 3.00
    #[case("1", 0, "4", 0, 1, "2")] // 0.25 truncated to 0.2
    #[case("1", 3, "1", 0, 2, "0")] // 0.001 / 1 truncated to 0.00
    #[case("12345", 2, "5", 0, 3, "24690")] // 123.45 / 5 = 24.690
    #[case("1", 0, "7", 4, 0, "1428")] // 1 / 0.0007 = 1428.57...
    fn test_div_to_precision(
        #[case] a: &str,
        #[case] a_scale: usize,
        #[case] b: &str,
        #[case] b_scale: usize,
        #[case] precision: usize,
        #[case] expected: &str,
    ) {
        let quotient = div_to_precision(&digits(a), a_scale, &digits(b), b_scale, precision);
        assert_eq!(text(&quotient), expected);
    }

    #[rstest]
    fn test_rescale_pads_right() {
        assert_eq!(rescale(&[1, 5], 1, 4), vec![1, 5, 0, 0, 0]);
        assert_eq!(rescale(&[7], 0, 0), vec![7]);
    }

    #[rstest]
    fn test_align_uses_larger_scale() {
        let a = DecimalValue::parse("1.5").unwrap();
        let b = DecimalValue::parse("0.125").unwrap();
        let (x, y, scale) = align(&a, &b);
        assert_eq!(scale, 3);
        assert_eq!(x, digits("1500"));
        assert_eq!(y, digits("125"));
    }
}
