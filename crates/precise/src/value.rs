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

//! An owned decimal value backed by the string engine.
//!
//! [`Precise`] is for callers which chain several operations and would rather not
//! re-parse intermediate strings. It is immutable: arithmetic returns new instances.
//!
//! A `Precise` is always held in canonical form, so structural equality and hashing
//! agree with numeric equality (`"1.50"` and `"1.5"` are the same value).

use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    iter::Sum,
    ops::{Add, Mul, Neg, Sub},
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    compare::compare_values,
    decimal::{DecimalValue, Sign},
    error::PreciseError,
    ops::to_precision,
};

/// An arbitrary-precision decimal value without binary floating-point error.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Precise(DecimalValue);

impl Precise {
    /// Creates a new [`Precise`] from decimal text.
    ///
    /// # Errors
    ///
    /// Returns [`PreciseError::Malformed`] if `value` is not a decimal literal.
    pub fn new_checked<T: AsRef<str>>(value: T) -> Result<Self, PreciseError> {
        DecimalValue::parse(value.as_ref()).map(Self::from_value)
    }

    /// Returns the zero value.
    #[must_use]
    pub fn zero() -> Self {
        Self(DecimalValue::zero())
    }

    pub(crate) fn from_value(value: DecimalValue) -> Self {
        Self(value.canonical())
    }

    pub(crate) fn as_value(&self) -> &DecimalValue {
        &self.0
    }

    /// Returns `true` if the value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns `true` if the value is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Returns `true` if the value is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        !self.is_zero() && !self.is_negative()
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::from_value(self.0.abs())
    }

    /// Returns `self / rhs` truncated after `precision` fractional digits.
    ///
    /// The quotient is held canonically, so trailing zeros are not retained; use
    /// [`crate::div`] when fixed-width output is required.
    ///
    /// # Errors
    ///
    /// Returns an error if `precision` is out of range or `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self, precision: i32) -> Result<Self, PreciseError> {
        self.0.div(&rhs.0, to_precision(precision)?).map(Self::from_value)
    }

    /// Returns the remainder of truncating division of `self` by `rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`PreciseError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_rem(&self, rhs: &Self) -> Result<Self, PreciseError> {
        self.0.rem(&rhs.0).map(Self::from_value)
    }

    /// Returns the smaller of `self` and `other`.
    #[must_use]
    pub fn min_of(self, other: Self) -> Self {
        std::cmp::min(self, other)
    }

    /// Returns the larger of `self` and `other`.
    #[must_use]
    pub fn max_of(self, other: Self) -> Self {
        std::cmp::max(self, other)
    }
}

impl Default for Precise {
    fn default() -> Self {
        Self::zero()
    }
}

impl FromStr for Precise {
    type Err = PreciseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new_checked(s)
    }
}

impl TryFrom<&str> for Precise {
    type Error = PreciseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new_checked(value)
    }
}

impl From<i64> for Precise {
    fn from(value: i64) -> Self {
        let sign = if value < 0 {
            Sign::Negative
        } else {
            Sign::NonNegative
        };
        let digits = value
            .unsigned_abs()
            .to_string()
            .bytes()
            .map(|b| b - b'0')
            .collect();
        Self::from_value(DecimalValue::from_parts(sign, digits, 0))
    }
}

impl PartialOrd for Precise {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Precise {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_values(&self.0, &other.0)
    }
}

impl Add for Precise {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_value(self.0.add(&rhs.0))
    }
}

impl Sub for Precise {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_value(self.0.sub(&rhs.0))
    }
}

impl Mul for Precise {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::from_value(self.0.mul(&rhs.0))
    }
}

impl Neg for Precise {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_value(self.0.neg())
    }
}

impl Sum for Precise {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl Debug for Precise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}('{}')", stringify!(Precise), self)
    }
}

impl Display for Precise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl Serialize for Precise {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Precise {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::new_checked(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rstest::{fixture, rstest};

    use super::*;
    use crate::ops::MAX_DIV_PRECISION;

    fn p(value: &str) -> Precise {
        Precise::new_checked(value).unwrap()
    }

    #[fixture]
    fn fills() -> Vec<Precise> {
        vec![p("0.1"), p("0.2"), p("0.3"), p("-0.05")]
    }

    #[rstest]
    fn test_canonical_equality_and_hash() {
        assert_eq!(p("1.50"), p("1.5"));
        assert_eq!(p("-0.00"), Precise::zero());

        let set: HashSet<Precise> = ["1.5", "1.50", "001.5000"].into_iter().map(p).collect();
        assert_eq!(set.len(), 1);
    }

    #[rstest]
    #[case("0.1", "0.2", "0.3")]
    #[case("-2.5", "4", "1.5")]
    fn test_add(#[case] a: &str, #[case] b: &str, #[case] expected: &str) {
        assert_eq!((p(a) + p(b)).to_string(), expected);
    }

    #[rstest]
    fn test_operators() {
        assert_eq!((p("-2.5") * p("4")).to_string(), "-10");
        assert_eq!((p("1") - p("1.25")).to_string(), "-0.25");
        assert_eq!((-p("0")).to_string(), "0");
        assert_eq!((-p("3.1")).to_string(), "-3.1");
        assert_eq!(p("-7").abs(), p("7"));
    }

    #[rstest]
    fn test_sum(fills: Vec<Precise>) {
        let total: Precise = fills.into_iter().sum();
        assert_eq!(total.to_string(), "0.55");
    }

    #[rstest]
    fn test_ordering() {
        let mut values = vec![p("1"), p("-0.5"), p("0"), p("0.001"), p("-12")];
        values.sort();
        let sorted: Vec<String> = values.iter().map(ToString::to_string).collect();
        assert_eq!(sorted, vec!["-12", "-0.5", "0", "0.001", "1"]);
        assert_eq!(p("0.0005").min_of(p("0.001")), p("0.0005"));
        assert_eq!(p("0.0005").max_of(p("0.001")), p("0.001"));
    }

    #[rstest]
    fn test_checked_div() {
        assert_eq!(p("1").checked_div(&p("3"), 8).unwrap(), p("0.33333333"));
        assert_eq!(p("10").checked_div(&p("4"), 4).unwrap().to_string(), "2.5");
        assert_eq!(
            p("1").checked_div(&Precise::zero(), 8),
            Err(PreciseError::DivisionByZero)
        );
        assert_eq!(
            p("1").checked_div(&p("3"), -2),
            Err(PreciseError::InvalidPrecision(-2))
        );
        assert_eq!(
            p("1").checked_div(&p("3"), MAX_DIV_PRECISION + 1),
            Err(PreciseError::InvalidPrecision(MAX_DIV_PRECISION + 1))
        );
        assert_eq!(
            p("1").checked_div(&Precise::zero(), -1),
            Err(PreciseError::InvalidPrecision(-1))
        );
    }

    #[rstest]
    fn test_checked_rem() {
        assert_eq!(p("-10").checked_rem(&p("3")).unwrap(), p("-1"));
        assert!(p("1").checked_rem(&p("0")).is_err());
    }

    #[rstest]
    #[case(0, "0")]
    #[case(42, "42")]
    #[case(-42, "-42")]
    #[case(i64::MIN, "-9223372036854775808")]
    fn test_from_i64(#[case] value: i64, #[case] expected: &str) {
        assert_eq!(Precise::from(value).to_string(), expected);
    }

    #[rstest]
    fn test_predicates() {
        assert!(p("0.0").is_zero());
        assert!(p("-0.1").is_negative());
        assert!(p("0.1").is_positive());
        assert!(!Precise::zero().is_positive());
    }

    #[rstest]
    fn test_debug_and_display() {
        assert_eq!(format!("{:?}", p("1.50")), "Precise('1.5')");
        assert_eq!(format!("{}", p("-0.0005")), "-0.0005");
    }

    #[rstest]
    fn test_serde_round_trip() {
        let value = p("5086.58101322");
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "\"5086.58101322\"");
        let parsed: Precise = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, value);
    }

    #[rstest]
    fn test_deserialize_rejects_malformed() {
        let result: Result<Precise, _> = serde_json::from_str("\"1e5\"");
        assert!(result.is_err());
    }

    #[rstest]
    fn test_parse_from_str() {
        let value: Precise = "0012.500".parse().unwrap();
        assert_eq!(value.to_string(), "12.5");
        assert!("".parse::<Precise>().is_err());
        assert!(Precise::try_from("1.2.3").is_err());
    }
}
