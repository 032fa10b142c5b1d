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

//! Sign-aware ordering of decimal values.
//!
//! All of the boolean predicates in this module are thin wrappers over [`compare`], which
//! is the only place where signs, zeros and differing scales are reconciled.

use std::cmp::Ordering;

use crate::{
    decimal::DecimalValue,
    error::PreciseError,
    magnitude,
};

/// Three-way comparison of two parsed values.
#[must_use]
pub(crate) fn compare_values(a: &DecimalValue, b: &DecimalValue) -> Ordering {
    match (a.is_negative(), b.is_negative()) {
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        _ => {}
    }

    let (lhs, rhs, _) = magnitude::align(a, b);
    let ordering = magnitude::cmp(&lhs, &rhs);

    if a.is_negative() {
        ordering.reverse()
    } else {
        ordering
    }
}

/// Compares the decimal strings `a` and `b` numerically.
///
/// `"1.50"` and `"1.5"` compare equal, as do `"0"` and `"-0.00"`.
///
/// # Errors
///
/// Returns [`PreciseError::Malformed`] if either input is not a decimal literal.
pub fn compare(a: &str, b: &str) -> Result<Ordering, PreciseError> {
    let a = DecimalValue::parse(a)?;
    let b = DecimalValue::parse(b)?;
    Ok(compare_values(&a, &b))
}

/// Returns whether `a > b`.
///
/// # Errors
///
/// Returns [`PreciseError::Malformed`] if either input is not a decimal literal.
pub fn gt(a: &str, b: &str) -> Result<bool, PreciseError> {
    compare(a, b).map(Ordering::is_gt)
}

/// Returns whether `a >= b`.
///
/// # Errors
///
/// Returns [`PreciseError::Malformed`] if either input is not a decimal literal.
pub fn ge(a: &str, b: &str) -> Result<bool, PreciseError> {
    compare(a, b).map(Ordering::is_ge)
}

/// Returns whether `a < b`.
///
/// # Errors
///
/// Returns [`PreciseError::Malformed`] if either input is not a decimal literal.
pub fn lt(a: &str, b: &str) -> Result<bool, PreciseError> {
    compare(a, b).map(Ordering::is_lt)
}

/// Returns whether `a <= b`.
///
/// # Errors
///
/// Returns [`PreciseError::Malformed`] if either input is not a decimal literal.
pub fn le(a: &str, b: &str) -> Result<bool, PreciseError> {
    compare(a, b).map(Ordering::is_le)
}

/// Returns whether `a` and `b` are numerically equal.
///
/// # Errors
///
/// Returns [`PreciseError::Malformed`] if either input is not a decimal literal.
pub fn eq(a: &str, b: &str) -> Result<bool, PreciseError> {
    compare(a, b).map(Ordering::is_eq)
}

/// Alias of [`eq`].
///
/// # Errors
///
/// Returns [`PreciseError::Malformed`] if either input is not a decimal literal.
#[inline]
pub fn equals(a: &str, b: &str) -> Result<bool, PreciseError> {
    eq(a, b)
}
