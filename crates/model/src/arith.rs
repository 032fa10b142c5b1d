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

//! Optional-operand arithmetic used by the reconciliation routines.
//!
//! Venue payloads frequently omit fields, so derivations work over `Option<&str>`
//! operands and yield `None` whenever an input is missing.

use nexuscore_precise::{self as precise, DEFAULT_DIV_PRECISION, PreciseError};

/// Divides `a` by `b` at the default precision and normalizes the quotient.
///
/// Returns `Ok(None)` if `b` has a zero magnitude, leaving the derived field unset.
///
/// # Errors
///
/// Returns an error if either input is not a decimal literal.
pub(crate) fn div_or_none(a: &str, b: &str) -> Result<Option<String>, PreciseError> {
    match precise::div(a, b, DEFAULT_DIV_PRECISION) {
        Ok(quotient) => precise::normalize(&quotient).map(Some),
        Err(PreciseError::DivisionByZero) => {
            log::debug!("Skipped derivation of {a} / {b}: zero divisor");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Applies `f` to both operands when both are present.
///
/// # Errors
///
/// Returns any error raised by `f`.
pub(crate) fn both<F>(a: Option<&str>, b: Option<&str>, f: F) -> Result<Option<String>, PreciseError>
where
    F: FnOnce(&str, &str) -> Result<String, PreciseError>,
{
    match (a, b) {
        (Some(a), Some(b)) => f(a, b).map(Some),
        _ => Ok(None),
    }
}

/// Clears `field` if it holds a zero, which venues send for "not reported".
///
/// # Errors
///
/// Returns an error if the field is not a decimal literal.
pub(crate) fn omit_zero(field: &mut Option<String>) -> Result<(), PreciseError> {
    if let Some(value) = field.as_deref() {
        if precise::eq(value, "0")? {
            *field = None;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("1", "4", Some("0.25"))]
    #[case("10", "2", Some("5"))]
    #[case("1", "0", None)]
    #[case("0", "0.000", None)]
    fn test_div_or_none(#[case] a: &str, #[case] b: &str, #[case] expected: Option<&str>) {
        assert_eq!(div_or_none(a, b).unwrap().as_deref(), expected);
    }

    #[rstest]
    fn test_div_or_none_propagates_malformed() {
        assert!(matches!(
            div_or_none("x", "0"),
            Err(PreciseError::Malformed { .. })
        ));
    }

    #[rstest]
    fn test_both() {
        assert_eq!(
            both(Some("1"), Some("2"), precise::add).unwrap().as_deref(),
            Some("3")
        );
        assert_eq!(both(None, Some("2"), precise::add).unwrap(), None);
        assert_eq!(both(Some("1"), None, precise::add).unwrap(), None);
    }

    #[rstest]
    #[case(Some("0"), None)]
    #[case(Some("-0.000"), None)]
    #[case(Some("0.01"), Some("0.01"))]
    #[case(None, None)]
    fn test_omit_zero(#[case] input: Option<&str>, #[case] expected: Option<&str>) {
        let mut field = input.map(str::to_string);
        omit_zero(&mut field).unwrap();
        assert_eq!(field.as_deref(), expected);
    }
}
