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

//! Error conditions raised by the decimal engine.

use thiserror::Error;

/// The distinct failure conditions of a decimal engine call.
///
/// Every operation either succeeds with a decimal string or fails with exactly one of
/// these variants. Errors are local to the call which raised them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreciseError {
    /// The input was not a well-formed optionally-signed decimal literal.
    #[error("malformed decimal '{input}': {reason}")]
    Malformed { input: String, reason: &'static str },

    /// The divisor of a division or modulo had a zero magnitude.
    #[error("division by zero")]
    DivisionByZero,

    /// The requested number of fractional digits was outside the accepted range.
    #[error("invalid division precision {0}")]
    InvalidPrecision(i32),

    /// The value could not be represented by the target numeric type.
    #[error("value out of range: {0}")]
    Overflow(String),
}

impl PreciseError {
    /// Returns `true` if this is a [`PreciseError::DivisionByZero`].
    #[must_use]
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::DivisionByZero)
    }
}

#[cold]
pub(crate) fn malformed(input: &str, reason: &'static str) -> PreciseError {
    log::debug!("Rejected decimal input {input:?}: {reason}");
    PreciseError::Malformed {
        input: input.to_string(),
        reason,
    }
}

#[cold]
pub(crate) fn division_by_zero(dividend: &str) -> PreciseError {
    log::debug!("Rejected division of {dividend} by a zero magnitude");
    PreciseError::DivisionByZero
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_malformed_display() {
        let err = malformed("1.2.3", "multiple decimal points");
        assert_eq!(
            err.to_string(),
            "malformed decimal '1.2.3': multiple decimal points"
        );
    }

    #[rstest]
    #[case(PreciseError::DivisionByZero, true)]
    #[case(PreciseError::InvalidPrecision(-1), false)]
    #[case(PreciseError::Overflow("1e99".to_string()), false)]
    fn test_is_division_by_zero(#[case] err: PreciseError, #[case] expected: bool) {
        assert_eq!(err.is_division_by_zero(), expected);
    }
}
