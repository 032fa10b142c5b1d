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

//! Arbitrary-precision decimal arithmetic over decimal strings.
//!
//! Venue adapters receive prices, amounts and fees as decimal text and must never push
//! them through binary floating point. This crate performs all such money arithmetic
//! exactly: every operation takes decimal strings and returns a decimal string.
//!
//! ```
//! use nexuscore_precise as precise;
//!
//! assert_eq!(precise::add("0.1", "0.2").unwrap(), "0.3");
//! assert_eq!(precise::div("1", "3", 8).unwrap(), "0.33333333");
//! assert!(precise::eq("1.50", "1.5").unwrap());
//! ```
//!
//! # Pipeline
//!
//! Each call parses its operands into a sign, a digit sequence and a scale, aligns the
//! scales, runs the unsigned magnitude operation, applies the sign rule and formats the
//! result. Nothing is cached or shared between calls.
//!
//! # Precision
//!
//! Addition, subtraction, multiplication and modulo are exact. Only division truncates,
//! at a precision chosen by the caller ([`DEFAULT_DIV_PRECISION`] when unsure), and its
//! output always carries exactly that many fractional digits.
//!
//! # Feature flags
//!
//! - `python`: Enables Python bindings from [PyO3](https://pyo3.rs).
//! - `extension-module`: Builds as a Python extension module (used with `python`).

#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(clippy::missing_errors_doc)]

pub mod compare;
pub mod convert;
pub mod error;
pub mod ops;
pub mod value;

mod decimal;
mod magnitude;

#[cfg(feature = "python")]
pub mod python;

// Re-exports
pub use compare::{compare, eq, equals, ge, gt, le, lt};
pub use convert::{from_decimal, to_decimal};
pub use error::PreciseError;
pub use ops::{
    DEFAULT_DIV_PRECISION, MAX_DIV_PRECISION, abs, add, check_div_precision, div, max, min,
    modulo, mul, neg, normalize, sub,
};
pub use value::Precise;
