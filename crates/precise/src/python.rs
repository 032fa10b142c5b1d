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

//! Python bindings for the decimal string engine.

#![allow(clippy::doc_markdown, reason = "Python docstrings")]
#![allow(unsafe_code, reason = "PyO3 generated wrappers")]
#![allow(
    clippy::needless_pass_by_value,
    reason = "Python FFI requires owned types"
)]

use pyo3::{
    exceptions::{PyValueError, PyZeroDivisionError},
    prelude::*,
};
use pyo3_stub_gen::derive::gen_stub_pyfunction;

use crate::{PreciseError, compare, ops};

impl From<PreciseError> for PyErr {
    fn from(e: PreciseError) -> Self {
        match e {
            PreciseError::DivisionByZero => PyZeroDivisionError::new_err(e.to_string()),
            _ => PyValueError::new_err(e.to_string()),
        }
    }
}

/// Adds two decimal strings.
///
/// Parameters
/// ----------
/// a : str
/// b : str
///
/// Returns
/// -------
/// str
///
/// Examples
/// --------
/// >>> string_add("0.1", "0.2")
/// '0.3'
///
#[gen_stub_pyfunction(module = "nexuscore.precise")]
#[pyfunction(name = "string_add")]
pub fn py_add(a: String, b: String) -> PyResult<String> {
    Ok(ops::add(&a, &b)?)
}

/// Subtracts decimal string `b` from `a`.
#[gen_stub_pyfunction(module = "nexuscore.precise")]
#[pyfunction(name = "string_sub")]
pub fn py_sub(a: String, b: String) -> PyResult<String> {
    Ok(ops::sub(&a, &b)?)
}

/// Multiplies two decimal strings.
#[gen_stub_pyfunction(module = "nexuscore.precise")]
#[pyfunction(name = "string_mul")]
pub fn py_mul(a: String, b: String) -> PyResult<String> {
    Ok(ops::mul(&a, &b)?)
}

/// Divides `a` by `b`, truncating to `precision` fractional digits.
///
/// Parameters
/// ----------
/// a : str
/// b : str
/// precision : int, default 18
///
/// Returns
/// -------
/// str
///
/// Raises
/// ------
/// ZeroDivisionError
///     If `b` is zero.
/// ValueError
///     If an input is malformed or `precision` is out of range.
///
#[gen_stub_pyfunction(module = "nexuscore.precise")]
#[pyfunction(name = "string_div", signature = (a, b, precision = ops::DEFAULT_DIV_PRECISION))]
pub fn py_div(a: String, b: String, precision: i32) -> PyResult<String> {
    Ok(ops::div(&a, &b, precision)?)
}

/// Returns the remainder of `a / b` under truncating division.
#[gen_stub_pyfunction(module = "nexuscore.precise")]
#[pyfunction(name = "string_mod")]
pub fn py_mod(a: String, b: String) -> PyResult<String> {
    Ok(ops::modulo(&a, &b)?)
}

/// Returns the absolute value of a decimal string.
#[gen_stub_pyfunction(module = "nexuscore.precise")]
#[pyfunction(name = "string_abs")]
pub fn py_abs(a: String) -> PyResult<String> {
    Ok(ops::abs(&a)?)
}

/// Negates a decimal string.
#[gen_stub_pyfunction(module = "nexuscore.precise")]
#[pyfunction(name = "string_neg")]
pub fn py_neg(a: String) -> PyResult<String> {
    Ok(ops::neg(&a)?)
}

/// Returns the smaller of two decimal strings.
#[gen_stub_pyfunction(module = "nexuscore.precise")]
#[pyfunction(name = "string_min")]
pub fn py_min(a: String, b: String) -> PyResult<String> {
    Ok(ops::min(&a, &b)?)
}

/// Returns the larger of two decimal strings.
#[gen_stub_pyfunction(module = "nexuscore.precise")]
#[pyfunction(name = "string_max")]
pub fn py_max(a: String, b: String) -> PyResult<String> {
    Ok(ops::max(&a, &b)?)
}

/// Returns whether decimal string `a` is greater than `b`.
#[gen_stub_pyfunction(module = "nexuscore.precise")]
#[pyfunction(name = "string_gt")]
pub fn py_gt(a: String, b: String) -> PyResult<bool> {
    Ok(compare::gt(&a, &b)?)
}

/// Returns whether decimal string `a` is greater than or equal to `b`.
#[gen_stub_pyfunction(module = "nexuscore.precise")]
#[pyfunction(name = "string_ge")]
pub fn py_ge(a: String, b: String) -> PyResult<bool> {
    Ok(compare::ge(&a, &b)?)
}

/// Returns whether decimal string `a` is less than `b`.
#[gen_stub_pyfunction(module = "nexuscore.precise")]
#[pyfunction(name = "string_lt")]
pub fn py_lt(a: String, b: String) -> PyResult<bool> {
    Ok(compare::lt(&a, &b)?)
}

/// Returns whether decimal string `a` is less than or equal to `b`.
#[gen_stub_pyfunction(module = "nexuscore.precise")]
#[pyfunction(name = "string_le")]
pub fn py_le(a: String, b: String) -> PyResult<bool> {
    Ok(compare::le(&a, &b)?)
}

/// Returns whether two decimal strings are numerically equal.
///
/// Examples
/// --------
/// >>> string_eq("1.50", "1.5")
/// True
///
#[gen_stub_pyfunction(module = "nexuscore.precise")]
#[pyfunction(name = "string_eq")]
pub fn py_eq(a: String, b: String) -> PyResult<bool> {
    Ok(compare::eq(&a, &b)?)
}

/// Loads the decimal engine functions into the given Python module.
///
/// # Errors
///
/// Returns an error if any function fails to register.
pub fn precise(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_add, m)?)?;
    m.add_function(wrap_pyfunction!(py_sub, m)?)?;
    m.add_function(wrap_pyfunction!(py_mul, m)?)?;
    m.add_function(wrap_pyfunction!(py_div, m)?)?;
    m.add_function(wrap_pyfunction!(py_mod, m)?)?;
    m.add_function(wrap_pyfunction!(py_abs, m)?)?;
    m.add_function(wrap_pyfunction!(py_neg, m)?)?;
    m.add_function(wrap_pyfunction!(py_min, m)?)?;
    m.add_function(wrap_pyfunction!(py_max, m)?)?;
    m.add_function(wrap_pyfunction!(py_gt, m)?)?;
    m.add_function(wrap_pyfunction!(py_ge, m)?)?;
    m.add_function(wrap_pyfunction!(py_lt, m)?)?;
    m.add_function(wrap_pyfunction!(py_le, m)?)?;
    m.add_function(wrap_pyfunction!(py_eq, m)?)?;
    Ok(())
}
