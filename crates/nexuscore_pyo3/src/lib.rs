use pyo3::prelude::*;

use nexuscore_precise::python::precise;

#[pymodule]
fn _nexuscore_pyo3(m: &Bound<'_, PyModule>) -> PyResult<()> {
    precise(m)?;
    m.add("DEFAULT_DIV_PRECISION", nexuscore_precise::DEFAULT_DIV_PRECISION)?;
    m.add("MAX_DIV_PRECISION", nexuscore_precise::MAX_DIV_PRECISION)?;
    Ok(())
}
