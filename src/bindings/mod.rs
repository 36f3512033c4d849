#[macro_use]
mod macros;

mod complex;
mod matrix;

use pyo3::prelude::*;
use pyo3::types::PyModule;

/// complexcalc - 복소수와 밀집 행렬 연산
#[pymodule]
pub fn complexcalc(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    // Complex class
    complex::register(m)?;
    // Matrix operations
    matrix::register(m)?;
    Ok(())
}
