use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyModule;

use crate::MatrixError;

impl From<MatrixError> for PyErr {
    fn from(err: MatrixError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

create_binding!(matrix_add, crate::Matrix::add, [a, b], PyArray2);
create_binding!(matrix_subtract, crate::Matrix::subtract, [a, b], PyArray2);
create_binding!(matrix_multiply, crate::Matrix::multiply, [a, b], PyArray2);
create_binding!(matrix_scalar_multiply, crate::Matrix::scalar_multiply, [a, s], PyArray2);

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(matrix_add, m)?)?;
    m.add_function(wrap_pyfunction!(matrix_subtract, m)?)?;
    m.add_function(wrap_pyfunction!(matrix_multiply, m)?)?;
    m.add_function(wrap_pyfunction!(matrix_scalar_multiply, m)?)?;
    Ok(())
}
