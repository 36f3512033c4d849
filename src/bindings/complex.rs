// src/bindings/complex.rs

//! # Complex를 위한 Python 바인딩
//!
//! `pyo3`를 사용하여 Rust `Complex` 값을 Python 클래스로 노출합니다.
//! 모든 메서드는 새 객체를 반환합니다.

use pyo3::prelude::*;
use pyo3::types::PyModule;

use crate::Complex;

#[pyclass(name = "Complex", module = "complexcalc")]
#[derive(Clone, Copy)]
pub struct PyComplex {
    inner: Complex,
}

impl From<Complex> for PyComplex {
    fn from(inner: Complex) -> Self {
        PyComplex { inner }
    }
}

#[pymethods]
impl PyComplex {
    #[new]
    #[pyo3(signature = (real, imaginary=0.0))]
    fn new(real: f64, imaginary: f64) -> Self {
        Complex::new(real, imaginary).into()
    }

    #[getter]
    fn real(&self) -> f64 {
        self.inner.real
    }

    #[getter]
    fn imaginary(&self) -> f64 {
        self.inner.imaginary
    }

    fn add(&self, other: PyComplex) -> Self {
        self.inner.add(other.inner).into()
    }

    fn subtract(&self, other: PyComplex) -> Self {
        self.inner.subtract(other.inner).into()
    }

    fn multiply(&self, other: PyComplex) -> Self {
        self.inner.multiply(other.inner).into()
    }

    /// 0으로 나누면 예외 대신 nan/inf 성분을 반환
    fn divide(&self, other: PyComplex) -> Self {
        self.inner.divide(other.inner).into()
    }

    fn power(&self, exponent: f64) -> Self {
        self.inner.power(exponent).into()
    }

    fn magnitude(&self) -> f64 {
        self.inner.magnitude()
    }

    fn angle(&self) -> f64 {
        self.inner.angle()
    }

    fn conjugate(&self) -> Self {
        self.inner.conjugate().into()
    }

    fn logarithm(&self) -> Self {
        self.inner.logarithm().into()
    }

    fn sine(&self) -> Self {
        self.inner.sine().into()
    }

    fn cosine(&self) -> Self {
        self.inner.cosine().into()
    }

    fn tangent(&self) -> Self {
        self.inner.tangent().into()
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        format!("Complex({:?}, {:?})", self.inner.real, self.inner.imaginary)
    }
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_class::<PyComplex>()?;
    Ok(())
}
