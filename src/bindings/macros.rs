// src/bindings/macros.rs

/// 행렬 PyFunction 바인딩 생성을 위한 매크로
///
/// 사용법:
/// `create_binding!(파이썬_함수명, Rust_메서드_경로, [인자1, 인자2], PyArray2);`
///
/// 예시:
/// `create_binding!(matrix_add, crate::Matrix::add, [a, b], PyArray2);`
///
/// `MatrixError`는 `ValueError`로 변환됩니다.
#[macro_export]
macro_rules! create_binding {
    // (a, b) -> Result<Matrix>
    ($py_fn_name:ident, $rust_fn:path, [a, b], PyArray2) => {
        #[pyo3::prelude::pyfunction]
        fn $py_fn_name<'py>(
            py: pyo3::prelude::Python<'py>,
            a: numpy::PyReadonlyArray2<f64>,
            b: numpy::PyReadonlyArray2<f64>,
        ) -> pyo3::PyResult<&'py numpy::PyArray2<f64>> {
            let lhs = $crate::Matrix::from_array(a.as_array().to_owned())?;
            let rhs = $crate::Matrix::from_array(b.as_array().to_owned())?;
            let result = $rust_fn(&lhs, &rhs)?;
            Ok(numpy::IntoPyArray::into_pyarray(result.into_array(), py))
        }
    };

    // (a, s) -> Matrix
    ($py_fn_name:ident, $rust_fn:path, [a, s], PyArray2) => {
        #[pyo3::prelude::pyfunction]
        fn $py_fn_name<'py>(
            py: pyo3::prelude::Python<'py>,
            a: numpy::PyReadonlyArray2<f64>,
            s: f64,
        ) -> pyo3::PyResult<&'py numpy::PyArray2<f64>> {
            let matrix = $crate::Matrix::from_array(a.as_array().to_owned())?;
            let result = $rust_fn(&matrix, s);
            Ok(numpy::IntoPyArray::into_pyarray(result.into_array(), py))
        }
    };
}
