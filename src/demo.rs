//! 데모 실행기(`complexcalc` 바이너리)가 출력하는 연산 결과 목록

use crate::{Complex, Matrix, Result};

/// 각 복소수 연산을 한 번씩 실행하고 `(라벨, 결과)` 목록을 반환
pub fn complex_operations(lhs: Complex, rhs: Complex, exponent: f64) -> Vec<(&'static str, Complex)> {
    vec![
        ("Addition Result", lhs.add(rhs)),
        ("Subtraction Result", lhs.subtract(rhs)),
        ("Multiplication Result", lhs.multiply(rhs)),
        ("Division Result", lhs.divide(rhs)),
        ("Power Result", lhs.power(exponent)),
        ("Logarithm Result", lhs.logarithm()),
        ("Conjugate Result", lhs.conjugate()),
        ("Sine Result", lhs.sine()),
        ("Cosine Result", lhs.cosine()),
        ("Tangent Result", lhs.tangent()),
    ]
}

/// 각 행렬 연산을 한 번씩 실행. 형태 오류도 결과의 일부로 돌려줍니다.
pub fn matrix_operations(lhs: &Matrix, rhs: &Matrix, scalar: f64) -> Vec<(&'static str, Result<Matrix>)> {
    vec![
        ("Matrix Addition Result", lhs.add(rhs)),
        ("Matrix Subtraction Result", lhs.subtract(rhs)),
        ("Matrix Multiplication Result", lhs.multiply(rhs)),
        ("Matrix Scalar Multiplication Result", Ok(lhs.scalar_multiply(scalar))),
    ]
}

/// `[[1,2,3],[4,5,6]]`, `[[7,8],[9,10],[11,12]]`
pub fn sample_matrices() -> Result<(Matrix, Matrix)> {
    let lhs = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]])?;
    let rhs = Matrix::from_rows(&[[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]])?;
    Ok((lhs, rhs))
}
