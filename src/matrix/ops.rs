use std::ops::Mul;

use ndarray::Array2;
use tracing::{debug, trace};

use super::{Matrix, MatrixOp};
use crate::error::{MatrixError, Result};

impl Matrix {
    /// 원소별 합. 두 행렬의 형태가 같아야 합니다.
    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        self.ensure_same_shape(other, MatrixOp::Addition)?;
        Ok(Matrix {
            data: &self.data + &other.data,
        })
    }

    /// 원소별 차. 두 행렬의 형태가 같아야 합니다.
    pub fn subtract(&self, other: &Matrix) -> Result<Matrix> {
        self.ensure_same_shape(other, MatrixOp::Subtraction)?;
        Ok(Matrix {
            data: &self.data - &other.data,
        })
    }

    /// 밀집 행렬 곱 `(n×m)·(m×p) -> (n×p)`.
    ///
    /// 각 원소는 `0.0`에서 시작해 `k = 0, 1, …, m-1` 오름차순으로 누적합니다.
    /// 부동소수점 결과의 재현성을 위해 이 순서는 바꾸지 않습니다 (BLAS 미사용).
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.columns() != other.rows() {
            return Err(self.mismatch(other, MatrixOp::Multiplication));
        }

        let (n, m, p) = (self.rows(), self.columns(), other.columns());
        let lhs = &self.data;
        let rhs = &other.data;
        let product = Array2::from_shape_fn((n, p), |(i, j)| {
            let mut sum = 0.0;
            for k in 0..m {
                sum += lhs[[i, k]] * rhs[[k, j]];
            }
            sum
        });
        trace!(rows = n, inner = m, columns = p, "dense matrix product");

        Ok(Matrix { data: product })
    }

    /// 스칼라 곱. 형태 검사가 없으므로 항상 성공합니다.
    pub fn scalar_multiply(&self, scalar: f64) -> Matrix {
        Matrix {
            data: self.data.mapv(|value| value * scalar),
        }
    }

    fn ensure_same_shape(&self, other: &Matrix, op: MatrixOp) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(self.mismatch(other, op));
        }
        Ok(())
    }

    fn mismatch(&self, other: &Matrix, op: MatrixOp) -> MatrixError {
        let (left, right) = (self.shape(), other.shape());
        debug!(%op, %left, %right, "matrix shape check failed");
        MatrixError::DimensionMismatch { op, left, right }
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, scalar: f64) -> Matrix {
        self.scalar_multiply(scalar)
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(self, scalar: f64) -> Matrix {
        self.scalar_multiply(scalar)
    }
}
