//! # 밀집 행렬
//!
//! `Matrix`는 `rows × columns` 크기의 `f64` 격자를 소유하는 불변 값입니다.
//! 모든 셀은 생성 시점에 채워져야 하며, 초기화되지 않은 셀을 가진 행렬은 만들 수 없습니다.
//! 0으로 채운 행렬이 필요하면 `Matrix::zeros`를 명시적으로 호출합니다.

use std::fmt;
use std::mem;

use approx::{AbsDiffEq, RelativeEq};
use ndarray::{Array2, ArrayView1, ArrayView2};

use crate::error::{MatrixError, Result};

mod ops;

#[cfg(test)]
mod __test__;

/// 행렬 형태 `(rows, columns)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub rows: usize,
    pub columns: usize,
}

impl Shape {
    pub const fn new(rows: usize, columns: usize) -> Self {
        Shape { rows, columns }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

/// 형태 검사가 필요한 행렬 연산
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatrixOp {
    Addition,
    Subtraction,
    Multiplication,
}

impl MatrixOp {
    pub(crate) fn requirement(self) -> &'static str {
        match self {
            MatrixOp::Addition | MatrixOp::Subtraction => "must match",
            MatrixOp::Multiplication => "invalid",
        }
    }
}

impl fmt::Display for MatrixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MatrixOp::Addition => "addition",
            MatrixOp::Subtraction => "subtraction",
            MatrixOp::Multiplication => "multiplication",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Array2<f64>,
}

impl Matrix {
    /// 행 우선(row-major) 평탄 버퍼로부터 생성
    pub fn new(rows: usize, columns: usize, entries: Vec<f64>) -> Result<Self> {
        ensure_shape(rows, columns)?;
        let len = entries.len();
        if len != rows * columns {
            return Err(MatrixError::DataLength { rows, columns, len });
        }
        let data = Array2::from_shape_vec((rows, columns), entries)
            .map_err(|_| MatrixError::DataLength { rows, columns, len })?;
        Ok(Matrix { data })
    }

    /// 행 목록으로부터 생성. 모든 행의 길이가 같아야 합니다.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let columns = rows.first().map_or(0, |row| row.as_ref().len());
        ensure_shape(rows.len(), columns)?;

        let mut entries = Vec::with_capacity(rows.len() * columns);
        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != columns {
                return Err(MatrixError::RaggedRows {
                    row: index,
                    expected: columns,
                    found: row.len(),
                });
            }
            entries.extend_from_slice(row);
        }
        Matrix::new(rows.len(), columns, entries)
    }

    pub fn from_array(data: Array2<f64>) -> Result<Self> {
        let (rows, columns) = data.dim();
        ensure_shape(rows, columns)?;
        Ok(Matrix { data })
    }

    /// `f(i, j)`로 각 셀을 채움
    pub fn from_fn<F>(rows: usize, columns: usize, f: F) -> Result<Self>
    where
        F: FnMut((usize, usize)) -> f64,
    {
        ensure_shape(rows, columns)?;
        Ok(Matrix {
            data: Array2::from_shape_fn((rows, columns), f),
        })
    }

    pub fn zeros(rows: usize, columns: usize) -> Result<Self> {
        ensure_shape(rows, columns)?;
        Ok(Matrix {
            data: Array2::zeros((rows, columns)),
        })
    }

    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn columns(&self) -> usize {
        self.data.ncols()
    }

    pub fn shape(&self) -> Shape {
        Shape::new(self.rows(), self.columns())
    }

    /// 범위를 벗어나면 `None`
    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        self.data.get((row, column)).copied()
    }

    pub fn row(&self, index: usize) -> Option<ArrayView1<'_, f64>> {
        (index < self.rows()).then(|| self.data.row(index))
    }

    pub fn as_array(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    pub fn into_array(self) -> Array2<f64> {
        self.data
    }
}

/// 두 차원이 모두 양수이고, 전체 버퍼 크기(바이트)가 `isize::MAX` 이하여야 함
fn ensure_shape(rows: usize, columns: usize) -> Result<()> {
    if rows == 0 || columns == 0 {
        return Err(MatrixError::EmptyShape { rows, columns });
    }
    rows.checked_mul(columns)
        .and_then(|len| len.checked_mul(mem::size_of::<f64>()))
        .filter(|&bytes| bytes <= isize::MAX as usize)
        .ok_or(MatrixError::ShapeOverflow { rows, columns })?;
    Ok(())
}

impl fmt::Display for Matrix {
    /// 행 우선. 각 원소 뒤에 공백 하나, 각 행 뒤에 줄바꿈.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.rows() {
            for value in row {
                write!(f, "{} ", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl AbsDiffEq for Matrix {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    // 형태가 다르면 ndarray 쪽에서 false
    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.data.abs_diff_eq(&other.data, epsilon)
    }
}

impl RelativeEq for Matrix {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.data.relative_eq(&other.data, epsilon, max_relative)
    }
}
