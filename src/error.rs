//! 라이브러리 경계에서 발생하는 오류 타입
//!
//! 복소수 연산은 오류를 만들지 않습니다. 0으로 나누기 등은 IEEE-754의
//! `NaN`/`inf`로 그대로 전파됩니다. 오류는 행렬 형태 검사와 입력 파싱에서만 생깁니다.

use std::num::ParseFloatError;

use thiserror::Error;

use crate::matrix::{MatrixOp, Shape};

pub type Result<T> = std::result::Result<T, MatrixError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// 피연산자 형태가 연산의 형태 규약을 위반함
    #[error("matrix dimensions {} for {op}: {left} and {right}", .op.requirement())]
    DimensionMismatch {
        op: MatrixOp,
        left: Shape,
        right: Shape,
    },

    #[error("matrix must have at least one row and one column, got {rows}x{columns}")]
    EmptyShape { rows: usize, columns: usize },

    #[error("a {rows}x{columns} matrix is too large to allocate")]
    ShapeOverflow { rows: usize, columns: usize },

    #[error("a {rows}x{columns} matrix needs rows * columns entries, got {len}")]
    DataLength {
        rows: usize,
        columns: usize,
        len: usize,
    },

    #[error("row {row} has {found} entries, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// `"re,im"` 형식의 복소수 파싱 오류
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseComplexError {
    #[error("expected `<real>,<imaginary>`, got {0:?}")]
    MissingSeparator(String),

    #[error("invalid {part} component {input:?}: {source}")]
    InvalidComponent {
        part: &'static str,
        input: String,
        #[source]
        source: ParseFloatError,
    },
}
