//! # complexcalc
//!
//! 복소수(`Complex`)와 밀집 행렬(`Matrix`)을 `f64` 값 타입으로 제공합니다.
//! 두 타입은 서로 의존하지 않으며, 모든 연산은 새 값을 반환하는 순수 함수입니다.
//!
//! - 복소수 연산은 실패하지 않습니다. 원점 근처의 퇴화는 `NaN`/`inf`로 전파됩니다.
//! - 행렬 연산은 계산 전에 형태를 검사하고, 맞지 않으면 `MatrixError::DimensionMismatch`를 반환합니다.

pub mod complex;
pub mod demo;
pub mod error;
pub mod matrix;

#[cfg(feature = "python")]
mod bindings;

pub use complex::Complex;
pub use error::{MatrixError, ParseComplexError, Result};
pub use matrix::{Matrix, MatrixOp, Shape};
