use crate::{Matrix, MatrixError};

pub mod ops_test;

/// `[[1,2,3],[4,5,6]]`
pub(crate) fn two_by_three() -> Matrix {
    Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap()
}

/// `[[7,8],[9,10],[11,12]]`
pub(crate) fn three_by_two() -> Matrix {
    Matrix::from_rows(&[[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]]).unwrap()
}

#[test]
fn test_display_row_major_with_trailing_spaces() {
    assert_eq!(two_by_three().to_string(), "1 2 3 \n4 5 6 \n");

    let fractional = Matrix::new(1, 2, vec![0.5, -1.25]).unwrap();
    assert_eq!(fractional.to_string(), "0.5 -1.25 \n");
}

#[test]
fn test_error_is_matchable() {
    let err = two_by_three().add(&three_by_two()).unwrap_err();
    assert!(
        matches!(err, MatrixError::DimensionMismatch { .. }),
        "unexpected error: {:?}",
        err
    );
}
