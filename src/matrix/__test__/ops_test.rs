//! 행렬 합, 차, 곱, 스칼라 곱 테스트

use super::{three_by_two, two_by_three};
use crate::{Matrix, MatrixError, MatrixOp, Shape};
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_add_and_subtract() {
    let a = two_by_three();
    let b = Matrix::from_rows(&[[6.0, 5.0, 4.0], [3.0, 2.0, 1.0]]).unwrap();

    let sum = a.add(&b).unwrap();
    assert_eq!(sum.to_string(), "7 7 7 \n7 7 7 \n");

    let difference = a.subtract(&b).unwrap();
    assert_eq!(difference.to_string(), "-5 -3 -1 \n1 3 5 \n");
}

#[test]
fn test_add_rejects_transposed_shape() {
    let err = two_by_three().add(&three_by_two()).unwrap_err();
    assert_eq!(
        err,
        MatrixError::DimensionMismatch {
            op: MatrixOp::Addition,
            left: Shape::new(2, 3),
            right: Shape::new(3, 2),
        }
    );

    let err = two_by_three().subtract(&three_by_two()).unwrap_err();
    assert!(matches!(
        err,
        MatrixError::DimensionMismatch {
            op: MatrixOp::Subtraction,
            ..
        }
    ));
}

#[test]
fn test_multiply() {
    let product = two_by_three().multiply(&three_by_two()).unwrap();
    assert_eq!(product.shape(), Shape::new(2, 2));
    assert_eq!(
        product,
        Matrix::from_rows(&[[58.0, 64.0], [139.0, 154.0]]).unwrap()
    );
    assert_eq!(product.to_string(), "58 64 \n139 154 \n");

    let other_way = three_by_two().multiply(&two_by_three()).unwrap();
    assert_eq!(other_way.shape(), Shape::new(3, 3));
}

#[test]
fn test_multiply_rejects_inner_mismatch() {
    let err = two_by_three().multiply(&two_by_three()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "matrix dimensions invalid for multiplication: 2x3 and 2x3"
    );
}

#[test]
fn test_multiply_accumulates_in_ascending_order() {
    // 오름차순: (1e17 - 1e17) + 1 = 1
    // 내림차순이면 1 - 1e17 = -1e17 로 1이 사라져 결과가 0
    let row = Matrix::new(1, 3, vec![1e17, -1e17, 1.0]).unwrap();
    let column = Matrix::new(3, 1, vec![1.0, 1.0, 1.0]).unwrap();
    let product = row.multiply(&column).unwrap();
    assert_eq!(product.get(0, 0), Some(1.0));
}

#[test]
fn test_scalar_multiply() {
    let doubled = two_by_three().scalar_multiply(2.0);
    assert_eq!(doubled.to_string(), "2 4 6 \n8 10 12 \n");
    assert_eq!(&two_by_three() * 2.0, doubled);
    assert_eq!(two_by_three() * 2.0, doubled);
}

fn random_matrix(rng: &mut StdRng, rows: usize, columns: usize) -> Matrix {
    Matrix::from_fn(rows, columns, |_| rng.gen_range(-10.0..10.0)).unwrap()
}

#[test]
fn test_multiply_is_associative() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let (n, m, p, q) = (
            rng.gen_range(1..6),
            rng.gen_range(1..6),
            rng.gen_range(1..6),
            rng.gen_range(1..6),
        );
        let a = random_matrix(&mut rng, n, m);
        let b = random_matrix(&mut rng, m, p);
        let c = random_matrix(&mut rng, p, q);

        let left = a.multiply(&b).unwrap().multiply(&c).unwrap();
        let right = a.multiply(&b.multiply(&c).unwrap()).unwrap();
        assert_relative_eq!(left, right, epsilon = 1e-9, max_relative = 1e-12);
    }
}

#[test]
fn test_operations_do_not_mutate_operands() {
    let a = two_by_three();
    let b = two_by_three();
    let _ = a.add(&b).unwrap();
    let _ = a.scalar_multiply(3.0);
    assert_eq!(a, two_by_three());
    assert_eq!(b, two_by_three());
}
