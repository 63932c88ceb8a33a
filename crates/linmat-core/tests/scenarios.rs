//! End-to-end scenarios over the public API, using generated fixture data.

mod common;

use approx::assert_abs_diff_eq;
use linmat_core::prelude::*;

use common::*;

fn assert_slice_close(got: &[f64], want: &[f64], eps: f64) {
    assert_eq!(got.len(), want.len());
    for (g, w) in got.iter().zip(want) {
        assert_abs_diff_eq!(g, w, epsilon = eps);
    }
}

#[test]
fn construction_round_trip_fixtures() {
    for (shape, data) in [
        (SHAPE_A, &DATA_A[..]),
        (SHAPE_B, &DATA_B[..]),
        (SHAPE_C, &DATA_C[..]),
    ] {
        let m = Matrix::build(shape.0, shape.1, Some(data), Order::RowMajor).unwrap();
        assert_eq!(m.as_slice(), data);
    }
}

#[test]
fn column_major_fixtures_match_row_major() {
    for (shape, data, fdata) in [
        (SHAPE_A, &DATA_A[..], &FDATA_A[..]),
        (SHAPE_B, &DATA_B[..], &FDATA_B[..]),
        (SHAPE_C, &DATA_C[..], &FDATA_C[..]),
    ] {
        let m = Matrix::build(shape.0, shape.1, Some(fdata), Order::ColumnMajor).unwrap();
        assert_eq!(m.as_slice(), data);
    }
}

#[test]
fn addition_matches_reference_and_commutes() {
    let a = Matrix::from_row_major(SHAPE_A.0, SHAPE_A.1, &DATA_A).unwrap();
    let b = Matrix::from_col_major(SHAPE_B.0, SHAPE_B.1, &FDATA_B).unwrap();

    let mut ab = Matrix::zeros(2, 5).unwrap();
    let mut ba = Matrix::zeros(2, 5).unwrap();
    assert_eq!(add(&mut ab, &[&a, &b]).unwrap(), 2);
    assert_eq!(add(&mut ba, &[&b, &a]).unwrap(), 2);

    assert_eq!(ab, ba);
    assert_slice_close(ab.as_slice(), &SUM_AB, 1e-9);
}

#[test]
fn addition_shape_mismatch_is_reported() {
    let a = Matrix::from_row_major(SHAPE_A.0, SHAPE_A.1, &DATA_A).unwrap();
    let c = Matrix::from_row_major(SHAPE_C.0, SHAPE_C.1, &DATA_C).unwrap();
    let mut res = Matrix::zeros(2, 5).unwrap();
    assert!(matches!(
        add(&mut res, &[&a, &c]),
        Err(CoreError::DimensionMismatch { op: "add", .. })
    ));
    assert!(res.as_slice().iter().all(|&x| x == 0.0));
}

#[test]
fn multiplication_agrees_with_transposed_product() {
    // C · Aᵀ and (A · Cᵀ)ᵀ sum the same products in the same order.
    let a = Matrix::from_row_major(SHAPE_A.0, SHAPE_A.1, &DATA_A).unwrap();
    let c = Matrix::from_row_major(SHAPE_C.0, SHAPE_C.1, &DATA_C).unwrap();

    let mut cat = Matrix::zeros(4, 2).unwrap();
    multiply(&mut cat, &c, &a.transpose().unwrap()).unwrap();

    let act = a.matmul(&c.transpose().unwrap()).unwrap();
    assert_eq!(cat, act.transpose().unwrap());
}

#[test]
fn diagonal_rref_and_inverse() {
    let original = Matrix::from_row_major(2, 2, &[2.0, 0.0, 0.0, 2.0]).unwrap();

    let mut m = original.clone();
    assert_eq!(rref(&mut m), 2);
    assert_eq!(m.as_slice(), &[1.0, 0.0, 0.0, 1.0]);

    let inv = inverse(&original).unwrap();
    assert_eq!(inv.as_slice(), &[0.5, 0.0, 0.0, 0.5]);
}

#[test]
fn two_by_two_product() {
    let a = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]).unwrap();
    let b = Matrix::from_rows(&[&[5.0, 6.0], &[7.0, 8.0]]).unwrap();
    let mut c = Matrix::zeros(2, 2).unwrap();
    multiply(&mut c, &a, &b).unwrap();
    assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
}

#[test]
fn singular_solve_is_reported() {
    let m = Matrix::from_row_major(2, 2, &[1.0, 2.0, 2.0, 4.0]).unwrap();
    for y in [[0.0, 0.0], [1.0, 2.0], [3.0, -7.5]] {
        assert!(matches!(
            solve(&m, &y),
            Err(CoreError::SingularMatrix { .. })
        ));
    }
}

#[test]
fn fixture_rank_and_pseudoinverse() {
    // Random Gaussian data is full rank with probability one.
    let c = Matrix::from_row_major(SHAPE_C.0, SHAPE_C.1, &DATA_C).unwrap();
    assert_eq!(rank(&c), 4);

    let p = pseudoinverse(&c).unwrap();
    assert_eq!(p.shape(), (5, 4));

    // wide and full row rank: C · C⁺ = I
    let cp = c.matmul(&p).unwrap();
    assert!(cp.approx_eq(&Matrix::eye(4).unwrap(), 1e-8));
}

#[test]
fn gram_matrix_inverse_round_trip() {
    let c = Matrix::from_row_major(SHAPE_C.0, SHAPE_C.1, &DATA_C).unwrap();
    let gram = c.matmul(&c.transpose().unwrap()).unwrap();
    let inv = gram.inverse().unwrap();
    let eye = gram.matmul(&inv).unwrap();
    assert!(eye.approx_eq(&Matrix::eye(4).unwrap(), 1e-6));
}

#[test]
fn solve_matches_inverse_product() {
    let m = Matrix::from_row_major(3, 3, &[4.0, -2.0, 1.0, -2.0, 4.0, -2.0, 1.0, -2.0, 4.0])
        .unwrap();
    let y = [11.0, -16.0, 17.0];
    let x = solve(&m, &y).unwrap();

    let y_col = Matrix::from_row_major(3, 1, &y).unwrap();
    let via_inverse = m.inverse().unwrap().matmul(&y_col).unwrap();
    assert_slice_close(&x, via_inverse.as_slice(), 1e-10);
    // >>> np.linalg.solve([[4,-2,1],[-2,4,-2],[1,-2,4]], [11,-16,17])
    // array([ 1., -2.,  3.])
    assert_slice_close(&x, &[1.0, -2.0, 3.0], 1e-10);
}

#[test]
fn tracing_does_not_change_results() {
    let data = [3.0, 1.0, -2.0, 6.0, 2.0, -4.0, 1.0, 5.0, 0.5];

    let mut quiet = Matrix::from_row_major(3, 3, &data).unwrap();
    let quiet_rank = rref(&mut quiet);

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .finish();
    let (traced, traced_rank) = tracing::subscriber::with_default(subscriber, || {
        let mut m = Matrix::from_row_major(3, 3, &data).unwrap();
        let r = rref(&mut m);
        (m, r)
    });

    assert_eq!(quiet_rank, traced_rank);
    assert_eq!(quiet, traced);
}
