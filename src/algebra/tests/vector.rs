#![allow(non_snake_case)]
use crate::algebra::*;

#[test]
fn test_copy_from() {
    let x = vec![3., 0., 2., 1.];
    let mut y = vec![0.; 4];
    y.copy_from(&x);
    assert_eq!(x, y);
}

#[test]
fn test_scalarop() {
    let mut x = vec![3., 0., 2., 1.];
    x.scalarop(|x| -2. * x);
    assert_eq!(x, vec![-6., 0., -4., -2.]);
}

#[test]
fn test_set_scale_negate() {
    let mut x = [3., 0., 2., 1.];
    x.scale(3.);
    assert_eq!(x, [9., 0., 6., 3.]);
    x.negate();
    assert_eq!(x, [-9., 0., -6., -3.]);
    x.set(0.25);
    assert_eq!(x, [0.25; 4]);
}

#[test]
fn test_dot_and_norms() {
    let x = [1., -2., 2., 0.];
    let y = [2., 1., 3., 7.];
    assert_eq!(x.dot(&y), 6.);
    assert_eq!(x.sumsq(), 9.);
    assert_eq!(x.norm(), 3.);
    assert_eq!(x.norm_inf(), 2.);
    assert_eq!(x.sum(), 1.);
    assert_eq!(x.dist(&[1., -2., 2., 4.]), 4.);
    assert_eq!(x.norm_inf_diff(&y), 7.);
}

#[test]
fn test_norm_inf_nan() {
    let x = [1., f64::NAN, 2.];
    assert!(x.norm_inf().is_nan());
}

#[test]
fn test_long_sum() {
    // long enough to exercise the pairwise recursion
    let x: Vec<f64> = vec![0.1; 1001];
    assert!((x.sum() - 100.1).abs() < 1e-12);
    let idx: Vec<f64> = (1..=200).map(|i| i as f64).collect();
    assert_eq!(idx.sum(), 20100.);
    assert_eq!(idx.dot(&vec![1.; 200]), 20100.);
}

#[test]
fn test_minmax() {
    let x = [3., -1., 7., 0.];
    assert_eq!(x.minimum(), -1.);
    assert_eq!(x.maximum(), 7.);
}

#[test]
fn test_is_finite() {
    assert!([1., 2., 3.].is_finite());
    assert!(![1., f64::INFINITY, 3.].is_finite());
    assert!(![1., f64::NAN, 3.].is_finite());
}

#[test]
fn test_axpby() {
    let mut y = [1., 2., 3.];
    let x = [4., 5., 6.];
    y.axpby(2., &x, -1.);
    assert_eq!(y, [7., 8., 9.]);
}

#[test]
fn test_waxpby() {
    let mut w = [0.; 3];
    let x = [1., 2., 3.];
    let y = [4., 5., 6.];
    w.waxpby(-1., &x, 0.5, &y);
    assert_eq!(w, [1., 0.5, 0.]);
}

#[test]
fn test_scalar_clamp_and_div() {
    assert_eq!((2.0f64).clamp_to(0., 1.), 1.);
    assert_eq!((-2.0f64).clamp_to(0., 1.), 0.);
    assert_eq!((0.5f64).clamp_to(0., 1.), 0.5);
    assert!((f64::NAN).clamp_to(0., 1.).is_nan());

    assert_eq!((1.0f64).safe_div(4., -1.), 0.25);
    assert_eq!((1.0f64).safe_div(0., -1.), -1.);
    assert_eq!((1e300f64).safe_div(1e-300, 7.), 7.);
}

#[test]
fn test_operators() {
    let A = DenseOperator::<f64>::new(2, vec![2., 1., 1., 3.]).unwrap();
    let mut y = [0.; 2];
    A.apply(&mut y, &[1., -1.]);
    assert_eq!(y, [1., -2.]);
    assert_eq!(A.get(1, 0), 1.);

    let mut D = DiagonalOperator::new(vec![1., 2.]).unwrap();
    D.set_coeff(3.);
    D.apply(&mut y, &[1., 1.]);
    assert_eq!(y, [3., 6.]);
    assert_eq!(D.coeff(), 3.);

    let I = DenseOperator::<f64>::identity(3).unwrap();
    let mut z = [0.; 3];
    I.apply(&mut z, &[1., 2., 3.]);
    assert_eq!(z, [1., 2., 3.]);
}

#[test]
fn test_operator_errors() {
    assert_eq!(
        DenseOperator::<f64>::new(2, vec![1.; 3]).unwrap_err(),
        OperatorError::IncompatibleDimension {
            len: 3,
            expected: 4
        }
    );
    assert_eq!(
        DiagonalOperator::<f64>::new(vec![]).unwrap_err(),
        OperatorError::EmptyOperator
    );
    assert!(ChainLaplacianOperator::<f64>::new(0, 1, 1, 1.).is_err());
}
