use ndarray::ArrayD;
use num_complex::Complex32;

use crate::error::ArgandError;
use crate::init;
use crate::param::ComplexParam;

#[test]
fn test_zeros_shape() {
    let param = ComplexParam::zeros(&[3, 4, 5]);
    assert_eq!(param.shape(), [3, 4, 5]);
    assert_eq!(param.ndim(), 3);
    assert_eq!(param.len(), 60);
    assert!(param.is_complex());
}

#[test]
fn test_from_parts_shape_mismatch() {
    let re = ArrayD::<f32>::zeros(ndarray::IxDyn(&[3, 4]));
    let im = ArrayD::<f32>::zeros(ndarray::IxDyn(&[4, 3]));
    let result = ComplexParam::from_parts(re, im);
    assert!(matches!(result, Err(ArgandError::DimensionMismatch { .. })));
}

#[test]
fn test_representation_preserved() {
    let mut complex = ComplexParam::zeros(&[4, 4]);
    init::uniform_(&mut complex, -1.0, 1.0).unwrap();
    assert!(complex.is_complex());

    let re = ArrayD::<f32>::zeros(ndarray::IxDyn(&[4, 4]));
    let im = ArrayD::<f32>::zeros(ndarray::IxDyn(&[4, 4]));
    let mut split = ComplexParam::from_parts(re, im).unwrap();
    init::uniform_(&mut split, -1.0, 1.0).unwrap();
    assert!(!split.is_complex());
}

#[test]
fn test_with_parts_writes_back_to_complex() {
    let mut param = ComplexParam::zeros(&[2, 3]);
    init::constant_(&mut param, 0.3).unwrap();

    let weight = param.into_complex();
    for &z in weight.iter() {
        assert_eq!(z, Complex32::new(0.3, 0.3));
    }
}

#[test]
fn test_into_complex_joins_parts() {
    let re = ArrayD::from_elem(ndarray::IxDyn(&[2, 2]), 1.0f32);
    let im = ArrayD::from_elem(ndarray::IxDyn(&[2, 2]), -2.0f32);
    let param = ComplexParam::from_parts(re, im).unwrap();

    let weight = param.into_complex();
    for &z in weight.iter() {
        assert_eq!(z, Complex32::new(1.0, -2.0));
    }
}

#[test]
fn test_to_parts_round_trip() {
    let mut param = ComplexParam::zeros(&[8, 8]);
    init::normal_(&mut param, 0.0, 1.0).unwrap();

    let (re, im) = param.to_parts();
    let rejoined = ComplexParam::from_parts(re, im).unwrap().into_complex();
    let original = param.into_complex();
    assert_eq!(rejoined, original);
}
