use ndarray::{arr1, Array2};
use num_complex::Complex32;

use crate::init::Initializer;
use crate::layers::ComplexLinear;

#[test]
fn test_layer_creation() {
    let layer = ComplexLinear::new(3, 2).unwrap();
    assert_eq!(layer.weights.shape(), [2, 3]);
    assert_eq!(layer.biases.shape(), [2]);
    assert_eq!(layer.input_size(), 3);
    assert_eq!(layer.output_size(), 2);
    // Default Trabelsi initialization actually fills the weights
    assert!(layer.weights.iter().any(|z| z.norm() > 0.0));
}

#[test]
fn test_forward_shapes() {
    let layer = ComplexLinear::new(4, 6).unwrap();

    let input = arr1(&[Complex32::new(1.0, 0.0); 4]);
    let output = layer.forward(input.view());
    assert_eq!(output.shape(), [6]);

    let batch = Array2::from_elem((5, 4), Complex32::new(0.5, -0.5));
    let outputs = layer.forward_batch(batch.view());
    assert_eq!(outputs.shape(), [5, 6]);
}

#[test]
fn test_forward_with_eye_weights() {
    let layer = ComplexLinear::new_with_init(3, 3, &Initializer::Eye).unwrap();

    let input = arr1(&[
        Complex32::new(1.0, 0.0),
        Complex32::new(0.0, 1.0),
        Complex32::new(2.0, -1.0),
    ]);
    let output = layer.forward(input.view());

    // Identity weights are 1 + 1i on the diagonal
    let rot = Complex32::new(1.0, 1.0);
    for (&y, &x) in output.iter().zip(input.iter()) {
        assert!((y - rot * x).norm() < 1e-6);
    }
}

#[test]
fn test_reinit() {
    let mut layer = ComplexLinear::new(8, 8).unwrap();
    layer.reinit(&Initializer::Zeros).unwrap();
    assert!(layer.weights.iter().all(|&z| z == Complex32::new(0.0, 0.0)));
}

#[test]
fn test_builder_overrides() {
    let weights = Array2::from_elem((2, 3), Complex32::new(0.0, 1.0));
    let layer = ComplexLinear::new(3, 2)
        .unwrap()
        .with_weights(weights.clone());
    assert_eq!(layer.weights, weights);
}

#[test]
fn test_save_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layer.bin");
    let path = path.to_str().unwrap();

    let layer = ComplexLinear::new_with_init(
        6,
        4,
        &Initializer::XavierNormal { gain: 1.0 },
    )
    .unwrap();
    layer.save(path).unwrap();

    let restored = ComplexLinear::load(path).unwrap();
    assert_eq!(restored.weights, layer.weights);
    assert_eq!(restored.biases, layer.biases);
}
