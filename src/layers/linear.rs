use std::fs::File;
use std::io::{Read, Write};

use bincode::{deserialize, serialize};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis, Ix2};
use num_complex::Complex32;
use serde::{Deserialize, Serialize};

use crate::error::{ArgandError, Result};
use crate::init::{Initializer, TrabelsiCriterion};
use crate::param::ComplexParam;

/// A fully connected layer over complex-valued weights.
///
/// The weight matrix has shape `[output_size, input_size]` so the fan
/// conventions of [`crate::init`] apply directly. The layer is a forward-only
/// building block; gradient computation belongs to whatever framework hosts
/// it.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ComplexLinear {
    pub weights: Array2<Complex32>,
    pub biases: Array1<Complex32>,
}

impl ComplexLinear {
    /// Create a new layer with the given input and output sizes.
    /// Weights use the standard Trabelsi scheme with the Glorot criterion,
    /// biases start at zero.
    pub fn new(input_size: usize, output_size: usize) -> Result<Self> {
        Self::new_with_init(
            input_size,
            output_size,
            &Initializer::TrabelsiStandard {
                criterion: TrabelsiCriterion::Glorot,
            },
        )
    }

    /// Create a new layer with a specific weight initialization strategy.
    pub fn new_with_init(
        input_size: usize,
        output_size: usize,
        init: &Initializer,
    ) -> Result<Self> {
        let mut weight = ComplexParam::zeros(&[output_size, input_size]);
        init.apply(&mut weight)?;
        let weights = weight
            .into_complex()
            .into_dimensionality::<Ix2>()
            .map_err(|e| ArgandError::NumericalError(e.to_string()))?;
        Ok(ComplexLinear {
            weights,
            biases: Array1::zeros(output_size),
        })
    }

    pub fn with_weights(mut self, weights: Array2<Complex32>) -> Self {
        assert_eq!(weights.dim(), self.weights.dim());
        self.weights = weights;
        self
    }

    pub fn with_biases(mut self, biases: Array1<Complex32>) -> Self {
        assert_eq!(biases.dim(), self.biases.dim());
        self.biases = biases;
        self
    }

    /// Number of input features.
    pub fn input_size(&self) -> usize {
        self.weights.ncols()
    }

    /// Number of output features.
    pub fn output_size(&self) -> usize {
        self.weights.nrows()
    }

    /// Reinitialize the weights in place with another strategy.
    pub fn reinit(&mut self, init: &Initializer) -> Result<()> {
        let mut weight = ComplexParam::from_complex(self.weights.clone().into_dyn());
        init.apply(&mut weight)?;
        self.weights = weight
            .into_complex()
            .into_dimensionality::<Ix2>()
            .map_err(|e| ArgandError::NumericalError(e.to_string()))?;
        Ok(())
    }

    /// Forward pass for a single sample: `y = W x + b`.
    pub fn forward(&self, input: ArrayView1<Complex32>) -> Array1<Complex32> {
        let input = input.insert_axis(Axis(0));
        let output = self.forward_batch(input);
        output.index_axis_move(Axis(0), 0)
    }

    /// Forward pass for a batch of shape `[batch, input_size]`,
    /// returning `[batch, output_size]`.
    pub fn forward_batch(&self, inputs: ArrayView2<Complex32>) -> Array2<Complex32> {
        inputs.dot(&self.weights.t()) + &self.biases.clone().insert_axis(Axis(0))
    }

    /// Save the layer to a file
    pub fn save(&self, path: &str) -> Result<()> {
        let encoded = serialize(self)?;
        let mut file = File::create(path)?;
        file.write_all(&encoded)?;
        Ok(())
    }

    /// Load a layer from a file
    pub fn load(path: &str) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut buffer = Vec::new();
        file.read_to_end(&mut buffer)?;
        Ok(deserialize(&buffer)?)
    }
}
