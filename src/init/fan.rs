use serde::{Deserialize, Serialize};

use crate::error::{ArgandError, Result};

/// Which fan count a Kaiming initializer scales by.
///
/// `FanIn` preserves the variance of activations in the forward pass,
/// `FanOut` preserves the variance of gradients in the backward pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FanMode {
    FanIn,
    FanOut,
}

/// Nonlinearity following the initialized layer, used to pick the gain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Nonlinearity {
    Linear,
    Sigmoid,
    Tanh,
    Relu,
    LeakyRelu { negative_slope: f32 },
}

/// Recommended gain value for the given nonlinearity.
///
/// | nonlinearity      | gain                      |
/// |-------------------|---------------------------|
/// | Linear / Sigmoid  | 1                         |
/// | Tanh              | 5/3                       |
/// | ReLU              | sqrt(2)                   |
/// | LeakyReLU(a)      | sqrt(2 / (1 + a^2))       |
pub fn calculate_gain(nonlinearity: Nonlinearity) -> f32 {
    match nonlinearity {
        Nonlinearity::Linear | Nonlinearity::Sigmoid => 1.0,
        Nonlinearity::Tanh => 5.0 / 3.0,
        Nonlinearity::Relu => 2.0_f32.sqrt(),
        Nonlinearity::LeakyRelu { negative_slope } => {
            (2.0 / (1.0 + negative_slope * negative_slope)).sqrt()
        }
    }
}

/// Fan-in and fan-out of a weight shape.
///
/// Dimension 0 is taken as the output channels and dimension 1 as the input
/// channels; any trailing dimensions form the receptive field. Shapes with
/// fewer than 2 dimensions have no well-defined fans.
pub fn fan_in_and_fan_out(shape: &[usize]) -> Result<(usize, usize)> {
    if shape.len() < 2 {
        return Err(ArgandError::dimension_mismatch(
            "at least 2 dimensions",
            format!("{} dimensions", shape.len()),
        ));
    }

    let receptive_field_size: usize = shape[2..].iter().product();
    let fan_in = shape[1] * receptive_field_size;
    let fan_out = shape[0] * receptive_field_size;

    Ok((fan_in, fan_out))
}

/// Select the fan count for a mode.
pub fn correct_fan(shape: &[usize], mode: FanMode) -> Result<usize> {
    let (fan_in, fan_out) = fan_in_and_fan_out(shape)?;
    Ok(match mode {
        FanMode::FanIn => fan_in,
        FanMode::FanOut => fan_out,
    })
}
