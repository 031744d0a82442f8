//! Real-valued fill primitives.
//!
//! Every complex initializer in this crate boils down to running one of
//! these routines once for the real part and once for the imaginary part.
//! They operate in place on `ArrayD<f32>` and carry the standard real-valued
//! semantics; any complex-specific gain or slope adjustment happens in the
//! callers, not here.

use ndarray::{ArrayD, Ix2, IxDyn};
use ndarray_rand::rand_distr::{Normal, Uniform};
use ndarray_rand::RandomExt;

use crate::error::{ArgandError, Result};
use crate::init::fan::{calculate_gain, correct_fan, fan_in_and_fan_out, FanMode, Nonlinearity};

/// Fill with samples from U(low, high).
pub fn uniform(tensor: &mut ArrayD<f32>, low: f32, high: f32) -> Result<()> {
    if low >= high {
        return Err(ArgandError::invalid_parameter(
            "low",
            format!("lower bound {} must be below upper bound {}", low, high),
        ));
    }
    tensor.assign(&ArrayD::random(tensor.raw_dim(), Uniform::new(low, high)));
    Ok(())
}

/// Fill with samples from N(mean, std^2).
pub fn normal(tensor: &mut ArrayD<f32>, mean: f32, std: f32) -> Result<()> {
    let dist = Normal::new(mean, std)
        .map_err(|e| ArgandError::invalid_parameter("std", e.to_string()))?;
    tensor.assign(&ArrayD::random(tensor.raw_dim(), dist));
    Ok(())
}

/// Fill with a constant.
pub fn fill(tensor: &mut ArrayD<f32>, value: f32) {
    tensor.fill(value);
}

/// Fill with zeros.
pub fn zero(tensor: &mut ArrayD<f32>) {
    tensor.fill(0.0);
}

/// Write the identity matrix into a 2-dimensional tensor.
pub fn eye(tensor: &mut ArrayD<f32>) -> Result<()> {
    let ndim = tensor.ndim();
    let mut view = tensor
        .view_mut()
        .into_dimensionality::<Ix2>()
        .map_err(|_| {
            ArgandError::dimension_mismatch("2 dimensions", format!("{} dimensions", ndim))
        })?;
    view.fill(0.0);
    for i in 0..view.nrows().min(view.ncols()) {
        view[[i, i]] = 1.0;
    }
    Ok(())
}

/// Write the Dirac delta into a {3, 4, 5}-dimensional convolution kernel.
///
/// Preserves as many input channels as possible; with `groups > 1` each
/// group of output channels preserves identity independently.
pub fn dirac(tensor: &mut ArrayD<f32>, groups: usize) -> Result<()> {
    let ndim = tensor.ndim();
    if !(3..=5).contains(&ndim) {
        return Err(ArgandError::dimension_mismatch(
            "3, 4 or 5 dimensions",
            format!("{} dimensions", ndim),
        ));
    }
    if groups == 0 {
        return Err(ArgandError::invalid_parameter("groups", "must be positive"));
    }
    let shape = tensor.shape().to_vec();
    if shape[0] % groups != 0 {
        return Err(ArgandError::invalid_parameter(
            "groups",
            format!("output channels {} not divisible by {} groups", shape[0], groups),
        ));
    }

    let out_per_group = shape[0] / groups;
    let min_dim = out_per_group.min(shape[1]);

    tensor.fill(0.0);
    for g in 0..groups {
        for d in 0..min_dim {
            let mut index = vec![g * out_per_group + d, d];
            index.extend(shape[2..].iter().map(|&k| k / 2));
            tensor[IxDyn(&index)] = 1.0;
        }
    }
    Ok(())
}

/// Xavier/Glorot uniform: U(-a, a) with a = gain * sqrt(6 / (fan_in + fan_out)).
pub fn xavier_uniform(tensor: &mut ArrayD<f32>, gain: f32) -> Result<()> {
    let (fan_in, fan_out) = fan_in_and_fan_out(tensor.shape())?;
    let a = gain * (6.0 / (fan_in + fan_out) as f32).sqrt();
    uniform(tensor, -a, a)
}

/// Xavier/Glorot normal: N(0, std^2) with std = gain * sqrt(2 / (fan_in + fan_out)).
pub fn xavier_normal(tensor: &mut ArrayD<f32>, gain: f32) -> Result<()> {
    let (fan_in, fan_out) = fan_in_and_fan_out(tensor.shape())?;
    let std = gain * (2.0 / (fan_in + fan_out) as f32).sqrt();
    normal(tensor, 0.0, std)
}

/// Kaiming/He uniform: U(-b, b) with b = sqrt(3) * gain / sqrt(fan).
pub fn kaiming_uniform(
    tensor: &mut ArrayD<f32>,
    mode: FanMode,
    nonlinearity: Nonlinearity,
) -> Result<()> {
    let fan = correct_fan(tensor.shape(), mode)?;
    let std = calculate_gain(nonlinearity) / (fan as f32).sqrt();
    let bound = 3.0_f32.sqrt() * std;
    uniform(tensor, -bound, bound)
}

/// Kaiming/He normal: N(0, std^2) with std = gain / sqrt(fan).
pub fn kaiming_normal(
    tensor: &mut ArrayD<f32>,
    mode: FanMode,
    nonlinearity: Nonlinearity,
) -> Result<()> {
    let fan = correct_fan(tensor.shape(), mode)?;
    let std = calculate_gain(nonlinearity) / (fan as f32).sqrt();
    normal(tensor, 0.0, std)
}
