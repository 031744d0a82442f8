//! Complex-specific initialization schemes from Trabelsi et al. (2018),
//! "Deep Complex Networks".
//!
//! The *standard* scheme draws the magnitude of each weight from a Rayleigh
//! distribution and its phase uniformly, so the complex variance matches the
//! chosen criterion directly. The *independent* scheme builds a semi-unitary
//! matrix and rescales it, decorrelating the weight rows/columns.

use std::f32::consts::{PI, SQRT_2};

use ndarray::{Array2, ArrayD, Zip};
use ndarray_rand::rand_distr::{Normal, Uniform, Weibull};
use ndarray_rand::RandomExt;
use num_complex::Complex32;
use serde::{Deserialize, Serialize};

use crate::error::{ArgandError, Result};
use crate::init::fan::fan_in_and_fan_out;

/// Variance criterion for the Trabelsi schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrabelsiCriterion {
    /// Scale by 1 / sqrt(fan_in + fan_out), as in Glorot/Xavier.
    Glorot,
    /// Scale by 1 / sqrt(fan_in), as in He/Kaiming.
    He,
}

fn criterion_scale(shape: &[usize], criterion: TrabelsiCriterion) -> Result<f32> {
    let (fan_in, fan_out) = fan_in_and_fan_out(shape)?;
    Ok(match criterion {
        TrabelsiCriterion::Glorot => 1.0 / ((fan_in + fan_out) as f32).sqrt(),
        TrabelsiCriterion::He => 1.0 / (fan_in as f32).sqrt(),
    })
}

/// Standard Trabelsi initialization: Rayleigh magnitude, uniform phase.
pub fn standard(
    re: &mut ArrayD<f32>,
    im: &mut ArrayD<f32>,
    criterion: TrabelsiCriterion,
) -> Result<()> {
    let scale = criterion_scale(re.shape(), criterion)?;

    // Rayleigh(sigma) is Weibull with shape 2 and scale sigma * sqrt(2).
    let magnitude = Weibull::new(scale * SQRT_2, 2.0)
        .map_err(|e| ArgandError::invalid_parameter("scale", e.to_string()))?;
    let rho = ArrayD::random(re.raw_dim(), magnitude);
    let theta = ArrayD::random(re.raw_dim(), Uniform::new(-PI, PI));

    Zip::from(&mut *re)
        .and(&mut *im)
        .and(&rho)
        .and(&theta)
        .for_each(|r, i, &m, &t| {
            *r = m * t.cos();
            *i = m * t.sin();
        });
    Ok(())
}

/// Independent Trabelsi initialization: scaled semi-unitary matrix.
///
/// Tensors with more than 2 dimensions are flattened to
/// `(d0 * d1, d2 * ... * dn)` for the matrix construction and reshaped back.
pub fn independent(
    re: &mut ArrayD<f32>,
    im: &mut ArrayD<f32>,
    criterion: TrabelsiCriterion,
) -> Result<()> {
    let shape = re.shape().to_vec();
    let scale = criterion_scale(&shape, criterion)?;

    let (rows, cols) = if shape.len() == 2 {
        (shape[0], shape[1])
    } else {
        (shape[0] * shape[1], shape[2..].iter().product())
    };

    let mut matrix = semi_unitary(rows, cols)?;

    let std = complex_std(&matrix);
    if std <= f32::EPSILON {
        return Err(ArgandError::NumericalError(
            "semi-unitary matrix has vanishing variance".to_string(),
        ));
    }
    let factor = scale / std;
    matrix.mapv_inplace(|z| z * factor);

    let matrix = matrix
        .into_shape(re.raw_dim())
        .map_err(|e| ArgandError::NumericalError(e.to_string()))?;
    Zip::from(&mut *re)
        .and(&mut *im)
        .and(&matrix)
        .for_each(|r, i, &z| {
            *r = z.re;
            *i = z.im;
        });
    Ok(())
}

/// Random semi-unitary matrix: orthonormal rows when wide, orthonormal
/// columns when tall. Built by modified Gram-Schmidt over a random complex
/// matrix; a QR/SVD factorization would yield the same property, but the
/// stack has no complex factorization and the scale is normalized away by
/// the caller regardless.
fn semi_unitary(rows: usize, cols: usize) -> Result<Array2<Complex32>> {
    let dist = Normal::new(0.0f32, 1.0)
        .map_err(|e| ArgandError::NumericalError(e.to_string()))?;
    let re = Array2::random((rows, cols), dist);
    let im = Array2::random((rows, cols), dist);
    let mut z = Array2::<Complex32>::zeros((rows, cols));
    Zip::from(&mut z)
        .and(&re)
        .and(&im)
        .for_each(|c, &r, &i| *c = Complex32::new(r, i));

    if rows <= cols {
        orthonormalize_rows(z)
    } else {
        // Orthonormal rows of the transpose are orthonormal columns of the
        // original.
        let q = orthonormalize_rows(z.reversed_axes())?;
        Ok(q.reversed_axes().as_standard_layout().to_owned())
    }
}

/// Modified Gram-Schmidt over the rows, with the conjugate inner product.
fn orthonormalize_rows(mut m: Array2<Complex32>) -> Result<Array2<Complex32>> {
    for i in 0..m.nrows() {
        for j in 0..i {
            let qj = m.row(j).to_owned();
            let proj: Complex32 = qj
                .iter()
                .zip(m.row(i).iter())
                .map(|(q, r)| q.conj() * r)
                .sum();
            let mut ri = m.row_mut(i);
            Zip::from(&mut ri).and(&qj).for_each(|r, &q| *r -= proj * q);
        }
        let norm = m.row(i).iter().map(|z| z.norm_sqr()).sum::<f32>().sqrt();
        if norm <= f32::EPSILON {
            return Err(ArgandError::NumericalError(
                "degenerate random matrix during orthonormalization".to_string(),
            ));
        }
        m.row_mut(i).mapv_inplace(|z| z / norm);
    }
    Ok(m)
}

/// Elementwise standard deviation of a complex matrix,
/// sqrt(mean |z - mean(z)|^2).
fn complex_std(m: &Array2<Complex32>) -> f32 {
    let n = m.len() as f32;
    let mean = m.iter().copied().sum::<Complex32>() / n;
    let var = m.iter().map(|z| (*z - mean).norm_sqr()).sum::<f32>() / n;
    var.sqrt()
}
