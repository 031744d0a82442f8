//! # Complex Parameter Container
//!
//! Complex-valued weights come in two layouts in practice: a single array of
//! complex scalars, or a pair of real arrays holding the real and imaginary
//! parts separately (the layout used when the surrounding framework only
//! tracks real gradients). [`ComplexParam`] accepts either, lets the
//! initializers in [`crate::init`] work on both parts uniformly, and hands
//! the weight back in whichever representation it was given.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use argand::param::ComplexParam;
//! use argand::init;
//!
//! let mut weight = ComplexParam::zeros(&[64, 32]);
//! init::xavier_uniform_(&mut weight, 1.0).unwrap();
//! assert!(weight.is_complex());
//! ```

use ndarray::{ArrayD, IxDyn, Zip};
use num_complex::Complex32;
use serde::{Deserialize, Serialize};

use crate::error::{ArgandError, Result};

/// A complex-valued weight in either of its two representations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ComplexParam {
    /// One array of complex scalars.
    Complex(ArrayD<Complex32>),

    /// Real and imaginary parts held as separate real arrays of equal shape.
    Split {
        re: ArrayD<f32>,
        im: ArrayD<f32>,
    },
}

impl ComplexParam {
    /// Wrap a complex-valued array.
    pub fn from_complex(weight: ArrayD<Complex32>) -> Self {
        ComplexParam::Complex(weight)
    }

    /// Wrap a real/imaginary pair. The two arrays must have identical shapes.
    pub fn from_parts(re: ArrayD<f32>, im: ArrayD<f32>) -> Result<Self> {
        if re.shape() != im.shape() {
            return Err(ArgandError::dimension_mismatch(
                format!("{:?}", re.shape()),
                format!("{:?}", im.shape()),
            ));
        }
        Ok(ComplexParam::Split { re, im })
    }

    /// An all-zero parameter in the complex representation.
    pub fn zeros(shape: &[usize]) -> Self {
        ComplexParam::Complex(ArrayD::zeros(IxDyn(shape)))
    }

    /// Shape of the parameter (both parts share it).
    pub fn shape(&self) -> &[usize] {
        match self {
            ComplexParam::Complex(w) => w.shape(),
            ComplexParam::Split { re, .. } => re.shape(),
        }
    }

    /// Number of dimensions.
    pub fn ndim(&self) -> usize {
        self.shape().len()
    }

    /// Number of complex elements.
    pub fn len(&self) -> usize {
        self.shape().iter().product()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the parameter is held as a single complex array.
    pub fn is_complex(&self) -> bool {
        matches!(self, ComplexParam::Complex(_))
    }

    /// Run `f` over mutable real and imaginary parts, then restore the
    /// original representation. This is how every initializer touches the
    /// weight: the split layout is borrowed directly, the complex layout is
    /// unpacked around the call and repacked afterwards.
    pub fn with_parts<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut ArrayD<f32>, &mut ArrayD<f32>) -> Result<()>,
    {
        match self {
            ComplexParam::Split { re, im } => f(re, im),
            ComplexParam::Complex(w) => {
                let mut re = w.mapv(|z| z.re);
                let mut im = w.mapv(|z| z.im);
                f(&mut re, &mut im)?;
                Zip::from(&mut *w)
                    .and(&re)
                    .and(&im)
                    .for_each(|z, &r, &i| *z = Complex32::new(r, i));
                Ok(())
            }
        }
    }

    /// Copies of the real and imaginary parts.
    pub fn to_parts(&self) -> (ArrayD<f32>, ArrayD<f32>) {
        match self {
            ComplexParam::Complex(w) => (w.mapv(|z| z.re), w.mapv(|z| z.im)),
            ComplexParam::Split { re, im } => (re.clone(), im.clone()),
        }
    }

    /// Consume the container and return the weight as one complex array,
    /// joining the parts if it was split.
    pub fn into_complex(self) -> ArrayD<Complex32> {
        match self {
            ComplexParam::Complex(w) => w,
            ComplexParam::Split { re, im } => {
                let mut joined = ArrayD::zeros(re.raw_dim());
                Zip::from(&mut joined)
                    .and(&re)
                    .and(&im)
                    .for_each(|z, &r, &i| *z = Complex32::new(r, i));
                joined
            }
        }
    }
}
