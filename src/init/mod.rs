//! # Complex Weight Initialization
//!
//! In-place initializers for complex-valued weights held in a
//! [`ComplexParam`]. Each routine normalizes the representation, runs the
//! matching real-valued primitive from [`real`] once for the real part and
//! once for the imaginary part, and restores the representation the caller
//! supplied.
//!
//! ## Available Schemes
//!
//! - **Uniform / Normal / Constant / Zeros / Ones**: the same fill applied
//!   to both parts
//! - **Eye / Dirac**: identity-preserving fills for linear and convolution
//!   weights (diagonal/center entries become `1 + 1i`)
//! - **Xavier/Glorot**: per-part gain divided by sqrt(2) so the complex
//!   magnitude keeps the usual Glorot variance
//! - **Kaiming/He**: the leaky-ReLU negative slope `a` is remapped to
//!   `sqrt(1 + 2a^2)` before delegating, halving the per-part variance for
//!   the default slope
//! - **Trabelsi standard / independent**: the complex-specific schemes of
//!   Trabelsi et al. (2018), see [`trabelsi`]
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use argand::init::{self, Initializer, FanMode, Nonlinearity};
//! use argand::param::ComplexParam;
//!
//! let mut weight = ComplexParam::zeros(&[128, 64]);
//! init::kaiming_normal_(
//!     &mut weight,
//!     FanMode::FanIn,
//!     Nonlinearity::LeakyRelu { negative_slope: 0.0 },
//! ).unwrap();
//!
//! // Or through the dispatch enum:
//! let scheme = Initializer::XavierUniform { gain: 1.0 };
//! scheme.apply(&mut weight).unwrap();
//! ```

pub mod fan;
pub mod real;
pub mod trabelsi;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::param::ComplexParam;

pub use fan::{calculate_gain, fan_in_and_fan_out, FanMode, Nonlinearity};
pub use trabelsi::TrabelsiCriterion;

/// Fill both parts with samples from U(low, high).
pub fn uniform_(param: &mut ComplexParam, low: f32, high: f32) -> Result<()> {
    param.with_parts(|re, im| {
        real::uniform(re, low, high)?;
        real::uniform(im, low, high)
    })
}

/// Fill both parts with samples from N(mean, std^2).
pub fn normal_(param: &mut ComplexParam, mean: f32, std: f32) -> Result<()> {
    param.with_parts(|re, im| {
        real::normal(re, mean, std)?;
        real::normal(im, mean, std)
    })
}

/// Fill both parts with a constant, i.e. every weight becomes `value * (1 + 1i)`.
pub fn constant_(param: &mut ComplexParam, value: f32) -> Result<()> {
    param.with_parts(|re, im| {
        real::fill(re, value);
        real::fill(im, value);
        Ok(())
    })
}

/// Fill the weight with complex zero.
pub fn zeros_(param: &mut ComplexParam) -> Result<()> {
    param.with_parts(|re, im| {
        real::zero(re);
        real::zero(im);
        Ok(())
    })
}

/// Fill both parts with one, i.e. every weight becomes `1 + 1i`.
pub fn ones_(param: &mut ComplexParam) -> Result<()> {
    constant_(param, 1.0)
}

/// Identity matrix in both parts of a 2-dimensional weight.
pub fn eye_(param: &mut ComplexParam) -> Result<()> {
    param.with_parts(|re, im| {
        real::eye(re)?;
        real::eye(im)
    })
}

/// Dirac delta in both parts of a {3, 4, 5}-dimensional convolution kernel.
pub fn dirac_(param: &mut ComplexParam, groups: usize) -> Result<()> {
    param.with_parts(|re, im| {
        real::dirac(re, groups)?;
        real::dirac(im, groups)
    })
}

/// Complex Xavier/Glorot with a uniform distribution.
///
/// Each part receives the real Xavier fill with `gain / sqrt(2)`, so the
/// complex magnitude has the variance the caller's gain asks for.
pub fn xavier_uniform_(param: &mut ComplexParam, gain: f32) -> Result<()> {
    let part_gain = gain / 2.0_f32.sqrt();
    param.with_parts(|re, im| {
        real::xavier_uniform(re, part_gain)?;
        real::xavier_uniform(im, part_gain)
    })
}

/// Complex Xavier/Glorot with a normal distribution.
pub fn xavier_normal_(param: &mut ComplexParam, gain: f32) -> Result<()> {
    let part_gain = gain / 2.0_f32.sqrt();
    param.with_parts(|re, im| {
        real::xavier_normal(re, part_gain)?;
        real::xavier_normal(im, part_gain)
    })
}

/// Complex Kaiming/He with a uniform distribution.
///
/// The leaky-ReLU negative slope is remapped to `sqrt(1 + 2a^2)` before
/// delegating to the real routine; other nonlinearities delegate unchanged.
pub fn kaiming_uniform_(
    param: &mut ComplexParam,
    mode: FanMode,
    nonlinearity: Nonlinearity,
) -> Result<()> {
    let nonlinearity = complex_slope(nonlinearity);
    param.with_parts(|re, im| {
        real::kaiming_uniform(re, mode, nonlinearity)?;
        real::kaiming_uniform(im, mode, nonlinearity)
    })
}

/// Complex Kaiming/He with a normal distribution.
pub fn kaiming_normal_(
    param: &mut ComplexParam,
    mode: FanMode,
    nonlinearity: Nonlinearity,
) -> Result<()> {
    let nonlinearity = complex_slope(nonlinearity);
    param.with_parts(|re, im| {
        real::kaiming_normal(re, mode, nonlinearity)?;
        real::kaiming_normal(im, mode, nonlinearity)
    })
}

/// Standard Trabelsi initialization (Rayleigh magnitude, uniform phase).
pub fn trabelsi_standard_(
    param: &mut ComplexParam,
    criterion: TrabelsiCriterion,
) -> Result<()> {
    param.with_parts(|re, im| trabelsi::standard(re, im, criterion))
}

/// Independent Trabelsi initialization (scaled semi-unitary matrix).
pub fn trabelsi_independent_(
    param: &mut ComplexParam,
    criterion: TrabelsiCriterion,
) -> Result<()> {
    param.with_parts(|re, im| trabelsi::independent(re, im, criterion))
}

/// Leaky-ReLU slope adjustment that halves the per-part variance of the
/// Kaiming schemes for complex weights.
fn complex_slope(nonlinearity: Nonlinearity) -> Nonlinearity {
    match nonlinearity {
        Nonlinearity::LeakyRelu { negative_slope } => Nonlinearity::LeakyRelu {
            negative_slope: (1.0 + 2.0 * negative_slope * negative_slope).sqrt(),
        },
        other => other,
    }
}

/// Initialization strategies for complex-valued weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Initializer {
    /// Uniform distribution with custom range
    Uniform { low: f32, high: f32 },

    /// Normal distribution with custom mean and std
    Normal { mean: f32, std: f32 },

    /// Constant fill of both parts
    Constant { value: f32 },

    /// All zeros
    Zeros,

    /// All `1 + 1i`
    Ones,

    /// Identity matrix (2-d weights)
    Eye,

    /// Dirac delta (3/4/5-d convolution kernels)
    Dirac { groups: usize },

    /// Xavier/Glorot uniform initialization
    XavierUniform { gain: f32 },

    /// Xavier/Glorot normal initialization
    XavierNormal { gain: f32 },

    /// He/Kaiming uniform initialization
    KaimingUniform { mode: FanMode, nonlinearity: Nonlinearity },

    /// He/Kaiming normal initialization
    KaimingNormal { mode: FanMode, nonlinearity: Nonlinearity },

    /// Trabelsi et al. (2018) standard scheme
    TrabelsiStandard { criterion: TrabelsiCriterion },

    /// Trabelsi et al. (2018) independent scheme
    TrabelsiIndependent { criterion: TrabelsiCriterion },
}

impl Initializer {
    /// Apply the strategy to a weight in place.
    pub fn apply(&self, param: &mut ComplexParam) -> Result<()> {
        match self {
            Initializer::Uniform { low, high } => uniform_(param, *low, *high),
            Initializer::Normal { mean, std } => normal_(param, *mean, *std),
            Initializer::Constant { value } => constant_(param, *value),
            Initializer::Zeros => zeros_(param),
            Initializer::Ones => ones_(param),
            Initializer::Eye => eye_(param),
            Initializer::Dirac { groups } => dirac_(param, *groups),
            Initializer::XavierUniform { gain } => xavier_uniform_(param, *gain),
            Initializer::XavierNormal { gain } => xavier_normal_(param, *gain),
            Initializer::KaimingUniform { mode, nonlinearity } => {
                kaiming_uniform_(param, *mode, *nonlinearity)
            }
            Initializer::KaimingNormal { mode, nonlinearity } => {
                kaiming_normal_(param, *mode, *nonlinearity)
            }
            Initializer::TrabelsiStandard { criterion } => {
                trabelsi_standard_(param, *criterion)
            }
            Initializer::TrabelsiIndependent { criterion } => {
                trabelsi_independent_(param, *criterion)
            }
        }
    }

    /// Get the recommended initialization for a nonlinearity
    pub fn for_nonlinearity(nonlinearity: Nonlinearity) -> Self {
        match nonlinearity {
            Nonlinearity::Relu | Nonlinearity::LeakyRelu { .. } => Initializer::KaimingNormal {
                mode: FanMode::FanIn,
                nonlinearity,
            },
            Nonlinearity::Linear | Nonlinearity::Sigmoid | Nonlinearity::Tanh => {
                Initializer::XavierNormal { gain: 1.0 }
            }
        }
    }
}
