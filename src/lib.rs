//! # Argand - Complex-Valued Weight Initialization
//!
//! Argand provides parameter-initialization routines for complex-valued
//! neural network weights over [ndarray](https://docs.rs/ndarray). A weight
//! may be a single complex array or a pair of real arrays standing for its
//! real and imaginary parts; every initializer fills it in place and hands
//! it back in the representation it arrived in.
//!
//! ## Key Features
//!
//! - **Two Representations**: one `Complex32` array or a split re/im pair,
//!   handled uniformly by [`param::ComplexParam`]
//! - **Classic Schemes**: uniform, normal, constant, identity, Dirac delta,
//!   Xavier/Glorot and Kaiming/He, each with the variance adjustment complex
//!   weights need
//! - **Complex-Specific Schemes**: the standard (Rayleigh magnitude) and
//!   independent (semi-unitary) initializations of Trabelsi et al. (2018)
//! - **Dispatch Enum**: [`init::Initializer`] for configuration-driven
//!   initialization, serde-serializable
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use argand::init::{self, Initializer, TrabelsiCriterion};
//! use argand::param::ComplexParam;
//! use argand::layers::ComplexLinear;
//!
//! // Initialize a weight in place
//! let mut weight = ComplexParam::zeros(&[64, 32]);
//! init::trabelsi_standard_(&mut weight, TrabelsiCriterion::Glorot).unwrap();
//!
//! // Or build a complex dense layer with a chosen scheme
//! let layer = ComplexLinear::new_with_init(
//!     32,
//!     64,
//!     &Initializer::XavierNormal { gain: 1.0 },
//! ).unwrap();
//! ```
//!
//! ## Module Organization
//!
//! - [`error`] - Error types and result handling
//! - [`init`] - The initializer catalogue and its real-valued primitives
//! - [`layers`] - A complex dense layer built on the catalogue
//! - [`param`] - The complex parameter container

pub mod error;
pub mod init;
pub mod layers;
pub mod param;

pub use error::{ArgandError, Result};
pub use init::Initializer;
pub use param::ComplexParam;

#[cfg(test)]
mod tests;
