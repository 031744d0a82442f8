pub mod linear;

pub use linear::ComplexLinear;
