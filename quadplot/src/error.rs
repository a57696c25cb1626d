//! Errors at the input boundary.
//!
//! Everything past [`Coefficients`](crate::Coefficients) and
//! [`Canvas`](crate::Canvas) is total: the solver and renderer never fail.

/// Errors raised while turning user input into solver input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The text for a coefficient is not a number.
    #[error("coefficient {name} is not a number: {input:?}")]
    InvalidCoefficient { name: char, input: String },
    /// The coefficient parsed, but to infinity or NaN.
    #[error("coefficient {name} must be finite, got {value}")]
    NonFiniteCoefficient { name: char, value: f64 },
    /// One of the canvas dimensions is zero.
    #[error("canvas must have a non-zero size, got {width}x{height}")]
    EmptyCanvas { width: u32, height: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;
