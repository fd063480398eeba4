// src/error.rs

//! Error types for the EOQ calculator.

use std::fmt;
use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Which calculator input a rejection refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    AnnualDemand,
    OrderingCost,
    HoldingCost,
    SampleCount,
    /// The inputs taken together rather than any single one.
    Inputs,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Parameter::AnnualDemand => "annual demand (D)",
            Parameter::OrderingCost => "ordering cost per order (S)",
            Parameter::HoldingCost => "holding cost per unit per year (H)",
            Parameter::SampleCount => "sample count",
            Parameter::Inputs => "combination of D, S and H",
        };
        f.write_str(name)
    }
}

/// Why an input was rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reason {
    /// Value was zero or negative.
    NonPositive(f64),
    /// Value was NaN or infinite.
    NonFinite(f64),
    /// Value was never supplied.
    Missing,
    /// Fewer than two curve samples were requested.
    TooFewSamples(usize),
    /// Inputs were individually valid but the result overflowed or underflowed.
    Degenerate,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::NonPositive(v) => write!(f, "must be greater than zero, got {}", v),
            Reason::NonFinite(v) => write!(f, "must be a finite number, got {}", v),
            Reason::Missing => f.write_str("is required"),
            Reason::TooFewSamples(n) => write!(f, "must be at least 2, got {}", n),
            Reason::Degenerate => f.write_str("produces a result outside the representable range"),
        }
    }
}

/// The calculator's single domain failure: an input it refuses to compute with.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("{parameter} {reason}")]
pub struct InvalidInput {
    pub parameter: Parameter,
    pub reason: Reason,
}

impl InvalidInput {
    pub fn new(parameter: Parameter, reason: Reason) -> Self {
        Self { parameter, reason }
    }
}

/// Crate-wide error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Calculator input rejected
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns the rejected input, if this is a calculator rejection.
    pub fn invalid_input(&self) -> Option<&InvalidInput> {
        match self {
            Error::InvalidInput(inner) => Some(inner),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message_names_parameter() {
        let err = Error::from(InvalidInput::new(
            Parameter::HoldingCost,
            Reason::NonPositive(0.0),
        ));
        let msg = err.to_string();
        assert!(msg.contains("holding cost"));
        assert!(msg.contains("greater than zero"));
    }

    #[test]
    fn test_invalid_input_accessor() {
        let err = Error::from(InvalidInput::new(Parameter::SampleCount, Reason::TooFewSamples(1)));
        assert_eq!(
            err.invalid_input().map(|e| e.parameter),
            Some(Parameter::SampleCount)
        );
        assert!(Error::Config("x".into()).invalid_input().is_none());
    }
}
