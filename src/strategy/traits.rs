// src/strategy/traits.rs

use crate::model::inputs::EoqInputs;
use std::fmt::Debug;

/// A closed order-quantity interval `[min, max]` to sample the cost curve over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantityDomain {
    pub min: f64,
    pub max: f64,
}

impl QuantityDomain {
    pub fn contains(&self, quantity: f64) -> bool {
        self.min <= quantity && quantity <= self.max
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }
}

/// Chooses the order-quantity interval for plotting a cost curve.
///
/// Implementations must return an interval with `0 < min < eoq < max`, so the
/// sampled curve always shows the minimum and never evaluates `Q = 0`.
pub trait DomainPolicy: Debug + Send + Sync {
    /// Calculates the interval to sample.
    ///
    /// # Arguments
    /// * `inputs` - Validated model parameters.
    /// * `eoq` - The optimal quantity for `inputs`, already computed.
    fn domain(&self, inputs: &EoqInputs, eoq: f64) -> QuantityDomain;
}
