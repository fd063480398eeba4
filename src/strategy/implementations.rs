// src/strategy/implementations.rs

use crate::model::inputs::EoqInputs;
use crate::strategy::traits::{DomainPolicy, QuantityDomain};
use serde::{Deserialize, Serialize};

// =========================================================================
// 1. Demand Span Policy
// =========================================================================

/// Plots from a small positive floor up to twice the annual demand.
///
/// This is the wide view: it shows how badly costs grow when ordering a
/// large share of a year's demand at once.
///
/// When the EOQ falls outside `[floor, 2D]` (tiny values, or an ordering
/// cost that dwarfs holding cost) the interval is widened to
/// `[0.1 * EOQ, 3 * EOQ]` on the offending side so the minimum stays visible.
#[derive(Debug, Clone, Copy)]
pub struct DemandSpanPolicy {
    floor: f64,
}

impl DemandSpanPolicy {
    pub const DEFAULT_FLOOR: f64 = 1.0;

    /// `floor` must be finite and positive; callers validate it first.
    pub fn new(floor: f64) -> Self {
        Self { floor }
    }
}

impl Default for DemandSpanPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FLOOR)
    }
}

impl DomainPolicy for DemandSpanPolicy {
    fn domain(&self, inputs: &EoqInputs, eoq: f64) -> QuantityDomain {
        let min = if self.floor < eoq {
            self.floor
        } else {
            eoq * EoqBracketPolicy::LOWER
        };

        let span = 2.0 * inputs.annual_demand;
        let max = if span > eoq {
            span
        } else {
            eoq * EoqBracketPolicy::UPPER
        };

        QuantityDomain { min, max }
    }
}

// =========================================================================
// 2. EOQ Bracket Policy
// =========================================================================

/// Plots a fixed band around the optimum: `[0.1 * EOQ, 3 * EOQ]`.
///
/// The close-up view; the curve's shape is the same for every input, only
/// the scale changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct EoqBracketPolicy;

impl EoqBracketPolicy {
    pub const LOWER: f64 = 0.1;
    pub const UPPER: f64 = 3.0;

    pub fn new() -> Self {
        Self
    }
}

impl DomainPolicy for EoqBracketPolicy {
    fn domain(&self, _inputs: &EoqInputs, eoq: f64) -> QuantityDomain {
        QuantityDomain {
            min: eoq * Self::LOWER,
            max: eoq * Self::UPPER,
        }
    }
}

// =========================================================================
// Selection by name (configuration and CLI)
// =========================================================================

/// Serializable choice between the built-in policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DomainKind {
    #[default]
    DemandSpan,
    EoqBracket,
}

impl DomainKind {
    /// Instantiates the policy; `demand_floor` only applies to `DemandSpan`.
    pub fn build(self, demand_floor: f64) -> Box<dyn DomainPolicy> {
        match self {
            DomainKind::DemandSpan => Box::new(DemandSpanPolicy::new(demand_floor)),
            DomainKind::EoqBracket => Box::new(EoqBracketPolicy::new()),
        }
    }
}
