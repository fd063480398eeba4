// src/calculator/engine.rs

use crate::error::{InvalidInput, Parameter, Reason};
use crate::model::inputs::EoqInputs;
use crate::model::results::{CurvePoint, EoqResult};
use crate::strategy::optimization::{
    annual_holding_cost, annual_ordering_cost, cost_point, economic_order_quantity,
};
use crate::strategy::traits::{DomainPolicy, QuantityDomain};
use serde::Serialize;
use std::iter::FusedIterator;

/// Computes the EOQ and its annual cost breakdown.
///
/// Fails with [`InvalidInput`] if any input is zero, negative, NaN or
/// infinite, or if the inputs are so extreme that a derived value overflows
/// or underflows. Never returns a non-finite or non-positive field.
pub fn compute_eoq(inputs: &EoqInputs) -> Result<EoqResult, InvalidInput> {
    if let Err(err) = inputs.validate() {
        tracing::warn!(parameter = %err.parameter, reason = %err.reason, "rejected EOQ input");
        return Err(err);
    }

    let eoq = economic_order_quantity(inputs);
    if !(eoq.is_finite() && eoq > 0.0) {
        return Err(degenerate());
    }

    let order_frequency = inputs.annual_demand / eoq;
    let ordering_cost = annual_ordering_cost(inputs, eoq);
    let holding_cost = annual_holding_cost(inputs, eoq);

    let result = EoqResult {
        eoq,
        order_frequency,
        ordering_cost,
        holding_cost,
        total_cost: ordering_cost + holding_cost,
    };

    if !result.is_well_formed() {
        tracing::warn!(?inputs, "EOQ result out of representable range");
        return Err(degenerate());
    }

    tracing::debug!(
        eoq = result.eoq,
        order_frequency = result.order_frequency,
        total_cost = result.total_cost,
        "computed EOQ"
    );
    Ok(result)
}

/// Builds the total-cost curve over the interval chosen by `policy`.
///
/// The returned [`CostCurve`] is lazy: points are evaluated while iterating,
/// and it can be iterated any number of times.
pub fn sample_cost_curve(
    inputs: &EoqInputs,
    sample_count: usize,
    policy: &dyn DomainPolicy,
) -> Result<CostCurve, InvalidInput> {
    let result = compute_eoq(inputs)?;
    build_curve(inputs, &result, sample_count, policy)
}

/// Lays a curve over an already computed result.
///
/// `total_cost(Q)` is convex, so finite totals at both bounds mean every
/// sample in between is finite too.
fn build_curve(
    inputs: &EoqInputs,
    result: &EoqResult,
    sample_count: usize,
    policy: &dyn DomainPolicy,
) -> Result<CostCurve, InvalidInput> {
    if sample_count < 2 {
        return Err(InvalidInput::new(
            Parameter::SampleCount,
            Reason::TooFewSamples(sample_count),
        ));
    }

    let domain = policy.domain(inputs, result.eoq);

    let valid = domain.min.is_finite()
        && domain.max.is_finite()
        && domain.min > 0.0
        && domain.min < domain.max
        && domain.contains(result.eoq);
    if !valid {
        tracing::warn!(?policy, ?domain, "cost curve domain is not a usable interval");
        return Err(degenerate());
    }

    let bounded = [domain.min, domain.max]
        .iter()
        .all(|&q| cost_point(inputs, q).total_cost.is_finite());
    if !bounded {
        tracing::warn!(?policy, ?domain, "cost curve overflows at the domain bounds");
        return Err(degenerate());
    }

    tracing::debug!(
        min = domain.min,
        max = domain.max,
        sample_count,
        "sampling cost curve"
    );

    Ok(CostCurve {
        inputs: *inputs,
        domain,
        sample_count,
        optimum: result.optimum(),
    })
}

fn degenerate() -> InvalidInput {
    InvalidInput::new(Parameter::Inputs, Reason::Degenerate)
}

// =========================================================================
// Cost curve
// =========================================================================

/// Evenly spaced samples of total annual cost against order quantity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostCurve {
    inputs: EoqInputs,
    domain: QuantityDomain,
    sample_count: usize,
    optimum: CurvePoint,
}

impl CostCurve {
    pub fn domain(&self) -> QuantityDomain {
        self.domain
    }

    pub fn len(&self) -> usize {
        self.sample_count
    }

    pub fn is_empty(&self) -> bool {
        self.sample_count == 0
    }

    /// The EOQ point, for drawing the minimum marker.
    pub fn optimum(&self) -> CurvePoint {
        self.optimum
    }

    /// Order quantity of the `index`-th sample.
    ///
    /// The first and last samples land exactly on the domain bounds.
    fn quantity_at(&self, index: usize) -> f64 {
        let last = self.sample_count - 1;
        if index == last {
            return self.domain.max;
        }
        let fraction = index as f64 / last as f64;
        self.domain.min + self.domain.width() * fraction
    }

    /// Evaluates the `index`-th sample, if it exists.
    pub fn get(&self, index: usize) -> Option<CurvePoint> {
        (index < self.sample_count).then(|| cost_point(&self.inputs, self.quantity_at(index)))
    }

    /// Starts a fresh pass over the samples.
    pub fn iter(&self) -> CostCurveIter {
        CostCurveIter {
            curve: *self,
            front: 0,
            back: self.sample_count,
        }
    }

}

impl IntoIterator for &CostCurve {
    type Item = CurvePoint;
    type IntoIter = CostCurveIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`CostCurve`], ascending by quantity.
#[derive(Debug, Clone)]
pub struct CostCurveIter {
    curve: CostCurve,
    front: usize,
    back: usize,
}

impl Iterator for CostCurveIter {
    type Item = CurvePoint;

    fn next(&mut self) -> Option<CurvePoint> {
        if self.front >= self.back {
            return None;
        }
        let point = self.curve.get(self.front);
        self.front += 1;
        point
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for CostCurveIter {
    fn next_back(&mut self) -> Option<CurvePoint> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.curve.get(self.back)
    }
}

impl ExactSizeIterator for CostCurveIter {}

impl FusedIterator for CostCurveIter {}

// =========================================================================
// Calculator
// =========================================================================

/// Everything a presentation layer needs for one product.
#[derive(Debug, Clone, Copy)]
pub struct EoqAnalysis {
    pub inputs: EoqInputs,
    pub result: EoqResult,
    pub curve: CostCurve,
}

/// Serializable summary of an analysis, without the curve samples.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AnalysisSummary {
    pub inputs: EoqInputs,
    pub result: EoqResult,
    pub cycle_days: f64,
}

impl EoqAnalysis {
    pub fn summary(&self) -> AnalysisSummary {
        AnalysisSummary {
            inputs: self.inputs,
            result: self.result,
            cycle_days: self.result.cycle_days(),
        }
    }

    /// Cost breakdown by component, for tabular display.
    pub fn cost_breakdown(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("Ordering", self.result.ordering_cost),
            ("Holding", self.result.holding_cost),
            ("Total", self.result.total_cost),
        ]
    }
}

/// Reusable calculator holding the curve settings.
#[derive(Debug)]
pub struct EoqCalculator {
    sample_count: usize,
    policy: Box<dyn DomainPolicy>,
}

impl EoqCalculator {
    pub const DEFAULT_SAMPLE_COUNT: usize = 200;

    pub fn new(sample_count: usize, policy: Box<dyn DomainPolicy>) -> Self {
        Self {
            sample_count,
            policy,
        }
    }

    /// Computes the result and prepares the curve in one step.
    pub fn analyze(&self, inputs: &EoqInputs) -> Result<EoqAnalysis, InvalidInput> {
        let result = compute_eoq(inputs)?;
        let curve = build_curve(inputs, &result, self.sample_count, self.policy.as_ref())?;
        Ok(EoqAnalysis {
            inputs: *inputs,
            result,
            curve,
        })
    }
}
