// src/model/results.rs

use serde::Serialize;

/// Optimal order quantity and the annual cost breakdown at that quantity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EoqResult {
    /// Units per order that minimise total annual cost.
    pub eoq: f64,
    /// Orders placed per year (D / EOQ).
    pub order_frequency: f64,
    /// Annual cost of placing orders.
    pub ordering_cost: f64,
    /// Annual cost of carrying the average inventory.
    pub holding_cost: f64,
    pub total_cost: f64,
}

impl EoqResult {
    /// The minimum of the cost curve, for marking on a chart.
    pub fn optimum(&self) -> CurvePoint {
        CurvePoint {
            quantity: self.eoq,
            ordering_cost: self.ordering_cost,
            holding_cost: self.holding_cost,
            total_cost: self.total_cost,
        }
    }

    /// Average time between orders, in days (365-day year).
    pub fn cycle_days(&self) -> f64 {
        365.0 / self.order_frequency
    }

    pub(crate) fn is_well_formed(&self) -> bool {
        [
            self.eoq,
            self.order_frequency,
            self.ordering_cost,
            self.holding_cost,
            self.total_cost,
        ]
        .iter()
        .all(|v| v.is_finite() && *v > 0.0)
    }
}

/// One sample of the total-cost curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub quantity: f64,
    pub ordering_cost: f64,
    pub holding_cost: f64,
    pub total_cost: f64,
}
