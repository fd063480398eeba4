// src/strategy/optimization.rs

//! Cost formulas of the classic EOQ (Harris-Wilson) inventory model.
//!
//! All functions here are raw arithmetic on already-validated inputs.
//! The calculator engine is responsible for rejecting non-positive or
//! non-finite values before calling them.

use crate::model::inputs::EoqInputs;
use crate::model::results::CurvePoint;

/// Calculates the Economic Order Quantity.
///
/// Formula: EOQ = sqrt(2 * D * S / H)
///
/// The product is formed as `2D * (S / H)` so that very large demand and
/// ordering cost do not overflow before the division.
pub fn economic_order_quantity(inputs: &EoqInputs) -> f64 {
    (2.0 * inputs.annual_demand * (inputs.ordering_cost / inputs.holding_cost)).sqrt()
}

/// Annual ordering cost when ordering `quantity` units at a time.
///
/// Formula: (D / Q) * S
pub fn annual_ordering_cost(inputs: &EoqInputs, quantity: f64) -> f64 {
    (inputs.annual_demand / quantity) * inputs.ordering_cost
}

/// Annual holding cost of the average inventory (Q / 2).
///
/// Formula: (Q / 2) * H
pub fn annual_holding_cost(inputs: &EoqInputs, quantity: f64) -> f64 {
    (quantity / 2.0) * inputs.holding_cost
}

/// Total annual inventory cost at order quantity `quantity`.
pub fn total_annual_cost(inputs: &EoqInputs, quantity: f64) -> f64 {
    annual_ordering_cost(inputs, quantity) + annual_holding_cost(inputs, quantity)
}

/// Evaluates every cost component at `quantity`.
pub fn cost_point(inputs: &EoqInputs, quantity: f64) -> CurvePoint {
    CurvePoint {
        quantity,
        ordering_cost: annual_ordering_cost(inputs, quantity),
        holding_cost: annual_holding_cost(inputs, quantity),
        total_cost: total_annual_cost(inputs, quantity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> EoqInputs {
        EoqInputs {
            annual_demand: 1000.0,
            ordering_cost: 50_000.0,
            holding_cost: 1000.0,
        }
    }

    #[test]
    fn test_eoq_formula() {
        let eoq = economic_order_quantity(&inputs());
        assert!((eoq - 100_000f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_components() {
        let i = inputs();
        // 1000 / 100 orders at 50k each, average stock of 50 at 1k each
        assert!((annual_ordering_cost(&i, 100.0) - 500_000.0).abs() < 1e-9);
        assert!((annual_holding_cost(&i, 100.0) - 50_000.0).abs() < 1e-9);
        assert!((total_annual_cost(&i, 100.0) - 550_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_cost_point_sums_components() {
        let point = cost_point(&inputs(), 250.0);
        assert_eq!(point.quantity, 250.0);
        assert_eq!(point.total_cost, point.ordering_cost + point.holding_cost);
    }

    #[test]
    fn test_components_balance_at_eoq() {
        let i = inputs();
        let eoq = economic_order_quantity(&i);
        let ordering = annual_ordering_cost(&i, eoq);
        let holding = annual_holding_cost(&i, eoq);
        assert!(((ordering - holding) / holding).abs() < 1e-9);
    }
}
