// src/model/inputs.rs

use crate::error::{InvalidInput, Parameter, Reason};
use serde::{Deserialize, Serialize};

/// The three scalar parameters of the EOQ model for one product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EoqInputs {
    /// D: units demanded per year.
    pub annual_demand: f64,
    /// S: fixed cost per order or production run.
    pub ordering_cost: f64,
    /// H: cost of holding one unit for one year.
    pub holding_cost: f64,
}

impl EoqInputs {
    /// Builds a validated set of inputs.
    pub fn new(
        annual_demand: f64,
        ordering_cost: f64,
        holding_cost: f64,
    ) -> Result<Self, InvalidInput> {
        let inputs = Self {
            annual_demand,
            ordering_cost,
            holding_cost,
        };
        inputs.validate()?;
        Ok(inputs)
    }

    /// Builds inputs from optional values, e.g. half-filled form fields.
    pub fn from_options(
        annual_demand: Option<f64>,
        ordering_cost: Option<f64>,
        holding_cost: Option<f64>,
    ) -> Result<Self, InvalidInput> {
        let require = |value: Option<f64>, parameter| {
            value.ok_or(InvalidInput::new(parameter, Reason::Missing))
        };
        Self::new(
            require(annual_demand, Parameter::AnnualDemand)?,
            require(ordering_cost, Parameter::OrderingCost)?,
            require(holding_cost, Parameter::HoldingCost)?,
        )
    }

    /// Checks every parameter is finite and strictly positive.
    ///
    /// Fields are public, so values built with a struct literal are checked
    /// again by the calculator before use.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        require_positive(Parameter::AnnualDemand, self.annual_demand)?;
        require_positive(Parameter::OrderingCost, self.ordering_cost)?;
        require_positive(Parameter::HoldingCost, self.holding_cost)?;
        Ok(())
    }
}

/// Rejects NaN, infinities, zero and negatives.
pub(crate) fn require_positive(parameter: Parameter, value: f64) -> Result<f64, InvalidInput> {
    if !value.is_finite() {
        return Err(InvalidInput::new(parameter, Reason::NonFinite(value)));
    }
    if value <= 0.0 {
        return Err(InvalidInput::new(parameter, Reason::NonPositive(value)));
    }
    Ok(value)
}
