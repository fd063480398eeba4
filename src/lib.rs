#![forbid(unsafe_code)]

//! Economic Order Quantity (EOQ) calculator.
//!
//! Given annual demand `D`, fixed cost per order `S` and annual holding cost
//! per unit `H`, computes the order quantity that minimises total inventory
//! cost, the resulting cost breakdown, and a lazily sampled total-cost curve
//! for plotting.
//!
//! ```
//! use eoq_calculator::{compute_eoq, EoqInputs};
//!
//! let inputs = EoqInputs::new(1000.0, 50_000.0, 1000.0).unwrap();
//! let result = compute_eoq(&inputs).unwrap();
//! assert!((result.eoq - 316.23).abs() < 0.01);
//! ```

pub mod calculator;
pub mod error;
pub mod io;
pub mod logging;
pub mod model;
pub mod strategy;

pub use calculator::config::Config;
pub use calculator::engine::{
    compute_eoq, sample_cost_curve, CostCurve, CostCurveIter, EoqAnalysis, EoqCalculator,
};
pub use error::{Error, InvalidInput, Parameter, Reason, Result};
pub use model::inputs::EoqInputs;
pub use model::results::{CurvePoint, EoqResult};
pub use strategy::implementations::{DemandSpanPolicy, DomainKind, EoqBracketPolicy};
pub use strategy::traits::{DomainPolicy, QuantityDomain};
