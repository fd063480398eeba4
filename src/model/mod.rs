pub mod inputs;
pub mod results;
