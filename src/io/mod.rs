pub mod presets;
pub mod reporting;
