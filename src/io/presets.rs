// src/io/presets.rs

use crate::model::inputs::EoqInputs;

/// A named set of model parameters.
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    pub inputs: EoqInputs,
}

/// Small shop: 1,000 units a year, Rp 50,000 per order, Rp 1,000 to hold a unit.
pub fn classic() -> Preset {
    Preset {
        name: "classic",
        description: "1,000 units/year, Rp 50,000 per order, Rp 1,000 holding",
        inputs: EoqInputs {
            annual_demand: 1000.0,
            ordering_cost: 50_000.0,
            holding_cost: 1000.0,
        },
    }
}

/// Production run sizing: 12,000 units a year, Rp 100,000 set-up, Rp 2,000 holding.
pub fn high_volume() -> Preset {
    Preset {
        name: "high-volume",
        description: "12,000 units/year, Rp 100,000 per run, Rp 2,000 holding",
        inputs: EoqInputs {
            annual_demand: 12_000.0,
            ordering_cost: 100_000.0,
            holding_cost: 2000.0,
        },
    }
}

pub fn all() -> Vec<Preset> {
    vec![classic(), high_volume()]
}

/// Looks up a preset by name, ignoring case.
pub fn find(name: &str) -> Option<Preset> {
    all()
        .into_iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name))
}
