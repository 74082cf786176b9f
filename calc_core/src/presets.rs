//! Preset Floor Plans
//!
//! Ready-made room lists the interactive prompt offers instead of typing
//! every room by hand. Read-only reference data.

use crate::calculations::Room;

/// A named, ordered list of rooms as `(name, width_m, length_m)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresetPlan {
    pub name: &'static str,
    pub rooms: &'static [(&'static str, f64, f64)],
}

impl PresetPlan {
    /// Build owned rooms in catalog order
    pub fn rooms(&self) -> Vec<Room> {
        self.rooms
            .iter()
            .map(|(name, width_m, length_m)| Room::new(*name, *width_m, *length_m))
            .collect()
    }
}

/// All presets, in display order
pub const PRESET_PLANS: [PresetPlan; 2] = [
    PresetPlan {
        name: "casa_pequena",
        rooms: &[
            ("quarto", 3.0, 3.0),
            ("sala", 4.0, 3.0),
            ("cozinha", 3.0, 2.5),
            ("banheiro", 2.0, 1.5),
        ],
    },
    PresetPlan {
        name: "planta_exemplo",
        rooms: &[
            ("quarto1", 3.5, 3.0),
            ("quarto2", 3.0, 2.8),
            ("sala", 4.0, 4.0),
            ("cozinha", 3.0, 3.0),
            ("banheiro", 2.0, 1.8),
        ],
    },
];

/// Look up a preset by exact name (surrounding whitespace ignored)
pub fn find_preset(name: &str) -> Option<&'static PresetPlan> {
    let name = name.trim();
    PRESET_PLANS.iter().find(|p| p.name == name)
}

/// Preset names, in display order
pub fn preset_names() -> impl Iterator<Item = &'static str> {
    PRESET_PLANS.iter().map(|p| p.name)
}
