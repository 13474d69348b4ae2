//! Tunable simulation parameters.

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};

/// Configuration for the knolling force field.
///
/// Deserialises from a JS object with any subset of the camelCase field
/// names; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutParams {
    /// Initial standard deviation of random pokes (default: 0.05).
    pub poke_scale: f64,
    /// Factor applied to the poke scale every `poke_decay_interval` ticks (default: 0.94).
    pub poke_decay: f64,
    /// Ticks between poke-scale decays (default: 10).
    pub poke_decay_interval: u32,
    /// Linear term of the alignment force (default: 0.001).
    pub alignment_force_coeff: f64,
    /// Boundary distance below which two blocks align (default: 20).
    pub alignment_force_range: f64,
    /// Boundary distance below which a box aligns to a wall (default: 20).
    pub alignment_force_wall_range: f64,
    /// Constant floor of the alignment force (default: 0.007).
    pub alignment_force_offset: f64,
    /// Antigravity coefficient (default: 100).
    pub repulsion_coeff: f64,
    /// Repulsion cutoff, in characteristic sizes (default: 3).
    pub repulsion_range: f64,
    /// Grouping antigravity coefficient (default: 400).
    pub grouping_coeff: f64,
    /// Master switch for the phase forces.
    pub force_on: bool,
    pub poke_enabled: bool,
    /// Seed for the poke RNG.
    pub seed: u64,
    /// Length of the grouping phase, in ticks (default: 120).
    pub grouping_ticks: u32,
    /// Length of the repulsion phase that follows grouping (default: 60).
    pub repulsion_ticks: u32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            poke_scale: 0.05,
            poke_decay: 0.94,
            poke_decay_interval: 10,
            alignment_force_coeff: 0.0010,
            alignment_force_range: 20.0,
            alignment_force_wall_range: 20.0,
            alignment_force_offset: 0.007,
            repulsion_coeff: 100.0,
            repulsion_range: 3.0,
            grouping_coeff: 400.0,
            force_on: true,
            poke_enabled: true,
            seed: 0x5EED,
            grouping_ticks: 120,
            repulsion_ticks: 60,
        }
    }
}

impl LayoutParams {
    /// Reject values that would make the force field produce non-finite or
    /// sign-flipped forces.
    pub fn validate(&self) -> Result<()> {
        let scalars = [
            ("pokeScale", self.poke_scale),
            ("alignmentForceCoeff", self.alignment_force_coeff),
            ("alignmentForceRange", self.alignment_force_range),
            ("alignmentForceWallRange", self.alignment_force_wall_range),
            ("alignmentForceOffset", self.alignment_force_offset),
            ("repulsionCoeff", self.repulsion_coeff),
            ("repulsionRange", self.repulsion_range),
            ("groupingCoeff", self.grouping_coeff),
        ];
        for (name, value) in scalars {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::InvalidParams(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        if !(self.poke_decay > 0.0 && self.poke_decay <= 1.0) {
            return Err(LayoutError::InvalidParams(format!(
                "pokeDecay must be in (0, 1], got {}",
                self.poke_decay
            )));
        }
        if self.poke_decay_interval == 0 {
            return Err(LayoutError::InvalidParams(
                "pokeDecayInterval must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
