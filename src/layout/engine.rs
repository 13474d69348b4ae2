//! LayoutEngine - per-tick orchestration of the force field.
//!
//! The engine owns a snapshot of the blocks (refreshed by the host from its
//! physics engine between ticks), the simulation context and the poke RNG.
//! Each call to [`LayoutEngine::step`] computes one tick's forces and hands
//! them back; the host applies them and integrates.
//!
//! A run goes through three phases: grouping (same-sized blocks gather),
//! plain repulsion (spread out), then alignment with aligned-axis repulsion.

use std::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::params::LayoutParams;
use crate::cluster::boundary_attractors;
use crate::error::{LayoutError, Result};
use crate::forces::{
    AppliedForce, apply_alignment, apply_disjoint_repulsion, apply_grouping,
    apply_random_pokes, apply_repulsion, apply_wall_alignment, has_walls,
};
use crate::geometry::{Axis, Block, Vector};

/// Which force model a tick runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    Grouping,
    Repulsion,
    Alignment,
}

impl Phase {
    /// Phase scheduled for `tick`.
    pub fn for_tick(tick: u64, params: &LayoutParams) -> Phase {
        let grouping_end = u64::from(params.grouping_ticks);
        let repulsion_end = grouping_end + u64::from(params.repulsion_ticks);
        if tick < grouping_end {
            Phase::Grouping
        } else if tick < repulsion_end {
            Phase::Repulsion
        } else {
            Phase::Alignment
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Grouping => "grouping",
            Phase::Repulsion => "repulsion",
            Phase::Alignment => "alignment",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mutable simulation state threaded through the ticks.
///
/// Only [`LayoutEngine`] mutates it, and only between force computations.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationContext {
    pub params: LayoutParams,
    /// Ticks completed so far.
    pub tick: u64,
    /// Current (decayed) poke scale.
    pub poke_scale: f64,
}

impl SimulationContext {
    pub fn new(params: LayoutParams) -> Self {
        let poke_scale = params.poke_scale;
        Self {
            params,
            tick: 0,
            poke_scale,
        }
    }

    /// Phase of the next tick.
    pub fn phase(&self) -> Phase {
        Phase::for_tick(self.tick, &self.params)
    }

    /// Finish a tick: advance the counter and decay the poke scale on schedule.
    fn advance(&mut self) {
        self.tick += 1;
        let interval = u64::from(self.params.poke_decay_interval.max(1));
        if self.tick % interval == 0 {
            self.poke_scale *= self.params.poke_decay;
            debug!(tick = self.tick, poke_scale = self.poke_scale, "poke scale decayed");
        }
    }

    fn reset(&mut self) {
        self.tick = 0;
        self.poke_scale = self.params.poke_scale;
    }
}

/// Forces computed for one tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickReport {
    /// Tick number the forces belong to.
    pub tick: u64,
    pub phase: Phase,
    pub forces: Vec<AppliedForce>,
}

/// The force-field orchestrator.
pub struct LayoutEngine {
    /// Block snapshot, indexed as the host indexes its bodies.
    blocks: Vec<Block>,
    context: SimulationContext,
    rng: ChaCha8Rng,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutEngine {
    /// Create an engine with default parameters and no blocks.
    pub fn new() -> Self {
        let params = LayoutParams::default();
        let rng = ChaCha8Rng::seed_from_u64(params.seed);
        Self {
            blocks: Vec::new(),
            context: SimulationContext::new(params),
            rng,
        }
    }

    /// Create an engine with the given parameters.
    pub fn with_params(params: LayoutParams) -> Result<Self> {
        params.validate()?;
        let rng = ChaCha8Rng::seed_from_u64(params.seed);
        Ok(Self {
            blocks: Vec::new(),
            context: SimulationContext::new(params),
            rng,
        })
    }

    // =========================================================================
    // Parameters and schedule
    // =========================================================================

    pub fn params(&self) -> &LayoutParams {
        &self.context.params
    }

    pub fn context(&self) -> &SimulationContext {
        &self.context
    }

    /// Replace the parameters.
    ///
    /// The tick counter is kept. A new seed reseeds the RNG and a new poke
    /// scale replaces the decayed one.
    pub fn set_params(&mut self, params: LayoutParams) -> Result<()> {
        if let Err(err) = params.validate() {
            warn!(%err, "rejected layout parameters");
            return Err(err);
        }
        if params.seed != self.context.params.seed {
            self.rng = ChaCha8Rng::seed_from_u64(params.seed);
        }
        if params.poke_scale != self.context.params.poke_scale {
            self.context.poke_scale = params.poke_scale;
        }
        self.context.params = params;
        Ok(())
    }

    pub fn set_force_on(&mut self, on: bool) {
        self.context.params.force_on = on;
    }

    pub fn set_poke_enabled(&mut self, enabled: bool) {
        self.context.params.poke_enabled = enabled;
    }

    /// Restart the phase schedule, poke scale and RNG.
    pub fn reset_schedule(&mut self) {
        self.context.reset();
        self.rng = ChaCha8Rng::seed_from_u64(self.context.params.seed);
        debug!("schedule reset");
    }

    pub fn tick(&self) -> u64 {
        self.context.tick
    }

    /// Phase the next [`step`](Self::step) will run.
    pub fn phase(&self) -> Phase {
        self.context.phase()
    }

    pub fn poke_scale(&self) -> f64 {
        self.context.poke_scale
    }

    // =========================================================================
    // Blocks
    // =========================================================================

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Replace every block. Nothing changes if any block is invalid.
    pub fn set_blocks(&mut self, blocks: Vec<Block>) -> Result<()> {
        for (i, block) in blocks.iter().enumerate() {
            if let Err(err) = block.validate(i) {
                warn!(%err, "rejected block snapshot");
                return Err(err);
            }
        }
        self.blocks = blocks;
        Ok(())
    }

    /// Append a block, returning its index.
    pub fn add_block(&mut self, block: Block) -> Result<usize> {
        let index = self.blocks.len();
        if let Err(err) = block.validate(index) {
            warn!(%err, "rejected block");
            return Err(err);
        }
        self.blocks.push(block);
        Ok(index)
    }

    /// Refresh a block's pose after the host integrated it.
    pub fn update_block(&mut self, index: usize, position: Vector, vertices: Vec<Vector>) -> Result<()> {
        let len = self.blocks.len();
        let Some(block) = self.blocks.get(index) else {
            warn!(index, len, "update for unknown block");
            return Err(LayoutError::BlockOutOfRange { index, len });
        };
        let updated = Block {
            position,
            vertices,
            ..block.clone()
        };
        if let Err(err) = updated.validate(index) {
            warn!(%err, "rejected block update");
            return Err(err);
        }
        self.blocks[index] = updated;
        Ok(())
    }

    /// Remove every block. The schedule is untouched.
    pub fn clear(&mut self) {
        self.blocks.clear();
    }

    // =========================================================================
    // Simulation
    // =========================================================================

    /// Compute one tick's forces and advance the schedule.
    pub fn step(&mut self) -> Result<TickReport> {
        for (i, block) in self.blocks.iter().enumerate() {
            block.validate(i)?;
        }

        let tick = self.context.tick;
        let phase = self.context.phase();
        if tick == 0 || Phase::for_tick(tick - 1, &self.context.params) != phase {
            debug!(tick, %phase, "entering phase");
        }

        let mut forces: Vec<AppliedForce> = Vec::new();
        if self.context.params.force_on {
            self.apply_phase(phase, &mut forces)?;
        }
        if self.context.params.poke_enabled {
            apply_random_pokes(&self.blocks, self.context.poke_scale, &mut self.rng, &mut forces)?;
        }

        self.context.advance();
        Ok(TickReport {
            tick,
            phase,
            forces,
        })
    }

    fn apply_phase(&self, phase: Phase, forces: &mut Vec<AppliedForce>) -> Result<()> {
        let blocks = &self.blocks;
        let params = &self.context.params;
        match phase {
            Phase::Grouping => apply_grouping(blocks, params, forces),
            Phase::Repulsion => apply_repulsion(blocks, params, forces),
            Phase::Alignment => {
                let mut uf_x = apply_alignment(blocks, Axis::X, params, forces)?;
                let mut uf_y = apply_alignment(blocks, Axis::Y, params, forces)?;
                if has_walls(blocks) {
                    for axis in Axis::ALL {
                        apply_wall_alignment(blocks, axis, params, forces)?;
                    }
                }
                apply_disjoint_repulsion(blocks, params, &mut uf_x, &mut uf_y, forces)
            }
        }
    }

    /// Shared alignment lines along `axis`, for drawing guides.
    pub fn attractors(&self, axis: Axis, radius: f64) -> Vec<f64> {
        boundary_attractors(&self.blocks, axis, radius)
    }
}
