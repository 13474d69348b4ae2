//! Knolling - WASM Module
//!
//! Force field for tidying a 2-D arrangement of rectangular blocks into a
//! grid-like layout. The host runs its own rigid-body physics engine; every
//! tick it hands this module the block poses and receives a list of
//! `(block, point, force)` applications to feed back into the integrator.
//!
//! # Architecture
//!
//! - `geometry`: vectors, blocks and boundary-point queries
//! - `graph`: union-find and Kruskal's minimum spanning forest
//! - `spatial`: R-tree broad phase over block boundary lines
//! - `cluster`: 1-D fixed-radius clustering for alignment guide lines
//! - `forces`: repulsion, grouping, alignment and random pokes
//! - `layout`: parameters and the per-tick phase schedule

use js_sys::Float64Array;
use wasm_bindgen::prelude::*;

pub mod cluster;
pub mod error;
pub mod forces;
pub mod geometry;
pub mod graph;
pub mod layout;
pub mod spatial;

use error::LayoutError;
use forces::AppliedForce;
use geometry::{Axis, Block, Vector};
use layout::{LayoutEngine, LayoutParams};

/// Floats per force application in the flat force buffer.
pub const FORCE_STRIDE: usize = 5;

/// Initialize the WASM module.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Log a rejected call to the browser console, then wrap it for JS.
fn js_error(err: LayoutError) -> JsError {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&JsValue::from_str(&format!("knolling: {err}")));
    JsError::from(err)
}

/// Parse a flat `[x0, y0, x1, y1, ...]` vertex buffer.
pub fn parse_vertices(vertices: &[f64]) -> Result<Vec<Vector>, LayoutError> {
    if vertices.len() % 2 != 0 {
        return Err(LayoutError::MalformedBuffer {
            what: "vertex",
            len: vertices.len(),
            stride: 2,
        });
    }
    Ok(vertices
        .chunks_exact(2)
        .map(|xy| Vector::new(xy[0], xy[1]))
        .collect())
}

/// Flatten forces into `[block, px, py, fx, fy, ...]`.
pub fn flatten_forces(forces: &[AppliedForce]) -> Vec<f64> {
    let mut out = Vec::with_capacity(forces.len() * FORCE_STRIDE);
    for f in forces {
        out.extend_from_slice(&[f.block as f64, f.point.x, f.point.y, f.force.x, f.force.y]);
    }
    out
}

/// Main entry point for the force field.
///
/// This struct wraps the internal LayoutEngine and provides the public API
/// exposed to JavaScript.
#[wasm_bindgen]
pub struct KnollingWasm {
    engine: LayoutEngine,
    /// Flat buffer of the last tick's forces.
    forces: Vec<f64>,
}

#[wasm_bindgen]
impl KnollingWasm {
    /// Create an engine with default parameters.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            engine: LayoutEngine::new(),
            forces: Vec::new(),
        }
    }

    // =========================================================================
    // Parameters
    // =========================================================================

    /// Replace the parameters from a JS object.
    ///
    /// Missing fields take their defaults.
    #[wasm_bindgen(js_name = setParams)]
    pub fn set_params(&mut self, params: JsValue) -> Result<(), JsError> {
        let params: LayoutParams = serde_wasm_bindgen::from_value(params)
            .map_err(|e| js_error(LayoutError::InvalidParams(e.to_string())))?;
        self.engine.set_params(params).map_err(js_error)
    }

    /// Current parameters as a JS object.
    pub fn params(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(self.engine.params()).map_err(|e| JsError::new(&e.to_string()))
    }

    #[wasm_bindgen(js_name = setForceOn)]
    pub fn set_force_on(&mut self, on: bool) {
        self.engine.set_force_on(on);
    }

    #[wasm_bindgen(js_name = setPokeEnabled)]
    pub fn set_poke_enabled(&mut self, enabled: bool) {
        self.engine.set_poke_enabled(enabled);
    }

    /// Restart the phase schedule and poke decay.
    #[wasm_bindgen(js_name = resetSchedule)]
    pub fn reset_schedule(&mut self) {
        self.engine.reset_schedule();
    }

    // =========================================================================
    // Blocks
    // =========================================================================

    /// Add a block. `vertices` is `[x0, y0, x1, y1, ...]`.
    ///
    /// Returns the block index, which must match the host's body index.
    #[wasm_bindgen(js_name = addBlock)]
    pub fn add_block(
        &mut self,
        x: f64,
        y: f64,
        vertices: &[f64],
        area: f64,
        is_static: bool,
    ) -> Result<u32, JsError> {
        let vertices = parse_vertices(vertices).map_err(js_error)?;
        let block = Block::new(Vector::new(x, y), vertices, area, is_static);
        let index = self.engine.add_block(block).map_err(js_error)?;
        Ok(index as u32)
    }

    /// Add an axis-aligned rectangle centred at `(x, y)`.
    #[wasm_bindgen(js_name = addRectangle)]
    pub fn add_rectangle(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        is_static: bool,
    ) -> Result<u32, JsError> {
        let mut block = Block::rectangle(x, y, width, height);
        block.is_static = is_static;
        let index = self.engine.add_block(block).map_err(js_error)?;
        Ok(index as u32)
    }

    /// Refresh a block's pose after integration.
    #[wasm_bindgen(js_name = updateBlock)]
    pub fn update_block(&mut self, index: u32, x: f64, y: f64, vertices: &[f64]) -> Result<(), JsError> {
        let vertices = parse_vertices(vertices).map_err(js_error)?;
        self.engine
            .update_block(index as usize, Vector::new(x, y), vertices)
            .map_err(js_error)
    }

    /// Replace every block from an array of `{position, vertices, area, isStatic}`.
    #[wasm_bindgen(js_name = setBlocks)]
    pub fn set_blocks(&mut self, blocks: JsValue) -> Result<(), JsError> {
        let blocks: Vec<Block> = serde_wasm_bindgen::from_value(blocks)
            .map_err(|e| JsError::new(&format!("invalid block list: {e}")))?;
        self.engine.set_blocks(blocks).map_err(js_error)
    }

    #[wasm_bindgen(js_name = clearBlocks)]
    pub fn clear_blocks(&mut self) {
        self.engine.clear();
        self.forces.clear();
    }

    #[wasm_bindgen(js_name = blockCount)]
    pub fn block_count(&self) -> u32 {
        self.engine.block_count() as u32
    }

    // =========================================================================
    // Simulation
    // =========================================================================

    /// Run one tick.
    ///
    /// Returns the forces as `[block, px, py, fx, fy, ...]`, also kept for
    /// [`forces_view`](Self::forces_view).
    pub fn step(&mut self) -> Result<Vec<f64>, JsError> {
        let report = self.engine.step().map_err(js_error)?;
        self.forces = flatten_forces(&report.forces);
        Ok(self.forces.clone())
    }

    /// Run one tick, returning `{tick, phase, forces: [{block, point, force}]}`.
    #[wasm_bindgen(js_name = stepDetailed)]
    pub fn step_detailed(&mut self) -> Result<JsValue, JsError> {
        let report = self.engine.step().map_err(js_error)?;
        self.forces = flatten_forces(&report.forces);
        serde_wasm_bindgen::to_value(&report).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Get a zero-copy view of the last tick's flat force buffer.
    ///
    /// # Safety
    ///
    /// The returned view is invalidated if any Rust allocation occurs.
    /// Read it immediately, do not store.
    #[wasm_bindgen(js_name = forcesView)]
    pub fn forces_view(&self) -> Float64Array {
        unsafe { Float64Array::view(&self.forces) }
    }

    /// Number of force applications in the last tick.
    #[wasm_bindgen(js_name = forceCount)]
    pub fn force_count(&self) -> u32 {
        (self.forces.len() / FORCE_STRIDE) as u32
    }

    /// Ticks completed since the last schedule reset.
    pub fn tick(&self) -> u32 {
        u32::try_from(self.engine.tick()).unwrap_or(u32::MAX)
    }

    /// Phase of the next tick: "grouping", "repulsion" or "alignment".
    pub fn phase(&self) -> String {
        self.engine.phase().to_string()
    }

    #[wasm_bindgen(js_name = pokeScale)]
    pub fn poke_scale(&self) -> f64 {
        self.engine.poke_scale()
    }

    // =========================================================================
    // Guide lines
    // =========================================================================

    /// Vertical alignment lines (x coordinates) shared by block edges.
    #[wasm_bindgen(js_name = attractorsX)]
    pub fn attractors_x(&self, radius: f64) -> Vec<f64> {
        self.engine.attractors(Axis::X, radius)
    }

    /// Horizontal alignment lines (y coordinates) shared by block edges.
    #[wasm_bindgen(js_name = attractorsY)]
    pub fn attractors_y(&self, radius: f64) -> Vec<f64> {
        self.engine.attractors(Axis::Y, radius)
    }
}

impl Default for KnollingWasm {
    fn default() -> Self {
        Self::new()
    }
}
