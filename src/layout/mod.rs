//! Simulation orchestration.
//!
//! This module ties the force models together: [`LayoutParams`] holds the
//! tuning, [`LayoutEngine`] runs the phase schedule tick by tick and returns
//! the forces for the host physics engine to apply.

mod engine;
mod params;

pub use engine::{LayoutEngine, Phase, SimulationContext, TickReport};
pub use params::LayoutParams;
