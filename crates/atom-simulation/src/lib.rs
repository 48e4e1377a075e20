//! # Atom Simulation Engine
//!
//! Frame-loop driver for a collection of atoms: time scaling, toggles and
//! read-only snapshots for the HUD and renderer.

pub mod params;
pub mod simulation;
pub mod snapshot;

pub use params::*;
pub use simulation::*;
pub use snapshot::*;
