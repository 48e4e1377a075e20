//! Toy Atom Simulation
//!
//! Headless driver: builds a handful of atoms, steps them at a fixed frame
//! rate and logs what the HUD would show.

use atom_physics::{RandomSource, RngSource, Settings};
use atom_simulation::{AtomSimulation, SimulationError, SimulationParams};
use glam::Vec3;

const FRAME_DT: f32 = 1.0 / 60.0;
const FRAME_COUNT: u32 = 600;
const REPORT_EVERY: u32 = 120;

/// A carbon atom at the origin plus `initial_atoms` random ones
fn initialize_atoms<R: RandomSource + ?Sized>(
    sim: &mut AtomSimulation,
    rng: &mut R,
) -> Result<(), SimulationError> {
    sim.spawn_element(6, None, Vec3::ZERO, rng)?;
    sim.populate(rng);

    log::info!("✓ Initialized {} atoms", sim.atoms().len());
    for snapshot in sim.snapshot() {
        log::info!(
            "    {} ({}): Z={}, A={}, charge={}",
            snapshot.element_name,
            snapshot.element_symbol,
            snapshot.atomic_number,
            snapshot.mass_number,
            snapshot.charge
        );
    }
    Ok(())
}

fn report(sim: &AtomSimulation) {
    log::info!(
        "t = {:.2}s, {} ticks, {} particles, {} trails",
        sim.elapsed(),
        sim.ticks(),
        sim.particle_instances().len(),
        sim.orbital_paths().len()
    );
    if let Some(selected) = sim.snapshot().first() {
        for line in selected.summary_lines() {
            log::debug!("    {line}");
        }
    }
}

fn main() -> Result<(), SimulationError> {
    // Initialize logger (RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting toy atom simulation...");

    let mut rng = RngSource::thread();
    let mut sim = AtomSimulation::new(Settings::default(), SimulationParams::default())?;
    initialize_atoms(&mut sim, &mut rng)?;

    for frame in 1..=FRAME_COUNT {
        sim.step(FRAME_DT, &mut rng);
        if frame % REPORT_EVERY == 0 {
            report(&sim);
        }
    }

    sim.clear();
    log::info!("Done");
    Ok(())
}
