//! Frame-loop owner of the atom collection

use atom_physics::{Atom, AtomId, Bond, RandomSource, Settings, SettingsError};
use glam::Vec3;

use crate::{AtomSnapshot, ParticleInstance, SimulationParams};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    #[error("invalid settings: {0}")]
    Settings(#[from] SettingsError),
    #[error("time scale must be finite and non-negative, got {0}")]
    InvalidTimeScale(f32),
    #[error("simulation already holds the maximum of {max} atoms")]
    CapacityReached { max: usize },
    #[error("no atom with id {0:?}")]
    UnknownAtom(AtomId),
    #[error("an atom cannot bond to itself")]
    SelfBond,
}

/// Owns every atom and steps them once per frame.
///
/// Input handling and rendering read from and poke at this; the atoms
/// themselves never see more than their own `update(dt)`.
pub struct AtomSimulation {
    atoms: Vec<Atom>,
    settings: Settings,
    params: SimulationParams,

    paused: bool,
    show_orbital_paths: bool,

    elapsed: f32,
    ticks: u64,
}

impl AtomSimulation {
    pub fn new(settings: Settings, params: SimulationParams) -> Result<Self, SimulationError> {
        settings.validate()?;
        check_time_scale(params.time_scale)?;

        log::info!(
            "Initializing AtomSimulation (max {} atoms, time scale {})",
            params.max_atoms,
            params.time_scale
        );

        Ok(Self {
            atoms: Vec::with_capacity(params.max_atoms),
            settings,
            params,
            paused: false,
            show_orbital_paths: true,
            elapsed: 0.0,
            ticks: 0,
        })
    }

    /// Spawn `initial_atoms` random atoms, stopping early at capacity.
    /// Returns how many were added.
    pub fn populate<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> usize {
        let mut spawned = 0;
        for _ in 0..self.params.initial_atoms {
            if self.spawn_random(rng).is_err() {
                break;
            }
            spawned += 1;
        }
        log::info!("✓ Spawned {spawned} atoms");
        spawned
    }

    pub fn spawn_random<R: RandomSource + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<AtomId, SimulationError> {
        self.ensure_capacity()?;
        let atom = Atom::create_random(self.settings, rng);
        Ok(self.insert(atom))
    }

    pub fn spawn_element<R: RandomSource + ?Sized>(
        &mut self,
        atomic_number: u32,
        neutron_count: Option<u32>,
        position: Vec3,
        rng: &mut R,
    ) -> Result<AtomId, SimulationError> {
        self.ensure_capacity()?;
        let atom =
            Atom::create_element(atomic_number, neutron_count, position, self.settings, rng);
        Ok(self.insert(atom))
    }

    fn ensure_capacity(&self) -> Result<(), SimulationError> {
        if self.atoms.len() >= self.params.max_atoms {
            return Err(SimulationError::CapacityReached {
                max: self.params.max_atoms,
            });
        }
        Ok(())
    }

    fn insert(&mut self, atom: Atom) -> AtomId {
        let id = atom.id();
        log::debug!(
            "Added {} ({}) at {:?}",
            atom.element_name(),
            atom.element_symbol(),
            atom.position
        );
        self.atoms.push(atom);
        id
    }

    /// Advance every atom by `dt` scaled by the time scale. No-op while paused.
    pub fn step<R: RandomSource + ?Sized>(&mut self, dt: f32, rng: &mut R) {
        if self.paused {
            return;
        }

        let scaled_dt = dt * self.params.time_scale;
        for atom in &mut self.atoms {
            atom.update(scaled_dt, rng);
        }

        self.elapsed += scaled_dt;
        self.ticks += 1;
    }

    /// Drop every atom
    pub fn clear(&mut self) {
        log::info!("Clearing {} atoms", self.atoms.len());
        self.atoms.clear();
    }

    /// Returns the new paused state
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Returns whether trails are now shown
    pub fn toggle_orbital_paths(&mut self) -> bool {
        self.show_orbital_paths = !self.show_orbital_paths;
        self.show_orbital_paths
    }

    pub fn set_time_scale(&mut self, time_scale: f32) -> Result<(), SimulationError> {
        check_time_scale(time_scale)?;
        self.params.time_scale = time_scale;
        Ok(())
    }

    /// Link two atoms. The bond is recorded on both sides.
    pub fn bond(&mut self, a: AtomId, b: AtomId, order: u8) -> Result<(), SimulationError> {
        if a == b {
            return Err(SimulationError::SelfBond);
        }
        let ia = self.index_of(a)?;
        let ib = self.index_of(b)?;

        self.atoms[ia].bonds.push(Bond { partner: b, order });
        self.atoms[ib].bonds.push(Bond { partner: a, order });
        Ok(())
    }

    fn index_of(&self, id: AtomId) -> Result<usize, SimulationError> {
        self.atoms
            .iter()
            .position(|atom| atom.id() == id)
            .ok_or(SimulationError::UnknownAtom(id))
    }

    pub fn atom(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.iter().find(|atom| atom.id() == id)
    }

    pub fn atom_mut(&mut self, id: AtomId) -> Option<&mut Atom> {
        self.atoms.iter_mut().find(|atom| atom.id() == id)
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn shows_orbital_paths(&self) -> bool {
        self.show_orbital_paths
    }

    /// Simulated time, after time scaling
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Steps taken while unpaused
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn snapshot(&self) -> Vec<AtomSnapshot> {
        self.atoms.iter().map(AtomSnapshot::from).collect()
    }

    /// Instance data for every particle of every atom
    pub fn particle_instances(&self) -> Vec<ParticleInstance> {
        self.atoms
            .iter()
            .flat_map(Atom::particles)
            .map(ParticleInstance::from)
            .collect()
    }

    /// Electron trails, oldest point first. Empty while trails are hidden.
    pub fn orbital_paths(&self) -> Vec<Vec<Vec3>> {
        if !self.show_orbital_paths {
            return Vec::new();
        }

        self.atoms
            .iter()
            .flat_map(Atom::electrons)
            .filter_map(|electron| electron.orbital_path())
            .map(|path| path.iter().copied().collect())
            .collect()
    }
}

fn check_time_scale(time_scale: f32) -> Result<(), SimulationError> {
    if !time_scale.is_finite() || time_scale < 0.0 {
        return Err(SimulationError::InvalidTimeScale(time_scale));
    }
    Ok(())
}
