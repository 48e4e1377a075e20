//! Particle types and the shared kinematic integrator

use std::sync::atomic::{AtomicU64, Ordering};

use glam::Vec3;

use crate::electron::ElectronState;
use crate::nucleon::{DecayState, QuarkContent};

static NEXT_PARTICLE_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identifier, unique for the lifetime of the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId(u64);

impl ParticleId {
    fn next() -> Self {
        Self(NEXT_PARTICLE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Orbital shape label (s, p, d, f)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrbitalLabel {
    S,
    P,
    D,
    F,
}

impl OrbitalLabel {
    /// Label for an angular momentum quantum number, if one exists
    pub fn from_angular_momentum(l: u32) -> Option<Self> {
        match l {
            0 => Some(Self::S),
            1 => Some(Self::P),
            2 => Some(Self::D),
            3 => Some(Self::F),
            _ => None,
        }
    }
}

/// Stored quantum state. Nothing in the update loop reads it yet.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct QuantumState {
    pub energy_level: i32,
    pub orbital: Option<OrbitalLabel>,
    pub probability_density: Option<f32>,
}

/// Kind tag plus the data only that kind carries
#[derive(Debug, Clone, PartialEq)]
pub enum ParticleKind {
    Proton { quarks: QuarkContent },
    Neutron { quarks: QuarkContent, decay: DecayState },
    Electron(ElectronState),
}

/// A charged, massive, spinning point body
///
/// A clone keeps the source's id: both values describe the same particle.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    id: ParticleId,

    pub position: Vec3,
    pub velocity: Vec3,
    pub acceleration: Vec3,

    pub mass: f32,
    /// Electric charge (in units of elementary charge e)
    pub charge: f32,
    pub spin: f32,

    /// Size for rendering
    pub radius: f32,
    /// Display color (RGB)
    pub color: [f32; 3],

    /// Forces applied since the last integration step
    forces: Vec<Vec3>,

    pub quantum_state: QuantumState,
    pub kind: ParticleKind,
}

impl Particle {
    /// Create a particle at rest with zero acceleration
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        kind: ParticleKind,
        position: Vec3,
        velocity: Vec3,
        mass: f32,
        charge: f32,
        spin: f32,
        radius: f32,
        color: [f32; 3],
    ) -> Self {
        Self {
            id: ParticleId::next(),
            position,
            velocity,
            acceleration: Vec3::ZERO,
            mass,
            charge,
            spin,
            radius,
            color,
            forces: Vec::new(),
            quantum_state: QuantumState::default(),
            kind,
        }
    }

    pub fn id(&self) -> ParticleId {
        self.id
    }

    pub fn is_proton(&self) -> bool {
        matches!(self.kind, ParticleKind::Proton { .. })
    }

    pub fn is_neutron(&self) -> bool {
        matches!(self.kind, ParticleKind::Neutron { .. })
    }

    pub fn is_electron(&self) -> bool {
        matches!(self.kind, ParticleKind::Electron(_))
    }

    /// Forces applied since the last integration step
    pub fn forces(&self) -> &[Vec3] {
        &self.forces
    }

    /// Semi-implicit Euler step.
    ///
    /// v += a·dt, x += v·dt, then acceleration and the force log are reset.
    /// Electrons also append the new position to their trail.
    pub fn update_position(&mut self, dt: f32) {
        self.velocity += self.acceleration * dt;
        self.position += self.velocity * dt;
        self.acceleration = Vec3::ZERO;
        self.forces.clear();

        if let ParticleKind::Electron(state) = &mut self.kind {
            state.record(self.position);
        }
    }

    /// F = ma. Massless particles only log the force.
    pub fn apply_force(&mut self, force: Vec3) {
        if self.mass > 0.0 {
            self.acceleration += force / self.mass;
        }
        self.forces.push(force);
    }

    /// Hard reset of the force log and acceleration
    pub fn clear_forces(&mut self) {
        self.forces.clear();
        self.acceleration = Vec3::ZERO;
    }

    pub fn distance_to(&self, other: &Particle) -> f32 {
        self.position.distance(other.position)
    }

    /// ½·m·|v|²
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    pub fn set_quantum_state(&mut self, energy_level: i32, orbital: Option<OrbitalLabel>) {
        self.quantum_state.energy_level = energy_level;
        self.quantum_state.orbital = orbital;
        self.update_probability_density();
    }

    // Hook for a future wavefunction model; the classical model leaves the
    // density unset.
    fn update_probability_density(&mut self) {}
}
