//! Protons and neutrons

use glam::Vec3;

use crate::constants;
use crate::particle::{Particle, ParticleKind};
use crate::settings::Settings;

/// Valence quark composition of a nucleon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuarkContent {
    pub up: u8,
    pub down: u8,
}

impl QuarkContent {
    pub const PROTON: Self = Self { up: 2, down: 1 };
    pub const NEUTRON: Self = Self { up: 1, down: 2 };
}

/// Beta decay bookkeeping. Reserved: no transition reads these yet.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DecayState {
    pub probability: f32,
    pub timer: f32,
}

impl Particle {
    /// Proton at rest
    pub fn proton(position: Vec3, settings: Option<&Settings>) -> Self {
        let (mass, radius, color) = match settings {
            Some(s) => (s.proton_mass, s.proton_radius, s.proton_color),
            None => (
                constants::PROTON_MASS,
                constants::PROTON_RADIUS,
                constants::PROTON_COLOR,
            ),
        };

        Particle::new(
            ParticleKind::Proton {
                quarks: QuarkContent::PROTON,
            },
            position,
            Vec3::ZERO,
            mass,
            constants::PROTON_CHARGE,
            constants::FERMION_SPIN,
            radius,
            color,
        )
    }

    /// Neutron at rest
    pub fn neutron(position: Vec3, settings: Option<&Settings>) -> Self {
        let (mass, radius, color) = match settings {
            Some(s) => (s.neutron_mass, s.neutron_radius, s.neutron_color),
            None => (
                constants::NEUTRON_MASS,
                constants::NEUTRON_RADIUS,
                constants::NEUTRON_COLOR,
            ),
        };

        Particle::new(
            ParticleKind::Neutron {
                quarks: QuarkContent::NEUTRON,
                decay: DecayState::default(),
            },
            position,
            Vec3::ZERO,
            mass,
            0.0,
            constants::FERMION_SPIN,
            radius,
            color,
        )
    }

    /// Quark composition, for nucleons
    pub fn quarks(&self) -> Option<QuarkContent> {
        match &self.kind {
            ParticleKind::Proton { quarks } | ParticleKind::Neutron { quarks, .. } => Some(*quarks),
            ParticleKind::Electron(_) => None,
        }
    }
}
