//! Electrons: quantum numbers, trail history and orbital seeding

use std::collections::VecDeque;
use std::f32::consts::{PI, TAU};

use glam::Vec3;

use crate::constants;
use crate::particle::{OrbitalLabel, Particle, ParticleKind};
use crate::random::RandomSource;
use crate::settings::Settings;

/// (n, l, m, spin) labels for one electron
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantumNumbers {
    /// Principal, n >= 1
    pub n: u32,
    /// Angular momentum, 0 <= l < n
    pub l: u32,
    /// Magnetic, -l <= m <= l
    pub m: i32,
    /// +0.5 or -0.5
    pub spin: f32,
}

impl QuantumNumbers {
    pub const fn new(n: u32, l: u32, m: i32, spin: f32) -> Self {
        Self { n, l, m, spin }
    }
}

impl Default for QuantumNumbers {
    /// 1s, spin up
    fn default() -> Self {
        Self::new(1, 0, 0, 0.5)
    }
}

/// Electron-only state
#[derive(Debug, Clone, PartialEq)]
pub struct ElectronState {
    pub quantum_numbers: QuantumNumbers,
    orbital_path: VecDeque<Vec3>,
    max_path_points: usize,
}

impl ElectronState {
    pub fn new(max_path_points: usize) -> Self {
        Self {
            quantum_numbers: QuantumNumbers::default(),
            orbital_path: VecDeque::with_capacity(max_path_points + 1),
            max_path_points,
        }
    }

    /// Past positions, oldest first
    pub fn orbital_path(&self) -> &VecDeque<Vec3> {
        &self.orbital_path
    }

    pub fn max_path_points(&self) -> usize {
        self.max_path_points
    }

    pub(crate) fn record(&mut self, position: Vec3) {
        self.orbital_path.push_back(position);
        while self.orbital_path.len() > self.max_path_points {
            self.orbital_path.pop_front();
        }
    }
}

impl Particle {
    /// Ground-state electron at rest
    pub fn electron(position: Vec3, settings: Option<&Settings>) -> Self {
        let (mass, radius, color, path_points) = match settings {
            Some(s) => (
                s.electron_mass,
                s.electron_radius,
                s.electron_color,
                s.orbital_path_points,
            ),
            None => (
                constants::ELECTRON_MASS,
                constants::ELECTRON_RADIUS,
                constants::ELECTRON_COLOR,
                constants::ORBITAL_PATH_POINTS,
            ),
        };

        Particle::new(
            ParticleKind::Electron(ElectronState::new(path_points)),
            position,
            Vec3::ZERO,
            mass,
            constants::ELECTRON_CHARGE,
            constants::FERMION_SPIN,
            radius,
            color,
        )
    }

    /// Build an electron placed on a simplified Bohr orbit around
    /// `nucleus_position`.
    ///
    /// The orbit radius is n²·`orbital_scale_factor`. s electrons sit on a random
    /// point of that sphere and move tangentially; p electrons sit somewhere on
    /// the axis picked by `m` (-1 → x, 0 → y, otherwise z) and move along the
    /// first other axis. Shapes with l >= 2 are not modelled and the electron
    /// is left at rest at the origin.
    pub fn create_for_orbital<R: RandomSource + ?Sized>(
        quantum_numbers: QuantumNumbers,
        nucleus_position: Vec3,
        settings: &Settings,
        rng: &mut R,
    ) -> Self {
        let QuantumNumbers { n, l, m, .. } = quantum_numbers;

        let mut electron = Particle::electron(Vec3::ZERO, Some(settings));
        if let ParticleKind::Electron(state) = &mut electron.kind {
            state.quantum_numbers = quantum_numbers;
        }
        electron.set_quantum_state(n as i32, OrbitalLabel::from_angular_momentum(l));

        let n = n as f32;
        let orbital_radius = n * n * settings.orbital_scale_factor;
        let speed = settings.orbital_velocity_factor / n.sqrt();

        match l {
            0 => {
                let theta = rng.uniform(0.0, TAU);
                let phi = rng.uniform(0.0, PI);
                let (sin_theta, cos_theta) = theta.sin_cos();
                let (sin_phi, cos_phi) = phi.sin_cos();

                electron.position = nucleus_position
                    + orbital_radius * Vec3::new(sin_phi * cos_theta, sin_phi * sin_theta, cos_phi);

                // Sum of both tangential directions, deliberately not renormalised
                let v_theta = speed * Vec3::new(-sin_theta, cos_theta, 0.0);
                let v_phi = speed * Vec3::new(cos_phi * cos_theta, cos_phi * sin_theta, -sin_phi);
                electron.velocity = v_theta + v_phi;
            }
            1 => {
                let axis = match m {
                    -1 => Vec3::X,
                    0 => Vec3::Y,
                    _ => Vec3::Z,
                };

                let distance_along_axis = orbital_radius * (2.0 * rng.uniform(0.0, 1.0) - 1.0);
                electron.position = nucleus_position + axis * distance_along_axis;

                let perpendicular = [Vec3::X, Vec3::Y, Vec3::Z]
                    .into_iter()
                    .find(|candidate| *candidate != axis)
                    .unwrap_or(Vec3::X);
                electron.velocity = perpendicular * speed;
            }
            _ => {
                log::warn!("No orbital model for l = {l}; electron left unplaced");
            }
        }

        electron
    }

    /// Quantum numbers, for electrons
    pub fn quantum_numbers(&self) -> Option<QuantumNumbers> {
        match &self.kind {
            ParticleKind::Electron(state) => Some(state.quantum_numbers),
            _ => None,
        }
    }

    /// Trail of past positions, for electrons
    pub fn orbital_path(&self) -> Option<&VecDeque<Vec3>> {
        match &self.kind {
            ParticleKind::Electron(state) => Some(state.orbital_path()),
            _ => None,
        }
    }
}
