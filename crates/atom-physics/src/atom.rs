//! Atoms: a nucleus of protons and neutrons plus an electron cloud

use std::sync::atomic::{AtomicU64, Ordering};

use glam::Vec3;

use crate::constants::NUCLEON_PLACEMENT_SIGMA;
use crate::electron::QuantumNumbers;
use crate::element::{default_neutron_count, element_identity};
use crate::particle::Particle;
use crate::random::RandomSource;
use crate::settings::Settings;

static NEXT_ATOM_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque atom identifier, unique for the lifetime of the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AtomId(u64);

/// Relation to another atom. Owned and interpreted by whoever forms bonds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bond {
    pub partner: AtomId,
    pub order: u8,
}

#[derive(Clone, Copy)]
struct Subshell {
    n: u32,
    l: u32,
    magnetic: &'static [i32],
}

/// Aufbau filling order. d and f shells are not modelled, which caps the
/// cloud at 18 electrons.
const FILL_ORDER: [Subshell; 5] = [
    Subshell { n: 1, l: 0, magnetic: &[0] },
    Subshell { n: 2, l: 0, magnetic: &[0] },
    Subshell { n: 2, l: 1, magnetic: &[-1, 0, 1] },
    Subshell { n: 3, l: 0, magnetic: &[0] },
    Subshell { n: 3, l: 1, magnetic: &[-1, 0, 1] },
];

const SPINS: [f32; 2] = [0.5, -0.5];

/// Every (n, l, m, spin) slot, in filling order
fn electron_slots() -> impl Iterator<Item = QuantumNumbers> {
    FILL_ORDER.into_iter().flat_map(|shell| {
        shell.magnetic.iter().flat_map(move |&m| {
            SPINS
                .into_iter()
                .map(move |spin| QuantumNumbers::new(shell.n, shell.l, m, spin))
        })
    })
}

/// Maximum number of electrons the filling table can place
fn electron_capacity() -> usize {
    electron_slots().count()
}

/// An atom.
///
/// `atomic_number`, `mass_number`, the element identity and the nucleus
/// radius are derived from the particle lists and refreshed by every mutation
/// that changes them.
///
/// Not `Clone`: an atom and its particles carry process-unique ids.
#[derive(Debug)]
pub struct Atom {
    id: AtomId,

    /// Nucleus location
    pub position: Vec3,
    /// Bulk drift
    pub velocity: Vec3,

    protons: Vec<Particle>,
    neutrons: Vec<Particle>,
    electrons: Vec<Particle>,

    atomic_number: u32,
    mass_number: u32,
    element_name: String,
    element_symbol: String,
    nucleus_radius: f32,

    pub bonds: Vec<Bond>,

    settings: Settings,
}

impl Atom {
    /// Empty atom with no particles
    pub fn new(position: Vec3, settings: Settings) -> Self {
        Self {
            id: AtomId(NEXT_ATOM_ID.fetch_add(1, Ordering::Relaxed)),
            position,
            velocity: Vec3::ZERO,
            protons: Vec::new(),
            neutrons: Vec::new(),
            electrons: Vec::new(),
            atomic_number: 0,
            mass_number: 0,
            element_name: String::new(),
            element_symbol: String::new(),
            nucleus_radius: 0.0,
            bonds: Vec::new(),
            settings,
        }
    }

    /// Fully formed atom: `atomic_number` protons, then the neutrons, then a
    /// ground-state electron cloud.
    ///
    /// `neutron_count` defaults to [`default_neutron_count`].
    pub fn create_element<R: RandomSource + ?Sized>(
        atomic_number: u32,
        neutron_count: Option<u32>,
        position: Vec3,
        settings: Settings,
        rng: &mut R,
    ) -> Self {
        let mut atom = Self::new(position, settings);

        for _ in 0..atomic_number {
            atom.add_proton(rng);
        }

        let neutron_count = neutron_count.unwrap_or_else(|| default_neutron_count(atomic_number));
        for _ in 0..neutron_count {
            atom.add_neutron(rng);
        }

        atom.build_electron_configuration(rng);

        log::debug!(
            "Built {} (Z={}, A={}, {} electrons) at {:?}",
            atom.element_name,
            atom.atomic_number,
            atom.mass_number,
            atom.electrons.len(),
            atom.position
        );

        atom
    }

    /// Element with Z uniform in 1..=8, somewhere inside the simulation cube
    pub fn create_random<R: RandomSource + ?Sized>(settings: Settings, rng: &mut R) -> Self {
        let atomic_number = rng.uniform_int(1, 8);
        let position = rng.uniform_in_cube(settings.simulation_bounds);
        Self::create_element(atomic_number, None, position, settings, rng)
    }

    /// Add a proton near the nucleus and refresh the derived properties.
    pub fn add_proton<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> &Particle {
        let position = self.position + rng.gaussian_vec3(NUCLEON_PLACEMENT_SIGMA);
        self.protons
            .push(Particle::proton(position, Some(&self.settings)));

        self.atomic_number += 1;
        self.mass_number += 1;
        self.update_element_identity();
        self.update_nucleus_radius();

        &self.protons[self.protons.len() - 1]
    }

    /// Add a neutron near the nucleus. Element identity is unaffected.
    pub fn add_neutron<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> &Particle {
        let position = self.position + rng.gaussian_vec3(NUCLEON_PLACEMENT_SIGMA);
        self.neutrons
            .push(Particle::neutron(position, Some(&self.settings)));

        self.mass_number += 1;
        self.update_nucleus_radius();

        &self.neutrons[self.neutrons.len() - 1]
    }

    /// Add an electron seeded for the given orbital around the nucleus.
    pub fn add_electron<R: RandomSource + ?Sized>(
        &mut self,
        quantum_numbers: QuantumNumbers,
        rng: &mut R,
    ) -> &Particle {
        let electron =
            Particle::create_for_orbital(quantum_numbers, self.position, &self.settings, rng);
        self.electrons.push(electron);

        &self.electrons[self.electrons.len() - 1]
    }

    /// Replace the electron cloud with a fresh ground-state configuration.
    ///
    /// Slots are consumed in aufbau order (1s, 2s, 2p, 3s, 3p; spin up before
    /// spin down for each m) until there is one electron per proton. Atoms
    /// beyond the table's capacity are left short of electrons.
    pub fn build_electron_configuration<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        self.electrons.clear();

        let wanted = self.atomic_number as usize;
        for quantum_numbers in electron_slots().take(wanted) {
            self.add_electron(quantum_numbers, rng);
        }

        if self.electrons.len() < wanted {
            log::debug!(
                "{} needs {} electrons, only {} orbital slots are modelled",
                self.element_name,
                wanted,
                electron_capacity()
            );
        }
    }

    /// Advance the atom by one tick.
    ///
    /// The nucleus drifts with the bulk velocity. Nucleons are re-placed around
    /// it with Gaussian wobble (σ = nucleus radius / 3) every tick, even when
    /// `dt` is zero. Electrons integrate, then receive the Coulomb pull toward
    /// the nucleus plus a random fluctuation force; an electron sitting exactly
    /// on the nucleus gets neither that tick.
    pub fn update<R: RandomSource + ?Sized>(&mut self, dt: f32, rng: &mut R) {
        self.position += self.velocity * dt;
        let nucleus = self.position;

        let wobble = self.nucleus_radius / 3.0;
        for nucleon in self.protons.iter_mut().chain(self.neutrons.iter_mut()) {
            nucleon.position = nucleus + rng.gaussian_vec3(wobble);
            nucleon.update_position(dt);
        }

        let pull = self.settings.coulomb_constant * self.atomic_number as f32;
        let fluctuation = self.settings.quantum_fluctuation;
        for electron in &mut self.electrons {
            electron.update_position(dt);

            let offset = electron.position - nucleus;
            let distance = offset.length();
            if distance > 0.0 {
                let magnitude = pull * electron.charge / (distance * distance);
                electron.apply_force(offset / distance * magnitude);
                electron.apply_force(rng.gaussian_vec3(fluctuation));
            }
        }

        log::trace!(
            "{} stepped by {dt}: nucleus at {:?}",
            self.element_symbol,
            self.position
        );
    }

    fn update_element_identity(&mut self) {
        let (name, symbol) = element_identity(self.atomic_number);
        self.element_name = name.into_owned();
        self.element_symbol = symbol.into_owned();
    }

    /// R = r0 * A^(1/3)
    fn update_nucleus_radius(&mut self) {
        self.nucleus_radius =
            self.settings.nucleus_radius_constant * (self.mass_number as f32).cbrt();
    }

    pub fn id(&self) -> AtomId {
        self.id
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Number of protons
    pub fn atomic_number(&self) -> u32 {
        self.atomic_number
    }

    /// Protons plus neutrons
    pub fn mass_number(&self) -> u32 {
        self.mass_number
    }

    pub fn element_name(&self) -> &str {
        &self.element_name
    }

    pub fn element_symbol(&self) -> &str {
        &self.element_symbol
    }

    /// Net charge, protons minus electrons
    pub fn charge(&self) -> i32 {
        self.protons.len() as i32 - self.electrons.len() as i32
    }

    pub fn nucleus_radius(&self) -> f32 {
        self.nucleus_radius
    }

    pub fn protons(&self) -> &[Particle] {
        &self.protons
    }

    pub fn neutrons(&self) -> &[Particle] {
        &self.neutrons
    }

    pub fn electrons(&self) -> &[Particle] {
        &self.electrons
    }

    pub fn proton_count(&self) -> usize {
        self.protons.len()
    }

    pub fn neutron_count(&self) -> usize {
        self.neutrons.len()
    }

    pub fn electron_count(&self) -> usize {
        self.electrons.len()
    }

    /// Every owned particle: protons, neutrons, then electrons
    pub fn particles(&self) -> impl Iterator<Item = &Particle> {
        self.protons
            .iter()
            .chain(self.neutrons.iter())
            .chain(self.electrons.iter())
    }

    /// Display tint for the atom as a whole
    pub fn color(&self) -> [f32; 3] {
        self.settings.proton_color
    }

    /// Radii (n²·scale) of the occupied shells, innermost first
    pub fn electron_shell_radii(&self) -> Vec<f32> {
        let mut shells: Vec<u32> = self
            .electrons
            .iter()
            .filter_map(|e| e.quantum_numbers())
            .map(|q| q.n)
            .collect();
        shells.sort_unstable();
        shells.dedup();

        shells
            .into_iter()
            .map(|n| (n * n) as f32 * self.settings.orbital_scale_factor)
            .collect()
    }

    /// Kinetic energy of the owned particles plus the bulk drift
    pub fn kinetic_energy(&self) -> f32 {
        let total_mass: f32 = self.particles().map(|p| p.mass).sum();
        let internal: f32 = self.particles().map(Particle::kinetic_energy).sum();
        internal + 0.5 * total_mass * self.velocity.length_squared()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{MeanSource, RngSource};

    fn unit_settings() -> Settings {
        Settings {
            electron_mass: 1.0,
            proton_mass: 1.0,
            neutron_mass: 1.0,
            coulomb_constant: 1.0,
            quantum_fluctuation: 0.0,
            ..Default::default()
        }
    }

    fn spins(atom: &Atom) -> Vec<(u32, u32, i32, f32)> {
        atom.electrons()
            .iter()
            .filter_map(|e| e.quantum_numbers())
            .map(|q| (q.n, q.l, q.m, q.spin))
            .collect()
    }

    #[test]
    fn test_new_atom_is_empty() {
        let atom = Atom::new(Vec3::ONE, Settings::default());
        assert_eq!(atom.atomic_number(), 0);
        assert_eq!(atom.mass_number(), 0);
        assert_eq!(atom.element_name(), "");
        assert_eq!(atom.element_symbol(), "");
        assert_eq!(atom.nucleus_radius(), 0.0);
        assert_eq!(atom.charge(), 0);
        assert!(atom.bonds.is_empty());
    }

    #[test]
    fn test_add_proton_updates_identity() {
        let mut atom = Atom::new(Vec3::ZERO, Settings::default());
        let mut rng = RngSource::seeded(1);

        let proton = atom.add_proton(&mut rng);
        assert!(proton.is_proton());
        assert!(proton.position.length() < 0.1);

        assert_eq!(atom.atomic_number(), 1);
        assert_eq!(atom.mass_number(), 1);
        assert_eq!(atom.element_symbol(), "H");

        atom.add_proton(&mut rng);
        assert_eq!(atom.element_name(), "Helium");
        assert_eq!(atom.element_symbol(), "He");
    }

    #[test]
    fn test_add_neutron_keeps_identity() {
        let settings = Settings::default();
        let mut atom = Atom::new(Vec3::ZERO, settings);
        let mut rng = MeanSource;

        atom.add_proton(&mut rng);
        let radius_before = atom.nucleus_radius();
        let neutron = atom.add_neutron(&mut rng);
        assert!(neutron.is_neutron());
        assert_eq!(neutron.position, Vec3::ZERO);

        assert_eq!(atom.atomic_number(), 1);
        assert_eq!(atom.mass_number(), 2);
        assert_eq!(atom.element_symbol(), "H");
        assert!(atom.nucleus_radius() > radius_before);
        let expected = settings.nucleus_radius_constant * 2.0_f32.cbrt();
        assert!((atom.nucleus_radius() - expected).abs() < 1e-6);
    }

    #[test]
    fn test_carbon() {
        let mut rng = RngSource::seeded(6);
        let atom = Atom::create_element(6, None, Vec3::ZERO, Settings::default(), &mut rng);

        assert_eq!(atom.atomic_number(), 6);
        assert_eq!(atom.proton_count(), 6);
        assert_eq!(atom.neutron_count(), 6);
        assert_eq!(atom.mass_number(), 12);
        assert_eq!(atom.element_name(), "Carbon");
        assert_eq!(atom.element_symbol(), "C");
        assert_eq!(
            spins(&atom),
            vec![
                (1, 0, 0, 0.5),
                (1, 0, 0, -0.5),
                (2, 0, 0, 0.5),
                (2, 0, 0, -0.5),
                (2, 1, -1, 0.5),
                (2, 1, -1, -0.5),
            ]
        );
        assert_eq!(atom.charge(), 0);
    }

    #[test]
    fn test_hydrogen() {
        let mut rng = RngSource::seeded(1);
        let atom = Atom::create_element(1, None, Vec3::ZERO, Settings::default(), &mut rng);

        assert_eq!(atom.proton_count(), 1);
        assert_eq!(atom.neutron_count(), 1);
        assert_eq!(atom.electron_count(), 1);
        assert_eq!(atom.charge(), 0);
    }

    #[test]
    fn test_explicit_neutron_count() {
        let mut rng = MeanSource;
        let atom = Atom::create_element(1, Some(0), Vec3::ZERO, Settings::default(), &mut rng);
        assert_eq!(atom.neutron_count(), 0);
        assert_eq!(atom.mass_number(), 1);

        let atom = Atom::create_element(1, Some(2), Vec3::ZERO, Settings::default(), &mut rng);
        assert_eq!(atom.mass_number(), 3);
    }

    #[test]
    fn test_heavy_element_runs_out_of_slots() {
        let mut rng = RngSource::seeded(26);
        let atom = Atom::create_element(26, None, Vec3::ZERO, Settings::default(), &mut rng);

        assert_eq!(electron_capacity(), 18);
        assert_eq!(atom.neutron_count(), 39);
        assert_eq!(atom.electron_count(), 18);
        assert_eq!(atom.charge(), 8);
        assert_eq!(atom.element_name(), "Element-26");
        assert_eq!(atom.element_symbol(), "E26");
    }

    #[test]
    fn test_electron_configuration_is_repeatable() {
        let mut rng = RngSource::seeded(8);
        let mut atom = Atom::create_element(8, None, Vec3::ZERO, Settings::default(), &mut rng);

        let first = spins(&atom);
        let first_positions: Vec<Vec3> = atom.electrons().iter().map(|e| e.position).collect();

        atom.build_electron_configuration(&mut rng);

        assert_eq!(atom.electron_count(), 8);
        assert_eq!(spins(&atom), first);
        let second_positions: Vec<Vec3> = atom.electrons().iter().map(|e| e.position).collect();
        assert_ne!(first_positions, second_positions);
    }

    #[test]
    fn test_create_random() {
        let settings = Settings::default();
        let mut rng = RngSource::seeded(1234);

        for _ in 0..50 {
            let atom = Atom::create_random(settings, &mut rng);
            assert!((1..=8).contains(&atom.atomic_number()));
            assert_eq!(atom.electron_count(), atom.atomic_number() as usize);
            assert!(atom.position.abs().max_element() <= settings.simulation_bounds);
        }
    }

    #[test]
    fn test_charge_tracks_protons_and_electrons() {
        let mut atom = Atom::new(Vec3::ZERO, Settings::default());
        let mut rng = RngSource::seeded(77);
        let quantum_numbers = QuantumNumbers::default();

        let steps = [true, true, false, true, false, false, false, true];
        for add_proton in steps {
            if add_proton {
                atom.add_proton(&mut rng);
            } else {
                atom.add_electron(quantum_numbers, &mut rng);
            }
            assert_eq!(
                atom.charge(),
                atom.proton_count() as i32 - atom.electron_count() as i32
            );
            assert_eq!(atom.atomic_number() as usize, atom.proton_count());
        }
        assert_eq!(atom.charge(), 0);
    }

    #[test]
    fn test_update_with_zero_dt() {
        let mut rng = RngSource::seeded(3);
        let mut atom = Atom::create_element(3, None, Vec3::ONE, Settings::default(), &mut rng);
        atom.velocity = Vec3::X;

        let nucleons_before: Vec<Vec3> = atom
            .protons()
            .iter()
            .chain(atom.neutrons())
            .map(|p| p.position)
            .collect();
        let electrons_before: Vec<Vec3> = atom.electrons().iter().map(|e| e.position).collect();

        atom.update(0.0, &mut rng);

        assert_eq!(atom.position, Vec3::ONE);
        let electrons_after: Vec<Vec3> = atom.electrons().iter().map(|e| e.position).collect();
        assert_eq!(electrons_before, electrons_after);

        // nucleon wobble is re-sampled regardless of dt
        let nucleons_after: Vec<Vec3> = atom
            .protons()
            .iter()
            .chain(atom.neutrons())
            .map(|p| p.position)
            .collect();
        assert_ne!(nucleons_before, nucleons_after);
    }

    #[test]
    fn test_update_drifts_nucleus() {
        let mut atom = Atom::new(Vec3::ZERO, Settings::default());
        atom.velocity = Vec3::new(1.0, 0.0, -2.0);

        atom.update(0.5, &mut MeanSource);

        assert_eq!(atom.position, Vec3::new(0.5, 0.0, -1.0));
    }

    #[test]
    fn test_update_recenters_nucleons() {
        let mut atom = Atom::new(Vec3::ZERO, unit_settings());
        atom.add_proton(&mut MeanSource);
        atom.add_neutron(&mut MeanSource);
        atom.velocity = Vec3::Y;

        atom.update(1.0, &mut MeanSource);

        for nucleon in atom.protons().iter().chain(atom.neutrons()) {
            assert_eq!(nucleon.position, Vec3::Y);
        }
    }

    #[test]
    fn test_update_pulls_electron_toward_nucleus() {
        let mut atom = Atom::new(Vec3::ZERO, unit_settings());
        atom.add_proton(&mut MeanSource);
        atom.add_electron(QuantumNumbers::default(), &mut MeanSource);
        atom.electrons[0].position = Vec3::new(2.0, 0.0, 0.0);
        atom.electrons[0].velocity = Vec3::ZERO;

        atom.update(0.0, &mut MeanSource);

        let electron = &atom.electrons()[0];
        // k * q * Z / d² = 1 * -1 * 1 / 4, along +x
        assert_eq!(electron.forces(), &[Vec3::new(-0.25, 0.0, 0.0), Vec3::ZERO]);
        assert_eq!(electron.acceleration, Vec3::new(-0.25, 0.0, 0.0));

        atom.update(1.0, &mut MeanSource);
        let electron = &atom.electrons()[0];
        assert_eq!(electron.velocity, Vec3::new(-0.25, 0.0, 0.0));
        assert_eq!(electron.position, Vec3::new(1.75, 0.0, 0.0));
    }

    #[test]
    fn test_update_pull_scales_with_atomic_number() {
        let mut atom = Atom::new(Vec3::ZERO, unit_settings());
        atom.add_proton(&mut MeanSource);
        atom.add_proton(&mut MeanSource);
        atom.add_electron(QuantumNumbers::default(), &mut MeanSource);
        atom.electrons[0].position = Vec3::new(0.0, 2.0, 0.0);
        atom.electrons[0].velocity = Vec3::ZERO;

        atom.update(0.0, &mut MeanSource);

        // 1 * -1 * 2 / 4, along +y
        let electron = &atom.electrons()[0];
        assert_eq!(electron.forces()[0], Vec3::new(0.0, -0.5, 0.0));
        assert_eq!(electron.acceleration, Vec3::new(0.0, -0.5, 0.0));
    }

    #[test]
    fn test_default_settings_keep_electrons_bound() {
        let mut rng = RngSource::seeded(1);
        let mut atom = Atom::create_element(2, None, Vec3::ZERO, Settings::default(), &mut rng);

        for _ in 0..600 {
            atom.update(1.0 / 60.0, &mut rng);
            for electron in atom.electrons() {
                let distance = electron.position.distance(atom.position);
                assert!(electron.position.is_finite());
                assert!(electron.velocity.is_finite());
                assert!(distance > 0.25 && distance < 4.0, "distance {distance}");
            }
        }
    }

    #[test]
    fn test_default_settings_stay_finite() {
        let mut rng = RngSource::seeded(1);
        let mut atom = Atom::create_element(6, None, Vec3::ZERO, Settings::default(), &mut rng);

        for _ in 0..600 {
            atom.update(1.0 / 60.0, &mut rng);
        }

        for electron in atom.electrons() {
            assert!(electron.position.is_finite());
            assert!(electron.velocity.is_finite());
            assert!(electron.acceleration.is_finite());
        }
    }

    #[test]
    fn test_update_skips_electron_on_nucleus() {
        let mut atom = Atom::new(Vec3::ZERO, unit_settings());
        atom.add_proton(&mut MeanSource);
        atom.add_electron(QuantumNumbers::default(), &mut MeanSource);
        atom.electrons[0].position = Vec3::ZERO;
        atom.electrons[0].velocity = Vec3::ZERO;

        atom.update(0.1, &mut RngSource::seeded(2));

        let electron = &atom.electrons()[0];
        assert!(electron.forces().is_empty());
        assert_eq!(electron.acceleration, Vec3::ZERO);
    }

    #[test]
    fn test_update_records_orbital_paths() {
        let settings = Settings {
            orbital_path_points: 4,
            ..unit_settings()
        };
        let mut rng = RngSource::seeded(10);
        let mut atom = Atom::create_element(2, None, Vec3::ZERO, settings, &mut rng);

        for _ in 0..10 {
            atom.update(0.01, &mut rng);
        }

        for electron in atom.electrons() {
            let path = electron.orbital_path().unwrap();
            assert_eq!(path.len(), 4);
            assert_eq!(path.back(), Some(&electron.position));
        }
    }

    #[test]
    fn test_electron_shell_radii() {
        let settings = Settings {
            orbital_scale_factor: 0.5,
            ..Default::default()
        };
        let atom = Atom::create_element(4, None, Vec3::ZERO, settings, &mut MeanSource);
        assert_eq!(atom.electron_shell_radii(), vec![0.5, 2.0]);
    }

    #[test]
    fn test_kinetic_energy_includes_drift() {
        let mut atom = Atom::new(Vec3::ZERO, unit_settings());
        atom.add_proton(&mut MeanSource);
        atom.add_neutron(&mut MeanSource);
        atom.velocity = Vec3::new(0.0, 2.0, 0.0);

        // two unit masses moving together at speed 2
        assert_eq!(atom.kinetic_energy(), 4.0);
    }
}
