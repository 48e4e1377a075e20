//! Simulation settings for runtime tuning

use crate::constants;

/// Reasons a [`Settings`] value is rejected before a simulation starts.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f32 },
    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f32 },
    #[error("orbital path must keep at least one point")]
    EmptyOrbitalPath,
}

/// Tunable constants read by the atom model.
///
/// Particle constructors take `Option<&Settings>`; when it is `None` they fall
/// back to the literals in [`constants`]. The defaults here work in simulation
/// units instead: masses are in electron masses, and the Coulomb constant and
/// orbital speed keep the electrons of light atoms bound.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settings {
    // Forces
    /// Coulomb constant k used for the nucleus-electron attraction
    pub coulomb_constant: f32,
    /// Standard deviation of the random force added to every electron each tick
    pub quantum_fluctuation: f32,

    // Geometry
    /// r0 in R = r0 * A^(1/3)
    pub nucleus_radius_constant: f32,
    /// Orbital radius per n², in simulation units
    pub orbital_scale_factor: f32,
    /// Initial orbital speed scale, divided by sqrt(n)
    pub orbital_velocity_factor: f32,
    /// Capacity of each electron's trail
    pub orbital_path_points: usize,
    /// Half-extent of the cube random atoms are spawned in
    pub simulation_bounds: f32,

    // Electron
    pub electron_mass: f32,
    pub electron_radius: f32,
    pub electron_color: [f32; 3],

    // Proton
    pub proton_mass: f32,
    pub proton_radius: f32,
    pub proton_color: [f32; 3],

    // Neutron
    pub neutron_mass: f32,
    pub neutron_radius: f32,
    pub neutron_color: [f32; 3],
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            coulomb_constant: 1.0,
            quantum_fluctuation: 0.05,

            nucleus_radius_constant: 0.12,
            orbital_scale_factor: 1.0,
            orbital_velocity_factor: 0.9,
            orbital_path_points: constants::ORBITAL_PATH_POINTS,
            simulation_bounds: 10.0,

            electron_mass: 1.0,
            electron_radius: constants::ELECTRON_RADIUS,
            electron_color: constants::ELECTRON_COLOR,

            proton_mass: 1836.15,
            proton_radius: constants::PROTON_RADIUS,
            proton_color: constants::PROTON_COLOR,

            neutron_mass: 1838.68,
            neutron_radius: constants::NEUTRON_RADIUS,
            neutron_color: constants::NEUTRON_COLOR,
        }
    }
}

impl Settings {
    /// Check the values once, up front.
    ///
    /// The per-tick code never re-checks, so a driver should call this before
    /// it starts stepping atoms.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let scalars = [
            ("coulomb_constant", self.coulomb_constant),
            ("quantum_fluctuation", self.quantum_fluctuation),
            ("nucleus_radius_constant", self.nucleus_radius_constant),
            ("orbital_scale_factor", self.orbital_scale_factor),
            ("orbital_velocity_factor", self.orbital_velocity_factor),
            ("simulation_bounds", self.simulation_bounds),
            ("electron_mass", self.electron_mass),
            ("electron_radius", self.electron_radius),
            ("proton_mass", self.proton_mass),
            ("proton_radius", self.proton_radius),
            ("neutron_mass", self.neutron_mass),
            ("neutron_radius", self.neutron_radius),
        ];

        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(SettingsError::NotFinite { name, value });
            }
            if value < 0.0 {
                return Err(SettingsError::Negative { name, value });
            }
        }

        if self.orbital_path_points == 0 {
            return Err(SettingsError::EmptyOrbitalPath);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_literal_particle_constants() {
        let settings = Settings::default();
        assert_eq!(settings.electron_radius, constants::ELECTRON_RADIUS);
        assert_eq!(settings.proton_color, constants::PROTON_COLOR);
        assert_eq!(settings.neutron_radius, constants::NEUTRON_RADIUS);
        assert_eq!(settings.orbital_path_points, 100);
    }

    #[test]
    fn test_default_masses_keep_mass_ratios() {
        let settings = Settings::default();
        let expected = constants::PROTON_MASS / constants::ELECTRON_MASS;
        let ratio = settings.proton_mass / settings.electron_mass;
        assert!((ratio - expected).abs() / expected < 1e-2);
        assert!(settings.neutron_mass > settings.proton_mass);
    }

    #[test]
    fn test_default_is_valid() {
        assert_eq!(Settings::default().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_negative_mass() {
        let settings = Settings {
            proton_mass: -1.0,
            ..Default::default()
        };
        assert_eq!(
            settings.validate(),
            Err(SettingsError::Negative {
                name: "proton_mass",
                value: -1.0
            })
        );
    }

    #[test]
    fn test_validate_rejects_nan_and_empty_path() {
        let settings = Settings {
            coulomb_constant: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::NotFinite {
                name: "coulomb_constant",
                ..
            })
        ));

        let settings = Settings {
            orbital_path_points: 0,
            ..Default::default()
        };
        assert_eq!(settings.validate(), Err(SettingsError::EmptyOrbitalPath));
    }
}
