//! Literal particle constants
//!
//! Used whenever a particle is built without a [`Settings`](crate::Settings)
//! value, so the model stays usable standalone.

/// Electron mass (kg-equivalent units)
pub const ELECTRON_MASS: f32 = 9.1e-31;

/// Electron size for rendering
pub const ELECTRON_RADIUS: f32 = 0.05;

/// Electron display color (RGB)
pub const ELECTRON_COLOR: [f32; 3] = [0.3, 0.3, 1.0];

/// Electron charge (in units of elementary charge e)
pub const ELECTRON_CHARGE: f32 = -1.0;

/// Number of past positions kept for an electron trail
pub const ORBITAL_PATH_POINTS: usize = 100;

/// Proton mass (kg-equivalent units)
pub const PROTON_MASS: f32 = 1.673e-27;

/// Proton size for rendering
pub const PROTON_RADIUS: f32 = 0.1;

/// Proton display color (RGB)
pub const PROTON_COLOR: [f32; 3] = [1.0, 0.3, 0.3];

/// Proton charge
pub const PROTON_CHARGE: f32 = 1.0;

/// Neutron mass (kg-equivalent units)
pub const NEUTRON_MASS: f32 = 1.675e-27;

/// Neutron size for rendering
pub const NEUTRON_RADIUS: f32 = 0.1;

/// Neutron display color (RGB)
pub const NEUTRON_COLOR: [f32; 3] = [0.7, 0.7, 0.7];

/// Spin magnitude shared by all three particle kinds
pub const FERMION_SPIN: f32 = 0.5;

/// Standard deviation of the jitter used when a nucleon is first placed
pub const NUCLEON_PLACEMENT_SIGMA: f32 = 0.01;

/// Atomic numbers up to this value get one neutron per proton by default
pub const SYMMETRIC_NUCLEUS_LIMIT: u32 = 20;

/// Neutron-to-proton ratio used for heavier nuclei
pub const HEAVY_NEUTRON_RATIO: f64 = 1.5;
