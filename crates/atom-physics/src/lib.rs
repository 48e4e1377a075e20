//! # Atom Physics Engine
//!
//! Toy atomic model: protons, neutrons and electrons as classical point
//! particles, with orbital seeding heuristics and a Coulomb-like update loop.

pub mod atom;
pub mod constants;
pub mod electron;
pub mod element;
pub mod nucleon;
pub mod particle;
pub mod random;
pub mod settings;

pub use atom::*;
pub use electron::*;
pub use element::*;
pub use nucleon::*;
pub use particle::*;
pub use random::*;
pub use settings::*;
