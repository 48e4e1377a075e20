//! Read-only views of simulation state for the HUD and renderer

use atom_physics::{Atom, AtomId, Particle};
use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// What the HUD shows for one atom
#[derive(Debug, Clone, PartialEq)]
pub struct AtomSnapshot {
    pub id: AtomId,
    pub element_name: String,
    pub element_symbol: String,
    pub atomic_number: u32,
    pub mass_number: u32,
    pub protons: usize,
    pub neutrons: usize,
    pub electrons: usize,
    pub charge: i32,
    pub position: Vec3,
    pub velocity: Vec3,
    pub bonds: usize,
}

impl From<&Atom> for AtomSnapshot {
    fn from(atom: &Atom) -> Self {
        Self {
            id: atom.id(),
            element_name: atom.element_name().to_owned(),
            element_symbol: atom.element_symbol().to_owned(),
            atomic_number: atom.atomic_number(),
            mass_number: atom.mass_number(),
            protons: atom.proton_count(),
            neutrons: atom.neutron_count(),
            electrons: atom.electron_count(),
            charge: atom.charge(),
            position: atom.position,
            velocity: atom.velocity,
            bonds: atom.bonds.len(),
        }
    }
}

impl AtomSnapshot {
    /// Info panel text, one entry per line
    pub fn summary_lines(&self) -> Vec<String> {
        let p = self.position;
        let v = self.velocity;
        vec![
            format!("Selected: {} ({})", self.element_name, self.element_symbol),
            format!("Atomic Number: {}", self.atomic_number),
            format!("Protons: {}", self.protons),
            format!("Neutrons: {}", self.neutrons),
            format!("Electrons: {}", self.electrons),
            format!("Position: ({:.2}, {:.2}, {:.2})", p.x, p.y, p.z),
            format!("Velocity: ({:.2}, {:.2}, {:.2})", v.x, v.y, v.z),
            format!("Bonds: {}", self.bonds),
        ]
    }
}

/// Per-particle instance data, laid out for direct upload to a GPU buffer
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    /// Position in 3D space
    pub position: [f32; 3],
    /// Size for rendering
    pub radius: f32,
    /// RGBA, alpha always 1
    pub color: [f32; 4],
}

impl From<&Particle> for ParticleInstance {
    fn from(particle: &Particle) -> Self {
        let [r, g, b] = particle.color;
        Self {
            position: particle.position.to_array(),
            radius: particle.radius,
            color: [r, g, b, 1.0],
        }
    }
}
