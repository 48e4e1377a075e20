//! Element names, symbols and the default isotope heuristic

use std::borrow::Cow;

use crate::constants::{HEAVY_NEUTRON_RATIO, SYMMETRIC_NUCLEUS_LIMIT};

/// (name, symbol) for Z = 1..=8
const ELEMENTS: [(&str, &str); 8] = [
    ("Hydrogen", "H"),
    ("Helium", "He"),
    ("Lithium", "Li"),
    ("Beryllium", "Be"),
    ("Boron", "B"),
    ("Carbon", "C"),
    ("Nitrogen", "N"),
    ("Oxygen", "O"),
];

/// Name and symbol for an atomic number.
///
/// Z outside the table gets a synthesized `Element-N` / `EN` pair; Z = 0
/// (no protons yet) has no identity and yields empty strings.
pub fn element_identity(atomic_number: u32) -> (Cow<'static, str>, Cow<'static, str>) {
    if atomic_number == 0 {
        return (Cow::Borrowed(""), Cow::Borrowed(""));
    }

    match ELEMENTS.get(atomic_number as usize - 1) {
        Some(&(name, symbol)) => (Cow::Borrowed(name), Cow::Borrowed(symbol)),
        None => (
            Cow::Owned(format!("Element-{atomic_number}")),
            Cow::Owned(format!("E{atomic_number}")),
        ),
    }
}

/// Neutrons given to a freshly built element when none are requested.
///
/// One per proton up to Z = 20, then 1.5·Z rounded half-to-even. This is a
/// stability rule of thumb, not an isotope table.
pub fn default_neutron_count(atomic_number: u32) -> u32 {
    if atomic_number <= SYMMETRIC_NUCLEUS_LIMIT {
        atomic_number
    } else {
        (HEAVY_NEUTRON_RATIO * atomic_number as f64).round_ties_even() as u32
    }
}
