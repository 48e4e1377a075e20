//! Driver parameters for runtime tuning

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParams {
    /// Multiplier applied to every frame's dt before it reaches the atoms
    pub time_scale: f32,
    /// Upper bound on the number of live atoms
    pub max_atoms: usize,
    /// Random atoms spawned by `AtomSimulation::populate`
    pub initial_atoms: usize,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            max_atoms: 64,
            initial_atoms: 5,
        }
    }
}
