use crate::engine::atoms::Atoms;
use crate::potentials::Potential;

/// One scheme advancing particle state by discrete timesteps.
///
/// `step` advances exactly one timestep. Schemes recompute forces from
/// the potential as needed and may carry internal state (counters,
/// random number generators).
pub trait Integrator {
    /// Timestep in ps.
    fn timestep(&self) -> f64;

    fn step(&mut self, atoms: &mut Atoms, potential: &dyn Potential);
}

impl<T: Integrator + ?Sized> Integrator for Box<T> {
    fn timestep(&self) -> f64 {
        (**self).timestep()
    }

    fn step(&mut self, atoms: &mut Atoms, potential: &dyn Potential) {
        (**self).step(atoms, potential)
    }
}
