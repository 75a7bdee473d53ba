use crate::engine::atoms::Atoms;
use crate::integrators::integrator::Integrator;
use crate::potentials::Potential;

/// Leapfrog: full-step kick from current forces, then drift.
pub struct LeapfrogIntegrator {
    dt: f64,
}

impl LeapfrogIntegrator {
    pub fn new(dt: f64) -> Self {
        Self { dt }
    }
}

impl Integrator for LeapfrogIntegrator {
    fn timestep(&self) -> f64 {
        self.dt
    }

    fn step(&mut self, atoms: &mut Atoms, potential: &dyn Potential) {
        potential.compute_potential(atoms);
        let a_t = atoms.current_acceleration();

        atoms.velocities += a_t * self.dt;
        atoms.positions += &atoms.velocities * self.dt;
    }
}
