use crate::engine::atoms::Atoms;
use crate::integrators::integrator::Integrator;
use crate::potentials::Potential;

/// Standard velocity Verlet.
pub struct VelocityVerletIntegrator {
    dt: f64,
}

impl VelocityVerletIntegrator {
    pub fn new(dt: f64) -> Self {
        Self { dt }
    }
}

impl Integrator for VelocityVerletIntegrator {
    fn timestep(&self) -> f64 {
        self.dt
    }

    fn step(&mut self, atoms: &mut Atoms, potential: &dyn Potential) {
        let dt = self.dt;

        potential.compute_potential(atoms);
        let a_t = atoms.current_acceleration();

        atoms.positions += &atoms.velocities * dt + &a_t * 0.5 * dt.powi(2);

        potential.compute_potential(atoms);
        let a_tdt = atoms.current_acceleration();

        atoms.velocities += (a_t + a_tdt) * 0.5 * dt;
    }
}
