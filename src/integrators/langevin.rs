use rand::rngs::SmallRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use crate::constants::KB_KJPERMOLEKELVIN;
use crate::engine::atoms::Atoms;
use crate::integrators::integrator::Integrator;
use crate::potentials::Potential;

/// Langevin dynamics: velocity Verlet kicks around an exact
/// Ornstein-Uhlenbeck velocity update (BAOAB splitting).
pub struct LangevinIntegrator {
    dt: f64,
    temperature: f64,
    /// Collision rate in 1/ps.
    gamma: f64,
    rng: SmallRng,
    normal: Normal<f64>,
}

impl LangevinIntegrator {
    pub fn new(dt: f64, temperature: f64, gamma: f64, seed: u64) -> Self {
        Self {
            dt,
            temperature,
            gamma,
            rng: SmallRng::seed_from_u64(seed),
            normal: Normal::new(0.0, 1.0).expect("unit normal"),
        }
    }

    fn half_kick(&self, atoms: &mut Atoms) {
        let a = atoms.current_acceleration();
        atoms.velocities += a * (0.5 * self.dt);
    }

    fn thermalize(&mut self, atoms: &mut Atoms) {
        let c1 = (-self.gamma * self.dt).exp();
        let kt = KB_KJPERMOLEKELVIN * self.temperature;

        for i in 0..atoms.n_atoms {
            let sigma = (kt / atoms.mass_i(i) * (1.0 - c1 * c1)).sqrt();
            for d in 0..3 {
                let noise = self.normal.sample(&mut self.rng);
                atoms.velocities[(d, i)] = c1 * atoms.velocities[(d, i)] + sigma * noise;
            }
        }
    }
}

impl Integrator for LangevinIntegrator {
    fn timestep(&self) -> f64 {
        self.dt
    }

    fn step(&mut self, atoms: &mut Atoms, potential: &dyn Potential) {
        potential.compute_potential(atoms);
        self.half_kick(atoms);

        atoms.positions += &atoms.velocities * (0.5 * self.dt);
        self.thermalize(atoms);
        atoms.positions += &atoms.velocities * (0.5 * self.dt);

        potential.compute_potential(atoms);
        self.half_kick(atoms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::potentials::HarmonicWell;
    use na::{DVector, Matrix3xX};

    #[test]
    fn equilibrates_near_target_temperature() {
        let well = HarmonicWell::new(100.0);
        let mut atoms = Atoms::new(Matrix3xX::zeros(16), DVector::from_element(16, 39.948));
        let mut integrator = LangevinIntegrator::new(0.001, 300.0, 5.0, 42);

        for _ in 0..2000 {
            integrator.step(&mut atoms, &well);
        }
        // time-average the temperature once equilibrated
        let mut t_sum = 0.0;
        for _ in 0..2000 {
            integrator.step(&mut atoms, &well);
            t_sum += atoms.current_temperature(atoms.kinetic_energy());
        }
        let t_mean = t_sum / 2000.0;
        assert!(
            (t_mean - 300.0).abs() / 300.0 < 0.2,
            "mean temperature {t_mean} far from 300 K"
        );
    }

    #[test]
    fn same_seed_same_trajectory() {
        let well = HarmonicWell::new(100.0);
        let mut a = Atoms::new(Matrix3xX::zeros(4), DVector::from_element(4, 39.948));
        let mut b = Atoms::new(Matrix3xX::zeros(4), DVector::from_element(4, 39.948));
        let mut ia = LangevinIntegrator::new(0.001, 300.0, 5.0, 9);
        let mut ib = LangevinIntegrator::new(0.001, 300.0, 5.0, 9);

        for _ in 0..50 {
            ia.step(&mut a, &well);
            ib.step(&mut b, &well);
        }
        assert_eq!(a.positions, b.positions);
    }
}
