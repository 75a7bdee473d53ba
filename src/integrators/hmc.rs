use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::constants::KB_KJPERMOLEKELVIN;
use crate::engine::atoms::Atoms;
use crate::integrators::integrator::Integrator;
use crate::integrators::velocity_verlet::VelocityVerletIntegrator;
use crate::potentials::Potential;

/// Hybrid Monte Carlo. One `step` is one trial move: refresh momenta
/// from the Maxwell-Boltzmann distribution, propose a short velocity
/// Verlet trajectory, then accept or reject by the Metropolis criterion
/// on the total-energy change. Keeps accepted/trial counts for the
/// acceptance-rate bookkeeping the checks assert on.
pub struct HmcIntegrator {
    temperature: f64,
    inner: VelocityVerletIntegrator,
    dt: f64,
    steps_per_trial: usize,
    rng: SmallRng,
    normal: Normal<f64>,
    n_accept: usize,
    n_trials: usize,
}

impl HmcIntegrator {
    pub fn new(dt: f64, temperature: f64, seed: u64) -> Self {
        Self {
            temperature,
            inner: VelocityVerletIntegrator::new(dt),
            dt,
            steps_per_trial: 1,
            rng: SmallRng::seed_from_u64(seed),
            normal: Normal::new(0.0, 1.0).expect("unit normal"),
            n_accept: 0,
            n_trials: 0,
        }
    }

    pub fn n_accept(&self) -> usize {
        self.n_accept
    }

    pub fn n_trials(&self) -> usize {
        self.n_trials
    }

    pub fn acceptance_rate(&self) -> f64 {
        self.n_accept as f64 / self.n_trials as f64
    }

    fn refresh_momenta(&mut self, atoms: &mut Atoms) {
        let kt = KB_KJPERMOLEKELVIN * self.temperature;
        for i in 0..atoms.n_atoms {
            let sigma = (kt / atoms.mass_i(i)).sqrt();
            for d in 0..3 {
                atoms.velocities[(d, i)] = sigma * self.normal.sample(&mut self.rng);
            }
        }
    }
}

impl Integrator for HmcIntegrator {
    fn timestep(&self) -> f64 {
        self.dt
    }

    fn step(&mut self, atoms: &mut Atoms, potential: &dyn Potential) {
        self.refresh_momenta(atoms);

        let u0 = potential.compute_potential(atoms);
        let h0 = atoms.kinetic_energy() + u0;
        let saved_positions = atoms.positions.clone();

        for _ in 0..self.steps_per_trial {
            self.inner.step(atoms, potential);
        }

        let u1 = potential.compute_potential(atoms);
        let h1 = atoms.kinetic_energy() + u1;

        self.n_trials += 1;
        let delta = h1 - h0;
        let kt = KB_KJPERMOLEKELVIN * self.temperature;
        let accept = delta <= 0.0 || self.rng.gen::<f64>() < (-delta / kt).exp();

        if accept {
            self.n_accept += 1;
        } else {
            atoms.positions = saved_positions;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::potentials::{HarmonicWell, IdealGas};
    use approx::assert_relative_eq;
    use na::{DVector, Matrix3xX};

    #[test]
    fn ideal_gas_accepts_every_trial() {
        let gas = IdealGas;
        let mut atoms = Atoms::new(Matrix3xX::zeros(8), DVector::from_element(8, 39.948));
        let mut hmc = HmcIntegrator::new(5.0e-5, 300.0, 21);

        for _ in 0..25 {
            hmc.step(&mut atoms, &gas);
        }

        assert_eq!(hmc.n_accept(), 25);
        assert_eq!(hmc.n_trials(), 25);
        assert_relative_eq!(hmc.acceptance_rate(), 1.0);
    }

    #[test]
    fn rejected_trials_restore_positions() {
        // huge timestep in a stiff well makes the proposal blow up the
        // energy, forcing rejections
        let well = HarmonicWell::new(1.0e6);
        let mut positions = Matrix3xX::zeros(4);
        for i in 0..4 {
            positions[(0, i)] = 0.1 * (i as f64 + 1.0);
        }
        let mut atoms = Atoms::new(positions.clone(), DVector::from_element(4, 1.0));
        let mut hmc = HmcIntegrator::new(0.05, 300.0, 33);

        for _ in 0..10 {
            hmc.step(&mut atoms, &well);
        }

        assert!(hmc.n_accept() < hmc.n_trials());
        if hmc.n_accept() == 0 {
            assert_eq!(atoms.positions, positions);
        }
    }

    #[test]
    fn counters_start_at_zero() {
        let hmc = HmcIntegrator::new(5.0e-5, 300.0, 0);
        assert_eq!(hmc.n_accept(), 0);
        assert_eq!(hmc.n_trials(), 0);
    }
}
