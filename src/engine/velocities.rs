use na::{DVector, Vector3};
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use crate::constants::KB_KJPERMOLEKELVIN;
use crate::engine::atoms::Atoms;

impl Atoms {
    /// Draw Maxwell-Boltzmann velocities at `temperature` from an
    /// explicit seed, remove center-of-mass drift and rescale so the
    /// instantaneous temperature hits the target exactly.
    pub fn randomize_velocities(&mut self, temperature: f64, seed: u64) {
        self.sample_maxwell_boltzmann(temperature, seed);
        // a single particle has no internal motion to separate from drift
        if self.n_atoms > 1 {
            self.remove_drift();
        }
        self.rescale_to_temperature(temperature);
    }

    fn sample_maxwell_boltzmann(&mut self, temperature: f64, seed: u64) {
        let mut rng = rand::rngs::SmallRng::seed_from_u64(seed);

        for i in 0..self.n_atoms {
            let sigma = (KB_KJPERMOLEKELVIN * temperature / self.mass_i(i)).sqrt();
            let normal = Normal::new(0.0, sigma).expect("sigma is finite and non-negative");

            self.velocities[(0, i)] = normal.sample(&mut rng);
            self.velocities[(1, i)] = normal.sample(&mut rng);
            self.velocities[(2, i)] = normal.sample(&mut rng);
        }
    }

    fn remove_drift(&mut self) {
        let mut total_mass: f64 = 0.0;
        let mut total_momentum: Vector3<f64> = Vector3::zeros();

        for i in 0..self.n_atoms {
            let a_mass = self.mass_i(i);
            total_mass += a_mass;
            total_momentum += self.velocities.column(i) * a_mass;
        }

        let velocity_cm = total_momentum / total_mass;

        let ones = DVector::from_element(self.n_atoms, 1.0);
        // (3 × 1) * (1 × n) = (3 × n)
        self.velocities -= velocity_cm * ones.transpose();
    }

    fn rescale_to_temperature(&mut self, temperature: f64) {
        let kinetic_energy = self.kinetic_energy();
        let current_temperature = self.current_temperature(kinetic_energy);
        if current_temperature <= 0.0 {
            return;
        }

        let lambda = (temperature / current_temperature).sqrt();

        self.velocities *= lambda;
    }
}
