use na::{DVector, Matrix3xX};

use crate::constants::KB_KJPERMOLEKELVIN;
use crate::simulation_box::SimulationBox;

/// Dynamical state of the simulated particles. Columns are particles.
pub struct Atoms {
    pub n_atoms: usize,
    pub positions: Matrix3xX<f64>,
    pub velocities: Matrix3xX<f64>,
    pub forces: Matrix3xX<f64>,
    pub masses: DVector<f64>,
    pub sim_box: Option<SimulationBox>,
}

impl Atoms {
    pub fn new(positions: Matrix3xX<f64>, masses: DVector<f64>) -> Self {
        let n_atoms = positions.ncols();
        assert_eq!(masses.len(), n_atoms);
        Self {
            n_atoms,
            positions,
            velocities: Matrix3xX::zeros(n_atoms),
            forces: Matrix3xX::zeros(n_atoms),
            masses,
            sim_box: None,
        }
    }

    pub fn with_box(mut self, sim_box: SimulationBox) -> Self {
        self.sim_box = Some(sim_box);
        self
    }

    pub fn mass_i(&self, i: usize) -> f64 {
        self.masses[i]
    }

    pub fn kinetic_energy(&self) -> f64 {
        let mut ek: f64 = 0.0;
        for (i, velocity) in self.velocities.column_iter().enumerate() {
            ek += 0.5 * self.mass_i(i) * velocity.norm_squared();
        }
        ek
    }

    pub fn current_temperature(&self, kinetic_energy: f64) -> f64 {
        (2.0 * kinetic_energy) / (3.0 * self.n_atoms as f64 * KB_KJPERMOLEKELVIN)
    }

    pub fn current_acceleration(&self) -> Matrix3xX<f64> {
        let mut acceleration = Matrix3xX::zeros(self.n_atoms);
        for i in 0..self.n_atoms {
            let mut a_i = acceleration.column_mut(i);
            a_i += self.forces.column(i) / self.mass_i(i);
        }
        acceleration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn two_atoms() -> Atoms {
        let positions = Matrix3xX::zeros(2);
        let masses = DVector::from_element(2, 2.0);
        Atoms::new(positions, masses)
    }

    #[test]
    fn kinetic_energy_sums_half_m_v_squared() {
        let mut atoms = two_atoms();
        atoms.velocities[(0, 0)] = 3.0;
        atoms.velocities[(1, 1)] = 4.0;
        assert_relative_eq!(atoms.kinetic_energy(), 0.5 * 2.0 * 25.0, epsilon = 1e-12);
    }

    #[test]
    fn acceleration_divides_force_by_mass() {
        let mut atoms = two_atoms();
        atoms.forces[(0, 0)] = 6.0;
        let a = atoms.current_acceleration();
        assert_relative_eq!(a[(0, 0)], 3.0, epsilon = 1e-12);
        assert_relative_eq!(a[(0, 1)], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn temperature_matches_equipartition() {
        let mut atoms = two_atoms();
        atoms.velocities[(0, 0)] = 1.0;
        let ke = atoms.kinetic_energy();
        let t = atoms.current_temperature(ke);
        assert_relative_eq!(t, 2.0 * ke / (6.0 * KB_KJPERMOLEKELVIN), epsilon = 1e-12);
    }
}
