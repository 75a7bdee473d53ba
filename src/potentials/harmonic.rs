use crate::engine::atoms::Atoms;
use crate::potentials::potential::Potential;

/// Isotropic harmonic restraint about the origin, U = ½ k |r|² per
/// particle. Backs the harmonic-oscillator test system.
pub struct HarmonicWell {
    k: f64,
}

impl HarmonicWell {
    /// `k` in kJ/(mol·nm²)
    pub fn new(k: f64) -> Self {
        Self { k }
    }
}

impl Potential for HarmonicWell {
    fn compute_potential(&self, atoms: &mut Atoms) -> f64 {
        atoms.forces.fill(0.0);
        let mut potential_energy: f64 = 0.0;

        for i in 0..atoms.n_atoms {
            let r_i = atoms.positions.column(i);
            potential_energy += 0.5 * self.k * r_i.norm_squared();

            let mut f_i = atoms.forces.column_mut(i);
            f_i -= self.k * r_i;
        }
        potential_energy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use na::{DVector, Matrix3xX};

    #[test]
    fn energy_and_restoring_force() {
        let well = HarmonicWell::new(100.0);
        let mut positions = Matrix3xX::zeros(1);
        positions[(0, 0)] = 0.2;
        let mut atoms = Atoms::new(positions, DVector::from_element(1, 39.948));

        let u = well.compute_potential(&mut atoms);
        assert_relative_eq!(u, 0.5 * 100.0 * 0.04, epsilon = 1e-12);
        assert_relative_eq!(atoms.forces[(0, 0)], -20.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_at_origin() {
        let well = HarmonicWell::new(100.0);
        let mut atoms = Atoms::new(Matrix3xX::zeros(3), DVector::from_element(3, 1.0));
        assert_eq!(well.compute_potential(&mut atoms), 0.0);
    }
}
