use na::Vector3;

use crate::engine::atoms::Atoms;
use crate::potentials::potential::Potential;

/// 12-6 Lennard-Jones pair potential over all particle pairs, with an
/// optional cutoff and energy shift, minimum-image under a periodic box.
pub struct LennardJones {
    epsilon: f64,
    sigma: f64,
    rcut: Option<f64>,
    shift: bool,
}

impl LennardJones {
    /// Full-range potential, no cutoff. The form the cluster uses.
    pub fn new(epsilon: f64, sigma: f64) -> Self {
        Self {
            epsilon,
            sigma,
            rcut: None,
            shift: false,
        }
    }

    pub fn with_cutoff(epsilon: f64, sigma: f64, rcut: f64, shift: bool) -> Self {
        Self {
            epsilon,
            sigma,
            rcut: Some(rcut),
            shift,
        }
    }

    fn pair(&self, rij: &Vector3<f64>) -> (f64, Vector3<f64>) {
        let rij2 = rij.norm_squared();
        let inv_rij2 = 1.0 / rij2;
        let vanderwaals_attraction = (self.sigma.powi(2) * inv_rij2).powi(3);
        let lj_repulsion = vanderwaals_attraction.powi(2);

        let mut potential_energy = 4.0 * self.epsilon * (lj_repulsion - vanderwaals_attraction);

        let force =
            24.0 * self.epsilon * (2.0 * lj_repulsion - vanderwaals_attraction) * inv_rij2 * rij;

        if self.shift {
            if let Some(rcut) = self.rcut {
                let cutoff_inv2 = (self.sigma / rcut).powi(2);
                let cutoff_attraction = cutoff_inv2.powi(3);
                let cutoff_repulsion = cutoff_attraction.powi(2);

                let u_cutoff = 4.0 * self.epsilon * (cutoff_repulsion - cutoff_attraction);

                potential_energy -= u_cutoff;
            }
        }

        (potential_energy, force)
    }
}

impl Potential for LennardJones {
    fn compute_potential(&self, atoms: &mut Atoms) -> f64 {
        atoms.forces.fill(0.0);
        let mut potential_energy: f64 = 0.0;

        for i in 0..atoms.n_atoms {
            for j in (i + 1)..atoms.n_atoms {
                let mut rij = atoms.positions.column(j) - atoms.positions.column(i);

                if let Some(sim_box) = &atoms.sim_box {
                    rij = sim_box.minimum_image(&rij);
                }
                if let Some(rcut) = self.rcut {
                    if rij.norm() > rcut {
                        continue;
                    }
                }

                let (uij, force_ij) = self.pair(&rij);

                potential_energy += uij;
                {
                    let mut fi = atoms.forces.column_mut(i);
                    fi -= force_ij;

                    let mut fj = atoms.forces.column_mut(j);
                    fj += force_ij;
                }
            }
        }
        potential_energy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use na::{DVector, Matrix3xX};

    fn dimer(r: f64) -> Atoms {
        let mut positions = Matrix3xX::zeros(2);
        positions[(0, 1)] = r;
        Atoms::new(positions, DVector::from_element(2, 39.948))
    }

    #[test]
    fn minimum_is_minus_epsilon() {
        let lj = LennardJones::new(0.998, 0.34);
        let r_min = 2.0_f64.powf(1.0 / 6.0) * 0.34;
        let mut atoms = dimer(r_min);
        let u = lj.compute_potential(&mut atoms);
        assert_relative_eq!(u, -0.998, epsilon = 1e-9);
        // force vanishes at the minimum
        assert!(atoms.forces.column(0).norm() < 1e-9);
    }

    #[test]
    fn close_pair_repels() {
        let lj = LennardJones::new(0.998, 0.34);
        let mut atoms = dimer(0.3);
        lj.compute_potential(&mut atoms);
        // particle 0 pushed toward negative x, particle 1 the other way
        assert!(atoms.forces[(0, 0)] < 0.0);
        assert!(atoms.forces[(0, 1)] > 0.0);
        assert_relative_eq!(
            atoms.forces[(0, 0)],
            -atoms.forces[(0, 1)],
            epsilon = 1e-12
        );
    }

    #[test]
    fn shifted_energy_vanishes_at_cutoff() {
        let rcut = 0.85;
        let lj = LennardJones::with_cutoff(0.998, 0.34, rcut, true);
        let mut atoms = dimer(rcut - 1e-9);
        let u = lj.compute_potential(&mut atoms);
        assert_relative_eq!(u, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn beyond_cutoff_contributes_nothing() {
        let lj = LennardJones::with_cutoff(0.998, 0.34, 0.85, true);
        let mut atoms = dimer(1.0);
        let u = lj.compute_potential(&mut atoms);
        assert_eq!(u, 0.0);
        assert_eq!(atoms.forces.column(0).norm(), 0.0);
    }

    #[test]
    fn coincident_pair_is_not_finite() {
        let lj = LennardJones::new(0.998, 0.34);
        let mut atoms = dimer(0.0);
        let u = lj.compute_potential(&mut atoms);
        assert!(!u.is_finite());
    }
}
