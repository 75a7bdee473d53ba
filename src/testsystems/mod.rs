//! Predefined systems the checks instantiate.
//!
//! Each constructor resolves to a [`TestSystem`]: labelled initial
//! particle state plus the potential acting on it. Units are nm, ps,
//! kJ/mol, amu throughout.

mod harmonic_oscillator;
mod ideal_gas;
mod lennard_jones;

pub use harmonic_oscillator::harmonic_oscillator;
pub use ideal_gas::ideal_gas;
pub use lennard_jones::{lennard_jones_cluster, lennard_jones_fluid};

use na::Matrix3xX;

use crate::engine::atoms::Atoms;
use crate::potentials::Potential;

/// Argon parameters shared by the Lennard-Jones systems.
pub const ARGON_EPSILON: f64 = 0.998;
pub const ARGON_SIGMA: f64 = 0.34;
pub const ARGON_MASS: f64 = 39.948;

pub struct TestSystem {
    pub label: &'static str,
    pub atoms: Atoms,
    pub potential: Box<dyn Potential>,
}

/// n³ particles on a simple cubic lattice centered on the origin.
pub(crate) fn cubic_lattice(n_per_side: usize, spacing: f64) -> Matrix3xX<f64> {
    let n = n_per_side.pow(3);
    let mut positions = Matrix3xX::zeros(n);
    let offset = (n_per_side as f64 - 1.0) / 2.0;

    let mut col = 0;
    for ix in 0..n_per_side {
        for iy in 0..n_per_side {
            for iz in 0..n_per_side {
                positions[(0, col)] = (ix as f64 - offset) * spacing;
                positions[(1, col)] = (iy as f64 - offset) * spacing;
                positions[(2, col)] = (iz as f64 - offset) * spacing;
                col += 1;
            }
        }
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lattice_has_expected_count_and_center() {
        let positions = cubic_lattice(3, 0.4);
        assert_eq!(positions.ncols(), 27);
        let center = positions.column_sum() / 27.0;
        assert!(center.norm() < 1e-12);
    }

    #[test]
    fn system_labels() {
        assert_eq!(harmonic_oscillator().label, "HarmonicOscillator");
        assert_eq!(lennard_jones_cluster().label, "LennardJonesCluster");
        assert_eq!(lennard_jones_fluid().label, "LennardJonesFluid");
        assert_eq!(ideal_gas().label, "IdealGas");
    }
}
