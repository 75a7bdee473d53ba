use na::DVector;

use super::{cubic_lattice, TestSystem, ARGON_EPSILON, ARGON_MASS, ARGON_SIGMA};
use crate::engine::atoms::Atoms;
use crate::potentials::LennardJones;
use crate::simulation_box::SimulationBox;

/// 27 argon atoms on a cubic lattice at the pair-minimum spacing.
/// No periodicity and no cutoff, so forces are smooth everywhere the
/// cluster reaches in a couple of steps.
pub fn lennard_jones_cluster() -> TestSystem {
    let spacing = 2.0_f64.powf(1.0 / 6.0) * ARGON_SIGMA;
    let positions = cubic_lattice(3, spacing);
    let masses = DVector::from_element(positions.ncols(), ARGON_MASS);

    TestSystem {
        label: "LennardJonesCluster",
        atoms: Atoms::new(positions, masses),
        potential: Box::new(LennardJones::new(ARGON_EPSILON, ARGON_SIGMA)),
    }
}

/// 64 argon atoms in a periodic cubic box with a shifted cutoff.
pub fn lennard_jones_fluid() -> TestSystem {
    let n_per_side = 4;
    let spacing = 0.45;
    let box_length = n_per_side as f64 * spacing;
    let rcut = 0.85;

    let positions = cubic_lattice(n_per_side, spacing);
    let masses = DVector::from_element(positions.ncols(), ARGON_MASS);
    let atoms =
        Atoms::new(positions, masses).with_box(SimulationBox::cubic(box_length));

    TestSystem {
        label: "LennardJonesFluid",
        atoms,
        potential: Box::new(LennardJones::with_cutoff(
            ARGON_EPSILON,
            ARGON_SIGMA,
            rcut,
            true,
        )),
    }
}
