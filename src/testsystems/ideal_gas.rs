use na::DVector;

use super::{cubic_lattice, TestSystem, ARGON_MASS};
use crate::engine::atoms::Atoms;
use crate::potentials::IdealGas;
use crate::simulation_box::SimulationBox;

/// 64 non-interacting argon atoms in a periodic box.
pub fn ideal_gas() -> TestSystem {
    let positions = cubic_lattice(4, 0.5);
    let masses = DVector::from_element(positions.ncols(), ARGON_MASS);
    let atoms = Atoms::new(positions, masses).with_box(SimulationBox::cubic(2.0));

    TestSystem {
        label: "IdealGas",
        atoms,
        potential: Box::new(IdealGas),
    }
}
