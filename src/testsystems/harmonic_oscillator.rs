use na::{DVector, Matrix3xX};

use super::{TestSystem, ARGON_MASS};
use crate::engine::atoms::Atoms;
use crate::potentials::HarmonicWell;

/// One particle in a harmonic well, resting at the minimum.
pub fn harmonic_oscillator() -> TestSystem {
    let positions = Matrix3xX::zeros(1);
    let masses = DVector::from_element(1, ARGON_MASS);

    TestSystem {
        label: "HarmonicOscillator",
        atoms: Atoms::new(positions, masses),
        potential: Box::new(HarmonicWell::new(100.0)),
    }
}
