use crate::engine::atoms::Atoms;
use crate::potentials::potential::Potential;

/// Non-interacting particles. Zero energy, zero forces.
pub struct IdealGas;

impl Potential for IdealGas {
    fn compute_potential(&self, atoms: &mut Atoms) -> f64 {
        atoms.forces.fill(0.0);
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use na::{DVector, Matrix3xX};

    #[test]
    fn no_energy_no_forces() {
        let gas = IdealGas;
        let mut atoms = Atoms::new(Matrix3xX::zeros(4), DVector::from_element(4, 1.0));
        atoms.forces.fill(5.0);
        assert_eq!(gas.compute_potential(&mut atoms), 0.0);
        assert!(atoms.forces.iter().all(|&f| f == 0.0));
    }
}
