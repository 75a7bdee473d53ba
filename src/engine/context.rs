use na::Matrix3xX;

use crate::bits::{quantize, PRECISION_GRID};
use crate::engine::atoms::Atoms;
use crate::engine::state::{StateRequest, StateSnapshot};
use crate::errors::{CheckError, Result};
use crate::integrators::Integrator;
use crate::potentials::Potential;
use crate::testsystems::TestSystem;

/// Engine handle bundling a system's particles, its potential and the
/// integrator advancing it.
///
/// Owns everything it touches, so a handle dropped on any exit path
/// (including a failing check) releases its resources with it.
pub struct Context<I: Integrator> {
    atoms: Atoms,
    potential: Box<dyn Potential>,
    integrator: I,
}

impl<I: Integrator> Context<I> {
    pub fn new(system: TestSystem, integrator: I) -> Self {
        let TestSystem {
            atoms, potential, ..
        } = system;
        Self {
            atoms,
            potential,
            integrator,
        }
    }

    pub fn set_positions(&mut self, positions: Matrix3xX<f64>) -> Result<()> {
        if positions.ncols() != self.atoms.n_atoms {
            return Err(CheckError::ParticleCountMismatch {
                expected: self.atoms.n_atoms,
                found: positions.ncols(),
            });
        }
        self.atoms.positions = positions;
        Ok(())
    }

    pub fn randomize_velocities(&mut self, temperature: f64, seed: u64) {
        self.atoms.randomize_velocities(temperature, seed);
    }

    pub fn advance(&mut self, steps: usize) {
        for _ in 0..steps {
            self.integrator.step(&mut self.atoms, self.potential.as_ref());
        }
    }

    pub fn negate_velocities(&mut self) {
        self.atoms.velocities *= -1.0;
    }

    /// Snap stored positions and velocities to the precision grid so
    /// that subsequent bitwise comparisons are meaningful.
    pub fn truncate_precision(&mut self) {
        for x in self.atoms.positions.iter_mut() {
            *x = quantize(*x, PRECISION_GRID);
        }
        for v in self.atoms.velocities.iter_mut() {
            *v = quantize(*v, PRECISION_GRID);
        }
    }

    pub fn state(&mut self, request: &StateRequest) -> StateSnapshot {
        let positions = request.positions.then(|| self.atoms.positions.clone());
        let velocities = request.velocities.then(|| self.atoms.velocities.clone());
        let potential_energy = if request.energy {
            Some(self.potential.compute_potential(&mut self.atoms))
        } else {
            None
        };
        StateSnapshot {
            positions,
            velocities,
            potential_energy,
        }
    }

    pub fn integrator(&self) -> &I {
        &self.integrator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrators::VelocityVerletIntegrator;
    use crate::testsystems;

    #[test]
    fn set_positions_rejects_wrong_count() {
        let system = testsystems::harmonic_oscillator();
        let mut ctx = Context::new(system, VelocityVerletIntegrator::new(0.001));
        let bad = Matrix3xX::zeros(5);
        assert!(matches!(
            ctx.set_positions(bad),
            Err(CheckError::ParticleCountMismatch {
                expected: 1,
                found: 5
            })
        ));
    }

    #[test]
    fn negate_velocities_flips_sign_bitwise() {
        let system = testsystems::ideal_gas();
        let mut ctx = Context::new(system, VelocityVerletIntegrator::new(0.001));
        ctx.randomize_velocities(300.0, 11);
        let before = ctx.state(&StateRequest::velocities()).velocities.unwrap();
        ctx.negate_velocities();
        let after = ctx.state(&StateRequest::velocities()).velocities.unwrap();
        for (a, b) in before.iter().zip(after.iter()) {
            assert_eq!((-a).to_bits(), b.to_bits());
        }
    }

    #[test]
    fn truncate_precision_lands_on_grid() {
        let system = testsystems::lennard_jones_cluster();
        let mut ctx = Context::new(system, VelocityVerletIntegrator::new(0.001));
        ctx.randomize_velocities(300.0, 13);
        ctx.truncate_precision();
        let snap = ctx.state(&StateRequest {
            positions: true,
            velocities: true,
            energy: false,
        });
        for x in snap.positions.unwrap().iter() {
            assert_eq!(quantize(*x, PRECISION_GRID).to_bits(), x.to_bits());
        }
        for v in snap.velocities.unwrap().iter() {
            assert_eq!(quantize(*v, PRECISION_GRID).to_bits(), v.to_bits());
        }
    }
}
