//! The integration schemes the checks exercise.
pub mod hmc;
pub mod integrator;
pub mod langevin;
pub mod leapfrog;
pub mod registry;
pub mod reversible_verlet;
pub mod velocity_verlet;

pub use hmc::HmcIntegrator;
pub use integrator::Integrator;
pub use langevin::LangevinIntegrator;
pub use leapfrog::LeapfrogIntegrator;
pub use registry::{matches_convention, registry, IntegratorSpec};
pub use reversible_verlet::BitwiseReversibleVelocityVerletIntegrator;
pub use velocity_verlet::VelocityVerletIntegrator;
