//! Potentials backing the predefined test systems.
pub mod harmonic;
pub mod ideal_gas;
pub mod lennard_jones;
pub mod potential;

pub use harmonic::HarmonicWell;
pub use ideal_gas::IdealGas;
pub use lennard_jones::LennardJones;
pub use potential::Potential;
