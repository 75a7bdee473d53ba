//! The verification routines and the runnable suite built from them.
pub mod acceptance;
pub mod reversibility;
pub mod stability;
pub mod suite;

pub use acceptance::check_hmc_acceptance;
pub use reversibility::check_bitwise_reversibility;
pub use stability::{check_stability, StabilityOptions};
pub use suite::{all_checks, NamedCheck};
