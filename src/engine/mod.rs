//! The reference simulation engine driven by the checks.
pub mod atoms;
pub mod context;
pub mod state;
pub mod velocities;

pub use atoms::Atoms;
pub use context::Context;
pub use state::{StateRequest, StateSnapshot};
