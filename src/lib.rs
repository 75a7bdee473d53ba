//! Correctness checks for molecular dynamics integrators.
//!
//! Instantiates predefined test systems, advances them with candidate
//! integration schemes and verifies two properties: trajectories stay
//! numerically finite over a short run, and the bitwise-reversible
//! velocity Verlet variant retraces its trajectory exactly when
//! velocities are negated. A hybrid Monte Carlo integrator additionally
//! has its acceptance bookkeeping verified.
//!
//! The checks drive the bundled reference engine only through the
//! [`engine::Context`] handle: construct from a system and an
//! integrator, set positions, randomize velocities, advance, negate
//! velocities, read a state snapshot, truncate stored precision.
//!
//! ```no_run
//! for check in mdverify::all_checks() {
//!     if let Err(e) = (check.run)() {
//!         eprintln!("{}: {e}", check.label);
//!     }
//! }
//! ```
extern crate nalgebra as na;

pub mod args_parser;
pub mod bits;
pub mod checks;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod integrators;
pub mod potentials;
pub mod simulation_box;
pub mod testsystems;

pub use checks::suite::{all_checks, NamedCheck};
pub use errors::{CheckError, Result};
