use thiserror::Error;

use crate::checks::reversibility::ReversibilityReport;

#[derive(Error, Debug)]
pub enum CheckError {
    // Verification failures
    #[error("potential energy for integrator {integrator} is {value} (not finite) after {steps} steps")]
    Divergence {
        integrator: String,
        value: f64,
        steps: usize,
    },

    #[error("bitwise reversibility failed for {system}:\n{report}")]
    ReversibilityMismatch {
        system: String,
        report: ReversibilityReport,
    },

    #[error("acceptance bookkeeping off: expected {expected} accepted of {expected} trials, got {n_accept} of {n_trials} (rate {rate})")]
    AcceptanceMismatch {
        expected: usize,
        n_accept: usize,
        n_trials: usize,
        rate: f64,
    },

    // Engine misuse
    #[error("position array holds {found} particles, system has {expected}")]
    ParticleCountMismatch { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, CheckError>;
