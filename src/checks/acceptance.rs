use crate::constants::{DEFAULT_SEED, DEFAULT_TEMPERATURE};
use crate::engine::Context;
use crate::errors::{CheckError, Result};
use crate::integrators::HmcIntegrator;
use crate::testsystems;

/// Check the hybrid Monte Carlo acceptance bookkeeping.
///
/// On an ideal gas the proposal leaves the total energy unchanged, so
/// every trial must be accepted: after `nsteps` steps the integrator
/// must report `nsteps` accepted of `nsteps` trials and a rate of
/// exactly 1.0.
pub fn check_hmc_acceptance(nsteps: usize, timestep: f64) -> Result<()> {
    let system = testsystems::ideal_gas();
    let mut ctx = Context::new(
        system,
        HmcIntegrator::new(timestep, DEFAULT_TEMPERATURE, DEFAULT_SEED),
    );
    ctx.randomize_velocities(DEFAULT_TEMPERATURE, DEFAULT_SEED);

    ctx.advance(nsteps);

    let hmc = ctx.integrator();
    if hmc.n_accept() != nsteps || hmc.n_trials() != nsteps || hmc.acceptance_rate() != 1.0 {
        return Err(CheckError::AcceptanceMismatch {
            expected: nsteps,
            n_accept: hmc.n_accept(),
            n_trials: hmc.n_trials(),
            rate: hmc.acceptance_rate(),
        });
    }
    Ok(())
}
