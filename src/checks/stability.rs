use crate::constants::{DEFAULT_SEED, DEFAULT_TEMPERATURE, KB_KJPERMOLEKELVIN};
use crate::engine::{Context, StateRequest};
use crate::errors::{CheckError, Result};
use crate::integrators::Integrator;
use crate::testsystems::TestSystem;

pub struct StabilityOptions {
    pub nsteps: usize,
    pub temperature: f64,
    pub seed: u64,
}

impl Default for StabilityOptions {
    fn default() -> Self {
        Self {
            nsteps: 100,
            temperature: DEFAULT_TEMPERATURE,
            seed: DEFAULT_SEED,
        }
    }
}

/// Check that a trajectory does not explode over a number of steps.
///
/// Builds a context from the system and the integrator, randomizes
/// velocities to the target temperature, advances `nsteps` and fails
/// with [`CheckError::Divergence`] unless the final potential energy
/// (in kT) is finite. NaN and ±inf both count as divergence; a finite
/// energy passes no matter how large.
pub fn check_stability<I: Integrator>(
    name: &str,
    integrator: I,
    system: TestSystem,
    opts: &StabilityOptions,
) -> Result<()> {
    let kt = KB_KJPERMOLEKELVIN * opts.temperature;

    let mut ctx = Context::new(system, integrator);
    ctx.randomize_velocities(opts.temperature, opts.seed);

    ctx.advance(opts.nsteps);

    let snapshot = ctx.state(&StateRequest::energy());
    let potential = snapshot.potential_energy.expect("energy was requested") / kt;
    log::debug!("{name}: potential energy {potential:.6} kT after {} steps", opts.nsteps);

    if !potential.is_finite() {
        return Err(CheckError::Divergence {
            integrator: name.to_string(),
            value: potential,
            steps: opts.nsteps,
        });
    }
    Ok(())
}
