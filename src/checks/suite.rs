use crate::checks::acceptance::check_hmc_acceptance;
use crate::checks::reversibility::check_bitwise_reversibility;
use crate::checks::stability::{check_stability, StabilityOptions};
use crate::constants::FEMTOSECOND;
use crate::errors::Result;
use crate::integrators::registry;
use crate::testsystems::{self, TestSystem};

/// One independently runnable check with the label it reports on
/// failure.
pub struct NamedCheck {
    pub label: String,
    pub run: Box<dyn FnOnce() -> Result<()>>,
}

/// Systems the stability suite runs every registry integrator against.
const STABILITY_SYSTEMS: [(&str, fn() -> TestSystem); 2] = [
    ("HarmonicOscillator", testsystems::harmonic_oscillator),
    ("LennardJonesFluid", testsystems::lennard_jones_fluid),
];

/// Systems the reversibility check runs on.
const REVERSIBILITY_SYSTEMS: [(&str, fn() -> TestSystem); 3] = [
    ("LennardJonesCluster", testsystems::lennard_jones_cluster),
    ("HarmonicOscillator", testsystems::harmonic_oscillator),
    ("IdealGas", testsystems::ideal_gas),
];

/// One stability check per (integrator, system) combination.
pub fn stability_checks(nsteps: usize) -> Vec<NamedCheck> {
    let mut checks = Vec::new();
    for spec in registry() {
        for (system_name, make_system) in STABILITY_SYSTEMS {
            let name = spec.name;
            let build = spec.build;
            checks.push(NamedCheck {
                label: format!("{name} stability over {nsteps} steps of {system_name}"),
                run: Box::new(move || {
                    let opts = StabilityOptions {
                        nsteps,
                        ..Default::default()
                    };
                    check_stability(name, build(FEMTOSECOND), make_system(), &opts)
                }),
            });
        }
    }
    checks
}

/// One reversibility check per supported system, 1 fs timestep.
pub fn reversibility_checks() -> Vec<NamedCheck> {
    REVERSIBILITY_SYSTEMS
        .into_iter()
        .map(|(system_name, make_system)| NamedCheck {
            label: format!("bitwise reversible velocity Verlet on {system_name}"),
            run: Box::new(move || check_bitwise_reversibility(make_system(), FEMTOSECOND)),
        })
        .collect()
}

/// The HMC bookkeeping check: 25 trials, 0.05 fs timestep, ideal gas.
pub fn acceptance_check() -> NamedCheck {
    NamedCheck {
        label: "HMCIntegrator acceptance bookkeeping on IdealGas".to_string(),
        run: Box::new(|| check_hmc_acceptance(25, 0.05 * FEMTOSECOND)),
    }
}

/// Every check the harness knows, each independently runnable.
pub fn all_checks() -> Vec<NamedCheck> {
    let mut checks = stability_checks(100);
    checks.extend(reversibility_checks());
    checks.push(acceptance_check());
    checks
}
