use crate::constants::{DEFAULT_SEED, DEFAULT_TEMPERATURE};
use crate::integrators::{
    BitwiseReversibleVelocityVerletIntegrator, HmcIntegrator, Integrator, LangevinIntegrator,
    LeapfrogIntegrator, VelocityVerletIntegrator,
};

/// One known integrator: its display name and a constructor taking the
/// timestep in ps. The name travels next to the instance so failures can
/// be labelled without attaching anything to the integrator itself.
pub struct IntegratorSpec {
    pub name: &'static str,
    pub build: fn(f64) -> Box<dyn Integrator>,
}

/// Every integrator the stability suite exercises. A static list rather
/// than reflection over loaded symbols; adding a scheme means adding an
/// entry here.
pub fn registry() -> Vec<IntegratorSpec> {
    vec![
        IntegratorSpec {
            name: "VelocityVerletIntegrator",
            build: |dt| Box::new(VelocityVerletIntegrator::new(dt)),
        },
        IntegratorSpec {
            name: "LeapfrogIntegrator",
            build: |dt| Box::new(LeapfrogIntegrator::new(dt)),
        },
        IntegratorSpec {
            name: "LangevinIntegrator",
            build: |dt| Box::new(LangevinIntegrator::new(dt, DEFAULT_TEMPERATURE, 5.0, DEFAULT_SEED)),
        },
        IntegratorSpec {
            name: "BitwiseReversibleVelocityVerletIntegrator",
            build: |dt| Box::new(BitwiseReversibleVelocityVerletIntegrator::new(dt)),
        },
        IntegratorSpec {
            name: "HMCIntegrator",
            build: |dt| Box::new(HmcIntegrator::new(dt, DEFAULT_TEMPERATURE, DEFAULT_SEED)),
        },
    ]
}

/// The naming convention integrators follow.
pub fn matches_convention(name: &str) -> bool {
    name.ends_with("Integrator")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_entry_follows_the_convention() {
        for spec in registry() {
            assert!(matches_convention(spec.name), "{} breaks convention", spec.name);
        }
    }

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = registry().iter().map(|s| s.name).collect();
        assert_eq!(names.len(), registry().len());
    }

    #[test]
    fn entries_build_with_the_requested_timestep() {
        for spec in registry() {
            let integrator = (spec.build)(0.002);
            assert_eq!(integrator.timestep(), 0.002);
        }
    }
}
