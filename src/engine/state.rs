use na::Matrix3xX;

/// Which fields of the state a caller wants back from the engine.
#[derive(Clone, Copy, Default)]
pub struct StateRequest {
    pub positions: bool,
    pub velocities: bool,
    pub energy: bool,
}

impl StateRequest {
    pub fn positions() -> Self {
        Self {
            positions: true,
            ..Self::default()
        }
    }

    pub fn velocities() -> Self {
        Self {
            velocities: true,
            ..Self::default()
        }
    }

    pub fn energy() -> Self {
        Self {
            energy: true,
            ..Self::default()
        }
    }
}

/// Copy of the requested engine state at a point in time.
pub struct StateSnapshot {
    pub positions: Option<Matrix3xX<f64>>,
    pub velocities: Option<Matrix3xX<f64>>,
    pub potential_energy: Option<f64>,
}
