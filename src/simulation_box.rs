use na::{Matrix3, Vector3};

/// Periodic cell described by its h-matrix (columns are the box vectors).
pub struct SimulationBox {
    h: Matrix3<f64>,
    h_inv: Matrix3<f64>,
    pbc: [bool; 3],
}

impl SimulationBox {
    pub fn new(h: Matrix3<f64>, pbc: [bool; 3]) -> Self {
        let h_inv = h.try_inverse().expect("Box matrix should be invertible");
        Self { h, h_inv, pbc }
    }

    /// Cubic box with side `length` and full periodicity.
    pub fn cubic(length: f64) -> Self {
        Self::new(Matrix3::identity() * length, [true; 3])
    }

    pub fn h(&self) -> &Matrix3<f64> {
        &self.h
    }

    /// Minimum-image convention applied to a displacement vector.
    pub fn minimum_image(&self, rij: &Vector3<f64>) -> Vector3<f64> {
        let mut s = self.h_inv * rij;

        for i in 0..3 {
            if self.pbc[i] {
                s[i] -= s[i].round();
            }
        }

        self.h * s
    }
}
