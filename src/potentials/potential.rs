use crate::engine::atoms::Atoms;

/// A potential energy surface over particle positions.
///
/// `compute_potential` overwrites the force accumulators and returns the
/// total potential energy in kJ/mol. Implementations must be pure
/// functions of the positions: evaluating twice at bit-identical
/// positions yields bit-identical forces and energy. The reversibility
/// check depends on that.
pub trait Potential: Send + Sync {
    fn compute_potential(&self, atoms: &mut Atoms) -> f64;
}
