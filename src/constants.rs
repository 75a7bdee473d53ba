/// The Boltzmann constant in kiloJoule per mole kelvin
// TODO: strictly this is the molar gas constant; kept in molar units so
// energies stay in kJ/mol
pub const KB_KJPERMOLEKELVIN: f64 = 0.0083144621;

/// One femtosecond in picoseconds, the internal time unit
pub const FEMTOSECOND: f64 = 1.0e-3;

/// Temperature used to randomize velocities in every check
pub const DEFAULT_TEMPERATURE: f64 = 300.0;

/// Seed for all stochastic paths in the checks
pub const DEFAULT_SEED: u64 = 2014;
