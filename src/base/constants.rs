/// Minimum effective stress; below this value all creep mechanisms vanish
pub const MIN_STRESS: f64 = 1e-10;

/// Minimum temperature used in Arrhenius terms
pub const MIN_TEMPERATURE: f64 = 1e-8;

/// Minimum oxygen hyper-stoichiometry ratio
pub const MIN_OXYGEN_RATIO: f64 = 1e-8;

/// Minimum magnitude of ln(x) in the activation-energy sigmoid
pub const MIN_LOG_OXYGEN_RATIO: f64 = 1e-12;

/// Minimum value of s:s (deviatoric stress) before computing the flow direction
///
/// This value corresponds to TOL² with TOL = 1e-6.
pub const MIN_DEV_NORM_SQUARED: f64 = 1e-12;

/// Threshold below which a solved increment is considered degenerate (fallback safeguard)
pub const DEGENERATE_INCREMENT: f64 = 1e-10;

/// Default directory for the output of the driver
pub const DEFAULT_OUT_DIR: &str = "/tmp/uo2creep/results";
