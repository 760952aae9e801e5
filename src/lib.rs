//! Computes the creep response of UO2 fuel pellets under irradiation
//!
//! The core of this crate is the implicit stress-update (radial return) for
//! multi-mechanism creep, see [material::CreepUpdate]. The [fuel] module
//! provides the auxiliary fuel-physics evaluations (burnup, radial power,
//! oxygen diffusion, and creep eigenstrain bookkeeping).

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

/// Defines a function of (x,t) where x is space and t is time
pub type FnSpaceTime = fn(&[f64], f64) -> f64;

pub mod base;
pub mod fuel;
pub mod material;
pub mod prelude;
