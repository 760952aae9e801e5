//! Implements the base structures for the creep stress-update

mod config;
mod constants;
mod idealization;
mod parameters;
mod sample_params;
pub use crate::base::config::*;
pub use crate::base::constants::*;
pub use crate::base::idealization::*;
pub use crate::base::parameters::*;
pub use crate::base::sample_params::*;
