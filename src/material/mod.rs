//! Implements the creep material models and the implicit stress-update

mod creep_rate_model;
mod creep_state;
mod creep_update;
mod degradation;
mod linear_elastic;
mod local_inputs;
mod observer;
mod power_law_creep;
mod radial_return;
mod transient;
mod uo2_creep;
pub use crate::material::creep_rate_model::*;
pub use crate::material::creep_state::*;
pub use crate::material::creep_update::*;
pub use crate::material::degradation::*;
pub use crate::material::linear_elastic::*;
pub use crate::material::local_inputs::*;
pub use crate::material::observer::*;
pub use crate::material::power_law_creep::*;
pub use crate::material::radial_return::*;
pub use crate::material::transient::*;
pub use crate::material::uo2_creep::*;
