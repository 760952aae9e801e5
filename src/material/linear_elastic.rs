use crate::base::Idealization;
use russell_tensor::{t4_ddot_t2, LinElasticity, Tensor2};

/// Specifies the elastic law used by the creep stress-update
pub trait ElasticityTrait: Send + Sync {
    /// Calculates the stress tensor given the elastic strain tensor
    fn calc_stress(&self, stress: &mut Tensor2, elastic_strain: &Tensor2);

    /// Returns the shear modulus G
    fn shear_modulus(&self) -> f64;
}

/// Implements a linear elastic model
pub struct LinearElastic {
    pub model: LinElasticity,
}

impl LinearElastic {
    /// Allocates a new instance
    ///
    /// **Note:** The creep stress-update works in plane-strain (2D) or 3D only.
    pub fn new(ideal: &Idealization, young: f64, poisson: f64) -> Self {
        LinearElastic {
            model: LinElasticity::new(young, poisson, ideal.two_dim, false),
        }
    }
}

impl ElasticityTrait for LinearElastic {
    fn calc_stress(&self, stress: &mut Tensor2, elastic_strain: &Tensor2) {
        let dd = self.model.get_modulus();
        t4_ddot_t2(stress, 1.0, dd, elastic_strain); // σ = D : εₑ
    }

    fn shear_modulus(&self) -> f64 {
        let (_, gg) = self.model.get_bulk_shear();
        gg
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
