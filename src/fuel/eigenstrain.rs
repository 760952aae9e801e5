use crate::base::MIN_STRESS;
use crate::material::CreepRateTrait;
use crate::StrError;
use russell_tensor::{t2_add, t2_ddot_t2, Mandel, Tensor2};

/// Calculates the explicit creep strain-rate tensor from the (old) stress
///
/// ```text
/// ε̇ = 3/2 (ε̇_eq / σ_vm) s
/// ```
///
/// where `ε̇_eq` is the scalar creep rate evaluated at σ_vm. The rate is zero if
/// `σ_vm ≤ 1e-10`.
///
/// Returns the von Mises stress σ_vm.
///
/// # Panics
///
/// A panic will occur if the tensors have different [Mandel].
pub fn calc_creep_strain_rate(
    rate: &mut Tensor2,
    stress: &Tensor2,
    law: &dyn CreepRateTrait,
    temperature: f64,
    oxygen_ratio: f64,
) -> f64 {
    assert_eq!(rate.mandel(), stress.mandel());
    let mut s = Tensor2::new(stress.mandel());
    stress.deviator(&mut s);
    let sigma_vm = f64::sqrt(1.5 * t2_ddot_t2(&s, &s));
    if sigma_vm <= MIN_STRESS {
        rate.clear();
        return sigma_vm;
    }
    let scalar_rate = law.rate(sigma_vm, temperature, oxygen_ratio);
    rate.set_tensor(1.5 * scalar_rate / sigma_vm, &s);
    sigma_vm
}

/// Accumulates the creep strain: `εc = εc_old + ε̇ Δt`
pub fn update_creep_strain(creep_strain: &mut Tensor2, creep_strain_old: &Tensor2, rate: &Tensor2, dt: f64) {
    t2_add(creep_strain, 1.0, creep_strain_old, dt, rate);
}

/// Implements an eigenstrain given by a constant base tensor scaled by a variable prefactor
///
/// ```text
/// ε* = prefactor × base
/// ```
pub struct VariableEigenstrain {
    base: Tensor2,
}

impl VariableEigenstrain {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `components` -- the six components of the base tensor in the order (xx, yy, zz, yz, xz, xy)
    /// * `mandel` -- the representation of the resulting eigenstrain
    pub fn new(components: &[f64], mandel: Mandel) -> Result<Self, StrError> {
        if components.len() != 6 {
            return Err("the base eigenstrain tensor must have 6 components");
        }
        let c = components;
        #[rustfmt::skip]
        let matrix = [
            [c[0], c[5], c[4]],
            [c[5], c[1], c[3]],
            [c[4], c[3], c[2]],
        ];
        let base = Tensor2::from_matrix(&matrix, mandel)?;
        Ok(VariableEigenstrain { base })
    }

    /// Calculates the eigenstrain tensor
    pub fn calc_eigenstrain(&self, eigenstrain: &mut Tensor2, prefactor: f64) {
        eigenstrain.set_tensor(prefactor, &self.base);
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{calc_creep_strain_rate, update_creep_strain, VariableEigenstrain};
    use crate::base::ParamCreepRate;
    use crate::material::{CreepRateTrait, Uo2Creep};
    use russell_lab::approx_eq;
    use russell_tensor::{Mandel, Tensor2};

    #[test]
    fn calc_creep_strain_rate_works() {
        let law = Uo2Creep::new(&ParamCreepRate::uo2(1e19, 95.0, 10.0)).unwrap();
        let mandel = Mandel::Symmetric;

        // uniaxial stress: σ_vm = σxx and ε̇ = ε̇_eq diag(1, -1/2, -1/2)
        let stress = Tensor2::from_matrix(&[[1e7, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]], mandel).unwrap();
        let mut rate = Tensor2::new(mandel);
        let sigma_vm = calc_creep_strain_rate(&mut rate, &stress, &law, 1500.0, 2.01);
        approx_eq(sigma_vm, 1e7, 1e-8);
        let eq = law.rate(sigma_vm, 1500.0, 2.01);
        approx_eq(rate.get(0, 0) / eq, 1.0, 1e-14);
        approx_eq(rate.get(1, 1) / eq, -0.5, 1e-14);
        approx_eq(rate.get(2, 2) / eq, -0.5, 1e-14);

        // hydrostatic stress gives no creep
        let stress = Tensor2::from_matrix(&[[-5e7, 0.0, 0.0], [0.0, -5e7, 0.0], [0.0, 0.0, -5e7]], mandel).unwrap();
        rate.vector_mut()[0] = 123.0;
        let sigma_vm = calc_creep_strain_rate(&mut rate, &stress, &law, 1500.0, 2.01);
        assert!(sigma_vm <= 1e-10);
        assert!(rate.vector().as_data().iter().all(|v| *v == 0.0));
    }

    #[test]
    fn update_creep_strain_works() {
        let mandel = Mandel::Symmetric2D;
        let old = Tensor2::from_matrix(&[[1e-4, 0.0, 0.0], [0.0, -5e-5, 0.0], [0.0, 0.0, -5e-5]], mandel).unwrap();
        let rate = Tensor2::from_matrix(&[[2e-9, 0.0, 0.0], [0.0, -1e-9, 0.0], [0.0, 0.0, -1e-9]], mandel).unwrap();
        let mut new = Tensor2::new(mandel);
        update_creep_strain(&mut new, &old, &rate, 1e4);
        approx_eq(new.get(0, 0), 1.2e-4, 1e-18);
        approx_eq(new.get(1, 1), -6e-5, 1e-18);
        approx_eq(new.get(2, 2), -6e-5, 1e-18);
    }

    #[test]
    fn variable_eigenstrain_works() {
        assert_eq!(
            VariableEigenstrain::new(&[1.0, 2.0, 3.0], Mandel::Symmetric).err(),
            Some("the base eigenstrain tensor must have 6 components")
        );
        let model = VariableEigenstrain::new(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], Mandel::Symmetric).unwrap();
        let mut eigenstrain = Tensor2::new(Mandel::Symmetric);
        model.calc_eigenstrain(&mut eigenstrain, 0.5);
        approx_eq(eigenstrain.get(0, 0), 0.5, 1e-15);
        approx_eq(eigenstrain.get(1, 1), 1.0, 1e-15);
        approx_eq(eigenstrain.get(2, 2), 1.5, 1e-15);
        approx_eq(eigenstrain.get(1, 2), 2.0, 1e-15);
        approx_eq(eigenstrain.get(0, 2), 2.5, 1e-15);
        approx_eq(eigenstrain.get(0, 1), 3.0, 1e-15);
        approx_eq(eigenstrain.get(2, 1), 2.0, 1e-15);
    }
}
