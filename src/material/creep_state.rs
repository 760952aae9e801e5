use russell_tensor::{Mandel, Tensor2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Holds the creep state at a single integration point
///
/// These values persist across time steps and are written once per step.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreepState {
    /// Accumulated inelastic (creep) strain tensor
    pub inelastic_strain: Tensor2,

    /// Accumulated equivalent inelastic strain
    pub equivalent_strain: f64,

    /// Maximum effective stress observed (transient creep)
    pub max_stress: f64,

    /// Time elapsed since the maximum effective stress was observed (transient creep)
    pub max_stress_time: f64,
}

/// Holds the creep states at all integration points
///
/// The index in `all` is the stable identifier of the integration point.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreepStates {
    /// Holds the states of all integration points
    pub all: Vec<CreepState>,

    /// Holds a copy of the states taken by [CreepStates::backup]
    backup: Vec<CreepState>,
}

impl CreepState {
    /// Allocates a new (zero) instance
    pub fn new(mandel: Mandel) -> Self {
        CreepState {
            inelastic_strain: Tensor2::new(mandel),
            equivalent_strain: 0.0,
            max_stress: 0.0,
            max_stress_time: 0.0,
        }
    }

    /// Copies all data from another state into this state
    pub fn copy_from(&mut self, other: &CreepState) {
        self.inelastic_strain.set_tensor(1.0, &other.inelastic_strain);
        self.equivalent_strain = other.equivalent_strain;
        self.max_stress = other.max_stress;
        self.max_stress_time = other.max_stress_time;
    }

    /// Updates the inelastic strain tensor given the increment Δε and the flow direction N
    ///
    /// ```text
    /// εᵢ += Δε N
    /// εd += Δε
    /// ```
    ///
    /// # Panics
    ///
    /// A panic will occur if the tensors have different [Mandel].
    pub fn update_inelastic_strain(&mut self, delta: f64, flow_direction: &Tensor2) {
        assert_eq!(flow_direction.mandel(), self.inelastic_strain.mandel());
        let eps = self.inelastic_strain.vector_mut();
        for i in 0..eps.dim() {
            eps[i] += delta * flow_direction.vector()[i];
        }
        self.equivalent_strain += delta;
    }
}

impl CreepStates {
    /// Allocates a new instance with zero states
    pub fn new(mandel: Mandel, n_integ_point: usize) -> Self {
        let zero_state = CreepState::new(mandel);
        let all = vec![zero_state; n_integ_point];
        let backup = all.clone();
        CreepStates { all, backup }
    }

    /// Returns the number of integration points
    pub fn len(&self) -> usize {
        self.all.len()
    }

    /// Indicates that there are no integration points
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Creates a copy of all states (e.g., at the beginning of a time step)
    ///
    /// The backup follows the number of points, even if points were added to `all`.
    pub fn backup(&mut self) {
        if self.backup.len() != self.all.len() {
            self.backup = self.all.clone();
            return;
        }
        self.backup
            .iter_mut()
            .zip(self.all.iter())
            .for_each(|(backup, state)| backup.copy_from(state));
    }

    /// Restores all states from the backup (e.g., after a failed time step)
    ///
    /// Points added after the backup are removed.
    pub fn restore(&mut self) {
        if self.backup.len() != self.all.len() {
            self.all = self.backup.clone();
            return;
        }
        self.all
            .iter_mut()
            .zip(self.backup.iter())
            .for_each(|(state, backup)| state.copy_from(backup));
    }
}

impl fmt::Display for CreepState {
    /// Returns a nicely formatted string representing the creep state
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mat = self.inelastic_strain.as_matrix();
        write!(f, "εᵢ =\n").unwrap();
        match f.precision() {
            Some(v) => write!(f, "{:.1$}", mat, v).unwrap(),
            None => write!(f, "{}", mat).unwrap(),
        }
        write!(f, "\nεd = {:?}", self.equivalent_strain).unwrap();
        write!(f, "\nmax_stress = {:?}", self.max_stress).unwrap();
        write!(f, "\nmax_stress_time = {:?}", self.max_stress_time).unwrap();
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{CreepState, CreepStates};
    use russell_tensor::{Mandel, Tensor2};

    #[test]
    fn update_inelastic_strain_works() {
        let mut state = CreepState::new(Mandel::Symmetric2D);
        let nn = Tensor2::from_matrix(
            &[[1.0, 0.0, 0.0], [0.0, -0.5, 0.0], [0.0, 0.0, -0.5]],
            Mandel::Symmetric2D,
        )
        .unwrap();
        state.update_inelastic_strain(0.002, &nn);
        state.update_inelastic_strain(0.001, &nn);
        assert_eq!(state.equivalent_strain, 0.003);
        assert!(f64::abs(state.inelastic_strain.get(0, 0) - 0.003) < 1e-17);
        assert!(f64::abs(state.inelastic_strain.get(1, 1) + 0.0015) < 1e-17);
        assert!(f64::abs(state.inelastic_strain.get(2, 2) + 0.0015) < 1e-17);
    }

    #[test]
    #[should_panic]
    fn update_inelastic_strain_panics_on_wrong_mandel() {
        let mut state = CreepState::new(Mandel::Symmetric2D);
        let nn = Tensor2::new(Mandel::Symmetric);
        state.update_inelastic_strain(1.0, &nn);
    }

    #[test]
    fn backup_and_restore_work() {
        let mut states = CreepStates::new(Mandel::Symmetric, 3);
        assert_eq!(states.len(), 3);
        assert!(!states.is_empty());
        states.all[1].max_stress = 10.0;
        let eps = [[0.0, 0.5, 0.0], [0.5, 0.0, 0.0], [0.0, 0.0, 0.0]];
        states.all[1].inelastic_strain = Tensor2::from_matrix(&eps, Mandel::Symmetric).unwrap();
        states.backup();
        states.all[1].max_stress = 20.0;
        states.all[1].equivalent_strain = 1.0;
        states.all[1].inelastic_strain.vector_mut()[3] = 0.7;
        states.restore();
        assert_eq!(states.all[1].max_stress, 10.0);
        assert_eq!(states.all[1].equivalent_strain, 0.0);
        assert!(f64::abs(states.all[1].inelastic_strain.get(0, 1) - 0.5) < 1e-15);
    }

    #[test]
    fn backup_follows_the_number_of_points() {
        let mut states = CreepStates::new(Mandel::Symmetric2D, 2);
        states.all.push(CreepState::new(Mandel::Symmetric2D));
        states.all[2].max_stress = 5.0;
        states.backup();
        states.all[2].max_stress = 50.0;
        states.all[0].equivalent_strain = 1.0;
        states.restore();
        assert_eq!(states.len(), 3);
        assert_eq!(states.all[2].max_stress, 5.0);
        assert_eq!(states.all[0].equivalent_strain, 0.0);

        // points added after the backup are removed by restore
        states.all.push(CreepState::new(Mandel::Symmetric2D));
        states.restore();
        assert_eq!(states.len(), 3);
    }

    #[test]
    fn display_trait_works() {
        let mut state = CreepState::new(Mandel::Symmetric2D);
        state.inelastic_strain.vector_mut()[0] = 0.001;
        state.inelastic_strain.vector_mut()[1] = 0.002;
        state.inelastic_strain.vector_mut()[2] = -0.003;
        state.equivalent_strain = 0.25;
        state.max_stress = 3.0;
        assert_eq!(
            format!("{}", state),
            "εᵢ =\n\
             ┌                      ┐\n\
             │  0.001      0      0 │\n\
             │      0  0.002      0 │\n\
             │      0      0 -0.003 │\n\
             └                      ┘\n\
             εd = 0.25\n\
             max_stress = 3.0\n\
             max_stress_time = 0.0"
        );
    }
}
