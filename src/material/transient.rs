/// Updates the transient-creep history at an integration point
///
/// Returns `(max_stress, elapsed_time)`:
///
/// * If `sigma_trial > max_stress_old`: the new maximum is `sigma_trial` and the elapsed time is reset to zero
/// * Otherwise (including `sigma_trial == max_stress_old`): the maximum is kept and the elapsed time grows by `dt`
pub fn update_history(sigma_trial: f64, max_stress_old: f64, elapsed_time_old: f64, dt: f64) -> (f64, f64) {
    if sigma_trial > max_stress_old {
        (sigma_trial, 0.0)
    } else {
        (max_stress_old, elapsed_time_old + dt)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
