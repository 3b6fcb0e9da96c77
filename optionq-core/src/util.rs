//! Utilities.

/// Returns the discounted sum `r_0 + γ r_1 + γ^2 r_2 + ...` of `rewards`.
///
/// An empty sequence sums to zero.
pub fn discounted_return(rewards: &[f64], gamma: f64) -> f64 {
    rewards
        .iter()
        .rev()
        .fold(0.0, |acc, reward| reward + gamma * acc)
}
