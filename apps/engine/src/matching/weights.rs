//! Factor weights for the match score.
//!
//! One canonical scheme. Earlier iterations of this algorithm carried
//! several competing weight sets side by side; only this one is kept, and
//! the weights must always sum to 1.0 so the total stays on a 0–100 scale.

#[derive(Debug, Clone, Copy)]
pub struct FactorWeights {
    pub skills: f64,
    pub role: f64,
    pub experience: f64,
    pub growth: f64,
    pub urgency: f64,
}

pub const CANONICAL_WEIGHTS: FactorWeights = FactorWeights {
    skills: 0.40,
    role: 0.25,
    experience: 0.20,
    growth: 0.10,
    urgency: 0.05,
};

impl FactorWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.role + self.experience + self.growth + self.urgency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        assert!((CANONICAL_WEIGHTS.sum() - 1.0).abs() < 1e-9);
    }
}
