pub mod explain;
pub mod scorer;
pub mod weights;

pub use scorer::MatchScorer;
pub use weights::{FactorWeights, CANONICAL_WEIGHTS};
