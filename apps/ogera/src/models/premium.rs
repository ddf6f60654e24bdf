use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A learner perk gated on the learner's performance score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PremiumFeature {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub required_score: f64,
}
