//! Premium gating — features unlock once a learner's performance score reaches
//! their threshold. Evaluated on every render.

use serde::Serialize;
use uuid::Uuid;

use crate::models::PremiumFeature;
use crate::screens::ScreenContext;

/// `score >= required_score`. A learner without a score has nothing unlocked.
pub fn is_unlocked(feature: &PremiumFeature, score: Option<f64>) -> bool {
    score.is_some_and(|score| score >= feature.required_score)
}

pub fn unlocked_count(features: &[PremiumFeature], score: Option<f64>) -> usize {
    features.iter().filter(|f| is_unlocked(f, score)).count()
}

#[derive(Debug, Clone, Serialize)]
pub struct PremiumFeatureView {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub required_score: f64,
    pub unlocked: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PremiumView {
    pub performance_score: Option<f64>,
    pub unlocked_count: usize,
    pub features: Vec<PremiumFeatureView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NextUnlock {
    pub feature: String,
    pub required_score: f64,
    pub gap: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PerformanceView {
    pub performance_score: Option<f64>,
    pub unlocked_count: usize,
    pub total_features: usize,
    /// Lowest-threshold feature still locked, if any.
    pub next_unlock: Option<NextUnlock>,
}

pub fn render_premium(ctx: &ScreenContext<'_>) -> PremiumView {
    let score = ctx.identity.performance_score;
    let features = &ctx.dataset.premium_features;

    PremiumView {
        performance_score: score,
        unlocked_count: unlocked_count(features, score),
        features: features
            .iter()
            .map(|f| PremiumFeatureView {
                id: f.id,
                name: f.name.clone(),
                description: f.description.clone(),
                required_score: f.required_score,
                unlocked: is_unlocked(f, score),
            })
            .collect(),
    }
}

pub fn render_performance(ctx: &ScreenContext<'_>) -> PerformanceView {
    let score = ctx.identity.performance_score;
    let features = &ctx.dataset.premium_features;

    let next_unlock = features
        .iter()
        .filter(|f| !is_unlocked(f, score))
        .min_by(|a, b| a.required_score.total_cmp(&b.required_score))
        .map(|f| NextUnlock {
            feature: f.name.clone(),
            required_score: f.required_score,
            gap: (f.required_score - score.unwrap_or(0.0)).max(0.0),
        });

    PerformanceView {
        performance_score: score,
        unlocked_count: unlocked_count(features, score),
        total_features: features.len(),
        next_unlock,
    }
}
