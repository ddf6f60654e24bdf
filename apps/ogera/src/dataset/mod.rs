//! Demo dataset — the read-only collections every screen renders from.
//!
//! The shipped seed lives in [`seed`]; a JSON file with the same shape can replace it
//! at startup (`SEED_PATH`).

pub mod seed;

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::models::{Application, Identity, Job, PremiumFeature};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub identities: Vec<Identity>,
    pub jobs: Vec<Job>,
    pub applications: Vec<Application>,
    pub premium_features: Vec<PremiumFeature>,
}

impl Dataset {
    /// The built-in demo marketplace.
    pub fn demo() -> Self {
        seed::demo_dataset()
    }

    /// Loads a dataset from a JSON file.
    pub async fn from_json_file(path: &Path) -> Result<Self> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read dataset file '{}'", path.display()))?;
        let dataset: Dataset = serde_json::from_str(&raw)
            .with_context(|| format!("Dataset file '{}' is not valid JSON", path.display()))?;

        info!(
            "Loaded dataset from {}: {} identities, {} jobs, {} applications, {} premium features",
            path.display(),
            dataset.identities.len(),
            dataset.jobs.len(),
            dataset.applications.len(),
            dataset.premium_features.len()
        );
        Ok(dataset)
    }

    pub fn job(&self, id: Uuid) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    /// Distinct job categories, alphabetical.
    pub fn categories(&self) -> Vec<String> {
        self.jobs
            .iter()
            .map(|j| j.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn applications_for_learner(&self, learner_id: Uuid) -> impl Iterator<Item = &Application> {
        self.applications
            .iter()
            .filter(move |a| a.learner_id == learner_id)
    }

    pub fn jobs_for_employer(&self, employer_id: Uuid) -> impl Iterator<Item = &Job> {
        self.jobs.iter().filter(move |j| j.employer_id == employer_id)
    }
}
