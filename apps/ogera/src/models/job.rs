use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Open,
    Closed,
    PendingReview,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub employer_id: Uuid,
    pub description: String,
    pub category: String,
    pub location: String,
    /// Hourly pay rate.
    pub pay_rate: f64,
    pub posted_at: DateTime<Utc>,
    pub applicant_count: u32,
    #[serde(default)]
    pub skills: Vec<String>,
    pub status: JobStatus,
}
