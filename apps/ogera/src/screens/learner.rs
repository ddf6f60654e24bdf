use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{ApplicationStatus, Identity, JobStatus};
use crate::screens::jobs::{search_jobs, JobQuery};
use crate::screens::premium::unlocked_count;
use crate::screens::ScreenContext;

const RECOMMENDED_JOBS: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApplicationCounts {
    pub pending: usize,
    pub reviewed: usize,
    pub accepted: usize,
    pub rejected: usize,
}

impl ApplicationCounts {
    pub fn record(&mut self, status: ApplicationStatus) {
        match status {
            ApplicationStatus::Pending => self.pending += 1,
            ApplicationStatus::Reviewed => self.reviewed += 1,
            ApplicationStatus::Accepted => self.accepted += 1,
            ApplicationStatus::Rejected => self.rejected += 1,
        }
    }

    #[cfg(test)]
    pub fn total(&self) -> usize {
        self.pending + self.reviewed + self.accepted + self.rejected
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendedJob {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub pay_rate: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LearnerDashboardView {
    pub greeting: String,
    pub applications: ApplicationCounts,
    pub recommended_jobs: Vec<RecommendedJob>,
    pub unlocked_premium_features: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApplicationRow {
    pub id: Uuid,
    pub job_id: Uuid,
    pub job_title: String,
    pub company: String,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LearnerApplicationsView {
    pub counts: ApplicationCounts,
    pub applications: Vec<ApplicationRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileView {
    pub identity: Identity,
}

pub fn render_dashboard(ctx: &ScreenContext<'_>) -> LearnerDashboardView {
    let mut applications = ApplicationCounts::default();
    for application in ctx.dataset.applications_for_learner(ctx.identity.id) {
        applications.record(application.status);
    }

    let recommended_jobs = search_jobs(&ctx.dataset.jobs, &JobQuery::default())
        .into_iter()
        .filter(|job| job.status == JobStatus::Open)
        .take(RECOMMENDED_JOBS)
        .map(|job| RecommendedJob {
            id: job.id,
            title: job.title.clone(),
            company: job.company.clone(),
            pay_rate: job.pay_rate,
        })
        .collect();

    LearnerDashboardView {
        greeting: format!("Welcome back, {}", ctx.identity.name),
        applications,
        recommended_jobs,
        unlocked_premium_features: unlocked_count(
            &ctx.dataset.premium_features,
            ctx.identity.performance_score,
        ),
    }
}

/// The learner's applications, newest first, joined with their job.
pub fn render_applications(ctx: &ScreenContext<'_>) -> LearnerApplicationsView {
    let mut counts = ApplicationCounts::default();
    let mut applications: Vec<ApplicationRow> = ctx
        .dataset
        .applications_for_learner(ctx.identity.id)
        .map(|application| {
            counts.record(application.status);
            let job = ctx.dataset.job(application.job_id);
            ApplicationRow {
                id: application.id,
                job_id: application.job_id,
                job_title: job.map(|j| j.title.clone()).unwrap_or_default(),
                company: job.map(|j| j.company.clone()).unwrap_or_default(),
                status: application.status,
                applied_at: application.applied_at,
            }
        })
        .collect();
    applications.sort_by(|a, b| b.applied_at.cmp(&a.applied_at));

    LearnerApplicationsView {
        counts,
        applications,
    }
}

pub fn render_profile(ctx: &ScreenContext<'_>) -> ProfileView {
    ProfileView {
        identity: ctx.identity.clone(),
    }
}
