use std::collections::BTreeMap;

use serde::Serialize;
use uuid::Uuid;

use crate::models::{Job, JobStatus, Role};
use crate::screens::{PlatformSettings, ScreenContext};

#[derive(Debug, Clone, Serialize)]
pub struct RoleCount {
    pub role: Role,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JobStatusCounts {
    pub open: usize,
    pub closed: usize,
    pub pending_review: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminDashboardView {
    pub users_by_role: Vec<RoleCount>,
    pub unverified_users: usize,
    pub jobs: JobStatusCounts,
    pub total_applications: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub is_verified: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserManagementView {
    pub users: Vec<UserRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobModerationView {
    pub pending: Vec<Job>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryStats {
    pub category: String,
    pub jobs: usize,
    pub applications: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsView {
    pub average_pay_rate: Option<f64>,
    pub categories: Vec<CategoryStats>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SettingsView {
    pub settings: PlatformSettings,
}

fn role_counts(ctx: &ScreenContext<'_>) -> Vec<RoleCount> {
    Role::ALL
        .into_iter()
        .map(|role| RoleCount {
            role,
            count: ctx.directory.by_role(role).count(),
        })
        .collect()
}

pub fn job_status_counts(jobs: &[Job]) -> JobStatusCounts {
    let mut counts = JobStatusCounts::default();
    for job in jobs {
        match job.status {
            JobStatus::Open => counts.open += 1,
            JobStatus::Closed => counts.closed += 1,
            JobStatus::PendingReview => counts.pending_review += 1,
        }
    }
    counts
}

pub fn render_dashboard(ctx: &ScreenContext<'_>) -> AdminDashboardView {
    AdminDashboardView {
        users_by_role: role_counts(ctx),
        unverified_users: ctx.directory.all().iter().filter(|i| !i.is_verified).count(),
        jobs: job_status_counts(&ctx.dataset.jobs),
        total_applications: ctx.dataset.applications.len(),
    }
}

/// All directory entries, grouped in role order then by name.
pub fn render_users(ctx: &ScreenContext<'_>) -> UserManagementView {
    let mut users: Vec<UserRow> = ctx
        .directory
        .all()
        .iter()
        .map(|i| UserRow {
            id: i.id,
            name: i.name.clone(),
            email: i.email.clone(),
            role: i.role,
            is_verified: i.is_verified,
        })
        .collect();
    users.sort_by(|a, b| {
        role_rank(a.role)
            .cmp(&role_rank(b.role))
            .then_with(|| a.name.cmp(&b.name))
    });
    UserManagementView { users }
}

fn role_rank(role: Role) -> usize {
    Role::ALL.iter().position(|r| *r == role).unwrap_or(Role::ALL.len())
}

pub fn render_job_moderation(ctx: &ScreenContext<'_>) -> JobModerationView {
    JobModerationView {
        pending: ctx
            .dataset
            .jobs
            .iter()
            .filter(|j| j.status == JobStatus::PendingReview)
            .cloned()
            .collect(),
    }
}

pub fn render_analytics(ctx: &ScreenContext<'_>) -> AnalyticsView {
    let jobs = &ctx.dataset.jobs;
    let average_pay_rate = if jobs.is_empty() {
        None
    } else {
        Some(jobs.iter().map(|j| j.pay_rate).sum::<f64>() / jobs.len() as f64)
    };

    let mut by_category: BTreeMap<&str, CategoryStats> = BTreeMap::new();
    for job in jobs {
        by_category
            .entry(job.category.as_str())
            .or_insert_with(|| CategoryStats {
                category: job.category.clone(),
                jobs: 0,
                applications: 0,
            })
            .jobs += 1;
    }
    for application in &ctx.dataset.applications {
        if let Some(job) = ctx.dataset.job(application.job_id) {
            if let Some(stats) = by_category.get_mut(job.category.as_str()) {
                stats.applications += 1;
            }
        }
    }

    AnalyticsView {
        average_pay_rate,
        categories: by_category.into_values().collect(),
    }
}

pub fn render_settings(ctx: &ScreenContext<'_>) -> SettingsView {
    SettingsView {
        settings: ctx.settings.clone(),
    }
}
