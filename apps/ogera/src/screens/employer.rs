use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{ApplicationStatus, Identity, Job, JobStatus};
use crate::screens::ScreenContext;

const RECENT_APPLICATIONS: usize = 5;

#[derive(Debug, Clone, Serialize)]
pub struct ApplicantRow {
    pub application_id: Uuid,
    pub job_id: Uuid,
    pub job_title: String,
    pub learner_id: Uuid,
    pub learner_name: String,
    pub learner_score: Option<f64>,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmployerDashboardView {
    pub company_name: String,
    pub posted_jobs: usize,
    pub open_jobs: usize,
    pub total_applicants: u32,
    pub recent_applications: Vec<ApplicantRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobDraft {
    pub company: String,
    pub location: String,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostJobView {
    pub categories: Vec<String>,
    pub draft: JobDraft,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmployerJobsView {
    pub jobs: Vec<Job>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApplicantsView {
    pub applicants: Vec<ApplicantRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyProfileView {
    pub identity: Identity,
    pub posted_jobs: usize,
}

fn company_name(identity: &Identity) -> String {
    identity
        .company_name
        .clone()
        .unwrap_or_else(|| identity.name.clone())
}

/// Applications to jobs this organization posted, newest first.
fn applicants(ctx: &ScreenContext<'_>) -> Vec<ApplicantRow> {
    let own_jobs: HashSet<Uuid> = ctx
        .dataset
        .jobs_for_employer(ctx.identity.id)
        .map(|j| j.id)
        .collect();

    let mut rows: Vec<ApplicantRow> = ctx
        .dataset
        .applications
        .iter()
        .filter(|a| own_jobs.contains(&a.job_id))
        .map(|a| {
            let learner = ctx.directory.by_id(a.learner_id);
            ApplicantRow {
                application_id: a.id,
                job_id: a.job_id,
                job_title: ctx
                    .dataset
                    .job(a.job_id)
                    .map(|j| j.title.clone())
                    .unwrap_or_default(),
                learner_id: a.learner_id,
                learner_name: learner.map(|l| l.name.clone()).unwrap_or_default(),
                learner_score: learner.and_then(|l| l.performance_score),
                status: a.status,
                applied_at: a.applied_at,
            }
        })
        .collect();
    rows.sort_by(|a, b| b.applied_at.cmp(&a.applied_at));
    rows
}

pub fn render_dashboard(ctx: &ScreenContext<'_>) -> EmployerDashboardView {
    let jobs: Vec<&Job> = ctx.dataset.jobs_for_employer(ctx.identity.id).collect();
    let mut recent_applications = applicants(ctx);
    recent_applications.truncate(RECENT_APPLICATIONS);

    EmployerDashboardView {
        company_name: company_name(ctx.identity),
        posted_jobs: jobs.len(),
        open_jobs: jobs.iter().filter(|j| j.status == JobStatus::Open).count(),
        total_applicants: jobs.iter().map(|j| j.applicant_count).sum(),
        recent_applications,
    }
}

pub fn render_post_job(ctx: &ScreenContext<'_>) -> PostJobView {
    let categories = ctx.dataset.categories();
    PostJobView {
        draft: JobDraft {
            company: company_name(ctx.identity),
            location: ctx
                .identity
                .location
                .clone()
                .unwrap_or_else(|| "Remote".to_string()),
            category: categories.first().cloned(),
        },
        categories,
    }
}

/// Own postings, newest first.
pub fn render_jobs(ctx: &ScreenContext<'_>) -> EmployerJobsView {
    let mut jobs: Vec<Job> = ctx
        .dataset
        .jobs_for_employer(ctx.identity.id)
        .cloned()
        .collect();
    jobs.sort_by(|a, b| b.posted_at.cmp(&a.posted_at));
    EmployerJobsView { jobs }
}

pub fn render_applicants(ctx: &ScreenContext<'_>) -> ApplicantsView {
    ApplicantsView {
        applicants: applicants(ctx),
    }
}

pub fn render_company_profile(ctx: &ScreenContext<'_>) -> CompanyProfileView {
    CompanyProfileView {
        identity: ctx.identity.clone(),
        posted_jobs: ctx.dataset.jobs_for_employer(ctx.identity.id).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::seed::{DUAL_ROLE_EMPLOYER_ID, EMPLOYER_ID};
    use crate::screens::testing::Fixture;

    #[test]
    fn test_dashboard_scoped_to_own_jobs() {
        let fixture = Fixture::for_identity(EMPLOYER_ID);
        let view = render_dashboard(&fixture.context());

        assert_eq!(view.company_name, "TechCorp Solutions");
        assert_eq!(view.posted_jobs, 4);
        assert_eq!(view.open_jobs, 3);
        assert_eq!(view.total_applicants, 12 + 8 + 19 + 8);
    }

    #[test]
    fn test_applicants_only_for_own_jobs() {
        let fixture = Fixture::for_identity(EMPLOYER_ID);
        let ctx = fixture.context();
        let view = render_applicants(&ctx);

        assert!(!view.applicants.is_empty());
        for row in &view.applicants {
            let job = ctx.dataset.job(row.job_id).unwrap();
            assert_eq!(job.employer_id, EMPLOYER_ID);
            assert!(!row.learner_name.is_empty());
        }
        for pair in view.applicants.windows(2) {
            assert!(pair[0].applied_at >= pair[1].applied_at);
        }
    }

    #[test]
    fn test_employer_without_applicants() {
        let fixture = Fixture::for_identity(DUAL_ROLE_EMPLOYER_ID);
        let ctx = fixture.context();
        assert!(render_applicants(&ctx).applicants.is_empty());
        assert_eq!(render_jobs(&ctx).jobs.len(), 1);
    }

    #[test]
    fn test_post_job_defaults_from_identity() {
        let fixture = Fixture::for_identity(EMPLOYER_ID);
        let view = render_post_job(&fixture.context());
        assert_eq!(view.draft.company, "TechCorp Solutions");
        assert_eq!(view.draft.location, "Remote");
        assert_eq!(view.draft.category, view.categories.first().cloned());
    }
}
