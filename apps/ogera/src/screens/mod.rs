//! Screens — pure render functions from (identity, dataset, local state) to a
//! serializable view model.
//!
//! Screens never reach for session state on their own: the shell hands each render a
//! `ScreenContext` carrying the current identity.

pub mod admin;
pub mod employer;
pub mod jobs;
pub mod learner;
pub mod premium;

use serde::Serialize;

use crate::dataset::Dataset;
use crate::models::{Identity, Role};
use crate::navigation::Screen;
use crate::session::IdentityDirectory;

pub use jobs::{JobBoardState, JobQuery, JobSort, SavedItems};

/// Everything a screen may read while rendering.
#[derive(Clone, Copy)]
pub struct ScreenContext<'a> {
    pub identity: &'a Identity,
    pub dataset: &'a Dataset,
    pub directory: &'a IdentityDirectory,
    pub settings: &'a PlatformSettings,
}

/// Non-secret runtime settings surfaced on the administrator settings screen.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PlatformSettings {
    pub storage_backend: String,
    pub session_key: String,
    pub login_delay_ms: u64,
    pub dataset_source: String,
}

/// State owned by the mounted screen instance. Reset on unmount.
#[derive(Debug, Clone, Default)]
pub struct LocalState {
    pub job_board: JobBoardState,
}

#[derive(Debug, Clone, Serialize)]
pub struct DemoAccount {
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginView {
    pub roles: Vec<Role>,
    pub demo_accounts: Vec<DemoAccount>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NotFoundView {
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum ScreenView {
    Login(LoginView),
    NotFound(NotFoundView),

    LearnerDashboard(learner::LearnerDashboardView),
    JobBoard(jobs::JobBoardView),
    LearnerApplications(learner::LearnerApplicationsView),
    Performance(premium::PerformanceView),
    PremiumFeatures(premium::PremiumView),
    LearnerProfile(learner::ProfileView),

    EmployerDashboard(employer::EmployerDashboardView),
    PostJob(employer::PostJobView),
    EmployerJobs(employer::EmployerJobsView),
    Applicants(employer::ApplicantsView),
    CompanyProfile(employer::CompanyProfileView),

    AdminDashboard(admin::AdminDashboardView),
    UserManagement(admin::UserManagementView),
    JobModeration(admin::JobModerationView),
    Analytics(admin::AnalyticsView),
    PlatformSettings(admin::SettingsView),
}

/// The login screen, listing one demo account per directory entry.
pub fn render_login(directory: &IdentityDirectory) -> ScreenView {
    ScreenView::Login(LoginView {
        roles: Role::ALL.to_vec(),
        demo_accounts: directory
            .all()
            .iter()
            .map(|i| DemoAccount {
                email: i.email.clone(),
                role: i.role,
            })
            .collect(),
    })
}

pub fn render_not_found() -> ScreenView {
    ScreenView::NotFound(NotFoundView {
        message: "This page does not exist.".to_string(),
    })
}

/// Renders `screen` for an authenticated identity.
pub fn render(screen: Screen, ctx: &ScreenContext<'_>, local: &LocalState) -> ScreenView {
    match screen {
        Screen::Login => render_login(ctx.directory),
        Screen::NotFound => render_not_found(),

        Screen::LearnerDashboard => ScreenView::LearnerDashboard(learner::render_dashboard(ctx)),
        Screen::JobBoard => ScreenView::JobBoard(jobs::render_job_board(ctx, &local.job_board)),
        Screen::LearnerApplications => {
            ScreenView::LearnerApplications(learner::render_applications(ctx))
        }
        Screen::Performance => ScreenView::Performance(premium::render_performance(ctx)),
        Screen::PremiumFeatures => ScreenView::PremiumFeatures(premium::render_premium(ctx)),
        Screen::LearnerProfile => ScreenView::LearnerProfile(learner::render_profile(ctx)),

        Screen::EmployerDashboard => {
            ScreenView::EmployerDashboard(employer::render_dashboard(ctx))
        }
        Screen::PostJob => ScreenView::PostJob(employer::render_post_job(ctx)),
        Screen::EmployerJobs => ScreenView::EmployerJobs(employer::render_jobs(ctx)),
        Screen::Applicants => ScreenView::Applicants(employer::render_applicants(ctx)),
        Screen::CompanyProfile => {
            ScreenView::CompanyProfile(employer::render_company_profile(ctx))
        }

        Screen::AdminDashboard => ScreenView::AdminDashboard(admin::render_dashboard(ctx)),
        Screen::UserManagement => ScreenView::UserManagement(admin::render_users(ctx)),
        Screen::JobModeration => ScreenView::JobModeration(admin::render_job_moderation(ctx)),
        Screen::Analytics => ScreenView::Analytics(admin::render_analytics(ctx)),
        Screen::PlatformSettings => ScreenView::PlatformSettings(admin::render_settings(ctx)),
    }
}
