//! Navigation — the role-scoped tab menu and the (role, tab) → screen router.

pub mod menu;
pub mod router;

pub use menu::{items_for, MenuItem};
pub use router::{resolve, Screen};

/// Tab ids shared by the menu and the router.
pub mod tabs {
    pub const DASHBOARD: &str = "dashboard";

    pub const JOBS: &str = "jobs";
    pub const APPLICATIONS: &str = "applications";
    pub const PERFORMANCE: &str = "performance";
    pub const PREMIUM: &str = "premium";
    pub const PROFILE: &str = "profile";

    pub const POST_JOB: &str = "post-job";
    pub const MY_JOBS: &str = "my-jobs";
    pub const APPLICANTS: &str = "applicants";
    pub const COMPANY_PROFILE: &str = "company-profile";

    pub const USERS: &str = "users";
    pub const JOB_MODERATION: &str = "job-moderation";
    pub const ANALYTICS: &str = "analytics";
    pub const SETTINGS: &str = "settings";
}

/// Every role lands on this tab when the shell is mounted.
pub const HOME_TAB: &str = tabs::DASHBOARD;
