use serde::Serialize;

use crate::models::Role;
use crate::navigation::{tabs, HOME_TAB};

/// Every screen the shell can mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Login,
    NotFound,

    LearnerDashboard,
    JobBoard,
    LearnerApplications,
    Performance,
    PremiumFeatures,
    LearnerProfile,

    EmployerDashboard,
    PostJob,
    EmployerJobs,
    Applicants,
    CompanyProfile,

    AdminDashboard,
    UserManagement,
    JobModeration,
    Analytics,
    PlatformSettings,
}

/// Resolves the screen for a role and tab. Unknown tabs fall back to the role's
/// home screen.
pub fn resolve(role: Role, tab: &str) -> Screen {
    match role {
        Role::Learner => match tab {
            tabs::JOBS => Screen::JobBoard,
            tabs::APPLICATIONS => Screen::LearnerApplications,
            tabs::PERFORMANCE => Screen::Performance,
            tabs::PREMIUM => Screen::PremiumFeatures,
            tabs::PROFILE => Screen::LearnerProfile,
            _ => Screen::LearnerDashboard,
        },
        Role::Organization => match tab {
            tabs::POST_JOB => Screen::PostJob,
            tabs::MY_JOBS => Screen::EmployerJobs,
            tabs::APPLICANTS => Screen::Applicants,
            tabs::COMPANY_PROFILE => Screen::CompanyProfile,
            _ => Screen::EmployerDashboard,
        },
        Role::Administrator => match tab {
            tabs::USERS => Screen::UserManagement,
            tabs::JOB_MODERATION => Screen::JobModeration,
            tabs::ANALYTICS => Screen::Analytics,
            tabs::SETTINGS => Screen::PlatformSettings,
            _ => Screen::AdminDashboard,
        },
    }
}

#[cfg(test)]
pub fn home_screen(role: Role) -> Screen {
    resolve(role, HOME_TAB)
}

/// Resolves from an untyped role tag. Tags outside the role set get `NotFound`.
#[allow(dead_code)]
pub fn resolve_tag(role_tag: &str, tab: &str) -> Screen {
    Role::from_tag(role_tag).map_or(Screen::NotFound, |role| resolve(role, tab))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::menu::items_for;
    use std::collections::HashSet;

    #[test]
    fn test_every_menu_tab_routes_to_its_own_screen() {
        for role in Role::ALL {
            let home = home_screen(role);
            for item in items_for(role) {
                let screen = resolve(role, item.tab);
                if item.tab == HOME_TAB {
                    assert_eq!(screen, home);
                } else {
                    assert_ne!(
                        screen, home,
                        "{role:?} tab '{}' falls through to home",
                        item.tab
                    );
                }
            }
        }
    }

    #[test]
    fn test_menu_tabs_map_to_distinct_screens() {
        for role in Role::ALL {
            let screens: HashSet<_> = items_for(role)
                .iter()
                .map(|i| resolve(role, i.tab))
                .collect();
            assert_eq!(screens.len(), items_for(role).len());
        }
    }

    #[test]
    fn test_unknown_tab_falls_back_to_home() {
        for role in Role::ALL {
            assert_eq!(resolve(role, "unknown-tab"), resolve(role, HOME_TAB));
            assert_eq!(resolve(role, ""), home_screen(role));
        }
    }

    #[test]
    fn test_tabs_of_other_roles_fall_back_to_home() {
        assert_eq!(resolve(Role::Learner, tabs::USERS), Screen::LearnerDashboard);
        assert_eq!(
            resolve(Role::Administrator, tabs::JOBS),
            Screen::AdminDashboard
        );
    }

    #[test]
    fn test_unknown_role_tag_is_not_found() {
        assert_eq!(resolve_tag("guest", HOME_TAB), Screen::NotFound);
        assert_eq!(resolve_tag("learner", tabs::JOBS), Screen::JobBoard);
    }
}
