use serde::Serialize;

use crate::models::Role;
use crate::navigation::tabs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub tab: &'static str,
    pub label: &'static str,
}

const fn item(tab: &'static str, label: &'static str) -> MenuItem {
    MenuItem { tab, label }
}

const LEARNER_MENU: &[MenuItem] = &[
    item(tabs::DASHBOARD, "Dashboard"),
    item(tabs::JOBS, "Browse Jobs"),
    item(tabs::APPLICATIONS, "My Applications"),
    item(tabs::PERFORMANCE, "Performance"),
    item(tabs::PREMIUM, "Premium Features"),
    item(tabs::PROFILE, "Profile"),
];

const ORGANIZATION_MENU: &[MenuItem] = &[
    item(tabs::DASHBOARD, "Dashboard"),
    item(tabs::POST_JOB, "Post a Job"),
    item(tabs::MY_JOBS, "My Jobs"),
    item(tabs::APPLICANTS, "Applicants"),
    item(tabs::COMPANY_PROFILE, "Company Profile"),
];

const ADMINISTRATOR_MENU: &[MenuItem] = &[
    item(tabs::DASHBOARD, "Dashboard"),
    item(tabs::USERS, "User Management"),
    item(tabs::JOB_MODERATION, "Job Moderation"),
    item(tabs::ANALYTICS, "Analytics"),
    item(tabs::SETTINGS, "Settings"),
];

/// Ordered menu for a role. The first entry is the role's home tab.
pub fn items_for(role: Role) -> &'static [MenuItem] {
    match role {
        Role::Learner => LEARNER_MENU,
        Role::Organization => ORGANIZATION_MENU,
        Role::Administrator => ADMINISTRATOR_MENU,
    }
}

/// Menu for an untyped role tag; empty for anything outside the role set.
#[allow(dead_code)]
pub fn items_for_tag(role_tag: &str) -> &'static [MenuItem] {
    match Role::from_tag(role_tag) {
        Some(role) => items_for(role),
        None => &[],
    }
}
