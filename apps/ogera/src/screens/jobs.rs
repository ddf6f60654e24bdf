//! Job board — search, category filter, sort and saved-job toggling.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Job, JobStatus};
use crate::screens::ScreenContext;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobSort {
    /// Newest posting first.
    #[default]
    Recent,
    PayHighToLow,
    PayLowToHigh,
    FewestApplicants,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobQuery {
    /// Case-insensitive substring over title, company and description.
    pub search: String,
    /// Exact category match; `None` lists every category.
    pub category: Option<String>,
    pub sort: JobSort,
}

/// Filters and sorts `jobs` for `query`. The sort is stable: ties keep the
/// collection order.
pub fn search_jobs<'a>(jobs: &'a [Job], query: &JobQuery) -> Vec<&'a Job> {
    let needle = query.search.to_lowercase();

    let mut matches: Vec<&Job> = jobs
        .iter()
        .filter(|job| matches_search(job, &needle))
        .filter(|job| {
            query
                .category
                .as_deref()
                .map_or(true, |category| job.category == category)
        })
        .collect();

    match query.sort {
        JobSort::Recent => matches.sort_by(|a, b| b.posted_at.cmp(&a.posted_at)),
        JobSort::PayHighToLow => matches.sort_by(|a, b| b.pay_rate.total_cmp(&a.pay_rate)),
        JobSort::PayLowToHigh => matches.sort_by(|a, b| a.pay_rate.total_cmp(&b.pay_rate)),
        JobSort::FewestApplicants => matches.sort_by_key(|job| job.applicant_count),
    }

    matches
}

fn matches_search(job: &Job, needle: &str) -> bool {
    needle.is_empty()
        || job.title.to_lowercase().contains(needle)
        || job.company.to_lowercase().contains(needle)
        || job.description.to_lowercase().contains(needle)
}

/// Saved job ids for one mounted job board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedItems {
    ids: HashSet<Uuid>,
}

impl SavedItems {
    /// Adds `id` when absent, removes it when present. Returns whether it is now saved.
    pub fn toggle(&mut self, id: Uuid) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Component-local state of the job board. Dropped when the board is unmounted.
#[derive(Debug, Clone, Default)]
pub struct JobBoardState {
    pub query: JobQuery,
    pub saved: SavedItems,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobCard {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub category: String,
    pub location: String,
    pub pay_rate: f64,
    pub posted_at: DateTime<Utc>,
    pub applicant_count: u32,
    pub skills: Vec<String>,
    pub saved: bool,
    pub applied: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobBoardView {
    pub query: JobQuery,
    pub categories: Vec<String>,
    pub jobs: Vec<JobCard>,
    pub saved_count: usize,
}

pub fn render_job_board(ctx: &ScreenContext<'_>, state: &JobBoardState) -> JobBoardView {
    let applied: HashSet<Uuid> = ctx
        .dataset
        .applications_for_learner(ctx.identity.id)
        .map(|a| a.job_id)
        .collect();

    let jobs = search_jobs(&ctx.dataset.jobs, &state.query)
        .into_iter()
        .filter(|job| job.status == JobStatus::Open)
        .map(|job| JobCard {
            id: job.id,
            title: job.title.clone(),
            company: job.company.clone(),
            category: job.category.clone(),
            location: job.location.clone(),
            pay_rate: job.pay_rate,
            posted_at: job.posted_at,
            applicant_count: job.applicant_count,
            skills: job.skills.clone(),
            saved: state.saved.contains(job.id),
            applied: applied.contains(&job.id),
        })
        .collect();

    JobBoardView {
        query: state.query.clone(),
        categories: ctx.dataset.categories(),
        jobs,
        saved_count: state.saved.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    fn jobs() -> Vec<Job> {
        Dataset::demo().jobs
    }

    fn query(search: &str) -> JobQuery {
        JobQuery {
            search: search.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_search_matches_company_case_insensitively() {
        let jobs = jobs();
        let results = search_jobs(&jobs, &query("techCORP"));
        assert!(!results.is_empty());
        for job in &results {
            let haystack =
                format!("{} {} {}", job.title, job.company, job.description).to_lowercase();
            assert!(haystack.contains("techcorp"));
        }
        let expected = jobs
            .iter()
            .filter(|j| j.company == "TechCorp Solutions")
            .count();
        assert_eq!(results.len(), expected);
    }

    #[test]
    fn test_search_covers_title_and_description() {
        let jobs = jobs();
        assert_eq!(search_jobs(&jobs, &query("tutor")).len(), 1);
        assert_eq!(search_jobs(&jobs, &query("FIGMA")).len(), 1);
    }

    #[test]
    fn test_search_without_match_is_empty() {
        let jobs = jobs();
        assert!(search_jobs(&jobs, &query("quantum basket weaving")).is_empty());
    }

    #[test]
    fn test_empty_search_returns_everything() {
        let jobs = jobs();
        assert_eq!(search_jobs(&jobs, &JobQuery::default()).len(), jobs.len());
    }

    #[test]
    fn test_category_filter_is_exact() {
        let jobs = jobs();
        let results = search_jobs(
            &jobs,
            &JobQuery {
                category: Some("Technology".to_string()),
                ..Default::default()
            },
        );
        assert!(!results.is_empty());
        assert!(results.iter().all(|j| j.category == "Technology"));

        let lowercase = search_jobs(
            &jobs,
            &JobQuery {
                category: Some("technology".to_string()),
                ..Default::default()
            },
        );
        assert!(lowercase.is_empty());
    }

    #[test]
    fn test_sort_pay_low_to_high_is_non_decreasing() {
        let jobs = jobs();
        let results = search_jobs(
            &jobs,
            &JobQuery {
                sort: JobSort::PayLowToHigh,
                ..Default::default()
            },
        );
        for pair in results.windows(2) {
            assert!(pair[0].pay_rate <= pair[1].pay_rate);
        }
    }

    #[test]
    fn test_sort_pay_high_to_low_is_non_increasing() {
        let jobs = jobs();
        let results = search_jobs(
            &jobs,
            &JobQuery {
                sort: JobSort::PayHighToLow,
                ..Default::default()
            },
        );
        for pair in results.windows(2) {
            assert!(pair[0].pay_rate >= pair[1].pay_rate);
        }
    }

    #[test]
    fn test_sort_recent_is_newest_first() {
        let jobs = jobs();
        let results = search_jobs(&jobs, &JobQuery::default());
        for pair in results.windows(2) {
            assert!(pair[0].posted_at >= pair[1].posted_at);
        }
    }

    #[test]
    fn test_sort_ties_keep_collection_order() {
        let jobs = jobs();
        let results = search_jobs(
            &jobs,
            &JobQuery {
                sort: JobSort::PayLowToHigh,
                ..Default::default()
            },
        );
        // Two demo jobs pay 15.0; the earlier one in the collection stays first.
        let fifteen: Vec<Uuid> = results
            .iter()
            .filter(|j| j.pay_rate == 15.0)
            .map(|j| j.id)
            .collect();
        let in_collection: Vec<Uuid> = jobs
            .iter()
            .filter(|j| j.pay_rate == 15.0)
            .map(|j| j.id)
            .collect();
        assert_eq!(fifteen.len(), 2);
        assert_eq!(fifteen, in_collection);

        let by_applicants = search_jobs(
            &jobs,
            &JobQuery {
                sort: JobSort::FewestApplicants,
                ..Default::default()
            },
        );
        let eights: Vec<Uuid> = by_applicants
            .iter()
            .filter(|j| j.applicant_count == 8)
            .map(|j| j.id)
            .collect();
        let eights_in_collection: Vec<Uuid> = jobs
            .iter()
            .filter(|j| j.applicant_count == 8)
            .map(|j| j.id)
            .collect();
        assert_eq!(eights, eights_in_collection);
    }

    #[test]
    fn test_toggle_saved_adds_then_removes() {
        let mut saved = SavedItems::default();
        let id = Uuid::new_v4();
        assert!(saved.toggle(id));
        assert!(saved.contains(id));
        assert_eq!(saved.len(), 1);
        assert!(!saved.toggle(id));
        assert!(!saved.contains(id));
        assert!(saved.is_empty());
    }

    #[test]
    fn test_job_query_deserializes_with_defaults() {
        let q: JobQuery = serde_json::from_str(r#"{"sort":"pay_low_to_high"}"#).unwrap();
        assert_eq!(q.sort, JobSort::PayLowToHigh);
        assert!(q.search.is_empty());
        assert!(q.category.is_none());
    }
}
