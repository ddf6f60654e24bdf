use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use super::Dataset;
use crate::models::{
    Application, ApplicationStatus, Identity, Job, JobStatus, PremiumFeature, Role,
};

/// Days from the Unix epoch to 2024-01-01.
const SEED_EPOCH_DAYS: i64 = 19_723;

pub const LEARNER_ID: Uuid = Uuid::from_u128(0x0001);
pub const SECOND_LEARNER_ID: Uuid = Uuid::from_u128(0x0002);
pub const EMPLOYER_ID: Uuid = Uuid::from_u128(0x0101);
pub const SECOND_EMPLOYER_ID: Uuid = Uuid::from_u128(0x0102);
pub const ADMIN_ID: Uuid = Uuid::from_u128(0x0201);
/// Shares its email with [`SECOND_LEARNER_ID`] under a different role.
pub const DUAL_ROLE_EMPLOYER_ID: Uuid = Uuid::from_u128(0x0103);

fn seed_day(offset: i64) -> DateTime<Utc> {
    DateTime::UNIX_EPOCH + Duration::days(SEED_EPOCH_DAYS + offset)
}

fn job_id(n: u128) -> Uuid {
    Uuid::from_u128(0x1000 + n)
}

fn application_id(n: u128) -> Uuid {
    Uuid::from_u128(0x2000 + n)
}

fn feature_id(n: u128) -> Uuid {
    Uuid::from_u128(0x3000 + n)
}

pub fn demo_dataset() -> Dataset {
    Dataset {
        identities: identities(),
        jobs: jobs(),
        applications: applications(),
        premium_features: premium_features(),
    }
}

fn identities() -> Vec<Identity> {
    vec![
        Identity {
            id: LEARNER_ID,
            email: "student@ogera.com".to_string(),
            name: "Amara Okafor".to_string(),
            role: Role::Learner,
            is_verified: true,
            phone: Some("+234 801 000 0001".to_string()),
            location: Some("Lagos".to_string()),
            bio: Some("Computer science undergraduate looking for part-time work.".to_string()),
            avatar_url: None,
            university: Some("University of Lagos".to_string()),
            company_name: None,
            performance_score: Some(4.2),
            created_at: seed_day(0),
        },
        Identity {
            id: SECOND_LEARNER_ID,
            email: "alex@ogera.com".to_string(),
            name: "Alex Mensah".to_string(),
            role: Role::Learner,
            is_verified: false,
            phone: None,
            location: Some("Accra".to_string()),
            bio: None,
            avatar_url: None,
            university: Some("University of Ghana".to_string()),
            company_name: None,
            performance_score: Some(3.9),
            created_at: seed_day(12),
        },
        Identity {
            id: EMPLOYER_ID,
            email: "employer@ogera.com".to_string(),
            name: "Daniel Reyes".to_string(),
            role: Role::Organization,
            is_verified: true,
            phone: Some("+1 415 555 0101".to_string()),
            location: Some("Remote".to_string()),
            bio: Some("Hiring student talent for product and engineering roles.".to_string()),
            avatar_url: None,
            university: None,
            company_name: Some("TechCorp Solutions".to_string()),
            performance_score: None,
            created_at: seed_day(3),
        },
        Identity {
            id: SECOND_EMPLOYER_ID,
            email: "hiring@brightmedia.com".to_string(),
            name: "Priya Nair".to_string(),
            role: Role::Organization,
            is_verified: true,
            phone: None,
            location: Some("Nairobi".to_string()),
            bio: None,
            avatar_url: None,
            university: None,
            company_name: Some("BrightMedia".to_string()),
            performance_score: None,
            created_at: seed_day(20),
        },
        Identity {
            id: DUAL_ROLE_EMPLOYER_ID,
            email: "alex@ogera.com".to_string(),
            name: "Alex Mensah".to_string(),
            role: Role::Organization,
            is_verified: false,
            phone: None,
            location: Some("Accra".to_string()),
            bio: None,
            avatar_url: None,
            university: None,
            company_name: Some("Mensah Tutoring".to_string()),
            performance_score: None,
            created_at: seed_day(40),
        },
        Identity {
            id: ADMIN_ID,
            email: "admin@ogera.com".to_string(),
            name: "Platform Admin".to_string(),
            role: Role::Administrator,
            is_verified: true,
            phone: None,
            location: None,
            bio: None,
            avatar_url: None,
            university: None,
            company_name: None,
            performance_score: None,
            created_at: seed_day(0),
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn job(
    n: u128,
    title: &str,
    company: &str,
    employer_id: Uuid,
    description: &str,
    category: &str,
    location: &str,
    pay_rate: f64,
    posted_day: i64,
    applicant_count: u32,
    skills: &[&str],
    status: JobStatus,
) -> Job {
    Job {
        id: job_id(n),
        title: title.to_string(),
        company: company.to_string(),
        employer_id,
        description: description.to_string(),
        category: category.to_string(),
        location: location.to_string(),
        pay_rate,
        posted_at: seed_day(posted_day),
        applicant_count,
        skills: skills.iter().map(|s| s.to_string()).collect(),
        status,
    }
}

fn jobs() -> Vec<Job> {
    vec![
        job(
            1,
            "Frontend Developer Intern",
            "TechCorp Solutions",
            EMPLOYER_ID,
            "Build and polish React components for our customer dashboard.",
            "Technology",
            "Remote",
            25.0,
            60,
            12,
            &["react", "typescript", "css"],
            JobStatus::Open,
        ),
        job(
            2,
            "Social Media Assistant",
            "BrightMedia",
            SECOND_EMPLOYER_ID,
            "Plan and schedule posts, track engagement across channels.",
            "Marketing",
            "Nairobi",
            15.0,
            64,
            30,
            &["copywriting", "analytics"],
            JobStatus::Open,
        ),
        job(
            3,
            "Data Entry Specialist",
            "TechCorp Solutions",
            EMPLOYER_ID,
            "Clean and enter survey results into our reporting spreadsheets.",
            "Data",
            "Remote",
            15.0,
            58,
            8,
            &["excel", "attention to detail"],
            JobStatus::Open,
        ),
        job(
            4,
            "UI Design Contributor",
            "BrightMedia",
            SECOND_EMPLOYER_ID,
            "Produce mockups for a campaign landing page in Figma.",
            "Design",
            "Hybrid",
            22.5,
            66,
            5,
            &["figma", "ui design"],
            JobStatus::Open,
        ),
        job(
            5,
            "Backend API Tester",
            "TechCorp Solutions",
            EMPLOYER_ID,
            "Write integration tests for REST endpoints and report regressions.",
            "Technology",
            "Remote",
            30.0,
            40,
            19,
            &["api testing", "postman"],
            JobStatus::Closed,
        ),
        job(
            6,
            "Math Tutor",
            "Mensah Tutoring",
            DUAL_ROLE_EMPLOYER_ID,
            "Tutor secondary school students in algebra twice a week.",
            "Education",
            "Accra",
            18.0,
            67,
            2,
            &["mathematics", "teaching"],
            JobStatus::PendingReview,
        ),
        job(
            7,
            "Technical Blog Writer",
            "TechCorp Solutions",
            EMPLOYER_ID,
            "Write monthly articles about our engineering practices.",
            "Writing",
            "Remote",
            20.0,
            62,
            8,
            &["writing", "markdown"],
            JobStatus::Open,
        ),
    ]
}

fn applications() -> Vec<Application> {
    vec![
        Application {
            id: application_id(1),
            job_id: job_id(1),
            learner_id: LEARNER_ID,
            status: ApplicationStatus::Reviewed,
            applied_at: seed_day(61),
            cover_note: Some("I have shipped two React side projects.".to_string()),
        },
        Application {
            id: application_id(2),
            job_id: job_id(3),
            learner_id: LEARNER_ID,
            status: ApplicationStatus::Pending,
            applied_at: seed_day(63),
            cover_note: None,
        },
        Application {
            id: application_id(3),
            job_id: job_id(5),
            learner_id: LEARNER_ID,
            status: ApplicationStatus::Accepted,
            applied_at: seed_day(42),
            cover_note: None,
        },
        Application {
            id: application_id(4),
            job_id: job_id(2),
            learner_id: SECOND_LEARNER_ID,
            status: ApplicationStatus::Rejected,
            applied_at: seed_day(65),
            cover_note: None,
        },
        Application {
            id: application_id(5),
            job_id: job_id(1),
            learner_id: SECOND_LEARNER_ID,
            status: ApplicationStatus::Pending,
            applied_at: seed_day(66),
            cover_note: Some("Keen to learn frontend work.".to_string()),
        },
        Application {
            id: application_id(6),
            job_id: job_id(7),
            learner_id: SECOND_LEARNER_ID,
            status: ApplicationStatus::Pending,
            applied_at: seed_day(67),
            cover_note: None,
        },
    ]
}

fn premium_features() -> Vec<PremiumFeature> {
    vec![
        PremiumFeature {
            id: feature_id(1),
            name: "Priority Applications".to_string(),
            description: "Your applications are shown first to employers.".to_string(),
            required_score: 3.5,
        },
        PremiumFeature {
            id: feature_id(2),
            name: "Verified Badge".to_string(),
            description: "A performance badge displayed on your public profile.".to_string(),
            required_score: 4.0,
        },
        PremiumFeature {
            id: feature_id(3),
            name: "Early Job Access".to_string(),
            description: "See new postings 24 hours before other learners.".to_string(),
            required_score: 4.5,
        },
        PremiumFeature {
            id: feature_id(4),
            name: "Career Coaching".to_string(),
            description: "A monthly session with a career mentor.".to_string(),
            required_score: 4.8,
        },
    ]
}
