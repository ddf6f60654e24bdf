pub mod application;
pub mod identity;
pub mod job;
pub mod premium;

pub use application::{Application, ApplicationStatus};
pub use identity::{Identity, IdentityPatch, Role};
pub use job::{Job, JobStatus};
pub use premium::PremiumFeature;
