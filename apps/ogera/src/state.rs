use std::sync::Arc;

use tokio::sync::Mutex;

use crate::dataset::Dataset;
use crate::screens::PlatformSettings;
use crate::session::{IdentityDirectory, SessionStore};
use crate::shell::Shell;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<SessionStore>,
    /// Tab selection and mounted-screen state. Lock after reading the session.
    pub shell: Arc<Mutex<Shell>>,
    pub dataset: Arc<Dataset>,
    pub directory: Arc<IdentityDirectory>,
    pub settings: Arc<PlatformSettings>,
}
