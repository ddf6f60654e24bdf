use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The fixed set of roles an identity can hold. Assigned once, never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Learner,
    Organization,
    Administrator,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Learner, Role::Organization, Role::Administrator];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Learner => "learner",
            Role::Organization => "organization",
            Role::Administrator => "administrator",
        }
    }

    /// Parses an untyped role tag. Unknown tags yield `None`.
    pub fn from_tag(tag: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|r| r.as_str() == tag)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub is_verified: bool,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Learners only.
    #[serde(default)]
    pub university: Option<String>,
    /// Organizations only.
    #[serde(default)]
    pub company_name: Option<String>,
    /// Precomputed overall performance score (0.0 – 5.0), learners only.
    #[serde(default)]
    pub performance_score: Option<f64>,
    pub created_at: DateTime<Utc>,
}

/// Partial update for an [`Identity`]. Present fields overwrite, absent fields are
/// left alone. `id`, `email` and `role` are deliberately not patchable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityPatch {
    pub name: Option<String>,
    pub is_verified: Option<bool>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub university: Option<String>,
    pub company_name: Option<String>,
}

impl IdentityPatch {
    pub fn apply_to(self, identity: &mut Identity) {
        if let Some(name) = self.name {
            identity.name = name;
        }
        if let Some(is_verified) = self.is_verified {
            identity.is_verified = is_verified;
        }
        if let Some(phone) = self.phone {
            identity.phone = Some(phone);
        }
        if let Some(location) = self.location {
            identity.location = Some(location);
        }
        if let Some(bio) = self.bio {
            identity.bio = Some(bio);
        }
        if let Some(avatar_url) = self.avatar_url {
            identity.avatar_url = Some(avatar_url);
        }
        if let Some(university) = self.university {
            identity.university = Some(university);
        }
        if let Some(company_name) = self.company_name {
            identity.company_name = Some(company_name);
        }
    }
}
