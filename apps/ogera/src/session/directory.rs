use uuid::Uuid;

use crate::models::{Identity, Role};

/// Read-only lookup of the identities mock login can resolve to.
#[derive(Debug, Clone, Default)]
pub struct IdentityDirectory {
    identities: Vec<Identity>,
}

impl IdentityDirectory {
    pub fn new(identities: Vec<Identity>) -> Self {
        Self { identities }
    }

    /// Linear scan for an entry matching both email and role.
    /// Email comparison ignores case and surrounding whitespace.
    pub fn find(&self, email: &str, role: Role) -> Option<&Identity> {
        let needle = email.trim().to_lowercase();
        self.identities
            .iter()
            .find(|i| i.role == role && i.email.to_lowercase() == needle)
    }

    pub fn by_id(&self, id: Uuid) -> Option<&Identity> {
        self.identities.iter().find(|i| i.id == id)
    }

    pub fn by_role(&self, role: Role) -> impl Iterator<Item = &Identity> {
        self.identities.iter().filter(move |i| i.role == role)
    }

    pub fn all(&self) -> &[Identity] {
        &self.identities
    }

    pub fn len(&self) -> usize {
        self.identities.len()
    }
}
