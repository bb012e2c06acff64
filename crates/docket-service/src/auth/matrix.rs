//! The role → permission matrix.
//!
//! The matrix is built once per process and never mutated. Readers get
//! membership answers or owned copies of a role's set, never a handle to the
//! backing storage.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::{Arc, LazyLock};

use super::permission::Permission;
use super::role::Role;

static STANDARD: LazyLock<Arc<RolePermissionMatrix>> = LazyLock::new(|| {
    let matrix = RolePermissionMatrix::build(standard_grants);
    tracing::info!(
        role_count = matrix.entries.len(),
        grant_count = matrix.grant_count(),
        "Role permission matrix built"
    );
    Arc::new(matrix)
});

/// Immutable mapping from every role to its capability set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolePermissionMatrix {
    entries: HashMap<Role, HashSet<Permission>>,
}

impl RolePermissionMatrix {
    /// Returns the process-wide standard matrix.
    #[must_use]
    pub fn standard() -> Arc<Self> {
        Arc::clone(&STANDARD)
    }

    /// Build a matrix by asking `grants` for every role in the catalog.
    ///
    /// The result always has exactly one entry per role, possibly empty.
    #[must_use]
    pub fn build<F, I>(grants: F) -> Self
    where
        F: Fn(Role) -> I,
        I: IntoIterator<Item = Permission>,
    {
        let entries = Role::ALL
            .into_iter()
            .map(|role| (role, grants(role).into_iter().collect()))
            .collect();
        Self { entries }
    }

    /// Returns `true` if `role` holds `permission`.
    #[must_use]
    pub fn contains(&self, role: Role, permission: Permission) -> bool {
        self.entries
            .get(&role)
            .is_some_and(|granted| granted.contains(&permission))
    }

    /// Returns an owned copy of the permissions held by `role`.
    #[must_use]
    pub fn permissions(&self, role: Role) -> BTreeSet<Permission> {
        self.entries
            .get(&role)
            .map(|granted| granted.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Returns every role holding `permission`.
    #[must_use]
    pub fn roles_with(&self, permission: Permission) -> BTreeSet<Role> {
        self.entries
            .iter()
            .filter(|(_, granted)| granted.contains(&permission))
            .map(|(role, _)| *role)
            .collect()
    }

    /// Number of roles with an entry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of (role, permission) grants.
    #[must_use]
    pub fn grant_count(&self) -> usize {
        self.entries.values().map(HashSet::len).sum()
    }
}

/// The firm's standard grants.
///
/// Matches on every role without a wildcard arm so a new role cannot be
/// added without deciding its grants.
#[must_use]
pub fn standard_grants(role: Role) -> Vec<Permission> {
    use Permission as P;

    match role {
        Role::SuperAdmin => P::ALL.to_vec(),
        Role::Partner => P::ALL
            .into_iter()
            .filter(|p| !matches!(p, P::UserDelete | P::SettingsManage))
            .collect(),
        Role::SeniorAssociate => vec![
            P::CaseCreate,
            P::CaseRead,
            P::CaseUpdate,
            P::CaseAssign,
            P::ClientCreate,
            P::ClientRead,
            P::ClientUpdate,
            P::DocumentCreate,
            P::DocumentRead,
            P::DocumentUpdate,
            P::DocumentDelete,
            P::TaskCreate,
            P::TaskRead,
            P::TaskUpdate,
            P::TaskDelete,
            P::TaskAssign,
            P::InvoiceCreate,
            P::InvoiceRead,
            P::InvoiceUpdate,
            P::TimeEntryCreate,
            P::TimeEntryRead,
            P::TimeEntryUpdate,
            P::TimeEntryApprove,
            P::ReportRead,
            P::ContentCreate,
            P::ContentRead,
            P::ContentUpdate,
            P::UserRead,
            P::RoleAssign,
        ],
        Role::Associate => vec![
            P::CaseCreate,
            P::CaseRead,
            P::CaseUpdate,
            P::ClientRead,
            P::ClientUpdate,
            P::DocumentCreate,
            P::DocumentRead,
            P::DocumentUpdate,
            P::TaskCreate,
            P::TaskRead,
            P::TaskUpdate,
            P::TaskAssign,
            P::InvoiceRead,
            P::TimeEntryCreate,
            P::TimeEntryRead,
            P::TimeEntryUpdate,
            P::ContentCreate,
            P::ContentRead,
            P::ContentUpdate,
            P::UserRead,
        ],
        Role::JuniorAssociate => vec![
            P::CaseRead,
            P::CaseUpdate,
            P::ClientRead,
            P::DocumentCreate,
            P::DocumentRead,
            P::DocumentUpdate,
            P::TaskCreate,
            P::TaskRead,
            P::TaskUpdate,
            P::TimeEntryCreate,
            P::TimeEntryRead,
            P::TimeEntryUpdate,
            P::ContentRead,
        ],
        Role::Paralegal => vec![
            P::CaseRead,
            P::ClientRead,
            P::DocumentCreate,
            P::DocumentRead,
            P::DocumentUpdate,
            P::TaskRead,
            P::TaskUpdate,
            P::TimeEntryCreate,
            P::TimeEntryRead,
            P::ContentRead,
        ],
        // Clients hold case:read here even though case-scoped access denies them.
        Role::Client => vec![
            P::CaseRead,
            P::DocumentRead,
            P::InvoiceRead,
            P::PaymentProcess,
            P::ContentRead,
        ],
        Role::Guest => vec![P::ContentRead],
    }
}
