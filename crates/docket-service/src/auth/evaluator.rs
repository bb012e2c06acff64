//! Class-level checks: "can this role ever do X".

use std::collections::BTreeSet;
use std::sync::Arc;

use super::matrix::RolePermissionMatrix;
use super::permission::Permission;
use super::role::Role;

/// Membership and combinator checks over a [`RolePermissionMatrix`].
///
/// Every method is total: it answers `true` or `false` and never fails.
#[derive(Debug, Clone)]
pub struct PermissionEvaluator {
    matrix: Arc<RolePermissionMatrix>,
}

impl Default for PermissionEvaluator {
    fn default() -> Self {
        Self::new(RolePermissionMatrix::standard())
    }
}

impl PermissionEvaluator {
    #[must_use]
    pub fn new(matrix: Arc<RolePermissionMatrix>) -> Self {
        Self { matrix }
    }

    /// Returns `true` iff `role` holds `permission`.
    #[must_use]
    pub fn has_permission(&self, role: Role, permission: Permission) -> bool {
        self.matrix.contains(role, permission)
    }

    /// String entry point for roles and permissions arriving from outside the process.
    ///
    /// Names that are not in the catalog deny.
    #[must_use]
    pub fn has_permission_named(&self, role: &str, permission: &str) -> bool {
        match (role.parse::<Role>(), permission.parse::<Permission>()) {
            (Ok(role), Ok(permission)) => self.has_permission(role, permission),
            (role, permission) => {
                tracing::debug!(
                    role_known = role.is_ok(),
                    permission_known = permission.is_ok(),
                    "Unrecognised role or permission name, denying"
                );
                false
            }
        }
    }

    /// Returns `true` if `role` holds at least one of `permissions`.
    ///
    /// An empty slice denies.
    #[must_use]
    pub fn has_any_permission(&self, role: Role, permissions: &[Permission]) -> bool {
        permissions.iter().any(|p| self.has_permission(role, *p))
    }

    /// Returns `true` if `role` holds every one of `permissions`.
    ///
    /// An empty slice requires nothing and passes.
    #[must_use]
    pub fn has_all_permissions(&self, role: Role, permissions: &[Permission]) -> bool {
        permissions.iter().all(|p| self.has_permission(role, *p))
    }

    /// Returns a copy of the permissions held by `role`.
    #[must_use]
    pub fn role_permissions(&self, role: Role) -> BTreeSet<Permission> {
        self.matrix.permissions(role)
    }

    #[must_use]
    pub fn matrix(&self) -> &RolePermissionMatrix {
        &self.matrix
    }
}
