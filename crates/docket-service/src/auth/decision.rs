//! Access decisions and the combined class/instance authorization API.
//!
//! Handlers for single-record operations ask two questions and need both to
//! pass: does the role hold the capability at all, and may this user touch
//! this record. [`AccessControl`] answers them together and skips the
//! instance check (and any lookup) when the class check already fails.

use docket_core::config::AuthorizationConfig;
use docket_db::model::case::CaseAssignment;
use docket_db::model::document::DocumentRecord;

use crate::error::{ServiceError, ServiceResult};

use super::access::{ResourceAccessEvaluator, can_access_case};
use super::evaluator::PermissionEvaluator;
use super::lookup::AssignmentLookup;
use super::permission::Permission;
use super::requester::Requester;

/// Result of an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// Access is allowed.
    Allowed,
    /// Access is denied.
    Denied,
}

impl AccessDecision {
    /// Returns `true` if access is allowed.
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Logical AND of two decisions.
    #[must_use]
    pub const fn and(self, other: Self) -> Self {
        if self.is_allowed() && other.is_allowed() {
            Self::Allowed
        } else {
            Self::Denied
        }
    }

    /// Convert to a `Result`, returning `Err(ServiceError::Forbidden)` if denied.
    ///
    /// The error carries no reason for the denial.
    ///
    /// ## Errors
    ///
    /// Returns `Forbidden` if access is denied.
    pub fn require(self) -> ServiceResult<()> {
        match self {
            Self::Allowed => Ok(()),
            Self::Denied => Err(ServiceError::Forbidden),
        }
    }
}

impl From<bool> for AccessDecision {
    fn from(allowed: bool) -> Self {
        if allowed { Self::Allowed } else { Self::Denied }
    }
}

/// Authorization entry point for route handlers.
///
/// ## Usage
///
/// ```ignore
/// let access = AccessControl::new(pool, &settings.authorization)?;
/// access
///     .authorize_case_id(&requester, Permission::CaseUpdate, case_id)
///     .await
///     .require()?;
/// ```
#[derive(Debug)]
pub struct AccessControl<L> {
    permissions: PermissionEvaluator,
    resources: ResourceAccessEvaluator<L>,
}

impl<L: AssignmentLookup> AccessControl<L> {
    /// Create an access control over the standard matrix.
    ///
    /// ## Errors
    ///
    /// Returns `CoreError` if the configuration is unusable.
    pub fn new(lookup: L, config: &AuthorizationConfig) -> ServiceResult<Self> {
        config.validate()?;
        let permissions = PermissionEvaluator::default();
        let resources = ResourceAccessEvaluator::with_permissions(
            permissions.clone(),
            lookup,
            config.lookup_timeout(),
        );
        Ok(Self {
            permissions,
            resources,
        })
    }

    #[must_use]
    pub const fn permissions(&self) -> &PermissionEvaluator {
        &self.permissions
    }

    #[must_use]
    pub const fn resources(&self) -> &ResourceAccessEvaluator<L> {
        &self.resources
    }

    /// Class-level check only.
    #[must_use]
    pub fn check_permission(&self, requester: &Requester, permission: Permission) -> AccessDecision {
        self.permissions
            .has_permission(requester.role, permission)
            .into()
    }

    /// Class-level check, as a `Result`.
    ///
    /// ## Errors
    ///
    /// Returns `Forbidden` if the role lacks `permission`.
    pub fn require_permission(
        &self,
        requester: &Requester,
        permission: Permission,
    ) -> ServiceResult<()> {
        self.check_permission(requester, permission).require()
    }

    /// `permission` AND case-scoped access on a case snapshot.
    #[must_use]
    pub fn authorize_case(
        &self,
        requester: &Requester,
        permission: Permission,
        case: &CaseAssignment,
    ) -> AccessDecision {
        self.check_permission(requester, permission)
            .and(can_access_case(requester.role, requester.user_id, case).into())
    }

    /// `permission` AND the case-row assignee check for `case_id`.
    pub async fn authorize_case_id(
        &self,
        requester: &Requester,
        permission: Permission,
        case_id: uuid::Uuid,
    ) -> AccessDecision {
        if !self.check_permission(requester, permission).is_allowed() {
            return AccessDecision::Denied;
        }
        self.resources
            .has_case_access(requester.role, requester.user_id, case_id)
            .await
            .into()
    }

    /// `permission` AND document access on a document snapshot.
    #[must_use]
    pub fn authorize_document(
        &self,
        requester: &Requester,
        permission: Permission,
        document: &DocumentRecord,
    ) -> AccessDecision {
        self.check_permission(requester, permission).and(
            self.resources
                .can_access_document(requester.role, requester.user_id, document)
                .into(),
        )
    }

    /// `permission` AND document access for `document_id`.
    pub async fn authorize_document_id(
        &self,
        requester: &Requester,
        permission: Permission,
        document_id: uuid::Uuid,
    ) -> AccessDecision {
        if !self.check_permission(requester, permission).is_allowed() {
            return AccessDecision::Denied;
        }
        self.resources
            .can_access_document_by_id(requester.role, requester.user_id, document_id)
            .await
            .into()
    }

    /// `permission` AND client linkage for `client_id`.
    pub async fn authorize_client(
        &self,
        requester: &Requester,
        permission: Permission,
        client_id: uuid::Uuid,
    ) -> AccessDecision {
        if !self.check_permission(requester, permission).is_allowed() {
            return AccessDecision::Denied;
        }
        self.resources
            .has_client_access(requester.role, requester.user_id, client_id)
            .await
            .into()
    }
}
