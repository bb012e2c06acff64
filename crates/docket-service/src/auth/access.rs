//! Instance-level checks: "may this user touch this specific record".
//!
//! Snapshot checks ([`can_access_case`], `can_access_document`) are pure
//! functions of their inputs. Lookup-backed checks read through an
//! [`AssignmentLookup`], bounded by a timeout; a missing row, a failed read
//! or an elapsed timeout all deny. Failures are logged once here and never
//! retried or propagated.

use std::future::Future;
use std::time::Duration;

use docket_core::config::AuthorizationConfig;
use docket_db::model::case::CaseAssignment;
use docket_db::model::document::DocumentRecord;

use crate::error::{ServiceError, ServiceResult};

use super::evaluator::PermissionEvaluator;
use super::lookup::AssignmentLookup;
use super::permission::Permission;
use super::role::Role;

/// Resource-scoped access rules for cases, documents and clients.
#[derive(Debug, Clone)]
pub struct ResourceAccessEvaluator<L> {
    permissions: PermissionEvaluator,
    lookup: L,
    lookup_timeout: Duration,
}

impl<L: AssignmentLookup> ResourceAccessEvaluator<L> {
    /// Create an evaluator over the standard permission matrix.
    #[must_use]
    pub fn new(lookup: L, lookup_timeout: Duration) -> Self {
        Self::with_permissions(PermissionEvaluator::default(), lookup, lookup_timeout)
    }

    /// Create an evaluator with the configured lookup timeout.
    ///
    /// ## Errors
    ///
    /// Returns `CoreError` if the configuration is unusable.
    pub fn from_config(lookup: L, config: &AuthorizationConfig) -> ServiceResult<Self> {
        config.validate()?;
        Ok(Self::new(lookup, config.lookup_timeout()))
    }

    #[must_use]
    pub fn with_permissions(
        permissions: PermissionEvaluator,
        lookup: L,
        lookup_timeout: Duration,
    ) -> Self {
        Self {
            permissions,
            lookup,
            lookup_timeout,
        }
    }

    #[must_use]
    pub const fn lookup_timeout(&self) -> Duration {
        self.lookup_timeout
    }

    /// Whether `role` may access the given document.
    ///
    /// Partners are blocked from confidential documents; super-admins are
    /// not. Every other role falls back to the class-level `document:read`
    /// capability and ignores who uploaded the document.
    #[must_use]
    pub fn can_access_document(
        &self,
        role: Role,
        user_id: uuid::Uuid,
        document: &DocumentRecord,
    ) -> bool {
        let allowed = match role {
            Role::SuperAdmin => true,
            Role::Partner => !document.confidential,
            Role::SeniorAssociate
            | Role::Associate
            | Role::JuniorAssociate
            | Role::Paralegal
            | Role::Client
            | Role::Guest => self.permissions.has_permission(role, Permission::DocumentRead),
        };

        tracing::debug!(
            %role,
            %user_id,
            document_id = %document.id,
            confidential = document.confidential,
            allowed,
            "Document access check"
        );
        allowed
    }

    /// Whether `user_id` is linked to `client_id` through at least one case.
    ///
    /// Super-admins and partners bypass the lookup.
    #[tracing::instrument(skip(self))]
    pub async fn has_client_access(
        &self,
        role: Role,
        user_id: uuid::Uuid,
        client_id: uuid::Uuid,
    ) -> bool {
        if bypasses_lookup(role) {
            return true;
        }

        self.bounded(
            "client_access",
            self.lookup.client_case_count(client_id, user_id),
        )
        .await
        .is_some_and(|count| count > 0)
    }

    /// Whether `user_id` is the assignee recorded on the case row.
    ///
    /// Super-admins and partners bypass the lookup.
    #[tracing::instrument(skip(self))]
    pub async fn has_case_access(
        &self,
        role: Role,
        user_id: uuid::Uuid,
        case_id: uuid::Uuid,
    ) -> bool {
        if bypasses_lookup(role) {
            return true;
        }

        self.bounded("case_access", self.lookup.case_access_row(case_id))
            .await
            .flatten()
            .is_some_and(|row| row.is_assigned_to(user_id))
    }

    /// Loads the case assignment and applies [`can_access_case`].
    ///
    /// A case that cannot be loaded denies, for every role.
    #[tracing::instrument(skip(self))]
    pub async fn can_access_case_by_id(
        &self,
        role: Role,
        user_id: uuid::Uuid,
        case_id: uuid::Uuid,
    ) -> bool {
        self.bounded("case_assignment", self.lookup.case_assignment(case_id))
            .await
            .flatten()
            .is_some_and(|case| can_access_case(role, user_id, &case))
    }

    /// Loads the document and applies [`Self::can_access_document`].
    ///
    /// A document that cannot be loaded denies, for every role.
    #[tracing::instrument(skip(self))]
    pub async fn can_access_document_by_id(
        &self,
        role: Role,
        user_id: uuid::Uuid,
        document_id: uuid::Uuid,
    ) -> bool {
        self.bounded("document", self.lookup.document(document_id))
            .await
            .flatten()
            .is_some_and(|document| self.can_access_document(role, user_id, &document))
    }

    /// Runs a lookup under the configured timeout, logging and discarding any failure.
    async fn bounded<T, F>(&self, check: &'static str, lookup: F) -> Option<T>
    where
        F: Future<Output = ServiceResult<T>>,
    {
        let outcome = match tokio::time::timeout(self.lookup_timeout, lookup).await {
            Ok(result) => result,
            Err(_elapsed) => Err(ServiceError::LookupTimeout(self.lookup_timeout)),
        };

        match outcome {
            Ok(value) => Some(value),
            Err(error) => {
                tracing::warn!(check, error = %error, "Access lookup failed, denying");
                None
            }
        }
    }
}

/// Whether `user_id` acting as `role` may access the given case.
///
/// - super-admin, partner: always.
/// - senior-associate, junior-associate, paralegal: only when assigned as
///   partner or associate on the case.
/// - associate, client, guest: never.
#[must_use]
pub fn can_access_case(role: Role, user_id: uuid::Uuid, case: &CaseAssignment) -> bool {
    let allowed = match role {
        Role::SuperAdmin | Role::Partner => true,
        Role::SeniorAssociate | Role::JuniorAssociate | Role::Paralegal => {
            case.is_assigned(user_id)
        }
        // Clients hold case:read yet are denied here; left as-is pending a product decision.
        Role::Associate | Role::Client | Role::Guest => false,
    };

    tracing::debug!(%role, %user_id, case_id = %case.case_id, allowed, "Case access check");
    allowed
}

/// Roles whose access to clients and cases is not scoped by assignment.
const fn bypasses_lookup(role: Role) -> bool {
    match role {
        Role::SuperAdmin | Role::Partner => true,
        Role::SeniorAssociate
        | Role::Associate
        | Role::JuniorAssociate
        | Role::Paralegal
        | Role::Client
        | Role::Guest => false,
    }
}
