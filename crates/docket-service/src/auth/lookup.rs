//! Reads against the persistence layer that instance-level checks depend on.

use std::future::Future;
use std::sync::Arc;

use docket_db::db::DbProvider;
use docket_db::db::connection::DbPool;
use docket_db::db::query::{case, document};
use docket_db::model::case::{CaseAccessRow, CaseAssignment};
use docket_db::model::document::DocumentRecord;

use crate::error::ServiceResult;

/// Read-only access to case, client and document assignment data.
///
/// Implementations may fail; callers in this crate bound every call with a
/// timeout and turn any failure into a denial.
pub trait AssignmentLookup: Send + Sync {
    /// Partner, associates and client of a case, or `None` if it does not exist.
    fn case_assignment(
        &self,
        case_id: uuid::Uuid,
    ) -> impl Future<Output = ServiceResult<Option<CaseAssignment>>> + Send;

    /// Number of cases linking `user_id` to `client_id`.
    fn client_case_count(
        &self,
        client_id: uuid::Uuid,
        user_id: uuid::Uuid,
    ) -> impl Future<Output = ServiceResult<i64>> + Send;

    /// The single-assignee row of a case, or `None` if it does not exist.
    fn case_access_row(
        &self,
        case_id: uuid::Uuid,
    ) -> impl Future<Output = ServiceResult<Option<CaseAccessRow>>> + Send;

    /// Ownership fields of a document, or `None` if it does not exist.
    fn document(
        &self,
        document_id: uuid::Uuid,
    ) -> impl Future<Output = ServiceResult<Option<DocumentRecord>>> + Send;
}

impl AssignmentLookup for DbPool {
    async fn case_assignment(&self, case_id: uuid::Uuid) -> ServiceResult<Option<CaseAssignment>> {
        let mut conn = self.get_connection().await?;
        Ok(case::find_case_assignment(&mut conn, case_id).await?)
    }

    async fn client_case_count(
        &self,
        client_id: uuid::Uuid,
        user_id: uuid::Uuid,
    ) -> ServiceResult<i64> {
        let mut conn = self.get_connection().await?;
        Ok(case::count_client_cases_for_user(&mut conn, client_id, user_id).await?)
    }

    async fn case_access_row(&self, case_id: uuid::Uuid) -> ServiceResult<Option<CaseAccessRow>> {
        let mut conn = self.get_connection().await?;
        Ok(case::find_case_access_row(&mut conn, case_id).await?)
    }

    async fn document(&self, document_id: uuid::Uuid) -> ServiceResult<Option<DocumentRecord>> {
        let mut conn = self.get_connection().await?;
        Ok(document::find_document(&mut conn, document_id).await?)
    }
}

impl<L: AssignmentLookup> AssignmentLookup for Arc<L> {
    fn case_assignment(
        &self,
        case_id: uuid::Uuid,
    ) -> impl Future<Output = ServiceResult<Option<CaseAssignment>>> + Send {
        (**self).case_assignment(case_id)
    }

    fn client_case_count(
        &self,
        client_id: uuid::Uuid,
        user_id: uuid::Uuid,
    ) -> impl Future<Output = ServiceResult<i64>> + Send {
        (**self).client_case_count(client_id, user_id)
    }

    fn case_access_row(
        &self,
        case_id: uuid::Uuid,
    ) -> impl Future<Output = ServiceResult<Option<CaseAccessRow>>> + Send {
        (**self).case_access_row(case_id)
    }

    fn document(
        &self,
        document_id: uuid::Uuid,
    ) -> impl Future<Output = ServiceResult<Option<DocumentRecord>>> + Send {
        (**self).document(document_id)
    }
}
