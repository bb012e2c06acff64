//! Case assignment lookups.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::{case_associate, legal_case};
use crate::model::case::{CaseAccessRow, CaseAssignment, CaseRow};

/// ## Summary
/// Loads the assignment snapshot for a case: partner, associates and client.
///
/// Soft-deleted cases are treated as missing.
///
/// ## Errors
/// Returns a database error if either query fails.
#[tracing::instrument(skip(conn))]
pub async fn find_case_assignment(
    conn: &mut DbConnection<'_>,
    case_id: uuid::Uuid,
) -> QueryResult<Option<CaseAssignment>> {
    let Some(row) = legal_case::table
        .find(case_id)
        .filter(legal_case::deleted_at.is_null())
        .select(CaseRow::as_select())
        .first::<CaseRow>(conn)
        .await
        .optional()?
    else {
        return Ok(None);
    };

    let associates = case_associate::table
        .filter(case_associate::case_id.eq(case_id))
        .select(case_associate::user_id)
        .order(case_associate::user_id)
        .load::<uuid::Uuid>(conn)
        .await?;

    Ok(Some(CaseAssignment::from_rows(row, associates)))
}

/// ## Summary
/// Counts live cases for `client_id` that `user_id` is assigned to in any capacity
/// (partner, primary assignee or associate).
///
/// ## Errors
/// Returns a database error if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn count_client_cases_for_user(
    conn: &mut DbConnection<'_>,
    client_id: uuid::Uuid,
    user_id: uuid::Uuid,
) -> QueryResult<i64> {
    let associated_cases = case_associate::table
        .filter(case_associate::user_id.eq(user_id))
        .select(case_associate::case_id);

    legal_case::table
        .filter(legal_case::client_id.eq(client_id))
        .filter(legal_case::deleted_at.is_null())
        .filter(
            legal_case::assigned_partner_id
                .eq(user_id)
                .or(legal_case::assigned_to.eq(user_id))
                .or(legal_case::id.eq_any(associated_cases).nullable()),
        )
        .count()
        .get_result(conn)
        .await
}

/// ## Summary
/// Loads the single-assignee row for a case.
///
/// ## Errors
/// Returns a database error if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn find_case_access_row(
    conn: &mut DbConnection<'_>,
    case_id: uuid::Uuid,
) -> QueryResult<Option<CaseAccessRow>> {
    legal_case::table
        .find(case_id)
        .filter(legal_case::deleted_at.is_null())
        .select(CaseAccessRow::as_select())
        .first(conn)
        .await
        .optional()
}
