//! Document ownership lookups.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::document;
use crate::model::document::DocumentRecord;

/// ## Summary
/// Loads the ownership fields of a document.
///
/// ## Errors
/// Returns a database error if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn find_document(
    conn: &mut DbConnection<'_>,
    document_id: uuid::Uuid,
) -> QueryResult<Option<DocumentRecord>> {
    document::table
        .find(document_id)
        .select(DocumentRecord::as_select())
        .first(conn)
        .await
        .optional()
}
