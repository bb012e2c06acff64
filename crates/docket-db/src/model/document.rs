use diesel::{pg::Pg, prelude::*};
use serde::{Deserialize, Serialize};

use crate::db::schema;

/// Ownership fields of a stored document.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Queryable, Selectable, Serialize, Deserialize,
)]
#[diesel(table_name = schema::document)]
#[diesel(check_for_backend(Pg))]
pub struct DocumentRecord {
    pub id: uuid::Uuid,
    pub case_id: Option<uuid::Uuid>,
    pub uploaded_by: Option<uuid::Uuid>,
    #[diesel(column_name = is_confidential)]
    pub confidential: bool,
}
