use diesel::{pg::Pg, prelude::*};
use serde::{Deserialize, Serialize};

use crate::db::schema;

/// Assignment columns of a case row.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = schema::legal_case)]
#[diesel(check_for_backend(Pg))]
pub struct CaseRow {
    pub id: uuid::Uuid,
    pub client_id: Option<uuid::Uuid>,
    pub assigned_partner_id: Option<uuid::Uuid>,
}

/// Snapshot of who is assigned to a case, as read at check time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseAssignment {
    pub case_id: uuid::Uuid,
    pub assigned_partner: Option<uuid::Uuid>,
    pub assigned_associates: Vec<uuid::Uuid>,
    pub client_id: Option<uuid::Uuid>,
}

impl CaseAssignment {
    /// Assemble a snapshot from the case row and its associate rows.
    #[must_use]
    pub fn from_rows(row: CaseRow, assigned_associates: Vec<uuid::Uuid>) -> Self {
        Self {
            case_id: row.id,
            assigned_partner: row.assigned_partner_id,
            assigned_associates,
            client_id: row.client_id,
        }
    }

    /// Returns `true` if `user_id` is the assigned partner or one of the assigned associates.
    #[must_use]
    pub fn is_assigned(&self, user_id: uuid::Uuid) -> bool {
        self.assigned_partner == Some(user_id) || self.assigned_associates.contains(&user_id)
    }
}

/// The single-user assignment field consulted by id-based case checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = schema::legal_case)]
#[diesel(check_for_backend(Pg))]
pub struct CaseAccessRow {
    #[diesel(column_name = id)]
    pub case_id: uuid::Uuid,
    #[diesel(column_name = assigned_to)]
    pub assigned_user_id: Option<uuid::Uuid>,
}

impl CaseAccessRow {
    #[must_use]
    pub fn is_assigned_to(&self, user_id: uuid::Uuid) -> bool {
        self.assigned_user_id == Some(user_id)
    }
}
