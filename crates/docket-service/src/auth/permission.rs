//! Atomic capabilities, one per (resource kind, action) pair.
//!
//! Each permission has exactly one textual form, `resource:action`
//! (e.g. `case:delete`). Older spellings such as `delete_case` or
//! `DELETE_CASE` are not recognised.

use serde::{Deserialize, Serialize};

use crate::error::ServiceError;

/// The kind of record a permission applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    Case,
    Client,
    Document,
    Task,
    Invoice,
    TimeEntry,
    Payment,
    Report,
    Content,
    User,
    Role,
    Settings,
    AuditLog,
}

impl ResourceKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Case => "case",
            Self::Client => "client",
            Self::Document => "document",
            Self::Task => "task",
            Self::Invoice => "invoice",
            Self::TimeEntry => "time-entry",
            Self::Payment => "payment",
            Self::Report => "report",
            Self::Content => "content",
            Self::User => "user",
            Self::Role => "role",
            Self::Settings => "settings",
            Self::AuditLog => "audit-log",
        }
    }
}

/// The operation a permission allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
    Assign,
    Send,
    Approve,
    Process,
    Refund,
    Generate,
    Publish,
    Manage,
}

impl Action {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Assign => "assign",
            Self::Send => "send",
            Self::Approve => "approve",
            Self::Process => "process",
            Self::Refund => "refund",
            Self::Generate => "generate",
            Self::Publish => "publish",
            Self::Manage => "manage",
        }
    }
}

/// A capability that a role may hold, independent of any specific record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum Permission {
    CaseCreate,
    CaseRead,
    CaseUpdate,
    CaseDelete,
    CaseAssign,

    ClientCreate,
    ClientRead,
    ClientUpdate,
    ClientDelete,

    DocumentCreate,
    DocumentRead,
    DocumentUpdate,
    DocumentDelete,

    TaskCreate,
    TaskRead,
    TaskUpdate,
    TaskDelete,
    TaskAssign,

    InvoiceCreate,
    InvoiceRead,
    InvoiceUpdate,
    InvoiceDelete,
    InvoiceSend,

    TimeEntryCreate,
    TimeEntryRead,
    TimeEntryUpdate,
    TimeEntryDelete,
    TimeEntryApprove,

    PaymentRead,
    PaymentProcess,
    PaymentRefund,

    ReportRead,
    ReportGenerate,

    ContentCreate,
    ContentRead,
    ContentUpdate,
    ContentDelete,
    ContentPublish,

    UserCreate,
    UserRead,
    UserUpdate,
    UserDelete,

    RoleAssign,

    SettingsManage,

    AuditLogRead,
}

impl Permission {
    /// Every permission in the catalog, grouped by resource kind.
    pub const ALL: [Self; 45] = [
        Self::CaseCreate,
        Self::CaseRead,
        Self::CaseUpdate,
        Self::CaseDelete,
        Self::CaseAssign,
        Self::ClientCreate,
        Self::ClientRead,
        Self::ClientUpdate,
        Self::ClientDelete,
        Self::DocumentCreate,
        Self::DocumentRead,
        Self::DocumentUpdate,
        Self::DocumentDelete,
        Self::TaskCreate,
        Self::TaskRead,
        Self::TaskUpdate,
        Self::TaskDelete,
        Self::TaskAssign,
        Self::InvoiceCreate,
        Self::InvoiceRead,
        Self::InvoiceUpdate,
        Self::InvoiceDelete,
        Self::InvoiceSend,
        Self::TimeEntryCreate,
        Self::TimeEntryRead,
        Self::TimeEntryUpdate,
        Self::TimeEntryDelete,
        Self::TimeEntryApprove,
        Self::PaymentRead,
        Self::PaymentProcess,
        Self::PaymentRefund,
        Self::ReportRead,
        Self::ReportGenerate,
        Self::ContentCreate,
        Self::ContentRead,
        Self::ContentUpdate,
        Self::ContentDelete,
        Self::ContentPublish,
        Self::UserCreate,
        Self::UserRead,
        Self::UserUpdate,
        Self::UserDelete,
        Self::RoleAssign,
        Self::SettingsManage,
        Self::AuditLogRead,
    ];

    /// Returns the (resource kind, action) pair this permission stands for.
    #[must_use]
    pub const fn parts(self) -> (ResourceKind, Action) {
        use Action as A;
        use ResourceKind as R;
        match self {
            Self::CaseCreate => (R::Case, A::Create),
            Self::CaseRead => (R::Case, A::Read),
            Self::CaseUpdate => (R::Case, A::Update),
            Self::CaseDelete => (R::Case, A::Delete),
            Self::CaseAssign => (R::Case, A::Assign),
            Self::ClientCreate => (R::Client, A::Create),
            Self::ClientRead => (R::Client, A::Read),
            Self::ClientUpdate => (R::Client, A::Update),
            Self::ClientDelete => (R::Client, A::Delete),
            Self::DocumentCreate => (R::Document, A::Create),
            Self::DocumentRead => (R::Document, A::Read),
            Self::DocumentUpdate => (R::Document, A::Update),
            Self::DocumentDelete => (R::Document, A::Delete),
            Self::TaskCreate => (R::Task, A::Create),
            Self::TaskRead => (R::Task, A::Read),
            Self::TaskUpdate => (R::Task, A::Update),
            Self::TaskDelete => (R::Task, A::Delete),
            Self::TaskAssign => (R::Task, A::Assign),
            Self::InvoiceCreate => (R::Invoice, A::Create),
            Self::InvoiceRead => (R::Invoice, A::Read),
            Self::InvoiceUpdate => (R::Invoice, A::Update),
            Self::InvoiceDelete => (R::Invoice, A::Delete),
            Self::InvoiceSend => (R::Invoice, A::Send),
            Self::TimeEntryCreate => (R::TimeEntry, A::Create),
            Self::TimeEntryRead => (R::TimeEntry, A::Read),
            Self::TimeEntryUpdate => (R::TimeEntry, A::Update),
            Self::TimeEntryDelete => (R::TimeEntry, A::Delete),
            Self::TimeEntryApprove => (R::TimeEntry, A::Approve),
            Self::PaymentRead => (R::Payment, A::Read),
            Self::PaymentProcess => (R::Payment, A::Process),
            Self::PaymentRefund => (R::Payment, A::Refund),
            Self::ReportRead => (R::Report, A::Read),
            Self::ReportGenerate => (R::Report, A::Generate),
            Self::ContentCreate => (R::Content, A::Create),
            Self::ContentRead => (R::Content, A::Read),
            Self::ContentUpdate => (R::Content, A::Update),
            Self::ContentDelete => (R::Content, A::Delete),
            Self::ContentPublish => (R::Content, A::Publish),
            Self::UserCreate => (R::User, A::Create),
            Self::UserRead => (R::User, A::Read),
            Self::UserUpdate => (R::User, A::Update),
            Self::UserDelete => (R::User, A::Delete),
            Self::RoleAssign => (R::Role, A::Assign),
            Self::SettingsManage => (R::Settings, A::Manage),
            Self::AuditLogRead => (R::AuditLog, A::Read),
        }
    }

    #[must_use]
    pub const fn resource(self) -> ResourceKind {
        self.parts().0
    }

    #[must_use]
    pub const fn action(self) -> Action {
        self.parts().1
    }

    /// Returns the canonical `resource:action` name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CaseCreate => "case:create",
            Self::CaseRead => "case:read",
            Self::CaseUpdate => "case:update",
            Self::CaseDelete => "case:delete",
            Self::CaseAssign => "case:assign",
            Self::ClientCreate => "client:create",
            Self::ClientRead => "client:read",
            Self::ClientUpdate => "client:update",
            Self::ClientDelete => "client:delete",
            Self::DocumentCreate => "document:create",
            Self::DocumentRead => "document:read",
            Self::DocumentUpdate => "document:update",
            Self::DocumentDelete => "document:delete",
            Self::TaskCreate => "task:create",
            Self::TaskRead => "task:read",
            Self::TaskUpdate => "task:update",
            Self::TaskDelete => "task:delete",
            Self::TaskAssign => "task:assign",
            Self::InvoiceCreate => "invoice:create",
            Self::InvoiceRead => "invoice:read",
            Self::InvoiceUpdate => "invoice:update",
            Self::InvoiceDelete => "invoice:delete",
            Self::InvoiceSend => "invoice:send",
            Self::TimeEntryCreate => "time-entry:create",
            Self::TimeEntryRead => "time-entry:read",
            Self::TimeEntryUpdate => "time-entry:update",
            Self::TimeEntryDelete => "time-entry:delete",
            Self::TimeEntryApprove => "time-entry:approve",
            Self::PaymentRead => "payment:read",
            Self::PaymentProcess => "payment:process",
            Self::PaymentRefund => "payment:refund",
            Self::ReportRead => "report:read",
            Self::ReportGenerate => "report:generate",
            Self::ContentCreate => "content:create",
            Self::ContentRead => "content:read",
            Self::ContentUpdate => "content:update",
            Self::ContentDelete => "content:delete",
            Self::ContentPublish => "content:publish",
            Self::UserCreate => "user:create",
            Self::UserRead => "user:read",
            Self::UserUpdate => "user:update",
            Self::UserDelete => "user:delete",
            Self::RoleAssign => "role:assign",
            Self::SettingsManage => "settings:manage",
            Self::AuditLogRead => "audit-log:read",
        }
    }

    /// Returns every permission on the given resource kind.
    pub fn for_resource(resource: ResourceKind) -> impl Iterator<Item = Self> {
        Self::ALL
            .into_iter()
            .filter(move |permission| permission.resource() == resource)
    }
}

impl std::str::FromStr for Permission {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|permission| permission.as_str() == s)
            .ok_or_else(|| ServiceError::UnknownPermission(s.to_string()))
    }
}

impl TryFrom<String> for Permission {
    type Error = ServiceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Permission> for &'static str {
    fn from(permission: Permission) -> Self {
        permission.as_str()
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
