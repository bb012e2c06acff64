//! Authorization engine.
//!
//! ## Module Organization
//!
//! - `role`: Role catalog and hierarchy levels
//! - `permission`: Permission catalog, one variant per resource/action pair
//! - `matrix`: Immutable role → permission matrix built once per process
//! - `evaluator`: Class-level checks (`has_permission`, any-of, all-of)
//! - `lookup`: Persistence reads needed by instance-level checks
//! - `access`: Instance-level checks for cases, documents and clients
//! - `assignment`: Which roles a role may assign, and whom it may manage
//! - `requester`: The authenticated actor of a check
//! - `decision`: `AccessDecision` and the combined `AccessControl` API
//! - `depot`: Salvo depot helpers

pub mod access;
pub mod assignment;
pub mod decision;
pub mod depot;
pub mod evaluator;
pub mod lookup;
pub mod matrix;
pub mod permission;
pub mod requester;
pub mod role;

// Re-export commonly used types at module level
pub use access::{ResourceAccessEvaluator, can_access_case};
pub use assignment::{assignable_roles, assignment_divergences, can_assign_role, can_manage_user};
pub use decision::{AccessControl, AccessDecision};
pub use depot::{
    AccessControlHandler, get_access_control_from_depot, get_requester_from_depot,
    set_requester_in_depot,
};
pub use evaluator::PermissionEvaluator;
pub use lookup::AssignmentLookup;
pub use matrix::RolePermissionMatrix;
pub use permission::{Action, Permission, ResourceKind};
pub use requester::Requester;
pub use role::Role;
