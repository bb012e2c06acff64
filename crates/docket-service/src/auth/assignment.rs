//! Which roles a role may hand out, and which users it may manage.
//!
//! Two independent rules live here:
//!
//! - [`assignable_roles`] is an explicit table of roles an assigner may grant.
//! - [`can_manage_user`] is a strict comparison of hierarchy levels.
//!
//! The table is meant to stay inside what the hierarchy allows, but nothing
//! derives one from the other. [`assignment_divergences`] lists every pair
//! where they disagree; today that is only a super-admin assigning another
//! super-admin.

use std::collections::BTreeSet;

use super::role::Role;

/// Returns the roles `assigner` may assign to other users.
#[must_use]
pub fn assignable_roles(assigner: Role) -> BTreeSet<Role> {
    let roles: &[Role] = match assigner {
        Role::SuperAdmin => &Role::ALL,
        Role::Partner => &[
            Role::SeniorAssociate,
            Role::Associate,
            Role::JuniorAssociate,
            Role::Paralegal,
            Role::Client,
            Role::Guest,
        ],
        Role::SeniorAssociate => &[Role::JuniorAssociate, Role::Paralegal],
        Role::Associate | Role::JuniorAssociate | Role::Paralegal | Role::Client | Role::Guest => {
            &[]
        }
    };
    roles.iter().copied().collect()
}

/// Returns `true` if `assigner` may assign `target` to another user.
#[must_use]
pub fn can_assign_role(assigner: Role, target: Role) -> bool {
    assignable_roles(assigner).contains(&target)
}

/// Returns `true` if `manager` ranks strictly above `target`.
///
/// A role never manages its own tier.
#[must_use]
pub const fn can_manage_user(manager: Role, target: Role) -> bool {
    manager.outranks(target)
}

/// Every (assigner, target) pair the assignment table allows but the
/// hierarchy rejects.
#[must_use]
pub fn assignment_divergences() -> Vec<(Role, Role)> {
    Role::ALL
        .into_iter()
        .flat_map(|assigner| {
            assignable_roles(assigner)
                .into_iter()
                .filter(move |target| !can_manage_user(assigner, *target))
                .map(move |target| (assigner, target))
        })
        .collect()
}
