//! Golden-table check of every (role, permission) pair.
//!
//! The expected grants are written out by name, independently of the matrix
//! construction, so a change to either side shows up as a mismatch here.

use std::collections::BTreeSet;

use docket_service::auth::{Permission, PermissionEvaluator, Role};

const SENIOR_ASSOCIATE: &[&str] = &[
    "case:create",
    "case:read",
    "case:update",
    "case:assign",
    "client:create",
    "client:read",
    "client:update",
    "document:create",
    "document:read",
    "document:update",
    "document:delete",
    "task:create",
    "task:read",
    "task:update",
    "task:delete",
    "task:assign",
    "invoice:create",
    "invoice:read",
    "invoice:update",
    "time-entry:create",
    "time-entry:read",
    "time-entry:update",
    "time-entry:approve",
    "report:read",
    "content:create",
    "content:read",
    "content:update",
    "user:read",
    "role:assign",
];

const ASSOCIATE: &[&str] = &[
    "case:create",
    "case:read",
    "case:update",
    "client:read",
    "client:update",
    "document:create",
    "document:read",
    "document:update",
    "task:create",
    "task:read",
    "task:update",
    "task:assign",
    "invoice:read",
    "time-entry:create",
    "time-entry:read",
    "time-entry:update",
    "content:create",
    "content:read",
    "content:update",
    "user:read",
];

const JUNIOR_ASSOCIATE: &[&str] = &[
    "case:read",
    "case:update",
    "client:read",
    "document:create",
    "document:read",
    "document:update",
    "task:create",
    "task:read",
    "task:update",
    "time-entry:create",
    "time-entry:read",
    "time-entry:update",
    "content:read",
];

const PARALEGAL: &[&str] = &[
    "case:read",
    "client:read",
    "document:create",
    "document:read",
    "document:update",
    "task:read",
    "task:update",
    "time-entry:create",
    "time-entry:read",
    "content:read",
];

const CLIENT: &[&str] = &[
    "case:read",
    "document:read",
    "invoice:read",
    "payment:process",
    "content:read",
];

const GUEST: &[&str] = &["content:read"];

const PARTNER_EXCLUDED: &[&str] = &["user:delete", "settings:manage"];

fn golden(role: Role) -> BTreeSet<&'static str> {
    let all = || Permission::ALL.iter().map(|p| p.as_str());
    match role {
        Role::SuperAdmin => all().collect(),
        Role::Partner => all().filter(|p| !PARTNER_EXCLUDED.contains(p)).collect(),
        Role::SeniorAssociate => SENIOR_ASSOCIATE.iter().copied().collect(),
        Role::Associate => ASSOCIATE.iter().copied().collect(),
        Role::JuniorAssociate => JUNIOR_ASSOCIATE.iter().copied().collect(),
        Role::Paralegal => PARALEGAL.iter().copied().collect(),
        Role::Client => CLIENT.iter().copied().collect(),
        Role::Guest => GUEST.iter().copied().collect(),
    }
}

#[test]
fn every_pair_matches_golden_table() {
    let evaluator = PermissionEvaluator::default();
    let mut mismatches = Vec::new();

    for role in Role::ALL {
        let expected = golden(role);
        for permission in Permission::ALL {
            let want = expected.contains(permission.as_str());
            let got = evaluator.has_permission(role, permission);
            if want != got {
                mismatches.push(format!("{role} / {permission}: expected {want}, got {got}"));
            }
        }
    }

    assert!(mismatches.is_empty(), "Matrix mismatches:\n{}", mismatches.join("\n"));
}

#[test]
fn golden_names_are_all_in_the_catalog() {
    for role in Role::ALL {
        for name in golden(role) {
            assert!(name.parse::<Permission>().is_ok(), "{name} is not a permission");
        }
    }
}

#[test]
fn named_checks_agree_with_typed_checks() {
    let evaluator = PermissionEvaluator::default();
    for role in Role::ALL {
        for permission in Permission::ALL {
            assert_eq!(
                evaluator.has_permission_named(role.as_str(), permission.as_str()),
                evaluator.has_permission(role, permission),
            );
        }
    }
}

#[test]
fn role_permissions_match_golden_table() {
    let evaluator = PermissionEvaluator::default();
    for role in Role::ALL {
        let names: BTreeSet<&str> = evaluator
            .role_permissions(role)
            .into_iter()
            .map(Permission::as_str)
            .collect();
        assert_eq!(names, golden(role), "permission set for {role}");
    }
}

#[test]
fn senior_associate_cannot_delete_cases() {
    let evaluator = PermissionEvaluator::default();
    assert!(!evaluator.has_permission(Role::SeniorAssociate, Permission::CaseDelete));
}

#[test]
fn client_holds_case_read_capability() {
    // Class-level grant; the case-scoped check still denies clients.
    let evaluator = PermissionEvaluator::default();
    assert!(evaluator.has_permission(Role::Client, Permission::CaseRead));
}
