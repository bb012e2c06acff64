//! Instance-level access checks, including lookup failure, timeout and
//! concurrency behavior.

use std::sync::Arc;
use std::time::{Duration, Instant};

use docket_db::model::case::CaseAssignment;
use docket_service::auth::{ResourceAccessEvaluator, Role, can_access_case};

use super::helpers::{InMemoryLookup, TEST_TIMEOUT, case_assigned_to, document};

fn evaluator(lookup: InMemoryLookup) -> ResourceAccessEvaluator<Arc<InMemoryLookup>> {
    ResourceAccessEvaluator::new(Arc::new(lookup), TEST_TIMEOUT)
}

#[test]
fn top_two_roles_access_any_case() {
    let user = uuid::Uuid::now_v7();
    let cases = [
        CaseAssignment::default(),
        case_assigned_to(uuid::Uuid::now_v7(), &[uuid::Uuid::now_v7()]),
    ];

    for case in &cases {
        assert!(can_access_case(Role::SuperAdmin, user, case));
        assert!(can_access_case(Role::Partner, user, case));
    }
}

#[test]
fn working_roles_need_partner_or_associate_assignment() {
    let u1 = uuid::Uuid::now_v7();
    let u2 = uuid::Uuid::now_v7();
    let u3 = uuid::Uuid::now_v7();
    let case = case_assigned_to(u1, &[u2]);

    for role in [Role::SeniorAssociate, Role::JuniorAssociate, Role::Paralegal] {
        assert!(can_access_case(role, u1, &case), "{role} as partner");
        assert!(can_access_case(role, u2, &case), "{role} as associate");
        assert!(!can_access_case(role, u3, &case), "{role} unassigned");
    }
}

#[test]
fn client_never_accesses_cases() {
    let client_user = uuid::Uuid::now_v7();
    let mut case = case_assigned_to(client_user, &[client_user]);
    case.client_id = Some(client_user);

    assert!(!can_access_case(Role::Client, client_user, &case));
}

#[test]
fn partner_document_access_depends_only_on_confidentiality() {
    let evaluator = evaluator(InMemoryLookup::new());
    let confidential = document(true);
    let open = document(false);

    for user in [
        uuid::Uuid::now_v7(),
        confidential.uploaded_by.unwrap_or_default(),
    ] {
        assert!(!evaluator.can_access_document(Role::Partner, user, &confidential));
        assert!(evaluator.can_access_document(Role::Partner, user, &open));
        assert!(evaluator.can_access_document(Role::SuperAdmin, user, &confidential));
    }
}

#[test]
fn document_access_ignores_uploader_for_other_roles() {
    let evaluator = evaluator(InMemoryLookup::new());
    let doc = document(true);
    let stranger = uuid::Uuid::now_v7();

    assert!(evaluator.can_access_document(Role::JuniorAssociate, stranger, &doc));
    assert!(!evaluator.can_access_document(Role::Guest, stranger, &doc));
}

#[test_log::test(tokio::test)]
async fn client_access_follows_case_links() {
    let user = uuid::Uuid::now_v7();
    let linked_client = uuid::Uuid::now_v7();
    let other_client = uuid::Uuid::now_v7();
    let lookup = InMemoryLookup::new().with_client_link(linked_client, user, 2);
    let evaluator = evaluator(lookup);

    assert!(evaluator.has_client_access(Role::Paralegal, user, linked_client).await);
    assert!(!evaluator.has_client_access(Role::Paralegal, user, other_client).await);
}

#[test_log::test(tokio::test)]
async fn case_access_compares_assigned_user() {
    let assignee = uuid::Uuid::now_v7();
    let case = case_assigned_to(uuid::Uuid::now_v7(), &[assignee]);
    let case_id = case.case_id;
    let evaluator = evaluator(InMemoryLookup::new().with_case(case));

    assert!(evaluator.has_case_access(Role::Associate, assignee, case_id).await);
    assert!(!evaluator.has_case_access(Role::Associate, uuid::Uuid::now_v7(), case_id).await);
    assert!(!evaluator.has_case_access(Role::Associate, assignee, uuid::Uuid::now_v7()).await);
}

#[test_log::test(tokio::test)]
async fn lookup_failure_denies_without_retry() {
    let lookup = Arc::new(InMemoryLookup::new().failing());
    let evaluator = ResourceAccessEvaluator::new(Arc::clone(&lookup), TEST_TIMEOUT);
    let user = uuid::Uuid::now_v7();

    assert!(!evaluator.has_client_access(Role::SeniorAssociate, user, uuid::Uuid::now_v7()).await);
    assert_eq!(lookup.calls(), 1);

    assert!(!evaluator.has_case_access(Role::Paralegal, user, uuid::Uuid::now_v7()).await);
    assert_eq!(lookup.calls(), 2);
}

#[test_log::test(tokio::test)]
async fn senior_roles_never_hit_the_lookup() {
    let lookup = Arc::new(InMemoryLookup::new().failing());
    let evaluator = ResourceAccessEvaluator::new(Arc::clone(&lookup), TEST_TIMEOUT);
    let user = uuid::Uuid::now_v7();

    for role in [Role::SuperAdmin, Role::Partner] {
        assert!(evaluator.has_client_access(role, user, uuid::Uuid::now_v7()).await);
        assert!(evaluator.has_case_access(role, user, uuid::Uuid::now_v7()).await);
    }
    assert_eq!(lookup.calls(), 0);
}

#[test_log::test(tokio::test)]
async fn slow_lookup_times_out_and_denies() {
    let user = uuid::Uuid::now_v7();
    let client = uuid::Uuid::now_v7();
    let lookup = InMemoryLookup::new()
        .with_client_link(client, user, 1)
        .delayed(Duration::from_secs(30));
    let evaluator = ResourceAccessEvaluator::new(Arc::new(lookup), Duration::from_millis(20));

    let started = Instant::now();
    assert!(!evaluator.has_client_access(Role::Paralegal, user, client).await);
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[test_log::test(tokio::test)]
async fn missing_case_denies_even_top_role_by_id() {
    let evaluator = evaluator(InMemoryLookup::new());
    let user = uuid::Uuid::now_v7();

    assert!(!evaluator.can_access_case_by_id(Role::SuperAdmin, user, uuid::Uuid::now_v7()).await);
    assert!(!evaluator.can_access_document_by_id(Role::SuperAdmin, user, uuid::Uuid::now_v7()).await);
}

#[test_log::test(tokio::test)]
async fn case_by_id_applies_snapshot_rules() {
    let associate = uuid::Uuid::now_v7();
    let case = case_assigned_to(uuid::Uuid::now_v7(), &[associate]);
    let case_id = case.case_id;
    let evaluator = evaluator(InMemoryLookup::new().with_case(case));

    assert!(evaluator.can_access_case_by_id(Role::JuniorAssociate, associate, case_id).await);
    assert!(!evaluator.can_access_case_by_id(Role::JuniorAssociate, uuid::Uuid::now_v7(), case_id).await);
    assert!(!evaluator.can_access_case_by_id(Role::Client, associate, case_id).await);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_checks_do_not_serialize() {
    let client = uuid::Uuid::now_v7();
    let users: Vec<uuid::Uuid> = (0..32).map(|_| uuid::Uuid::now_v7()).collect();

    let mut lookup = InMemoryLookup::new().delayed(Duration::from_millis(100));
    for user in users.iter().step_by(2) {
        lookup = lookup.with_client_link(client, *user, 1);
    }
    let lookup = Arc::new(lookup);
    let evaluator = Arc::new(ResourceAccessEvaluator::new(
        Arc::clone(&lookup),
        Duration::from_secs(2),
    ));

    let started = Instant::now();
    let results = futures::future::join_all(users.iter().map(|user| {
        let evaluator = Arc::clone(&evaluator);
        let user = *user;
        async move { evaluator.has_client_access(Role::Paralegal, user, client).await }
    }))
    .await;

    // 32 sequential lookups would take 3.2s.
    assert!(started.elapsed() < Duration::from_millis(1500));
    assert_eq!(lookup.calls(), users.len());
    for (index, allowed) in results.into_iter().enumerate() {
        assert_eq!(allowed, index % 2 == 0, "user {index}");
    }
}

#[test_log::test(tokio::test)]
async fn repeated_checks_give_identical_results() {
    let user = uuid::Uuid::now_v7();
    let client = uuid::Uuid::now_v7();
    let case = case_assigned_to(user, &[]);
    let evaluator = evaluator(InMemoryLookup::new().with_client_link(client, user, 1));

    for _ in 0..5 {
        assert!(can_access_case(Role::Paralegal, user, &case));
        assert!(evaluator.has_client_access(Role::Paralegal, user, client).await);
        assert!(!evaluator.can_access_document(Role::Partner, user, &document(true)));
    }
}
