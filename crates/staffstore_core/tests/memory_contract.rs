//! Port-contract tests against the in-memory repository.
//!
//! These cover the observable behavior every `EmployeeRepository`
//! implementation must share; `pg_employee_repo.rs` runs the same contract
//! against a live PostgreSQL endpoint.

use staffstore_core::{
    Employee, EmployeeRepository, ErrorKind, InMemoryEmployeeRepository,
};

#[tokio::test]
async fn save_then_find_round_trips() {
    let repo = InMemoryEmployeeRepository::new();

    let saved = repo
        .save(&Employee::new("kaushik", 42))
        .await
        .expect("save should succeed");
    let found = repo
        .find_by_id(saved.id())
        .await
        .expect("saved employee should be findable");

    assert_eq!(found, saved);
}

#[tokio::test]
async fn save_assigns_sequential_identities() {
    let repo = InMemoryEmployeeRepository::new();
    let input = Employee::new("kaushik", 42);

    let first = repo.save(&input).await.expect("first save should succeed");
    assert_eq!(first, Employee::from_persistence(1, "kaushik", 42));

    let second = repo.save(&input).await.expect("second save should succeed");
    assert_eq!(second, Employee::from_persistence(2, "kaushik", 42));
}

#[tokio::test]
async fn save_never_mutates_the_input() {
    let repo = InMemoryEmployeeRepository::new();
    let input = Employee::new("kaushik", 42);

    let saved = repo.save(&input).await.expect("save should succeed");

    assert_eq!(input.id(), 0);
    assert_ne!(saved.id(), input.id());
    assert_eq!(saved.name(), input.name());
    assert_eq!(saved.age(), input.age());
}

#[tokio::test]
async fn find_missing_id_is_not_found_and_names_the_id() {
    let repo = InMemoryEmployeeRepository::new();

    let err = repo
        .find_by_id(999)
        .await
        .expect_err("missing id must be an error");

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(err.to_string().contains("999"));
}
