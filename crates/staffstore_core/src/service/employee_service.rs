//! Employee use-case service.
//!
//! # Responsibility
//! - Provide hire/lookup entry points for callers of the persistence port.
//! - Validate request input before it reaches a repository.
//!
//! # Invariants
//! - Repository errors pass through unchanged; the service never re-wraps
//!   an already-classified failure.

use crate::error::{ClassifiedError, ErrorCode};
use crate::model::employee::Employee;
use crate::repo::employee_repo::{EmployeeRepository, RepoResult};

/// Diagnostic codes for the employee service (block 300..399).
pub const SVC_INVALID_NAME_ERR: ErrorCode = ErrorCode(300);

/// Use-case service wrapper over an employee repository.
pub struct EmployeeService<R: EmployeeRepository> {
    repo: R,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists a new employee after request validation.
    ///
    /// # Errors
    /// - `input` (code 300) when `name` is blank.
    /// - Repository failures, unchanged.
    pub async fn hire(&self, name: &str, age: u8) -> RepoResult<Employee> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ClassifiedError::input(
                SVC_INVALID_NAME_ERR,
                "employee name must not be blank",
            ));
        }

        self.repo.save(&Employee::new(name, age)).await
    }

    /// Looks an employee up by id.
    pub async fn lookup(&self, id: i64) -> RepoResult<Employee> {
        self.repo.find_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::{EmployeeService, SVC_INVALID_NAME_ERR};
    use crate::error::ErrorKind;
    use crate::repo::memory::{InMemoryEmployeeRepository, MEM_EMP_NOT_FOUND_ERR};

    #[tokio::test]
    async fn hire_rejects_blank_names_before_persistence() {
        let service = EmployeeService::new(InMemoryEmployeeRepository::new());

        let err = service
            .hire("   ", 42)
            .await
            .expect_err("blank name must be rejected");
        assert_eq!(err.kind(), ErrorKind::Input);
        assert_eq!(err.code(), SVC_INVALID_NAME_ERR);
    }

    #[tokio::test]
    async fn hire_trims_and_persists() {
        let service = EmployeeService::new(InMemoryEmployeeRepository::new());

        let hired = service.hire("  kaushik ", 42).await.expect("hire should succeed");
        assert_eq!(hired.name(), "kaushik");
        assert_eq!(hired.id(), 1);

        let found = service.lookup(hired.id()).await.expect("lookup should succeed");
        assert_eq!(found, hired);
    }

    #[tokio::test]
    async fn repository_errors_pass_through_unchanged() {
        let service = EmployeeService::new(InMemoryEmployeeRepository::new());

        let err = service
            .lookup(999)
            .await
            .expect_err("missing id must be an error");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.code(), MEM_EMP_NOT_FOUND_ERR);
        assert!(err.to_string().contains("999"));
    }
}
