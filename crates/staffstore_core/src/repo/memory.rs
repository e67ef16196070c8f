//! In-memory employee repository.
//!
//! # Responsibility
//! - Implement the employee port against process-local state, for tests and
//!   callers running without a database.
//!
//! # Invariants
//! - Observable contract matches the PostgreSQL repository: identities are
//!   assigned sequentially from 1, and the not-found message names the id.

use crate::error::{ClassifiedError, ErrorCode};
use crate::model::employee::Employee;
use crate::repo::employee_repo::{EmployeeRepository, RepoResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Diagnostic codes for the in-memory repository (block 200..299).
pub const MEM_STATE_ERR: ErrorCode = ErrorCode(200);
pub const MEM_EMP_NOT_FOUND_ERR: ErrorCode = ErrorCode(201);

/// Thread-safe in-memory employee store.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    state: Mutex<StoreState>,
}

#[derive(Debug, Default)]
struct StoreState {
    last_id: i64,
    rows: HashMap<i64, Employee>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn save(&self, employee: &Employee) -> RepoResult<Employee> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| ClassifiedError::unknown(MEM_STATE_ERR, "employee store lock poisoned"))?;

        state.last_id += 1;
        let id = state.last_id;
        let saved = Employee::from_persistence(id, employee.name(), employee.age());
        state.rows.insert(id, saved.clone());
        Ok(saved)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Employee> {
        let state = self
            .state
            .lock()
            .map_err(|_| ClassifiedError::unknown(MEM_STATE_ERR, "employee store lock poisoned"))?;

        state.rows.get(&id).cloned().ok_or_else(|| {
            ClassifiedError::not_found(
                MEM_EMP_NOT_FOUND_ERR,
                format!("no employee found with id {id}"),
            )
        })
    }
}
