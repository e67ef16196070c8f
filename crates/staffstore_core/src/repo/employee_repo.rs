//! Employee repository contract and PostgreSQL implementation.
//!
//! # Responsibility
//! - Provide transactional save/find-by-id over the `employee` table.
//! - Map backend failures into the classified taxonomy at first detection.
//!
//! # Invariants
//! - A raw backend error is wrapped exactly once; an already-classified
//!   failure passes through transaction finalization unchanged.
//! - A rollback failure never hides the failure that triggered it; both are
//!   surfaced through `CombinedError`.
//!
//! # See also
//! - migrations/0001_employee.sql

use crate::db::{self, DbConfig};
use crate::error::{ClassifiedError, CombinedError, ErrorCode};
use crate::model::employee::Employee;
use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{Postgres, Row, Transaction};

pub type RepoResult<T> = Result<T, ClassifiedError>;

/// Diagnostic codes for the PostgreSQL repository (block 100..199).
pub const PG_CONNECT_ERR: ErrorCode = ErrorCode(100);
pub const PG_TX_BEGIN_ERR: ErrorCode = ErrorCode(101);
pub const PG_TX_FINISH_ERR: ErrorCode = ErrorCode(102);
pub const PG_EMP_SAVE_ERR: ErrorCode = ErrorCode(103);
pub const PG_EMP_NOT_FOUND_ERR: ErrorCode = ErrorCode(104);
pub const PG_EMP_FIND_ERR: ErrorCode = ErrorCode(105);

const INSERT_EMPLOYEE_SQL: &str =
    "INSERT INTO employee (name, age) VALUES ($1, $2) RETURNING id";

const SELECT_EMPLOYEE_SQL: &str = "SELECT id, name, age FROM employee WHERE id = $1";

/// Persistence capability for employee records.
///
/// Implementations own their connection/transaction pair exclusively per
/// call and must release both on every exit path. Dropping an operation
/// future mid-flight (caller-side cancellation or a `tokio::time::timeout`
/// deadline) rolls any open transaction back instead of leaving it dangling.
#[async_trait]
pub trait EmployeeRepository {
    /// Persists a new record and returns it rehydrated with the assigned id.
    ///
    /// The caller's value is never mutated; a fresh value comes back.
    async fn save(&self, employee: &Employee) -> RepoResult<Employee>;

    /// Retrieves exactly one record.
    ///
    /// # Errors
    /// - `not-found` when no row matches; the message names the id.
    /// - `unknown` for any backend failure.
    async fn find_by_id(&self, id: i64) -> RepoResult<Employee>;
}

/// PostgreSQL-backed employee repository.
///
/// Acquires a pool per call from the configured endpoint and runs each
/// operation in its own transaction.
pub struct PgEmployeeRepository {
    config: DbConfig,
}

impl PgEmployeeRepository {
    pub fn new(config: DbConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn save(&self, employee: &Employee) -> RepoResult<Employee> {
        let pool = db::connect(&self.config)
            .await
            .map_err(|err| ClassifiedError::unknown(PG_CONNECT_ERR, err))?;

        let mut tx = pool
            .begin()
            .await
            .map_err(|err| ClassifiedError::unknown(PG_TX_BEGIN_ERR, err))?;

        let inserted = insert_employee(&mut tx, employee).await;
        let id = finish_tx(tx, inserted).await?;

        Ok(Employee::from_persistence(id, employee.name(), employee.age()))
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Employee> {
        let pool = db::connect(&self.config)
            .await
            .map_err(|err| ClassifiedError::unknown(PG_CONNECT_ERR, err))?;

        let mut tx = pool
            .begin()
            .await
            .map_err(|err| ClassifiedError::unknown(PG_TX_BEGIN_ERR, err))?;

        let fetched = select_employee(&mut tx, id).await;
        finish_tx_read_only(tx, fetched).await
    }
}

async fn insert_employee(
    tx: &mut Transaction<'static, Postgres>,
    employee: &Employee,
) -> RepoResult<i64> {
    sqlx::query_scalar::<_, i64>(INSERT_EMPLOYEE_SQL)
        .bind(employee.name())
        .bind(i16::from(employee.age()))
        .fetch_one(&mut **tx)
        .await
        .map_err(|err| ClassifiedError::unknown(PG_EMP_SAVE_ERR, err))
}

async fn select_employee(
    tx: &mut Transaction<'static, Postgres>,
    id: i64,
) -> RepoResult<Employee> {
    let row = sqlx::query(SELECT_EMPLOYEE_SQL)
        .bind(id)
        .fetch_one(&mut **tx)
        .await;

    match row {
        Ok(row) => employee_from_row(&row),
        Err(sqlx::Error::RowNotFound) => Err(ClassifiedError::not_found(
            PG_EMP_NOT_FOUND_ERR,
            format!("no employee found with id {id}"),
        )),
        Err(err) => Err(ClassifiedError::unknown(PG_EMP_FIND_ERR, err)),
    }
}

fn employee_from_row(row: &PgRow) -> RepoResult<Employee> {
    let id: i64 = row
        .try_get("id")
        .map_err(|err| ClassifiedError::unknown(PG_EMP_FIND_ERR, err))?;
    let name: String = row
        .try_get("name")
        .map_err(|err| ClassifiedError::unknown(PG_EMP_FIND_ERR, err))?;
    let age_raw: i16 = row
        .try_get("age")
        .map_err(|err| ClassifiedError::unknown(PG_EMP_FIND_ERR, err))?;

    // Reject invalid persisted state instead of masking it.
    let age = u8::try_from(age_raw).map_err(|_| {
        ClassifiedError::unknown(
            PG_EMP_FIND_ERR,
            format!("invalid age value `{age_raw}` stored for employee {id}"),
        )
    })?;

    Ok(Employee::from_persistence(id, name, age))
}

/// Finishes a write transaction: commit on success, rollback on failure.
///
/// # Contract
/// - An already-classified operation failure passes through unchanged when
///   rollback succeeds.
/// - A rollback failure is combined with the operation failure so both stay
///   visible to the caller, classified `unknown` under the finalize code.
/// - A commit failure is classified `unknown` under the finalize code.
async fn finish_tx<T>(
    tx: Transaction<'static, Postgres>,
    outcome: RepoResult<T>,
) -> RepoResult<T> {
    match outcome {
        Ok(value) => match tx.commit().await {
            Ok(()) => Ok(value),
            Err(commit_err) => Err(ClassifiedError::unknown(PG_TX_FINISH_ERR, commit_err)),
        },
        Err(original) => match tx.rollback().await {
            Ok(()) => Err(original),
            Err(rollback_err) => Err(ClassifiedError::unknown(
                PG_TX_FINISH_ERR,
                CombinedError::new(rollback_err, original),
            )),
        },
    }
}

/// Finishes a read-only transaction.
///
/// Nothing was written on the success path, so no commit is issued: the
/// transaction closes through rollback-on-drop when `tx` goes out of scope.
/// The failure path still rolls back explicitly so a rollback failure can be
/// combined with the original failure.
async fn finish_tx_read_only<T>(
    tx: Transaction<'static, Postgres>,
    outcome: RepoResult<T>,
) -> RepoResult<T> {
    match outcome {
        Ok(value) => Ok(value),
        Err(original) => match tx.rollback().await {
            Ok(()) => Err(original),
            Err(rollback_err) => Err(ClassifiedError::unknown(
                PG_TX_FINISH_ERR,
                CombinedError::new(rollback_err, original),
            )),
        },
    }
}
