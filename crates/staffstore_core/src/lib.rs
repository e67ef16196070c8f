//! Core persistence logic for StaffStore.
//!
//! Employee records are saved to and read from PostgreSQL behind the
//! [`EmployeeRepository`] port; every operation runs in its own transaction
//! and every failure crossing the port is a [`ClassifiedError`].

pub mod db;
pub mod error;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::DbConfig;
pub use error::{BoxError, ClassifiedError, CombinedError, ErrorCode, ErrorKind};
pub use logging::{default_log_level, init_logging};
pub use model::employee::Employee;
pub use repo::employee_repo::{EmployeeRepository, PgEmployeeRepository, RepoResult};
pub use repo::memory::InMemoryEmployeeRepository;
pub use service::employee_service::EmployeeService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
