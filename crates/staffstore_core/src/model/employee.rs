//! Employee domain entity.
//!
//! # Responsibility
//! - Hold one employee record: identity plus attributes.
//!
//! # Invariants
//! - Values built by [`Employee::new`] carry id 0 until persisted.
//! - Values built by [`Employee::from_persistence`] carry the stored id.
//! - No setters; a value never changes after construction.

use serde::{Deserialize, Serialize};

/// One employee record.
///
/// The entity performs no validation of its own; request-level checks are
/// the caller's concern (see the service layer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    id: i64,
    name: String,
    age: u8,
}

impl Employee {
    /// Creates an employee that has not been persisted yet.
    ///
    /// The id stays 0 until a repository assigns one.
    pub fn new(name: impl Into<String>, age: u8) -> Self {
        Self {
            id: 0,
            name: name.into(),
            age,
        }
    }

    /// Rebuilds an employee from a stored row.
    ///
    /// Only repository implementations should call this, after a successful
    /// read or write.
    pub fn from_persistence(id: i64, name: impl Into<String>, age: u8) -> Self {
        Self {
            id,
            name: name.into(),
            age,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u8 {
        self.age
    }
}

#[cfg(test)]
mod tests {
    use super::Employee;

    #[test]
    fn new_employee_has_no_identity_yet() {
        let employee = Employee::new("kaushik", 42);
        assert_eq!(employee.id(), 0);
        assert_eq!(employee.name(), "kaushik");
        assert_eq!(employee.age(), 42);
    }

    #[test]
    fn from_persistence_carries_the_stored_id() {
        let employee = Employee::from_persistence(7, "kaushik", 42);
        assert_eq!(employee.id(), 7);
        assert_eq!(employee.name(), "kaushik");
        assert_eq!(employee.age(), 42);
    }

    #[test]
    fn equality_covers_all_fields() {
        let persisted = Employee::from_persistence(1, "kaushik", 42);
        assert_eq!(persisted, Employee::from_persistence(1, "kaushik", 42));
        assert_ne!(persisted, Employee::new("kaushik", 42));
        assert_ne!(persisted, Employee::from_persistence(1, "kaushik", 43));
    }

    #[test]
    fn serializes_with_stable_field_names() {
        let employee = Employee::from_persistence(1, "kaushik", 42);
        let json = serde_json::to_string(&employee).expect("employee should serialize");
        assert_eq!(json, r#"{"id":1,"name":"kaushik","age":42}"#);

        let back: Employee = serde_json::from_str(&json).expect("employee should deserialize");
        assert_eq!(back, employee);
    }
}
