//! Use-case services over the persistence port.
//!
//! # Responsibility
//! - Orchestrate repository calls into caller-facing entry points.
//! - Keep callers decoupled from storage technology.

pub mod employee_service;
