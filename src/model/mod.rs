//! Immutable employee records and the organization snapshot that owns them.

pub mod employee;
pub mod organization;

pub use employee::{Employee, EmployeeId};
pub use organization::Organization;
