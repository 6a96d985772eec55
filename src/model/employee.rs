// src/model/employee.rs
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::error::RecordError;

/// Employee identifiers as they appear in the source. Manager references
/// use the same type so that dangling or negative references survive
/// parsing and are rejected by the resolver with a precise error.
pub type EmployeeId = i64;

/// A single employee. Identity, equality and ordering are by `id` alone.
#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    id: EmployeeId,
    first_name: String,
    last_name: String,
    salary: u64,
    manager_id: Option<EmployeeId>,
}

impl Employee {
    /// Builds a validated employee record.
    ///
    /// Names are kept as given and may be empty.
    ///
    /// # Errors
    /// Returns error if `id` is not positive.
    pub fn new(
        id: EmployeeId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        salary: u64,
        manager_id: Option<EmployeeId>,
    ) -> Result<Self, RecordError> {
        if id <= 0 {
            return Err(RecordError::NonPositiveId(id));
        }
        Ok(Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            salary,
            manager_id,
        })
    }

    #[must_use]
    pub fn id(&self) -> EmployeeId {
        self.id
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    #[must_use]
    pub fn salary(&self) -> u64 {
        self.salary
    }

    /// The declared manager; `None` only for the root.
    #[must_use]
    pub fn manager_id(&self) -> Option<EmployeeId> {
        self.manager_id
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.manager_id.is_none()
    }
}

impl PartialEq for Employee {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Employee {}

impl Hash for Employee {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Employee {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Employee {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = [self.first_name.as_str(), self.last_name.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{name} (id {})", self.id)
    }
}
