// src/hierarchy/chain.rs
//! Reporting-chain construction with cycle detection.
//!
//! A walk starts at one employee and follows manager references upward
//! until it reaches a node with no manager. Revisiting an id is a cycle.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::error::{OrgError, Result};
use crate::model::{Employee, EmployeeId, Organization};

/// Manager ids from an employee's direct manager up to the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReportingChain(Vec<EmployeeId>);

impl ReportingChain {
    /// Number of managers above the employee (0 for the root).
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[EmployeeId] {
        &self.0
    }
}

impl From<Vec<EmployeeId>> for ReportingChain {
    fn from(ids: Vec<EmployeeId>) -> Self {
        Self(ids)
    }
}

impl fmt::Display for ReportingChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, id) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{id}")?;
        }
        write!(f, "]")
    }
}

/// Walks from `employee` up to the root.
///
/// The loop is bounded by the organization size: an acyclic walk can visit
/// every other employee at most once.
///
/// # Errors
/// Returns `CycleDetected` naming the employee whose manager is already on
/// the path, and `UnresolvedManager` when a reference points nowhere.
pub fn walk(org: &Organization, employee: &Employee) -> Result<ReportingChain> {
    let mut path: Vec<EmployeeId> = Vec::new();
    let mut visited: HashSet<EmployeeId> = HashSet::new();
    let mut current = employee;

    for _ in 0..=org.len() {
        let Some(manager_id) = current.manager_id() else {
            return Ok(ReportingChain(path));
        };
        if visited.contains(&manager_id) {
            return Err(cycle(current, path));
        }
        let manager = org.get(manager_id).ok_or(OrgError::UnresolvedManager {
            manager_id,
            employee_id: current.id(),
        })?;
        visited.insert(manager_id);
        path.push(manager_id);
        current = manager;
    }

    // More hops than employees means some id repeated.
    Err(cycle(current, path))
}

fn cycle(employee: &Employee, path: Vec<EmployeeId>) -> OrgError {
    OrgError::CycleDetected {
        employee_id: employee.id(),
        path,
    }
}
