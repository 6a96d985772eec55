// src/hierarchy/mod.rs
//! Structural validation of the organization.
//!
//! Resolution runs three checks in order: exactly one root, every manager
//! reference resolves, and no reporting chain revisits an id. On success
//! every employee has a finite chain up to the root.

pub mod chain;

use std::collections::HashMap;

use rayon::prelude::{IntoParallelIterator, ParallelIterator};

use crate::error::{OrgError, Result};
use crate::model::{Employee, EmployeeId, Organization};

pub use chain::ReportingChain;

/// A validated organization together with every employee's reporting chain.
#[derive(Debug)]
pub struct Hierarchy<'a> {
    org: &'a Organization,
    root: EmployeeId,
    chains: HashMap<EmployeeId, ReportingChain>,
}

impl<'a> Hierarchy<'a> {
    /// Validates the organization and builds all reporting chains.
    ///
    /// # Errors
    /// Returns `InvalidRoot`, `UnresolvedManager` or `CycleDetected`. When
    /// several employees are affected, the lowest id is reported.
    pub fn resolve(org: &'a Organization) -> Result<Self> {
        let root = find_root(org)?;
        check_references(org)?;

        let chains = build_chains(org)?;
        tracing::debug!(root, chains = chains.len(), "hierarchy resolved");

        Ok(Self { org, root, chains })
    }

    #[must_use]
    pub fn root(&self) -> EmployeeId {
        self.root
    }

    #[must_use]
    pub fn chain(&self, id: EmployeeId) -> Option<&ReportingChain> {
        self.chains.get(&id)
    }

    /// Employees paired with their chains, ordered by id.
    #[must_use]
    pub fn chains(&self) -> Vec<(&'a Employee, &ReportingChain)> {
        self.org
            .sorted()
            .into_iter()
            .filter_map(|e| self.chains.get(&e.id()).map(|c| (e, c)))
            .collect()
    }
}

fn find_root(org: &Organization) -> Result<EmployeeId> {
    let candidates: Vec<EmployeeId> = org
        .sorted()
        .into_iter()
        .filter(|e| e.is_root())
        .map(Employee::id)
        .collect();

    match candidates.as_slice() {
        [root] => Ok(*root),
        _ => Err(OrgError::InvalidRoot { candidates }),
    }
}

fn check_references(org: &Organization) -> Result<()> {
    for employee in org.sorted() {
        if let Some(manager_id) = employee.manager_id() {
            if org.get(manager_id).is_none() {
                return Err(OrgError::UnresolvedManager {
                    manager_id,
                    employee_id: employee.id(),
                });
            }
        }
    }
    Ok(())
}

fn build_chains(org: &Organization) -> Result<HashMap<EmployeeId, ReportingChain>> {
    // Walks are independent reads of the snapshot. Collecting in id order
    // keeps the reported failure deterministic.
    let walks: Vec<(EmployeeId, Result<ReportingChain>)> = org
        .sorted()
        .into_par_iter()
        .map(|e| (e.id(), chain::walk(org, e)))
        .collect();

    walks
        .into_iter()
        .map(|(id, walk)| walk.map(|c| (id, c)))
        .collect()
}
