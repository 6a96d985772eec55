// src/model/organization.rs
use std::collections::HashMap;
use std::fmt;

use super::{Employee, EmployeeId};
use crate::error::{OrgError, Result};

/// One immutable-after-build snapshot of the organization, indexed by id.
#[derive(Debug, Clone, Default)]
pub struct Organization {
    employees: HashMap<EmployeeId, Employee>,
}

impl Organization {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a snapshot from a sequence of records.
    ///
    /// # Errors
    /// Returns `DuplicateEmployee` on the first repeated id.
    pub fn from_employees<I>(employees: I) -> Result<Self>
    where
        I: IntoIterator<Item = Employee>,
    {
        let mut org = Self::new();
        for employee in employees {
            org.add_employee(employee)?;
        }
        Ok(org)
    }

    /// Inserts an employee. The existing entry is left untouched on conflict.
    ///
    /// # Errors
    /// Returns `DuplicateEmployee` if the id is already present.
    pub fn add_employee(&mut self, employee: Employee) -> Result<()> {
        let id = employee.id();
        if self.employees.contains_key(&id) {
            return Err(OrgError::DuplicateEmployee { id });
        }
        self.employees.insert(id, employee);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.get(&id)
    }

    /// All employees, in no meaningful order.
    pub fn employees(&self) -> impl Iterator<Item = &Employee> {
        self.employees.values()
    }

    /// All employees ordered by id.
    #[must_use]
    pub fn sorted(&self) -> Vec<&Employee> {
        let mut all: Vec<&Employee> = self.employees.values().collect();
        all.sort();
        all
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

impl fmt::Display for Organization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Organization ({} employees)", self.len())?;
        for e in self.sorted() {
            match e.manager_id() {
                Some(m) => writeln!(f, "  {e}, salary {}, reports to {m}", e.salary())?,
                None => writeln!(f, "  {e}, salary {}, root", e.salary())?,
            }
        }
        Ok(())
    }
}
