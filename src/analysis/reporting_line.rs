// src/analysis/reporting_line.rs
//! Employees with too many managers between them and the root.

use std::collections::BTreeMap;

use crate::hierarchy::{Hierarchy, ReportingChain};
use crate::model::Employee;

/// The longest chain tolerated for a given `max_managers_to_root`. The
/// direct manager is the first hop and is not counted as an extra layer.
#[must_use]
pub fn allowed_chain_length(max_managers_to_root: usize) -> usize {
    max_managers_to_root.saturating_add(1)
}

/// Flags every employee whose chain is longer than allowed, with the full
/// chain for display.
#[must_use]
pub fn long_reporting_lines(
    hierarchy: &Hierarchy<'_>,
    max_managers_to_root: usize,
) -> BTreeMap<Employee, ReportingChain> {
    let allowed = allowed_chain_length(max_managers_to_root);
    let flagged: BTreeMap<Employee, ReportingChain> = hierarchy
        .chains()
        .into_iter()
        .filter(|(_, chain)| chain.len() > allowed)
        .map(|(e, chain)| (e.clone(), chain.clone()))
        .collect();

    tracing::debug!(allowed, flagged = flagged.len(), "reporting-line analysis complete");
    flagged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EmployeeId, Organization};

    fn linear(depth: EmployeeId) -> Organization {
        Organization::from_employees((1..=depth).map(|id| {
            let manager = if id == 1 { None } else { Some(id - 1) };
            Employee::new(id, "F", "L", 100, manager).unwrap()
        }))
        .unwrap()
    }

    #[test]
    fn test_threshold_boundary() {
        // Ids 1..=5: employee 4 has 3 managers, employee 5 has 4.
        let o = linear(5);
        let h = Hierarchy::resolve(&o).unwrap();
        let flagged = long_reporting_lines(&h, 2);
        let ids: Vec<_> = flagged.keys().map(Employee::id).collect();
        assert_eq!(ids, vec![5]);
        let chain = flagged.values().next().unwrap();
        assert_eq!(chain.as_slice(), &[4, 3, 2, 1]);
    }

    #[test]
    fn test_flat_organization_clean() {
        let o = linear(2);
        let h = Hierarchy::resolve(&o).unwrap();
        assert!(long_reporting_lines(&h, 1).is_empty());
    }
}
