// tests/unit_hierarchy.rs
//! Structural checks and chain construction through the public API.

use orgcheck_core::error::OrgError;
use orgcheck_core::hierarchy::Hierarchy;
use orgcheck_core::model::{Employee, EmployeeId, Organization};

fn emp(id: EmployeeId, manager: Option<EmployeeId>) -> Employee {
    Employee::new(id, "First", "Last", 50_000, manager).unwrap()
}

fn org(list: &[(EmployeeId, Option<EmployeeId>)]) -> Organization {
    Organization::from_employees(list.iter().map(|&(id, m)| emp(id, m))).unwrap()
}

#[test]
fn test_invalid_root_lists_candidates() {
    let cases: Vec<(Vec<(EmployeeId, Option<EmployeeId>)>, Vec<EmployeeId>, &str)> = vec![
        (vec![(1, Some(2)), (2, Some(1))], vec![], "No root"),
        (vec![(1, None), (2, None), (3, Some(1))], vec![1, 2], "Two roots"),
        (vec![(9, None), (4, None), (6, None)], vec![4, 6, 9], "Everyone is a root"),
    ];

    for (list, expected, desc) in cases {
        let o = org(&list);
        match Hierarchy::resolve(&o) {
            Err(OrgError::InvalidRoot { candidates }) => {
                assert_eq!(candidates, expected, "Failed: {desc}");
            }
            other => panic!("Failed: {desc}: {other:?}"),
        }
    }
}

#[test]
fn test_empty_organization_has_no_root() {
    let o = Organization::new();
    assert!(matches!(
        Hierarchy::resolve(&o),
        Err(OrgError::InvalidRoot { ref candidates }) if candidates.is_empty()
    ));
}

#[test]
fn test_unresolved_manager_names_both_ids() {
    let o = org(&[(1, None), (2, Some(1)), (999, Some(-1))]);
    let err = Hierarchy::resolve(&o).unwrap_err();
    assert!(matches!(
        err,
        OrgError::UnresolvedManager { manager_id: -1, employee_id: 999 }
    ));
    let msg = err.to_string();
    assert!(msg.contains("-1") && msg.contains("999"));
}

#[test]
fn test_cycle_away_from_root() {
    // A -> B -> C -> A, with a valid root elsewhere.
    let o = org(&[(1, None), (2, Some(1)), (10, Some(11)), (11, Some(12)), (12, Some(10))]);
    let err = Hierarchy::resolve(&o).unwrap_err();
    match err {
        OrgError::CycleDetected { employee_id, path } => {
            assert_eq!(employee_id, 10);
            assert_eq!(path, vec![11, 12, 10]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_linear_chain() {
    // root <- M1 <- M2 <- M3 <- E
    let o = org(&[(1, None), (2, Some(1)), (3, Some(2)), (4, Some(3)), (5, Some(4))]);
    let h = Hierarchy::resolve(&o).unwrap();
    assert_eq!(h.chain(5).unwrap().as_slice(), &[4, 3, 2, 1]);
    assert!(h.chain(1).unwrap().is_empty());
    assert_eq!(h.chain(2).unwrap().as_slice(), &[1]);
}

#[test]
fn test_insertion_order_irrelevant() {
    let forward = [(1, None), (2, Some(1)), (3, Some(2)), (4, Some(2))];
    let mut backward = forward;
    backward.reverse();

    let a = org(&forward);
    let b = org(&backward);
    let ha = Hierarchy::resolve(&a).unwrap();
    let hb = Hierarchy::resolve(&b).unwrap();

    for id in 1..=4 {
        assert_eq!(ha.chain(id), hb.chain(id));
    }
}

#[test]
fn test_duplicate_rejected_on_second_insert() {
    let mut o = Organization::new();
    assert!(o.add_employee(emp(1, None)).is_ok());
    assert!(matches!(
        o.add_employee(emp(1, None)),
        Err(OrgError::DuplicateEmployee { id: 1 })
    ));
}
