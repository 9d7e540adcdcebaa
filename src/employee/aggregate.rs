//! Derived views computed over one collection snapshot.
//!
//! The upstream offers no filtering, sorting or aggregation, so every query
//! here reduces a full in-memory snapshot. An empty snapshot is valid input
//! for all of them.

use crate::employee::model::Employee;

/// Number of names returned by the top earners query.
pub const TOP_EARNERS_LIMIT: usize = 10;

/// Case-insensitive substring match on name, in snapshot order.
pub fn search_by_name(employees: Vec<Employee>, fragment: &str) -> Vec<Employee> {
    let needle = fragment.to_lowercase();
    employees
        .into_iter()
        .filter(|e| e.name.to_lowercase().contains(&needle))
        .collect()
}

/// Maximum salary, or 0 for an empty snapshot.
pub fn highest_salary(employees: &[Employee]) -> u64 {
    employees.iter().map(|e| e.salary).max().unwrap_or(0)
}

/// Names of the `n` highest earners, salary descending.
///
/// Equal salaries keep their snapshot order (`sort_by` is stable). Fewer
/// than `n` employees yields all of them.
pub fn top_earner_names(mut employees: Vec<Employee>, n: usize) -> Vec<String> {
    employees.sort_by(|a, b| b.salary.cmp(&a.salary));
    employees.into_iter().take(n).map(|e| e.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: &str, name: &str, salary: u64) -> Employee {
        Employee {
            id: id.to_string(),
            name: name.to_string(),
            salary,
            age: 30,
            title: "Engineer".to_string(),
            email: format!("{id}@company.com"),
        }
    }

    fn ann_and_bo() -> Vec<Employee> {
        vec![employee("1", "Ann", 1000), employee("2", "Bo", 2000)]
    }

    #[test]
    fn test_two_employee_snapshot() {
        assert_eq!(highest_salary(&ann_and_bo()), 2000);
        assert_eq!(top_earner_names(ann_and_bo(), 1), ["Bo"]);

        let found = search_by_name(ann_and_bo(), "an");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "1");
    }

    #[test]
    fn test_empty_snapshot_is_not_an_error() {
        assert_eq!(highest_salary(&[]), 0);
        assert!(top_earner_names(Vec::new(), TOP_EARNERS_LIMIT).is_empty());
        assert!(search_by_name(Vec::new(), "x").is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_and_complete() {
        let snapshot = vec![
            employee("1", "Annabel Lee", 1),
            employee("2", "JOANNA", 2),
            employee("3", "Bob", 3),
            employee("4", "hannah", 4),
        ];
        let found: Vec<String> = search_by_name(snapshot.clone(), "AnN")
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(found, ["1", "2", "4"]);

        // Same predicate applied outside yields the same set.
        let expected: Vec<String> = snapshot
            .into_iter()
            .filter(|e| e.name.to_lowercase().contains("ann"))
            .map(|e| e.id)
            .collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_search_without_matches_is_empty() {
        assert!(search_by_name(ann_and_bo(), "zed").is_empty());
    }

    #[test]
    fn test_empty_fragment_matches_everything() {
        assert_eq!(search_by_name(ann_and_bo(), "").len(), 2);
    }

    #[test]
    fn test_top_earners_ties_keep_snapshot_order() {
        let snapshot = vec![
            employee("1", "First", 500),
            employee("2", "Rich", 900),
            employee("3", "Second", 500),
            employee("4", "Third", 500),
        ];
        assert_eq!(
            top_earner_names(snapshot, 3),
            ["Rich", "First", "Second"]
        );
    }

    #[test]
    fn test_top_earners_length_is_min_of_n_and_len() {
        let snapshot: Vec<Employee> = (0..15)
            .map(|i| employee(&i.to_string(), &format!("E{i}"), i * 100))
            .collect();

        for n in [0, 1, 10, 15, 40] {
            let names = top_earner_names(snapshot.clone(), n);
            assert_eq!(names.len(), n.min(snapshot.len()));
        }

        let top = top_earner_names(snapshot, TOP_EARNERS_LIMIT);
        assert_eq!(top.first().map(String::as_str), Some("E14"));
        assert_eq!(top.last().map(String::as_str), Some("E5"));
    }
}
