//! # Reference Resolver
//!
//! Flows show people labels (names, titles) but the store wants ids.
//! [`Choices`] pairs every label with its value once per flow, so that a
//! selection maps straight back to the row it was built from.
//!
//! Labels are made unique on construction: when two rows render the same
//! text (two employees called "Sam Lee"), every colliding label gets an
//! ` (#id)` suffix. The menu then shows distinguishable entries and a label
//! lookup can never return the wrong row.

use crate::model::{Department, Employee, Id, Role};
use std::collections::{HashMap, HashSet};

/// Label shown for "no manager" in manager pickers.
pub const NO_MANAGER: &str = "--";

#[derive(Debug, Clone)]
pub struct Choices<T> {
    labels: Vec<String>,
    values: Vec<T>,
    by_label: HashMap<String, usize>,
}

impl<T: Clone> Choices<T> {
    /// Builds choices from `(label, id, value)` rows, in the given order.
    pub fn new(rows: Vec<(String, Id, T)>) -> Self {
        let mut seen = HashSet::new();
        let duplicated: HashSet<String> = rows
            .iter()
            .filter(|(label, _, _)| !seen.insert(label.clone()))
            .map(|(label, _, _)| label.clone())
            .collect();

        let mut labels = Vec::with_capacity(rows.len());
        let mut values = Vec::with_capacity(rows.len());
        for (label, id, value) in rows {
            if duplicated.contains(&label) {
                labels.push(format!("{} (#{})", label, id));
            } else {
                labels.push(label);
            }
            values.push(value);
        }

        let by_label = labels
            .iter()
            .enumerate()
            .map(|(i, label)| (label.clone(), i))
            .collect();

        Self {
            labels,
            values,
            by_label,
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The value behind a label from [`Choices::labels`].
    pub fn resolve(&self, label: &str) -> Option<T> {
        self.by_label
            .get(label)
            .and_then(|&i| self.values.get(i))
            .cloned()
    }
}

impl Choices<Id> {
    /// Roles labelled by title, sorted by title.
    pub fn roles(roles: &[Role]) -> Self {
        let mut rows: Vec<_> = roles
            .iter()
            .map(|r| (r.title.clone(), r.id, r.id))
            .collect();
        rows.sort_by(|a, b| a.0.cmp(&b.0));
        Self::new(rows)
    }

    /// Departments labelled by name, sorted by name.
    pub fn departments(departments: &[Department]) -> Self {
        let mut rows: Vec<_> = departments
            .iter()
            .map(|d| (d.name.clone(), d.id, d.id))
            .collect();
        rows.sort_by(|a, b| a.0.cmp(&b.0));
        Self::new(rows)
    }

    /// Employees labelled by full name, sorted by full name.
    pub fn employees(employees: &[Employee]) -> Self {
        Self::new(employee_rows(employees))
    }
}

impl Choices<Option<Id>> {
    /// Employees sorted by full name, preceded by the [`NO_MANAGER`] entry.
    pub fn managers_or_none(employees: &[Employee]) -> Self {
        let mut rows: Vec<(String, Id, Option<Id>)> = employee_rows(employees)
            .into_iter()
            .map(|(label, id, value)| (label, id, Some(value)))
            .collect();
        rows.insert(0, (NO_MANAGER.to_string(), 0, None));
        Self::new(rows)
    }
}

impl Choices<String> {
    /// Role titles, sorted. The value is the bare title used by the
    /// title filter, even when the label carries an id suffix.
    pub fn role_titles(roles: &[Role]) -> Self {
        let mut rows: Vec<_> = roles
            .iter()
            .map(|r| (r.title.clone(), r.id, r.title.clone()))
            .collect();
        rows.sort_by(|a, b| a.0.cmp(&b.0));
        Self::new(rows)
    }

    pub fn department_names(departments: &[Department]) -> Self {
        let mut rows: Vec<_> = departments
            .iter()
            .map(|d| (d.name.clone(), d.id, d.name.clone()))
            .collect();
        rows.sort_by(|a, b| a.0.cmp(&b.0));
        Self::new(rows)
    }
}

fn employee_rows(employees: &[Employee]) -> Vec<(String, Id, Id)> {
    let mut rows: Vec<_> = employees
        .iter()
        .map(|e| (e.full_name(), e.id, e.id))
        .collect();
    rows.sort_by(|a, b| a.0.cmp(&b.0));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn employee(id: Id, first: &str, last: &str) -> Employee {
        Employee {
            id,
            first_name: first.into(),
            last_name: last.into(),
            role_id: 1,
            manager_id: None,
        }
    }

    #[test]
    fn resolves_label_to_id() {
        let choices = Choices::employees(&[
            employee(7, "Ada", "Lovelace"),
            employee(3, "Alan", "Turing"),
        ]);
        assert_eq!(choices.resolve("Alan Turing"), Some(3));
        assert_eq!(choices.resolve("Nobody"), None);
    }

    #[test]
    fn sorts_by_label() {
        let choices = Choices::employees(&[employee(1, "Zed", "Z"), employee(2, "Amy", "A")]);
        assert_eq!(choices.labels(), ["Amy A", "Zed Z"]);
        assert_eq!(choices.resolve("Amy A"), Some(2));
    }

    #[test]
    fn colliding_labels_are_disambiguated() {
        let choices = Choices::employees(&[
            employee(4, "Sam", "Lee"),
            employee(9, "Sam", "Lee"),
            employee(5, "Kim", "Park"),
        ]);
        assert_eq!(choices.labels(), ["Kim Park", "Sam Lee (#4)", "Sam Lee (#9)"]);
        assert_eq!(choices.resolve("Sam Lee (#9)"), Some(9));
        assert_eq!(choices.resolve("Sam Lee"), None);
    }

    #[test]
    fn manager_choices_start_with_sentinel() {
        let choices = Choices::managers_or_none(&[employee(2, "Grace", "Hopper")]);
        assert_eq!(choices.labels()[0], NO_MANAGER);
        assert_eq!(choices.resolve(NO_MANAGER), Some(None));
        assert_eq!(choices.resolve("Grace Hopper"), Some(Some(2)));
    }

    #[test]
    fn roles_sorted_by_title() {
        let role = |id, title: &str| Role {
            id,
            title: title.into(),
            salary: Decimal::ZERO,
            department_id: 1,
        };
        let choices = Choices::roles(&[role(1, "Manager"), role(2, "Engineer")]);
        assert_eq!(choices.labels(), ["Engineer", "Manager"]);
        assert_eq!(choices.resolve("Manager"), Some(1));
    }

    #[test]
    fn department_names_keep_bare_value() {
        let dept = |id, name: &str| Department {
            id,
            name: name.into(),
        };
        let choices = Choices::department_names(&[dept(1, "Ops"), dept(2, "Ops")]);
        assert_eq!(choices.labels(), ["Ops (#1)", "Ops (#2)"]);
        assert_eq!(choices.resolve("Ops (#2)"), Some("Ops".to_string()));
    }

    #[test]
    fn empty_pool_resolves_nothing() {
        let choices = Choices::departments(&[]);
        assert!(choices.is_empty());
        assert_eq!(choices.resolve(""), None);
    }
}
