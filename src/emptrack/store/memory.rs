use super::DataStore;
use crate::error::{Result, TrackerError};
use crate::model::{
    Department, Employee, EmployeeDetail, EmployeeFilter, EmployeeUpdate, Id, NewEmployee,
    NewRole, Role, RoleDetail,
};
use std::collections::HashSet;

/// Vec-backed store that mirrors the SQL store's joins and ordering.
///
/// Rows are kept in insertion order, which is id order because ids are
/// handed out from a single increasing counter per table.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    employees: Vec<Employee>,
    roles: Vec<Role>,
    departments: Vec<Department>,
    next_employee_id: Id,
    next_role_id: Id,
    next_department_id: Id,
    unavailable: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// When set, every call fails with a query error.
    pub fn set_unavailable(&mut self, unavailable: bool) {
        self.unavailable = unavailable;
    }

    fn check(&self, operation: &str) -> Result<()> {
        if self.unavailable {
            return Err(TrackerError::Query(format!(
                "{}: store unavailable",
                operation
            )));
        }
        Ok(())
    }

    fn next_id(counter: &mut Id) -> Id {
        *counter += 1;
        *counter
    }

    fn detail_for(&self, employee: &Employee) -> Option<EmployeeDetail> {
        // Inner joins: rows with a dangling role or department drop out.
        let role = self.roles.iter().find(|r| r.id == employee.role_id)?;
        let department = self
            .departments
            .iter()
            .find(|d| d.id == role.department_id)?;
        let manager = employee
            .manager_id
            .and_then(|id| self.employees.iter().find(|m| m.id == id))
            .map(Employee::full_name);

        Some(EmployeeDetail {
            id: employee.id,
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            title: role.title.clone(),
            department: department.name.clone(),
            salary: role.salary,
            manager,
        })
    }

    fn employee_mut(&mut self, id: Id) -> Option<&mut Employee> {
        self.employees.iter_mut().find(|e| e.id == id)
    }
}

fn remove_where<T>(rows: &mut Vec<T>, matches: impl Fn(&T) -> bool) -> u64 {
    let before = rows.len();
    rows.retain(|row| !matches(row));
    (before - rows.len()) as u64
}

impl DataStore for InMemoryStore {
    fn employees(&mut self) -> Result<Vec<Employee>> {
        self.check("list employees")?;
        Ok(self.employees.clone())
    }

    fn roles(&mut self) -> Result<Vec<Role>> {
        self.check("list roles")?;
        Ok(self.roles.clone())
    }

    fn departments(&mut self) -> Result<Vec<Department>> {
        self.check("list departments")?;
        Ok(self.departments.clone())
    }

    fn managers(&mut self) -> Result<Vec<Employee>> {
        self.check("list managers")?;
        let manager_ids: HashSet<Id> = self.employees.iter().filter_map(|e| e.manager_id).collect();
        Ok(self
            .employees
            .iter()
            .filter(|e| manager_ids.contains(&e.id))
            .cloned()
            .collect())
    }

    fn top_level_employees(&mut self) -> Result<Vec<Employee>> {
        self.check("list top-level employees")?;
        Ok(self
            .employees
            .iter()
            .filter(|e| e.manager_id.is_none())
            .cloned()
            .collect())
    }

    fn employee_details(&mut self, filter: &EmployeeFilter) -> Result<Vec<EmployeeDetail>> {
        self.check("list employee details")?;
        Ok(self
            .employees
            .iter()
            .filter(|e| match filter {
                EmployeeFilter::Manager(id) => e.manager_id == Some(*id),
                _ => true,
            })
            .filter_map(|e| self.detail_for(e))
            .filter(|d| match filter {
                EmployeeFilter::RoleTitle(title) => &d.title == title,
                EmployeeFilter::DepartmentName(name) => &d.department == name,
                _ => true,
            })
            .collect())
    }

    fn role_details(&mut self) -> Result<Vec<RoleDetail>> {
        self.check("list role details")?;
        Ok(self
            .roles
            .iter()
            .filter_map(|r| {
                self.departments
                    .iter()
                    .find(|d| d.id == r.department_id)
                    .map(|d| RoleDetail {
                        id: r.id,
                        title: r.title.clone(),
                        department: d.name.clone(),
                        salary: r.salary,
                    })
            })
            .collect())
    }

    fn insert_employee(&mut self, employee: &NewEmployee) -> Result<Id> {
        self.check("insert employee")?;
        let id = Self::next_id(&mut self.next_employee_id);
        self.employees.push(Employee {
            id,
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            role_id: employee.role_id,
            manager_id: employee.manager_id,
        });
        Ok(id)
    }

    fn insert_role(&mut self, role: &NewRole) -> Result<Id> {
        self.check("insert role")?;
        let id = Self::next_id(&mut self.next_role_id);
        self.roles.push(Role {
            id,
            title: role.title.clone(),
            salary: role.salary,
            department_id: role.department_id,
        });
        Ok(id)
    }

    fn insert_department(&mut self, name: &str) -> Result<Id> {
        self.check("insert department")?;
        let id = Self::next_id(&mut self.next_department_id);
        self.departments.push(Department {
            id,
            name: name.to_string(),
        });
        Ok(id)
    }

    fn update_employee(&mut self, id: Id, update: &EmployeeUpdate) -> Result<u64> {
        self.check("update employee")?;
        Ok(match self.employee_mut(id) {
            Some(employee) => {
                employee.first_name = update.first_name.clone();
                employee.last_name = update.last_name.clone();
                employee.role_id = update.role_id;
                employee.manager_id = update.manager_id;
                1
            }
            None => 0,
        })
    }

    fn set_employee_role(&mut self, id: Id, role_id: Id) -> Result<u64> {
        self.check("update employee role")?;
        Ok(match self.employee_mut(id) {
            Some(employee) => {
                employee.role_id = role_id;
                1
            }
            None => 0,
        })
    }

    fn set_employee_manager(&mut self, id: Id, manager_id: Option<Id>) -> Result<u64> {
        self.check("update employee manager")?;
        Ok(match self.employee_mut(id) {
            Some(employee) => {
                employee.manager_id = manager_id;
                1
            }
            None => 0,
        })
    }

    fn delete_employee(&mut self, id: Id) -> Result<u64> {
        self.check("delete employee")?;
        Ok(remove_where(&mut self.employees, |e| e.id == id))
    }

    fn delete_role(&mut self, id: Id) -> Result<u64> {
        self.check("delete role")?;
        Ok(remove_where(&mut self.roles, |r| r.id == id))
    }

    fn delete_department(&mut self, id: Id) -> Result<u64> {
        self.check("delete department")?;
        Ok(remove_where(&mut self.departments, |d| d.id == id))
    }

    fn count_employees_with_role(&mut self, role_id: Id) -> Result<u64> {
        self.check("count employees with role")?;
        Ok(self.employees.iter().filter(|e| e.role_id == role_id).count() as u64)
    }

    fn count_roles_in_department(&mut self, department_id: Id) -> Result<u64> {
        self.check("count roles in department")?;
        Ok(self
            .roles
            .iter()
            .filter(|r| r.department_id == department_id)
            .count() as u64)
    }

    fn count_employees_in_department(&mut self, department_id: Id) -> Result<u64> {
        self.check("count employees in department")?;
        let role_ids: HashSet<Id> = self
            .roles
            .iter()
            .filter(|r| r.department_id == department_id)
            .map(|r| r.id)
            .collect();
        Ok(self
            .employees
            .iter()
            .filter(|e| role_ids.contains(&e.role_id))
            .count() as u64)
    }

    fn count_direct_reports(&mut self, manager_id: Id) -> Result<u64> {
        self.check("count direct reports")?;
        Ok(self
            .employees
            .iter()
            .filter(|e| e.manager_id == Some(manager_id))
            .count() as u64)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use rust_decimal::Decimal;

    /// Builder for a populated store, referring to rows by name.
    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_department(mut self, name: &str) -> Self {
            self.store.insert_department(name).unwrap();
            self
        }

        pub fn with_role(mut self, title: &str, salary: i64, department: &str) -> Self {
            let department_id = self.department_id(department);
            self.store
                .insert_role(&NewRole {
                    title: title.to_string(),
                    salary: Decimal::from(salary),
                    department_id,
                })
                .unwrap();
            self
        }

        /// `manager` is a full name ("Grace Hopper") of an existing employee.
        pub fn with_employee(
            mut self,
            first: &str,
            last: &str,
            role: &str,
            manager: Option<&str>,
        ) -> Self {
            let role_id = self.role_id(role);
            let manager_id = manager.map(|name| self.employee_id(name));
            self.store
                .insert_employee(&NewEmployee {
                    first_name: first.to_string(),
                    last_name: last.to_string(),
                    role_id,
                    manager_id,
                })
                .unwrap();
            self
        }

        pub fn department_id(&self, name: &str) -> Id {
            self.store
                .departments
                .iter()
                .find(|d| d.name == name)
                .map(|d| d.id)
                .unwrap_or_else(|| panic!("no department {}", name))
        }

        pub fn role_id(&self, title: &str) -> Id {
            self.store
                .roles
                .iter()
                .find(|r| r.title == title)
                .map(|r| r.id)
                .unwrap_or_else(|| panic!("no role {}", title))
        }

        pub fn employee_id(&self, full_name: &str) -> Id {
            self.store
                .employees
                .iter()
                .find(|e| e.full_name() == full_name)
                .map(|e| e.id)
                .unwrap_or_else(|| panic!("no employee {}", full_name))
        }
    }

    /// Engineering, Sales and an empty Legal department; Ada and Alan report to Grace.
    pub fn company() -> StoreFixture {
        StoreFixture::new()
            .with_department("Engineering")
            .with_department("Sales")
            .with_department("Legal")
            .with_role("Engineer", 50000, "Engineering")
            .with_role("Lead Engineer", 90000, "Engineering")
            .with_role("Salesperson", 40000, "Sales")
            .with_employee("Grace", "Hopper", "Lead Engineer", None)
            .with_employee("Ada", "Lovelace", "Engineer", Some("Grace Hopper"))
            .with_employee("Alan", "Turing", "Engineer", Some("Grace Hopper"))
            .with_employee("Mary", "Jackson", "Salesperson", None)
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{company, StoreFixture};
    use super::*;

    #[test]
    fn ids_increase_per_table() {
        let mut store = InMemoryStore::new();
        assert_eq!(store.insert_department("A").unwrap(), 1);
        assert_eq!(store.insert_department("B").unwrap(), 2);
        assert_eq!(
            store
                .insert_role(&NewRole {
                    title: "R".into(),
                    salary: 1.into(),
                    department_id: 1,
                })
                .unwrap(),
            1
        );
    }

    #[test]
    fn details_join_role_department_and_manager() {
        let mut fx = company();
        let rows = fx.store.employee_details(&EmployeeFilter::All).unwrap();

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].manager, None);
        assert_eq!(rows[1].first_name, "Ada");
        assert_eq!(rows[1].title, "Engineer");
        assert_eq!(rows[1].department, "Engineering");
        assert_eq!(rows[1].manager.as_deref(), Some("Grace Hopper"));
    }

    #[test]
    fn details_are_ordered_by_id() {
        let mut fx = company();
        let ids: Vec<Id> = fx
            .store
            .employee_details(&EmployeeFilter::All)
            .unwrap()
            .iter()
            .map(|d| d.id)
            .collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn filters_by_department_name() {
        let mut fx = company();
        let rows = fx
            .store
            .employee_details(&EmployeeFilter::DepartmentName("Sales".into()))
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].last_name, "Jackson");
    }

    #[test]
    fn managers_are_distinct() {
        let mut fx = company();
        let managers = fx.store.managers().unwrap();
        assert_eq!(managers.len(), 1);
        assert_eq!(managers[0].full_name(), "Grace Hopper");
    }

    #[test]
    fn counts_employees_through_roles() {
        let mut fx = company();
        let engineering = fx.department_id("Engineering");
        let legal = fx.department_id("Legal");
        assert_eq!(fx.store.count_employees_in_department(engineering).unwrap(), 3);
        assert_eq!(fx.store.count_employees_in_department(legal).unwrap(), 0);
        assert_eq!(fx.store.count_roles_in_department(engineering).unwrap(), 2);
    }

    #[test]
    fn delete_reports_affected_rows() {
        let mut fx = StoreFixture::new().with_department("Ops");
        let id = fx.department_id("Ops");
        assert_eq!(fx.store.delete_department(id).unwrap(), 1);
        assert_eq!(fx.store.delete_department(id).unwrap(), 0);
    }

    #[test]
    fn unavailable_store_fails_every_call() {
        let mut store = InMemoryStore::new();
        store.set_unavailable(true);
        assert!(matches!(store.roles(), Err(TrackerError::Query(_))));
        assert!(matches!(
            store.insert_department("X"),
            Err(TrackerError::Query(_))
        ));
    }
}
