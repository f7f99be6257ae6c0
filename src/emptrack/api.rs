//! # API Facade
//!
//! A thin facade over the command layer and the single entry point the
//! interactive flows use. It owns the store for the whole session.
//!
//! ## Role and Responsibilities
//!
//! - **Dispatches** to the command function for each operation
//! - **Exposes selection pools** (all roles, all employees, managers...) that
//!   flows turn into [`Choices`](crate::lookup::Choices)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! No business logic and no I/O lives here.
//!
//! ## Generic Over DataStore
//!
//! - Production: `TrackerApi<MySqlStore>`
//! - Testing: `TrackerApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::{
    Department, Employee, EmployeeFilter, EmployeeUpdate, Id, NewEmployee, NewRole, Role,
};
use crate::store::DataStore;

pub struct TrackerApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> TrackerApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Gives the store back, e.g. to close its connection.
    pub fn into_store(self) -> S {
        self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    // --- listings ---

    pub fn view_employees(&mut self, filter: &EmployeeFilter) -> Result<CmdResult> {
        commands::view::employees(&mut self.store, filter)
    }

    pub fn view_roles(&mut self) -> Result<CmdResult> {
        commands::view::roles(&mut self.store)
    }

    pub fn view_departments(&mut self) -> Result<CmdResult> {
        commands::view::departments(&mut self.store)
    }

    // --- selection pools ---

    pub fn employees(&mut self) -> Result<Vec<Employee>> {
        self.store.employees()
    }

    pub fn roles(&mut self) -> Result<Vec<Role>> {
        self.store.roles()
    }

    pub fn departments(&mut self) -> Result<Vec<Department>> {
        self.store.departments()
    }

    pub fn managers(&mut self) -> Result<Vec<Employee>> {
        self.store.managers()
    }

    pub fn top_level_employees(&mut self) -> Result<Vec<Employee>> {
        self.store.top_level_employees()
    }

    // --- mutations ---

    pub fn add_employee(&mut self, employee: NewEmployee) -> Result<CmdResult> {
        commands::create::employee(&mut self.store, employee)
    }

    pub fn add_role(&mut self, role: NewRole) -> Result<CmdResult> {
        commands::create::role(&mut self.store, role)
    }

    pub fn add_department(&mut self, name: &str) -> Result<CmdResult> {
        commands::create::department(&mut self.store, name)
    }

    pub fn update_employee(&mut self, id: Id, update: EmployeeUpdate) -> Result<CmdResult> {
        commands::update::employee(&mut self.store, id, update)
    }

    pub fn update_employee_role(
        &mut self,
        id: Id,
        role_id: Id,
        employee: &str,
        role: &str,
    ) -> Result<CmdResult> {
        commands::update::role(&mut self.store, id, role_id, employee, role)
    }

    pub fn update_employee_manager(
        &mut self,
        id: Id,
        manager_id: Option<Id>,
        employee: &str,
        manager: &str,
    ) -> Result<CmdResult> {
        commands::update::manager(&mut self.store, id, manager_id, employee, manager)
    }

    pub fn delete_employee(&mut self, id: Id) -> Result<CmdResult> {
        commands::delete::employee(&mut self.store, id)
    }

    pub fn delete_role(&mut self, id: Id) -> Result<CmdResult> {
        commands::delete::role(&mut self.store, id)
    }

    pub fn delete_department(&mut self, id: Id) -> Result<CmdResult> {
        commands::delete::department(&mut self.store, id)
    }
}

pub use crate::commands::{CmdMessage, CmdResult, Listing, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::company;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn add_department_dispatches_to_store() {
        let mut api = TrackerApi::new(InMemoryStore::new());
        let result = api.add_department("Finance").unwrap();

        assert_eq!(result.affected_rows, 1);
        assert_eq!(api.departments().unwrap()[0].name, "Finance");
    }

    #[test]
    fn view_employees_returns_listing() {
        let mut api = TrackerApi::new(company().store);
        let result = api.view_employees(&EmployeeFilter::All).unwrap();
        assert!(matches!(result.listing, Some(Listing::Employees(rows)) if rows.len() == 4));
    }

    #[test]
    fn pools_expose_managers_and_top_level() {
        let mut api = TrackerApi::new(company().store);
        let managers: Vec<String> = api
            .managers()
            .unwrap()
            .iter()
            .map(Employee::full_name)
            .collect();
        let top: Vec<String> = api
            .top_level_employees()
            .unwrap()
            .iter()
            .map(Employee::full_name)
            .collect();

        assert_eq!(managers, ["Grace Hopper"]);
        assert_eq!(top, ["Grace Hopper", "Mary Jackson"]);
    }

    #[test]
    fn delete_role_goes_through_guard() {
        let fx = company();
        let engineer = fx.role_id("Engineer");
        let mut api = TrackerApi::new(fx.store);

        let result = api.delete_role(engineer).unwrap();

        assert_eq!(result.affected_rows, 0);
        assert_eq!(api.roles().unwrap().len(), 3);
    }
}
