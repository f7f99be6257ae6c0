//! # Storage Layer
//!
//! The [`DataStore`] trait is the data access layer: every read and write the
//! application issues against the `employee`, `role` and `department` tables.
//!
//! ## Implementations
//!
//! - [`mysql::MySqlStore`]: production store over a single long-lived MySQL
//!   connection. Each call blocks until the driver answers.
//! - [`memory::InMemoryStore`]: table-per-`Vec` store for tests, with the same
//!   ordering and join semantics as the SQL queries.
//!
//! ## Conventions
//!
//! - Listing calls return rows ordered by the primary entity's id, ascending.
//! - Every value that reaches a statement is bound as a parameter.
//! - Mutations return the number of affected rows, inserts the new id.
//! - No call checks referential integrity; that is the guard's job
//!   (see [`crate::commands::guard`]).
//!
//! All methods take `&mut self` because the MySQL store owns a single
//! connection that needs exclusive access per statement.

use crate::error::Result;
use crate::model::{
    Department, Employee, EmployeeDetail, EmployeeFilter, EmployeeUpdate, Id, NewEmployee,
    NewRole, Role, RoleDetail,
};

pub mod memory;
pub mod mysql;

pub trait DataStore {
    /// All employees, by id.
    fn employees(&mut self) -> Result<Vec<Employee>>;

    /// All roles, by id.
    fn roles(&mut self) -> Result<Vec<Role>>;

    /// All departments, by id.
    fn departments(&mut self) -> Result<Vec<Department>>;

    /// Employees referenced by at least one `manager_id`, one row per manager id.
    fn managers(&mut self) -> Result<Vec<Employee>>;

    /// Employees with no manager of their own.
    fn top_level_employees(&mut self) -> Result<Vec<Employee>>;

    /// Employees joined with role, department and manager name.
    fn employee_details(&mut self, filter: &EmployeeFilter) -> Result<Vec<EmployeeDetail>>;

    /// Roles joined with their department name.
    fn role_details(&mut self) -> Result<Vec<RoleDetail>>;

    fn insert_employee(&mut self, employee: &NewEmployee) -> Result<Id>;

    fn insert_role(&mut self, role: &NewRole) -> Result<Id>;

    fn insert_department(&mut self, name: &str) -> Result<Id>;

    fn update_employee(&mut self, id: Id, update: &EmployeeUpdate) -> Result<u64>;

    fn set_employee_role(&mut self, id: Id, role_id: Id) -> Result<u64>;

    fn set_employee_manager(&mut self, id: Id, manager_id: Option<Id>) -> Result<u64>;

    fn delete_employee(&mut self, id: Id) -> Result<u64>;

    fn delete_role(&mut self, id: Id) -> Result<u64>;

    fn delete_department(&mut self, id: Id) -> Result<u64>;

    fn count_employees_with_role(&mut self, role_id: Id) -> Result<u64>;

    fn count_roles_in_department(&mut self, department_id: Id) -> Result<u64>;

    /// Employees whose role belongs to the department.
    fn count_employees_in_department(&mut self, department_id: Id) -> Result<u64>;

    fn count_direct_reports(&mut self, manager_id: Id) -> Result<u64>;
}
