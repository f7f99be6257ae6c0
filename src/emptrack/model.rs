use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned primary key.
pub type Id = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Department {
    pub id: Id,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Role {
    pub id: Id,
    pub title: String,
    pub salary: Decimal,
    pub department_id: Id,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Employee {
    pub id: Id,
    pub first_name: String,
    pub last_name: String,
    pub role_id: Id,
    pub manager_id: Option<Id>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// An employee joined with role, department and manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct EmployeeDetail {
    pub id: Id,
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub department: String,
    pub salary: Decimal,
    pub manager: Option<String>,
}

/// A role joined with its department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct RoleDetail {
    pub id: Id,
    pub title: String,
    pub department: String,
    pub salary: Decimal,
}

/// Which employees a detail listing should include.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeFilter {
    All,
    RoleTitle(String),
    DepartmentName(String),
    Manager(Id),
}

impl fmt::Display for EmployeeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmployeeFilter::All => write!(f, "all"),
            EmployeeFilter::RoleTitle(title) => write!(f, "role '{}'", title),
            EmployeeFilter::DepartmentName(name) => write!(f, "department '{}'", name),
            EmployeeFilter::Manager(id) => write!(f, "manager #{}", id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub role_id: Id,
    pub manager_id: Option<Id>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRole {
    pub title: String,
    pub salary: Decimal,
    pub department_id: Id,
}

/// Full-row overwrite of an employee; empty names are written as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeUpdate {
    pub first_name: String,
    pub last_name: String,
    pub role_id: Id,
    pub manager_id: Option<Id>,
}
