//! Reference checks that gate deletes.
//!
//! A check returns [`Verdict::Blocked`] with operator guidance instead of an
//! error: a blocked delete is a normal outcome. Department checks look at
//! roles first and only then at employees reached through those roles, so the
//! guidance names the nearest blocking reference.

use crate::error::Result;
use crate::model::Id;
use crate::store::DataStore;

pub const ROLE_IN_USE: &str = "Cannot delete this role as there are employees associated with it. \
     Update or remove the employees with this role first.";
pub const DEPARTMENT_HAS_ROLES: &str =
    "Cannot delete this department as there are roles associated with it. Remove the roles first.";
pub const DEPARTMENT_HAS_EMPLOYEES: &str = "Cannot delete this department as there are employees \
     associated with it. Remove the employees first.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Clear,
    Blocked { references: u64, guidance: &'static str },
}

impl Verdict {
    pub fn is_clear(&self) -> bool {
        matches!(self, Verdict::Clear)
    }
}

pub fn check_role<S: DataStore>(store: &mut S, role_id: Id) -> Result<Verdict> {
    let employees = store.count_employees_with_role(role_id)?;
    if employees > 0 {
        tracing::warn!(role_id, employees, "role delete blocked");
        return Ok(Verdict::Blocked {
            references: employees,
            guidance: ROLE_IN_USE,
        });
    }
    Ok(Verdict::Clear)
}

pub fn check_department<S: DataStore>(store: &mut S, department_id: Id) -> Result<Verdict> {
    let roles = store.count_roles_in_department(department_id)?;
    if roles > 0 {
        tracing::warn!(department_id, roles, "department delete blocked by roles");
        return Ok(Verdict::Blocked {
            references: roles,
            guidance: DEPARTMENT_HAS_ROLES,
        });
    }

    let employees = store.count_employees_in_department(department_id)?;
    if employees > 0 {
        tracing::warn!(department_id, employees, "department delete blocked by employees");
        return Ok(Verdict::Blocked {
            references: employees,
            guidance: DEPARTMENT_HAS_EMPLOYEES,
        });
    }
    Ok(Verdict::Clear)
}
