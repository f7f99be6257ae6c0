use crate::commands::{CmdResult, Listing};
use crate::error::Result;
use crate::model::EmployeeFilter;
use crate::store::DataStore;

pub fn employees<S: DataStore>(store: &mut S, filter: &EmployeeFilter) -> Result<CmdResult> {
    tracing::debug!(%filter, "listing employees");
    let rows = store.employee_details(filter)?;
    Ok(CmdResult::default().with_listing(Listing::Employees(rows)))
}

pub fn roles<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let rows = store.role_details()?;
    Ok(CmdResult::default().with_listing(Listing::Roles(rows)))
}

pub fn departments<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let rows = store.departments()?;
    Ok(CmdResult::default().with_listing(Listing::Departments(rows)))
}
