use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{NewEmployee, NewRole};
use crate::store::DataStore;

pub fn employee<S: DataStore>(store: &mut S, employee: NewEmployee) -> Result<CmdResult> {
    let id = store.insert_employee(&employee)?;
    tracing::info!(id, "employee added");
    Ok(CmdResult::default()
        .with_affected_rows(1)
        .with_message(CmdMessage::success(format!(
            "EMPLOYEE {} {} ADDED...",
            employee.first_name, employee.last_name
        ))))
}

pub fn role<S: DataStore>(store: &mut S, role: NewRole) -> Result<CmdResult> {
    let id = store.insert_role(&role)?;
    tracing::info!(id, "role added");
    Ok(CmdResult::default()
        .with_affected_rows(1)
        .with_message(CmdMessage::success(format!("ROLE {} ADDED...", role.title))))
}

pub fn department<S: DataStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    let id = store.insert_department(name)?;
    tracing::info!(id, "department added");
    Ok(CmdResult::default()
        .with_affected_rows(1)
        .with_message(CmdMessage::success(format!("DEPARTMENT {} ADDED...", name))))
}
