use crate::api::TrackerApi;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::flows::nothing_to_choose;
use crate::lookup::Choices;
use crate::prompt::Prompter;
use crate::store::DataStore;

pub fn employee<S: DataStore, P: Prompter>(
    api: &mut TrackerApi<S>,
    ui: &mut P,
) -> Result<CmdResult> {
    let employees = Choices::employees(&api.employees()?);
    if employees.is_empty() {
        return Ok(nothing_to_choose("employees"));
    }
    let id = ui.choose("Which employee do you want to delete?", &employees)?;
    api.delete_employee(id)
}

pub fn role<S: DataStore, P: Prompter>(api: &mut TrackerApi<S>, ui: &mut P) -> Result<CmdResult> {
    let roles = Choices::roles(&api.roles()?);
    if roles.is_empty() {
        return Ok(nothing_to_choose("roles"));
    }
    let id = ui.choose("Which role do you want to delete?", &roles)?;
    api.delete_role(id)
}

pub fn department<S: DataStore, P: Prompter>(
    api: &mut TrackerApi<S>,
    ui: &mut P,
) -> Result<CmdResult> {
    let departments = Choices::departments(&api.departments()?);
    if departments.is_empty() {
        return Ok(nothing_to_choose("departments"));
    }
    let id = ui.choose("Which department do you want to delete?", &departments)?;
    api.delete_department(id)
}
