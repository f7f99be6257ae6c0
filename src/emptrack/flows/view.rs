use crate::api::TrackerApi;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::flows::nothing_to_choose;
use crate::lookup::Choices;
use crate::model::EmployeeFilter;
use crate::prompt::Prompter;
use crate::store::DataStore;

pub fn all_employees<S: DataStore>(api: &mut TrackerApi<S>) -> Result<CmdResult> {
    api.view_employees(&EmployeeFilter::All)
}

pub fn all_roles<S: DataStore>(api: &mut TrackerApi<S>) -> Result<CmdResult> {
    api.view_roles()
}

pub fn all_departments<S: DataStore>(api: &mut TrackerApi<S>) -> Result<CmdResult> {
    api.view_departments()
}

pub fn employees_by_role<S: DataStore, P: Prompter>(
    api: &mut TrackerApi<S>,
    ui: &mut P,
) -> Result<CmdResult> {
    let choices = Choices::role_titles(&api.roles()?);
    if choices.is_empty() {
        return Ok(nothing_to_choose("roles"));
    }
    let title = ui.choose("Which role would you like to view?", &choices)?;
    api.view_employees(&EmployeeFilter::RoleTitle(title))
}

pub fn employees_by_department<S: DataStore, P: Prompter>(
    api: &mut TrackerApi<S>,
    ui: &mut P,
) -> Result<CmdResult> {
    let choices = Choices::department_names(&api.departments()?);
    if choices.is_empty() {
        return Ok(nothing_to_choose("departments"));
    }
    let name = ui.choose("Which department would you like to view?", &choices)?;
    api.view_employees(&EmployeeFilter::DepartmentName(name))
}

pub fn employees_by_manager<S: DataStore, P: Prompter>(
    api: &mut TrackerApi<S>,
    ui: &mut P,
) -> Result<CmdResult> {
    let choices = Choices::employees(&api.managers()?);
    if choices.is_empty() {
        return Ok(nothing_to_choose("managers"));
    }
    let manager = ui.choose("Whose team would you like to view?", &choices)?;
    api.view_employees(&EmployeeFilter::Manager(manager))
}
