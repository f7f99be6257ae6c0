use crate::api::TrackerApi;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::flows::nothing_to_choose;
use crate::lookup::Choices;
use crate::model::{NewEmployee, NewRole};
use crate::prompt::{self, Prompter};
use crate::store::DataStore;

pub fn employee<S: DataStore, P: Prompter>(
    api: &mut TrackerApi<S>,
    ui: &mut P,
) -> Result<CmdResult> {
    let roles = Choices::roles(&api.roles()?);
    if roles.is_empty() {
        return Ok(nothing_to_choose("roles"));
    }
    let managers = Choices::managers_or_none(&api.employees()?);

    let first_name = ui.input_validated("What is the employee's first name?", &prompt::required)?;
    let last_name = ui.input_validated("What is the employee's last name?", &prompt::required)?;
    let role_id = ui.choose("What is the employee's role?", &roles)?;
    let manager_id = ui.choose("Who is the employee's manager?", &managers)?;

    api.add_employee(NewEmployee {
        first_name,
        last_name,
        role_id,
        manager_id,
    })
}

pub fn role<S: DataStore, P: Prompter>(api: &mut TrackerApi<S>, ui: &mut P) -> Result<CmdResult> {
    let departments = Choices::departments(&api.departments()?);
    if departments.is_empty() {
        return Ok(nothing_to_choose("departments"));
    }

    let title = ui.input_validated("What is the title of the role?", &prompt::required)?;
    let salary = ui.input_parsed("What is the salary of the role?", &prompt::parse_salary)?;
    let department_id = ui.choose("Which department does the role belong to?", &departments)?;

    api.add_role(NewRole {
        title,
        salary,
        department_id,
    })
}

pub fn department<S: DataStore, P: Prompter>(
    api: &mut TrackerApi<S>,
    ui: &mut P,
) -> Result<CmdResult> {
    let name = ui.input_validated("What is the name of the department?", &prompt::required)?;
    api.add_department(&name)
}
