use crate::api::TrackerApi;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::flows::nothing_to_choose;
use crate::lookup::Choices;
use crate::model::{EmployeeUpdate, Id};
use crate::prompt::Prompter;
use crate::store::DataStore;

/// Full-row edit. Name prompts accept empty input; the manager pool is
/// limited to employees without a manager of their own.
pub fn employee<S: DataStore, P: Prompter>(
    api: &mut TrackerApi<S>,
    ui: &mut P,
) -> Result<CmdResult> {
    let employees = Choices::employees(&api.employees()?);
    if employees.is_empty() {
        return Ok(nothing_to_choose("employees"));
    }
    let roles = Choices::roles(&api.roles()?);
    if roles.is_empty() {
        return Ok(nothing_to_choose("roles"));
    }
    let managers = Choices::employees(&api.top_level_employees()?);
    if managers.is_empty() {
        return Ok(nothing_to_choose("managers"));
    }

    let id = ui.choose("Which employee would you like to update?", &employees)?;
    let first_name = ui.input("What is the employee's new first name?")?;
    let last_name = ui.input("What is the employee's new last name?")?;
    let role_id = ui.choose("What is the employee's new role?", &roles)?;
    let manager_id = ui.choose("Who is the employee's new manager?", &managers)?;

    api.update_employee(
        id,
        EmployeeUpdate {
            first_name,
            last_name,
            role_id,
            manager_id: Some(manager_id),
        },
    )
}

pub fn role<S: DataStore, P: Prompter>(api: &mut TrackerApi<S>, ui: &mut P) -> Result<CmdResult> {
    let employees = Choices::employees(&api.employees()?);
    if employees.is_empty() {
        return Ok(nothing_to_choose("employees"));
    }
    let (label, id) =
        ui.choose_labelled("Which employee's role do you want to update?", &employees)?;
    role_for(api, ui, id, &label)
}

fn role_for<S: DataStore, P: Prompter>(
    api: &mut TrackerApi<S>,
    ui: &mut P,
    id: Id,
    employee: &str,
) -> Result<CmdResult> {
    let roles = Choices::roles(&api.roles()?);
    let (role, role_id) = ui.choose_labelled("Which role do you want to assign?", &roles)?;
    api.update_employee_role(id, role_id, employee, &role)
}

/// Any employee may become the manager here, not only top-level ones.
pub fn manager<S: DataStore, P: Prompter>(
    api: &mut TrackerApi<S>,
    ui: &mut P,
) -> Result<CmdResult> {
    let all = api.employees()?;
    let employees = Choices::employees(&all);
    if employees.is_empty() {
        return Ok(nothing_to_choose("employees"));
    }

    let (label, id) =
        ui.choose_labelled("Which employee's manager do you want to update?", &employees)?;
    let (manager, manager_id) = ui.choose_labelled("Who is their new manager?", &employees)?;
    api.update_employee_manager(id, Some(manager_id), &label, &manager)
}

/// Departments follow from roles, so moving someone means changing their
/// role. Shows the reminder, then continues into the role update for the
/// chosen employee.
pub fn department<S: DataStore, P: Prompter>(
    api: &mut TrackerApi<S>,
    ui: &mut P,
) -> Result<CmdResult> {
    let employees = Choices::employees(&api.employees()?);
    if employees.is_empty() {
        return Ok(nothing_to_choose("employees"));
    }
    let departments = Choices::departments(&api.departments()?);

    let (label, id) = ui.choose_labelled("Which employee is changing department?", &employees)?;
    let (department, _) = ui.choose_labelled("Which department are they moving to?", &departments)?;

    ui.show(&CmdResult::default().with_message(CmdMessage::info(format!(
        "To move {} to the {} department, please also update their role to one \
         associated with that department.",
        label, department
    ))));

    role_for(api, ui, id, &label)
}
