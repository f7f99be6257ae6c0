//! # Menu Dispatcher
//!
//! The session loop: show the fixed action list, run the picked flow, show
//! its result, repeat. A flow that fails with a query or selection error is
//! logged and reported, and the menu comes back. The loop ends only when the
//! operator interrupts or input ends, or on a fatal error.

use crate::api::TrackerApi;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TrackerError};
use crate::flows::{add, delete, update, view};
use crate::prompt::Prompter;
use crate::store::DataStore;

pub const MENU_PROMPT: &str = "What would you like to do?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ViewEmployees,
    ViewRoles,
    ViewDepartments,
    ViewEmployeesByRole,
    ViewEmployeesByDepartment,
    ViewEmployeesByManager,
    AddEmployee,
    AddRole,
    AddDepartment,
    UpdateEmployee,
    UpdateEmployeeRole,
    UpdateEmployeeManager,
    UpdateEmployeeDepartment,
    DeleteEmployee,
    DeleteRole,
    DeleteDepartment,
}

impl MenuAction {
    /// Menu order.
    pub const ALL: [MenuAction; 16] = [
        MenuAction::ViewEmployees,
        MenuAction::ViewRoles,
        MenuAction::ViewDepartments,
        MenuAction::ViewEmployeesByRole,
        MenuAction::ViewEmployeesByDepartment,
        MenuAction::ViewEmployeesByManager,
        MenuAction::AddEmployee,
        MenuAction::AddRole,
        MenuAction::AddDepartment,
        MenuAction::UpdateEmployee,
        MenuAction::UpdateEmployeeRole,
        MenuAction::UpdateEmployeeManager,
        MenuAction::UpdateEmployeeDepartment,
        MenuAction::DeleteEmployee,
        MenuAction::DeleteRole,
        MenuAction::DeleteDepartment,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::ViewEmployees => "View all employees",
            MenuAction::ViewRoles => "View all roles",
            MenuAction::ViewDepartments => "View all departments",
            MenuAction::ViewEmployeesByRole => "View all employees by role",
            MenuAction::ViewEmployeesByDepartment => "View all employees by department",
            MenuAction::ViewEmployeesByManager => "View all employees by manager",
            MenuAction::AddEmployee => "Add employee",
            MenuAction::AddRole => "Add role",
            MenuAction::AddDepartment => "Add department",
            MenuAction::UpdateEmployee => "Update employee",
            MenuAction::UpdateEmployeeRole => "Update employee role",
            MenuAction::UpdateEmployeeManager => "Update employee managers",
            MenuAction::UpdateEmployeeDepartment => "Update employee department",
            MenuAction::DeleteEmployee => "Delete employee",
            MenuAction::DeleteRole => "Delete roles",
            MenuAction::DeleteDepartment => "Delete departments",
        }
    }

    pub fn labels() -> Vec<String> {
        Self::ALL.iter().map(|a| a.label().to_string()).collect()
    }

    pub fn from_label(label: &str) -> Result<MenuAction> {
        Self::ALL
            .iter()
            .copied()
            .find(|a| a.label() == label)
            .ok_or_else(|| TrackerError::Selection(format!("\"{}\" is not a menu entry", label)))
    }
}

/// Runs the flow bound to `action`.
pub fn dispatch<S: DataStore, P: Prompter>(
    action: MenuAction,
    api: &mut TrackerApi<S>,
    ui: &mut P,
) -> Result<CmdResult> {
    tracing::debug!(action = action.label(), "starting flow");
    match action {
        MenuAction::ViewEmployees => view::all_employees(api),
        MenuAction::ViewRoles => view::all_roles(api),
        MenuAction::ViewDepartments => view::all_departments(api),
        MenuAction::ViewEmployeesByRole => view::employees_by_role(api, ui),
        MenuAction::ViewEmployeesByDepartment => view::employees_by_department(api, ui),
        MenuAction::ViewEmployeesByManager => view::employees_by_manager(api, ui),
        MenuAction::AddEmployee => add::employee(api, ui),
        MenuAction::AddRole => add::role(api, ui),
        MenuAction::AddDepartment => add::department(api, ui),
        MenuAction::UpdateEmployee => update::employee(api, ui),
        MenuAction::UpdateEmployeeRole => update::role(api, ui),
        MenuAction::UpdateEmployeeManager => update::manager(api, ui),
        MenuAction::UpdateEmployeeDepartment => update::department(api, ui),
        MenuAction::DeleteEmployee => delete::employee(api, ui),
        MenuAction::DeleteRole => delete::role(api, ui),
        MenuAction::DeleteDepartment => delete::department(api, ui),
    }
}

/// Loops until the operator leaves. Interruption ends the loop with `Ok`;
/// fatal errors are returned.
pub fn run<S: DataStore, P: Prompter>(api: &mut TrackerApi<S>, ui: &mut P) -> Result<()> {
    let labels = MenuAction::labels();
    loop {
        let outcome = ui
            .select(MENU_PROMPT, &labels)
            .and_then(|label| MenuAction::from_label(&label))
            .and_then(|action| dispatch(action, api, ui));

        match outcome {
            Ok(result) => ui.show(&result),
            Err(TrackerError::Interrupted) => {
                tracing::debug!("session ended by operator");
                return Ok(());
            }
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                tracing::error!(error = %e, "flow aborted");
                ui.show(&CmdResult::default().with_message(CmdMessage::error(e.to_string())));
            }
        }
    }
}
