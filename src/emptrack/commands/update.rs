use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{EmployeeUpdate, Id};
use crate::store::DataStore;

/// Overwrites every editable field, including names left empty.
pub fn employee<S: DataStore>(store: &mut S, id: Id, update: EmployeeUpdate) -> Result<CmdResult> {
    let rows = store.update_employee(id, &update)?;
    let mut result = CmdResult::default()
        .with_affected_rows(rows)
        .with_message(CmdMessage::success(format!(
            "{} {}'s details updated...",
            update.first_name, update.last_name
        )));
    if update.first_name.is_empty() || update.last_name.is_empty() {
        result.add_message(CmdMessage::warning(
            "An empty name was saved; the employee's name field is now blank.",
        ));
    }
    Ok(result)
}

/// `employee` and `role` are the labels the operator picked, for the confirmation.
pub fn role<S: DataStore>(
    store: &mut S,
    id: Id,
    role_id: Id,
    employee: &str,
    role: &str,
) -> Result<CmdResult> {
    let rows = store.set_employee_role(id, role_id)?;
    Ok(CmdResult::default()
        .with_affected_rows(rows)
        .with_message(CmdMessage::success(format!(
            "{} ROLE UPDATED TO {}...",
            employee, role
        ))))
}

pub fn manager<S: DataStore>(
    store: &mut S,
    id: Id,
    manager_id: Option<Id>,
    employee: &str,
    manager: &str,
) -> Result<CmdResult> {
    let rows = store.set_employee_manager(id, manager_id)?;
    Ok(CmdResult::default()
        .with_affected_rows(rows)
        .with_message(CmdMessage::success(format!(
            "{}'s MANAGER UPDATED TO {}...",
            employee, manager
        ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::company;

    #[test]
    fn full_update_overwrites_every_field() {
        let mut fx = company();
        let ada = fx.employee_id("Ada Lovelace");
        let lead = fx.role_id("Lead Engineer");

        let result = employee(
            &mut fx.store,
            ada,
            EmployeeUpdate {
                first_name: "Augusta".into(),
                last_name: "King".into(),
                role_id: lead,
                manager_id: None,
            },
        )
        .unwrap();

        assert_eq!(result.messages[0].content, "Augusta King's details updated...");
        let row = fx.store.employees().unwrap().into_iter().find(|e| e.id == ada).unwrap();
        assert_eq!(row.first_name, "Augusta");
        assert_eq!(row.role_id, lead);
        assert_eq!(row.manager_id, None);
    }

    #[test]
    fn empty_names_are_written_and_flagged() {
        let mut fx = company();
        let ada = fx.employee_id("Ada Lovelace");
        let engineer = fx.role_id("Engineer");

        let result = employee(
            &mut fx.store,
            ada,
            EmployeeUpdate {
                first_name: String::new(),
                last_name: "Lovelace".into(),
                role_id: engineer,
                manager_id: None,
            },
        )
        .unwrap();

        assert!(result.has_level(MessageLevel::Warning));
        let row = fx.store.employees().unwrap().into_iter().find(|e| e.id == ada).unwrap();
        assert_eq!(row.first_name, "");
    }

    #[test]
    fn role_update_touches_only_role() {
        let mut fx = company();
        let alan = fx.employee_id("Alan Turing");
        let sales = fx.role_id("Salesperson");

        let result = role(&mut fx.store, alan, sales, "Alan Turing", "Salesperson").unwrap();

        assert_eq!(result.messages[0].content, "Alan Turing ROLE UPDATED TO Salesperson...");
        let row = fx.store.employees().unwrap().into_iter().find(|e| e.id == alan).unwrap();
        assert_eq!(row.role_id, sales);
        assert_eq!(row.manager_id, Some(fx.employee_id("Grace Hopper")));
    }

    #[test]
    fn manager_can_be_any_employee() {
        let mut fx = company();
        let grace = fx.employee_id("Grace Hopper");
        let ada = fx.employee_id("Ada Lovelace");

        manager(&mut fx.store, grace, Some(ada), "Grace Hopper", "Ada Lovelace").unwrap();

        let row = fx.store.employees().unwrap().into_iter().find(|e| e.id == grace).unwrap();
        assert_eq!(row.manager_id, Some(ada));
    }
}
