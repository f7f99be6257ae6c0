use crate::commands::guard::{self, Verdict};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Id;
use crate::store::DataStore;

fn deleted(rows: u64) -> CmdResult {
    CmdResult::default()
        .with_affected_rows(rows)
        .with_message(CmdMessage::success(format!("Deleted {} row(s)", rows)))
}

fn blocked(verdict: Verdict) -> Option<CmdResult> {
    match verdict {
        Verdict::Clear => None,
        Verdict::Blocked {
            references,
            guidance,
        } => Some(
            CmdResult::default()
                .with_message(CmdMessage::warning(guidance))
                .with_message(CmdMessage::info(format!(
                    "{} row(s) still reference it.",
                    references
                ))),
        ),
    }
}

/// Deletes unconditionally. Direct reports keep their `manager_id`; the
/// result warns about how many were left pointing at the removed id.
pub fn employee<S: DataStore>(store: &mut S, id: Id) -> Result<CmdResult> {
    let reports = store.count_direct_reports(id)?;
    let rows = store.delete_employee(id)?;
    let mut result = deleted(rows);

    if rows > 0 && reports > 0 {
        tracing::warn!(id, reports, "deleted employee still referenced as manager");
        result.add_message(CmdMessage::warning(format!(
            "{} employee(s) still list the removed employee as their manager. \
             Update their manager to fix this.",
            reports
        )));
    }
    Ok(result)
}

pub fn role<S: DataStore>(store: &mut S, id: Id) -> Result<CmdResult> {
    if let Some(result) = blocked(guard::check_role(store, id)?) {
        return Ok(result);
    }
    let rows = store.delete_role(id)?;
    Ok(deleted(rows))
}

pub fn department<S: DataStore>(store: &mut S, id: Id) -> Result<CmdResult> {
    if let Some(result) = blocked(guard::check_department(store, id)?) {
        return Ok(result);
    }
    let rows = store.delete_department(id)?;
    Ok(deleted(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::guard::{DEPARTMENT_HAS_ROLES, ROLE_IN_USE};
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::company;

    #[test]
    fn unused_role_removes_exactly_one_row() {
        let mut fx = company().with_role("Intern", 0, "Legal");
        let intern = fx.role_id("Intern");
        let before = fx.store.roles().unwrap().len();

        let result = role(&mut fx.store, intern).unwrap();

        assert_eq!(result.affected_rows, 1);
        assert_eq!(result.messages[0].content, "Deleted 1 row(s)");
        assert_eq!(fx.store.roles().unwrap().len(), before - 1);
    }

    #[test]
    fn referenced_role_is_left_alone() {
        let mut fx = company();
        let engineer = fx.role_id("Engineer");
        let before = fx.store.roles().unwrap();

        let result = role(&mut fx.store, engineer).unwrap();

        assert_eq!(result.affected_rows, 0);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(result.messages[0].content, ROLE_IN_USE);
        assert_eq!(fx.store.roles().unwrap(), before);
    }

    #[test]
    fn department_with_roles_is_left_alone() {
        let mut fx = company();
        let sales = fx.department_id("Sales");

        let result = department(&mut fx.store, sales).unwrap();

        assert_eq!(result.messages[0].content, DEPARTMENT_HAS_ROLES);
        assert_eq!(fx.store.departments().unwrap().len(), 3);
    }

    #[test]
    fn blocked_delete_reports_reference_count() {
        let mut fx = company();
        let engineer = fx.role_id("Engineer");
        let sales = fx.department_id("Sales");

        let result = role(&mut fx.store, engineer).unwrap();
        assert_eq!(result.messages[1].level, MessageLevel::Info);
        assert_eq!(result.messages[1].content, "2 row(s) still reference it.");

        let result = department(&mut fx.store, sales).unwrap();
        assert_eq!(result.messages[1].content, "1 row(s) still reference it.");
    }

    #[test]
    fn empty_department_is_removed() {
        let mut fx = company();
        let legal = fx.department_id("Legal");

        let result = department(&mut fx.store, legal).unwrap();

        assert_eq!(result.affected_rows, 1);
        assert!(fx.store.departments().unwrap().iter().all(|d| d.name != "Legal"));
    }

    #[test]
    fn deleting_a_manager_warns_about_reports() {
        let mut fx = company();
        let grace = fx.employee_id("Grace Hopper");

        let result = employee(&mut fx.store, grace).unwrap();

        assert_eq!(result.affected_rows, 1);
        assert!(result.has_level(MessageLevel::Warning));
        let ada = fx
            .store
            .employees()
            .unwrap()
            .into_iter()
            .find(|e| e.first_name == "Ada")
            .unwrap();
        assert_eq!(ada.manager_id, Some(grace));
    }

    #[test]
    fn deleting_a_leaf_employee_has_no_warning() {
        let mut fx = company();
        let mary = fx.employee_id("Mary Jackson");

        let result = employee(&mut fx.store, mary).unwrap();

        assert_eq!(result.messages.len(), 1);
        assert_eq!(fx.store.employees().unwrap().len(), 3);
    }
}
