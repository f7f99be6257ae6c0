use super::DataStore;
use crate::config::TrackerConfig;
use crate::error::{map_sqlx_error, Result, TrackerError};
use crate::model::{
    Department, Employee, EmployeeDetail, EmployeeFilter, EmployeeUpdate, Id, NewEmployee,
    NewRole, Role, RoleDetail,
};
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::Connection;
use std::future::Future;
use tokio::runtime::{Builder, Runtime};

const EMPLOYEE_COLUMNS: &str = "id, first_name, last_name, role_id, manager_id";

const EMPLOYEE_DETAIL_SELECT: &str = "SELECT e.id, e.first_name, e.last_name, role.title, \
     department.name AS department, CAST(role.salary AS DECIMAL(12,2)) AS salary, \
     CONCAT(m.first_name, ' ', m.last_name) AS manager \
     FROM employee e \
     LEFT JOIN employee m ON e.manager_id = m.id \
     INNER JOIN role ON e.role_id = role.id \
     INNER JOIN department ON role.department_id = department.id";

/// MySQL-backed store holding one connection for the whole session.
///
/// sqlx is async; the store drives it on a private current-thread runtime so
/// that each call returns only once the server has answered.
pub struct MySqlStore {
    runtime: Runtime,
    conn: MySqlConnection,
}

impl MySqlStore {
    pub fn connect(config: &TrackerConfig) -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| TrackerError::Connection(format!("failed to start runtime: {}", e)))?;

        let mut options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .database(&config.database);
        if !config.password.is_empty() {
            options = options.password(&config.password);
        }

        let conn = runtime
            .block_on(MySqlConnection::connect_with(&options))
            .map_err(|e| TrackerError::Connection(e.to_string()))?;

        tracing::info!(
            host = %config.host,
            port = config.port,
            database = %config.database,
            "database connection established"
        );
        Ok(Self { runtime, conn })
    }

    /// Closes the connection, ending the session's hold on the server.
    pub fn close(self) -> Result<()> {
        let MySqlStore { runtime, conn } = self;
        runtime
            .block_on(conn.close())
            .map_err(|e| map_sqlx_error("close connection", e))?;
        tracing::info!("database connection closed");
        Ok(())
    }
}

fn wait<T, F>(runtime: &Runtime, operation: &str, fut: F) -> Result<T>
where
    F: Future<Output = std::result::Result<T, sqlx::Error>>,
{
    tracing::debug!(operation, "query");
    runtime
        .block_on(fut)
        .map_err(|e| map_sqlx_error(operation, e))
}

fn count(n: i64) -> u64 {
    u64::try_from(n).unwrap_or(0)
}

impl DataStore for MySqlStore {
    fn employees(&mut self) -> Result<Vec<Employee>> {
        let sql = format!("SELECT {} FROM employee ORDER BY id ASC", EMPLOYEE_COLUMNS);
        wait(
            &self.runtime,
            "list employees",
            sqlx::query_as::<_, Employee>(&sql).fetch_all(&mut self.conn),
        )
    }

    fn roles(&mut self) -> Result<Vec<Role>> {
        wait(
            &self.runtime,
            "list roles",
            sqlx::query_as::<_, Role>(
                "SELECT id, title, CAST(salary AS DECIMAL(12,2)) AS salary, department_id \
                 FROM role ORDER BY id ASC",
            )
            .fetch_all(&mut self.conn),
        )
    }

    fn departments(&mut self) -> Result<Vec<Department>> {
        wait(
            &self.runtime,
            "list departments",
            sqlx::query_as::<_, Department>("SELECT id, name FROM department ORDER BY id ASC")
                .fetch_all(&mut self.conn),
        )
    }

    fn managers(&mut self) -> Result<Vec<Employee>> {
        wait(
            &self.runtime,
            "list managers",
            sqlx::query_as::<_, Employee>(
                "SELECT DISTINCT m.id, m.first_name, m.last_name, m.role_id, m.manager_id \
                 FROM employee e INNER JOIN employee m ON e.manager_id = m.id \
                 ORDER BY m.id ASC",
            )
            .fetch_all(&mut self.conn),
        )
    }

    fn top_level_employees(&mut self) -> Result<Vec<Employee>> {
        let sql = format!(
            "SELECT {} FROM employee WHERE manager_id IS NULL ORDER BY id ASC",
            EMPLOYEE_COLUMNS
        );
        wait(
            &self.runtime,
            "list top-level employees",
            sqlx::query_as::<_, Employee>(&sql).fetch_all(&mut self.conn),
        )
    }

    fn employee_details(&mut self, filter: &EmployeeFilter) -> Result<Vec<EmployeeDetail>> {
        let condition = match filter {
            EmployeeFilter::All => "",
            EmployeeFilter::RoleTitle(_) => " WHERE role.title = ?",
            EmployeeFilter::DepartmentName(_) => " WHERE department.name = ?",
            EmployeeFilter::Manager(_) => " WHERE e.manager_id = ?",
        };
        let sql = format!("{}{} ORDER BY e.id ASC", EMPLOYEE_DETAIL_SELECT, condition);

        let query = sqlx::query_as::<_, EmployeeDetail>(&sql);
        let query = match filter {
            EmployeeFilter::All => query,
            EmployeeFilter::RoleTitle(title) => query.bind(title.as_str()),
            EmployeeFilter::DepartmentName(name) => query.bind(name.as_str()),
            EmployeeFilter::Manager(id) => query.bind(*id),
        };
        wait(
            &self.runtime,
            "list employee details",
            query.fetch_all(&mut self.conn),
        )
    }

    fn role_details(&mut self) -> Result<Vec<RoleDetail>> {
        wait(
            &self.runtime,
            "list role details",
            sqlx::query_as::<_, RoleDetail>(
                "SELECT role.id, role.title, department.name AS department, \
                 CAST(role.salary AS DECIMAL(12,2)) AS salary \
                 FROM role INNER JOIN department ON role.department_id = department.id \
                 ORDER BY role.id ASC",
            )
            .fetch_all(&mut self.conn),
        )
    }

    fn insert_employee(&mut self, employee: &NewEmployee) -> Result<Id> {
        let done = wait(
            &self.runtime,
            "insert employee",
            sqlx::query(
                "INSERT INTO employee (first_name, last_name, role_id, manager_id) \
                 VALUES (?, ?, ?, ?)",
            )
            .bind(employee.first_name.as_str())
            .bind(employee.last_name.as_str())
            .bind(employee.role_id)
            .bind(employee.manager_id)
            .execute(&mut self.conn),
        )?;
        Ok(done.last_insert_id() as Id)
    }

    fn insert_role(&mut self, role: &NewRole) -> Result<Id> {
        let done = wait(
            &self.runtime,
            "insert role",
            sqlx::query("INSERT INTO role (title, salary, department_id) VALUES (?, ?, ?)")
                .bind(role.title.as_str())
                .bind(role.salary)
                .bind(role.department_id)
                .execute(&mut self.conn),
        )?;
        Ok(done.last_insert_id() as Id)
    }

    fn insert_department(&mut self, name: &str) -> Result<Id> {
        let done = wait(
            &self.runtime,
            "insert department",
            sqlx::query("INSERT INTO department (name) VALUES (?)")
                .bind(name)
                .execute(&mut self.conn),
        )?;
        Ok(done.last_insert_id() as Id)
    }

    fn update_employee(&mut self, id: Id, update: &EmployeeUpdate) -> Result<u64> {
        let done = wait(
            &self.runtime,
            "update employee",
            sqlx::query(
                "UPDATE employee SET first_name = ?, last_name = ?, role_id = ?, manager_id = ? \
                 WHERE id = ?",
            )
            .bind(update.first_name.as_str())
            .bind(update.last_name.as_str())
            .bind(update.role_id)
            .bind(update.manager_id)
            .bind(id)
            .execute(&mut self.conn),
        )?;
        Ok(done.rows_affected())
    }

    fn set_employee_role(&mut self, id: Id, role_id: Id) -> Result<u64> {
        let done = wait(
            &self.runtime,
            "update employee role",
            sqlx::query("UPDATE employee SET role_id = ? WHERE id = ?")
                .bind(role_id)
                .bind(id)
                .execute(&mut self.conn),
        )?;
        Ok(done.rows_affected())
    }

    fn set_employee_manager(&mut self, id: Id, manager_id: Option<Id>) -> Result<u64> {
        let done = wait(
            &self.runtime,
            "update employee manager",
            sqlx::query("UPDATE employee SET manager_id = ? WHERE id = ?")
                .bind(manager_id)
                .bind(id)
                .execute(&mut self.conn),
        )?;
        Ok(done.rows_affected())
    }

    fn delete_employee(&mut self, id: Id) -> Result<u64> {
        let done = wait(
            &self.runtime,
            "delete employee",
            sqlx::query("DELETE FROM employee WHERE id = ?")
                .bind(id)
                .execute(&mut self.conn),
        )?;
        Ok(done.rows_affected())
    }

    fn delete_role(&mut self, id: Id) -> Result<u64> {
        let done = wait(
            &self.runtime,
            "delete role",
            sqlx::query("DELETE FROM role WHERE id = ?")
                .bind(id)
                .execute(&mut self.conn),
        )?;
        Ok(done.rows_affected())
    }

    fn delete_department(&mut self, id: Id) -> Result<u64> {
        let done = wait(
            &self.runtime,
            "delete department",
            sqlx::query("DELETE FROM department WHERE id = ?")
                .bind(id)
                .execute(&mut self.conn),
        )?;
        Ok(done.rows_affected())
    }

    fn count_employees_with_role(&mut self, role_id: Id) -> Result<u64> {
        let n = wait(
            &self.runtime,
            "count employees with role",
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employee WHERE role_id = ?")
                .bind(role_id)
                .fetch_one(&mut self.conn),
        )?;
        Ok(count(n))
    }

    fn count_roles_in_department(&mut self, department_id: Id) -> Result<u64> {
        let n = wait(
            &self.runtime,
            "count roles in department",
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM role WHERE department_id = ?")
                .bind(department_id)
                .fetch_one(&mut self.conn),
        )?;
        Ok(count(n))
    }

    fn count_employees_in_department(&mut self, department_id: Id) -> Result<u64> {
        let n = wait(
            &self.runtime,
            "count employees in department",
            sqlx::query_scalar::<_, i64>(
                "SELECT COUNT(*) FROM employee \
                 WHERE role_id IN (SELECT id FROM role WHERE department_id = ?)",
            )
            .bind(department_id)
            .fetch_one(&mut self.conn),
        )?;
        Ok(count(n))
    }

    fn count_direct_reports(&mut self, manager_id: Id) -> Result<u64> {
        let n = wait(
            &self.runtime,
            "count direct reports",
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employee WHERE manager_id = ?")
                .bind(manager_id)
                .fetch_one(&mut self.conn),
        )?;
        Ok(count(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runtime() -> Runtime {
        Builder::new_current_thread().build().unwrap()
    }

    #[test]
    fn failed_query_comes_back_as_query_error() {
        let err = wait(&runtime(), "select roles", async {
            Err::<(), _>(sqlx::Error::RowNotFound)
        })
        .unwrap_err();

        assert!(!err.is_fatal());
        assert!(matches!(err, TrackerError::Query(msg) if msg.starts_with("select roles")));
    }

    #[test]
    fn successful_query_passes_value_through() {
        let rows = wait(&runtime(), "count", async { Ok::<_, sqlx::Error>(3u64) }).unwrap();
        assert_eq!(rows, 3);
    }
}
