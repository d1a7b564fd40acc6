//! Audit data source access and row serialization.
//!
//! A single linear pass: open a pool, fetch every row of the users table,
//! emit one redacted log line per row, release the pool. The pool is
//! released on the error path too; no retries anywhere.

use crate::error::Result;
use chrono::NaiveDateTime;
use pd_config::DbSettings;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

/// Fixed query over the users table, columns in declared order.
const USERS_QUERY: &str =
    "SELECT name, email, phone, ssn, password, ip, last_login, user_agent FROM users";

/// One row of the audited users table.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct UserRow {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub ssn: Option<String>,
    pub password: Option<String>,
    pub ip: Option<String>,
    pub last_login: Option<NaiveDateTime>,
    pub user_agent: Option<String>,
}

impl UserRow {
    /// Serialize as `key=value; ` segments in column order.
    ///
    /// Trailing whitespace is trimmed, so the line ends with the separator.
    /// NULL columns render as `null`.
    pub fn to_log_line(&self) -> String {
        let last_login = self.last_login.map(|ts| ts.to_string());

        let mut line = String::new();
        line.push_str(&segment("name", self.name.as_deref()));
        line.push_str(&segment("email", self.email.as_deref()));
        line.push_str(&segment("phone", self.phone.as_deref()));
        line.push_str(&segment("ssn", self.ssn.as_deref()));
        line.push_str(&segment("password", self.password.as_deref()));
        line.push_str(&segment("ip", self.ip.as_deref()));
        line.push_str(&segment("last_login", last_login.as_deref()));
        line.push_str(&segment("user_agent", self.user_agent.as_deref()));
        line.trim_end().to_string()
    }
}

fn segment(key: &str, value: Option<&str>) -> String {
    format!("{}={}; ", key, value.unwrap_or("null"))
}

/// Open a connection pool against the configured data source.
///
/// A single connection: the pipeline is one linear pass.
pub async fn connect(settings: &DbSettings) -> Result<MySqlPool> {
    let pool = MySqlPoolOptions::new()
        .max_connections(1)
        .connect(&settings.connection_url())
        .await?;
    Ok(pool)
}

/// Fetch every row of the users table.
pub async fn fetch_users(pool: &MySqlPool) -> Result<Vec<UserRow>> {
    let rows = sqlx::query_as::<_, UserRow>(USERS_QUERY)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Run the full dump: connect, log one line per row, release the pool.
///
/// Returns the number of rows emitted. The pool is closed whether the scan
/// completes or fails.
pub async fn run_dump(settings: &DbSettings) -> Result<usize> {
    let pool = connect(settings).await?;
    let result = dump_rows(&pool).await;
    pool.close().await;
    result
}

async fn dump_rows(pool: &MySqlPool) -> Result<usize> {
    let rows = fetch_users(pool).await?;
    for row in &rows {
        tracing::info!(target: "user_data", "{}", row.to_log_line());
    }
    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> UserRow {
        UserRow {
            name: Some("Marlene".to_string()),
            email: Some("marlene@example.com".to_string()),
            phone: Some("(555) 123-4567".to_string()),
            ssn: Some("972-41-8888".to_string()),
            password: Some("hunter2".to_string()),
            ip: Some("17.233.10.4".to_string()),
            last_login: NaiveDateTime::parse_from_str(
                "2019-11-14 06:14:24",
                "%Y-%m-%d %H:%M:%S",
            )
            .ok(),
            user_agent: Some("Mozilla/5.0".to_string()),
        }
    }

    #[test]
    fn test_log_line_column_order() {
        let line = sample_row().to_log_line();
        assert_eq!(
            line,
            "name=Marlene; email=marlene@example.com; phone=(555) 123-4567; \
             ssn=972-41-8888; password=hunter2; ip=17.233.10.4; \
             last_login=2019-11-14 06:14:24; user_agent=Mozilla/5.0;"
        );
    }

    #[test]
    fn test_log_line_null_rendering() {
        let row = UserRow {
            name: None,
            email: None,
            phone: None,
            ssn: None,
            password: None,
            ip: None,
            last_login: None,
            user_agent: None,
        };
        assert_eq!(
            row.to_log_line(),
            "name=null; email=null; phone=null; ssn=null; password=null; \
             ip=null; last_login=null; user_agent=null;"
        );
    }

    #[test]
    fn test_log_line_ends_with_separator() {
        assert!(sample_row().to_log_line().ends_with(';'));
    }
}
