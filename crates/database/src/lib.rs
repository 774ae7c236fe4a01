use std::{env, fmt};

use async_trait::async_trait;
use chrono::NaiveDate;
use depot::database::{DatabaseError, DepotOperations, Result};
use log::{debug, error, info, LevelFilter};
use model::{
    locomotive::{Locomotive, LocomotiveKind},
    report::{LocomotiveRepairCost, RepairEndDate, TeamRepairCount, TeamRepairTypeCount},
    WithId,
};
use queries::convert_error;
use rust_decimal::Decimal;
use sqlx::{
    postgres::{PgArguments, PgConnectOptions, PgRow},
    query::Query,
    ConnectOptions, Connection, PgConnection, Postgres,
};

pub mod data_model;
pub mod queries;

/// Where to find the depot database. Defaults match a local development
/// server.
#[derive(Clone)]
pub struct DatabaseConnectionInfo {
    pub username: String,
    pub password: String,
    pub hostname: String,
    pub port: u16,
    pub database: String,
    /// Schema to create and work in instead of the server's default
    /// `search_path`.
    pub schema: Option<String>,
}

impl Default for DatabaseConnectionInfo {
    fn default() -> Self {
        Self {
            username: "user".to_owned(),
            password: "password".to_owned(),
            hostname: "localhost".to_owned(),
            port: 5432,
            database: "db".to_owned(),
            schema: None,
        }
    }
}

impl fmt::Debug for DatabaseConnectionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConnectionInfo")
            .field("username", &self.username)
            .field("password", &"***")
            .field("hostname", &self.hostname)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("schema", &self.schema)
            .finish()
    }
}

const ENV_KEYS: [&str; 6] = [
    "DATABASE_USER",
    "DATABASE_PASSWORD",
    "DATABASE_HOST",
    "DATABASE_PORT",
    "DATABASE_NAME",
    "DATABASE_SCHEMA",
];

impl DatabaseConnectionInfo {
    /// Reads the `DATABASE_*` variables. Returns `None` if none of them is
    /// set; missing ones fall back to the defaults.
    pub fn from_env() -> Result<Option<Self>> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_env_or_default() -> Result<Self> {
        Ok(Self::from_env()?.unwrap_or_default())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Option<Self>>
    where
        F: Fn(&str) -> Option<String>,
    {
        if ENV_KEYS.iter().all(|key| lookup(key).is_none()) {
            return Ok(None);
        }

        let defaults = Self::default();
        let port = match lookup("DATABASE_PORT") {
            Some(port) => port.trim().parse::<u16>().map_err(|why| {
                DatabaseError::Config(format!("DATABASE_PORT `{}`: {}", port, why))
            })?,
            None => defaults.port,
        };
        let schema = lookup("DATABASE_SCHEMA").filter(|schema| !schema.is_empty());
        if let Some(schema) = &schema {
            validate_identifier(schema)?;
        }

        Ok(Some(Self {
            username: lookup("DATABASE_USER").unwrap_or(defaults.username),
            password: lookup("DATABASE_PASSWORD").unwrap_or(defaults.password),
            hostname: lookup("DATABASE_HOST").unwrap_or(defaults.hostname),
            port,
            database: lookup("DATABASE_NAME").unwrap_or(defaults.database),
            schema,
        }))
    }

    pub fn with_schema<S: Into<String>>(mut self, schema: S) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub(crate) fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.hostname)
            .port(self.port)
            .username(&self.username)
            .password(&self.password)
            .database(&self.database)
            .log_statements(LevelFilter::Debug)
    }
}

/// Schema names are spliced into DDL, so only plain identifiers are allowed.
fn validate_identifier(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && name.len() <= 63
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !name.starts_with(|c: char| c.is_ascii_digit());
    if valid {
        Ok(())
    } else {
        Err(DatabaseError::Config(format!(
            "`{}` is not a valid schema name",
            name
        )))
    }
}

/// A positional parameter for [`PgDatabase::execute_query`].
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Text(String),
    Int(i32),
    BigInt(i64),
    Bool(bool),
    Date(NaiveDate),
    Decimal(Decimal),
    Null,
}

impl SqlValue {
    fn bind<'q>(
        &self,
        query: Query<'q, Postgres, PgArguments>,
    ) -> Query<'q, Postgres, PgArguments> {
        match self {
            SqlValue::Text(value) => query.bind(value.clone()),
            SqlValue::Int(value) => query.bind(*value),
            SqlValue::BigInt(value) => query.bind(*value),
            SqlValue::Bool(value) => query.bind(*value),
            SqlValue::Date(value) => query.bind(*value),
            SqlValue::Decimal(value) => query.bind(*value),
            SqlValue::Null => query.bind(None::<i32>),
        }
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_owned())
    }
}

impl From<i32> for SqlValue {
    fn from(value: i32) -> Self {
        SqlValue::Int(value)
    }
}

/// Data access object for the depot schema. Owns exactly one connection,
/// which is closed by [`PgDatabase::close`] or, failing that, when the value
/// is dropped.
pub struct PgDatabase {
    connection: PgConnection,
}

impl PgDatabase {
    pub async fn connect(database_connection_info: DatabaseConnectionInfo) -> Result<Self> {
        info!(
            "connecting to postgres at {}:{}/{}",
            database_connection_info.hostname,
            database_connection_info.port,
            database_connection_info.database
        );
        let options = database_connection_info.connect_options();
        let mut connection = PgConnection::connect_with(&options)
            .await
            .map_err(|why| DatabaseError::Connection(Box::new(why)))?;

        if let Some(schema) = &database_connection_info.schema {
            validate_identifier(schema)?;
            for statement in [
                format!("CREATE SCHEMA IF NOT EXISTS \"{}\";", schema),
                format!("SET search_path TO \"{}\";", schema),
            ] {
                sqlx::query(&statement)
                    .execute(&mut connection)
                    .await
                    .map_err(|why| DatabaseError::Connection(Box::new(why)))?;
            }
            debug!("using schema {}", schema);
        }

        info!("connected to database");
        Ok(Self { connection })
    }

    pub async fn close(self) -> Result<()> {
        self.connection
            .close()
            .await
            .map_err(|why| DatabaseError::Connection(Box::new(why)))?;
        info!("database connection closed");
        Ok(())
    }

    /// Runs one statement in its own transaction and commits it right away.
    /// With `fetch` set, all result rows are returned. A failed statement is
    /// rolled back and reported as [`DatabaseError::Query`]; the connection
    /// stays usable.
    pub async fn execute_query(
        &mut self,
        query: &str,
        params: &[SqlValue],
        fetch: bool,
    ) -> Result<Option<Vec<PgRow>>> {
        let mut tx = self.connection.begin().await.map_err(convert_error)?;

        let mut statement = sqlx::query(query);
        for param in params {
            statement = param.bind(statement);
        }

        let result = if fetch {
            statement.fetch_all(&mut *tx).await.map(Some)
        } else {
            statement.execute(&mut *tx).await.map(|_| None)
        };

        match result {
            Ok(rows) => {
                tx.commit().await.map_err(convert_error)?;
                Ok(rows)
            }
            Err(why) => {
                error!("query failed, rolling back: {}", why);
                if let Err(rollback) = tx.rollback().await {
                    error!("rollback failed: {}", rollback);
                }
                Err(convert_error(why))
            }
        }
    }

    /// Names of the depot tables present in the current schema, sorted.
    pub async fn existing_tables(&mut self) -> Result<Vec<String>> {
        sqlx::query_scalar(queries::schema::EXISTING_TABLES)
            .fetch_all(&mut self.connection)
            .await
            .map_err(convert_error)
    }

    pub(crate) fn connection(&mut self) -> &mut PgConnection {
        &mut self.connection
    }
}

#[async_trait]
impl DepotOperations for PgDatabase {
    async fn create_tables(&mut self) -> Result<()> {
        for statement in queries::schema::CREATE_TABLES {
            self.execute_query(statement, &[], false).await?;
        }
        info!("tables created");
        Ok(())
    }

    async fn drop_tables(&mut self) -> Result<()> {
        self.execute_query(queries::schema::DROP_TABLES, &[], false)
            .await?;
        info!("tables dropped");
        Ok(())
    }

    async fn insert_sample_data(&mut self) -> Result<()> {
        depot::seed::insert_sample_data(self).await
    }

    async fn freight_locomotives(&mut self) -> Result<Vec<WithId<Locomotive>>> {
        queries::locomotive::get_by_kind(self.connection(), &LocomotiveKind::Freight).await
    }

    async fn repair_end_dates(&mut self) -> Result<Vec<RepairEndDate>> {
        queries::report::repair_end_dates(self.connection()).await
    }

    async fn repairs_per_team(&mut self) -> Result<Vec<TeamRepairCount>> {
        queries::report::repairs_per_team(self.connection()).await
    }

    async fn repair_cost_per_locomotive(&mut self) -> Result<Vec<LocomotiveRepairCost>> {
        queries::report::repair_cost_per_locomotive(self.connection()).await
    }

    async fn repair_types_per_team(&mut self) -> Result<Vec<TeamRepairTypeCount>> {
        queries::report::repair_types_per_team(self.connection()).await
    }

    async fn locomotives_by_depot(&mut self, depot: &str) -> Result<Vec<WithId<Locomotive>>> {
        queries::locomotive::get_by_depot(self.connection(), depot).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn no_variables_means_no_info() {
        assert!(DatabaseConnectionInfo::from_lookup(lookup(&[]))
            .unwrap()
            .is_none());
    }

    #[test]
    fn missing_variables_fall_back_to_defaults() {
        let info = DatabaseConnectionInfo::from_lookup(lookup(&[("DATABASE_HOST", "db.internal")]))
            .unwrap()
            .unwrap();
        assert_eq!(info.hostname, "db.internal");
        assert_eq!(info.port, 5432);
        assert_eq!(info.database, "db");
        assert_eq!(info.username, "user");
        assert_eq!(info.schema, None);
    }

    #[test]
    fn malformed_port_is_a_config_error() {
        let result = DatabaseConnectionInfo::from_lookup(lookup(&[("DATABASE_PORT", "54x2")]));
        assert!(matches!(result, Err(DatabaseError::Config(_))));
    }

    #[test]
    fn schema_must_be_plain_identifier() {
        let ok = DatabaseConnectionInfo::from_lookup(lookup(&[("DATABASE_SCHEMA", "depot_1")]))
            .unwrap()
            .unwrap();
        assert_eq!(ok.schema.as_deref(), Some("depot_1"));

        for bad in ["depot; DROP TABLE x", "1depot", "dépôt"] {
            let result = DatabaseConnectionInfo::from_lookup(lookup(&[("DATABASE_SCHEMA", bad)]));
            assert!(matches!(result, Err(DatabaseError::Config(_))), "{}", bad);
        }
    }

    #[test]
    fn debug_output_hides_password() {
        let info = DatabaseConnectionInfo {
            password: "hunter2".to_owned(),
            ..Default::default()
        };
        let debug = format!("{:?}", info);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("localhost"));
    }
}
