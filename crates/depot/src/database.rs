use std::{error, fmt::Debug, result};

use async_trait::async_trait;
use model::{
    locomotive::Locomotive,
    repair::Repair,
    report::{LocomotiveRepairCost, RepairEndDate, TeamRepairCount, TeamRepairTypeCount},
    team::Team,
    worker::Worker,
    WithId,
};
use serde::Serialize;
use thiserror::Error;
use utility::id::{HasId, Id};

pub type BoxError = Box<dyn error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Opening the connection or preparing the session failed.
    #[error("could not connect to database: {0}")]
    Connection(#[source] BoxError),
    /// A statement failed. Its transaction has been rolled back.
    #[error("query failed: {0}")]
    Query(#[source] BoxError),
    #[error("no matching row found")]
    NotFound,
    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = result::Result<T, DatabaseError>;

/// Basic storage operations for one entity table.
#[async_trait]
pub trait Repo<T: HasId>
where
    <T as HasId>::IdType: Debug + Clone + Serialize + PartialEq,
{
    async fn insert(&mut self, element: T) -> Result<WithId<T>>;
    async fn get_all(&mut self) -> Result<Vec<WithId<T>>>;
    /// Returns whether a row was removed. Cascading deletes follow the
    /// foreign keys of the schema.
    async fn delete(&mut self, id: Id<T>) -> Result<bool>;
    async fn count(&mut self) -> Result<i64>;
}

/// Everything the depot report needs from a storage backend.
#[async_trait]
pub trait DepotOperations:
    Repo<Locomotive> + Repo<Repair> + Repo<Team> + Repo<Worker> + Send
{
    /// Creates the four tables if they do not exist yet. Calling this on an
    /// already provisioned database is a no-op.
    async fn create_tables(&mut self) -> Result<()>;

    async fn drop_tables(&mut self) -> Result<()>;

    /// Inserts the fixed sample data set from [`model::sample`].
    async fn insert_sample_data(&mut self) -> Result<()>;

    /// Freight locomotives, oldest first.
    async fn freight_locomotives(&mut self) -> Result<Vec<WithId<Locomotive>>>;

    async fn repair_end_dates(&mut self) -> Result<Vec<RepairEndDate>>;

    async fn repairs_per_team(&mut self) -> Result<Vec<TeamRepairCount>>;

    async fn repair_cost_per_locomotive(&mut self) -> Result<Vec<LocomotiveRepairCost>>;

    async fn repair_types_per_team(&mut self) -> Result<Vec<TeamRepairTypeCount>>;

    /// Locomotives whose depot equals `depot` exactly (case-sensitive).
    async fn locomotives_by_depot(&mut self, depot: &str) -> Result<Vec<WithId<Locomotive>>>;
}
