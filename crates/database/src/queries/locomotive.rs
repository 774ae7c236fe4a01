use depot::database::Result;
use model::{
    locomotive::{Locomotive, LocomotiveKind},
    WithId,
};
use sqlx::{Executor, Postgres};
use utility::{id::Id, let_also::LetAlso};

use crate::data_model::{locomotive::LocomotiveRow, with_ids};

use super::convert_error;

pub async fn insert<'c, E>(executor: E, locomotive: Locomotive) -> Result<WithId<Locomotive>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        INSERT INTO locomotives(
            depot,
            type,
            year
        )
        VALUES ($1, $2, $3)
        RETURNING reg_number, depot, type, year;
        ",
    )
    .bind(&locomotive.depot)
    .bind(locomotive.kind.as_str())
    .bind(locomotive.year)
    .fetch_one(executor)
    .await
    .map_err(convert_error)
    .map(|row: LocomotiveRow| row.into())
}

pub async fn get_all<'c, E>(executor: E) -> Result<Vec<WithId<Locomotive>>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT reg_number, depot, type, year
        FROM locomotives
        ORDER BY reg_number;
        ",
    )
    .fetch_all(executor)
    .await
    .map_err(convert_error)?
    .let_owned(|rows: Vec<LocomotiveRow>| Ok(with_ids(rows)))
}

pub async fn get_by_kind<'c, E>(
    executor: E,
    kind: &LocomotiveKind,
) -> Result<Vec<WithId<Locomotive>>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT reg_number, depot, type, year
        FROM locomotives
        WHERE type = $1
        ORDER BY year, reg_number;
        ",
    )
    .bind(kind.as_str())
    .fetch_all(executor)
    .await
    .map_err(convert_error)?
    .let_owned(|rows: Vec<LocomotiveRow>| Ok(with_ids(rows)))
}

pub async fn get_by_depot<'c, E>(executor: E, depot: &str) -> Result<Vec<WithId<Locomotive>>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT reg_number, depot, type, year
        FROM locomotives
        WHERE depot = $1
        ORDER BY reg_number;
        ",
    )
    .bind(depot)
    .fetch_all(executor)
    .await
    .map_err(convert_error)?
    .let_owned(|rows: Vec<LocomotiveRow>| Ok(with_ids(rows)))
}

/// Deletes the locomotive and, through the cascade, its repairs.
pub async fn delete<'c, E>(executor: E, id: Id<Locomotive>) -> Result<bool>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query("DELETE FROM locomotives WHERE reg_number = $1;")
        .bind(id.raw())
        .execute(executor)
        .await
        .map_err(convert_error)
        .map(|result| result.rows_affected() > 0)
}

pub async fn count<'c, E>(executor: E) -> Result<i64>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_scalar("SELECT COUNT(*) FROM locomotives;")
        .fetch_one(executor)
        .await
        .map_err(convert_error)
}
