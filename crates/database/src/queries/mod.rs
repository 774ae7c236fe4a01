use depot::database::DatabaseError;

pub mod locomotive;
pub mod repair;
pub mod report;
pub mod schema;
pub mod team;
pub mod worker;

pub(crate) fn convert_error(why: sqlx::Error) -> DatabaseError {
    match why {
        sqlx::Error::RowNotFound => DatabaseError::NotFound,
        _ => DatabaseError::Query(Box::new(why)),
    }
}
