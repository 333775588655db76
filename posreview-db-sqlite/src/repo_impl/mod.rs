// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use posreview_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod pos;
mod review;
mod user;

type Result<T> = std::result::Result<T, repo::Error>;

// Row id of the most recent successful insert on the same connection
define_sql_function! {
    fn last_insert_rowid() -> diesel::sql_types::BigInt;
}

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn inserted_rowid(conn: &mut SqliteConnection) -> Result<i64> {
    diesel::select(last_insert_rowid())
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)
}

fn read_only_access() -> repo::Error {
    repo::Error::Other(anyhow!("Write access requires a transaction"))
}
