#[macro_use]
extern crate log;

mod approve_review;
mod create_pos;
mod create_user;
mod filter_reviews;
mod submit_review;

pub mod prelude {
    pub use super::{
        approve_review::*, create_pos::*, create_user::*, filter_reviews::*, submit_review::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use posreview_core::{entities::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use posreview_db_sqlite::Connections;
}
