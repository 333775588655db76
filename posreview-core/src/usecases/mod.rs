mod approve_review;
mod error;
mod filter_reviews;
mod submit_review;

#[cfg(test)]
pub mod tests;

pub use self::{
    approve_review::*,
    error::{Error, ErrorKind},
    filter_reviews::*,
    submit_review::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{db::*, entities::*, repositories::*, RepoError};
}
use self::prelude::*;

fn get_existing_pos<R: PosRepo>(repo: &R, id: PosId) -> Result<Pos> {
    repo.get_pos(id).map_err(|err| match err {
        RepoError::NotFound => Error::PosNotFound,
        err => err.into(),
    })
}

fn get_existing_user<R: UserRepo>(repo: &R, id: UserId) -> Result<User> {
    repo.get_user(id).map_err(|err| match err {
        RepoError::NotFound => Error::UserNotFound,
        err => err.into(),
    })
}
