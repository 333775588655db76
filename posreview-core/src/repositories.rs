// Low-level database access traits.
// Each repository is responsible for a single entity.
// Related entities are only referenced by their id and
// never modified or loaded by another repository.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait PosRepo {
    fn create_pos(&self, name: &str) -> Result<Pos>;
    fn get_pos(&self, id: PosId) -> Result<Pos>;
}

pub trait UserRepo {
    fn create_user(&self, login_name: &str) -> Result<User>;
    fn get_user(&self, id: UserId) -> Result<User>;
}

pub trait ReviewRepo {
    fn get_review(&self, id: ReviewId) -> Result<Review>;

    // At most one review is expected for each pair.
    fn find_reviews_by_pos_and_author(&self, pos_id: PosId, author_id: UserId)
        -> Result<Vec<Review>>;

    // Ordered by creation
    fn filter_reviews(&self, pos_id: PosId, approved: bool) -> Result<Vec<Review>>;

    // Assigns the id and both timestamps on the first save and
    // refreshes `updated_at` on every subsequent save.
    // Fails with `AlreadyExists` if another review for the same
    // POS and author has already been stored.
    fn save_review(&self, review: Review) -> Result<Review>;
}
