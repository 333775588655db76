pub mod approval;
pub mod db;
pub mod repositories;
pub mod usecases;

pub mod entities {
    pub use posreview_entities::{id::*, pos::*, quorum::*, review::*, time::*, user::*};
}

pub use self::repositories::Error as RepoError;
