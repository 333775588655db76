use posreview_core::{
    repositories::Error as RepoError,
    usecases::{Error as ParameterError, ErrorKind},
};
use thiserror::Error;

pub use posreview_core::repositories;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<ParameterError> for AppError {
    fn from(err: ParameterError) -> AppError {
        AppError::Business(err.into())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// The kind of a rejected request or `None` for internal failures.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Business(BError::Parameter(err)) => err.kind(),
            Self::Business(BError::Repo(RepoError::NotFound)) => Some(ErrorKind::NotFound),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_kind_of_usecase_errors() {
        assert_eq!(
            Some(ErrorKind::Validation),
            AppError::from(ParameterError::DuplicateReview).kind()
        );
        assert_eq!(
            Some(ErrorKind::NotFound),
            AppError::from(ParameterError::UserNotFound).kind()
        );
        assert_eq!(None, AppError::from(anyhow::anyhow!("no connection")).kind());
    }
}
