use crate::repositories;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Empty review")]
    EmptyReview,
    #[error("Missing POS reference")]
    MissingPosReference,
    #[error("Missing author reference")]
    MissingAuthorReference,
    #[error("The POS does not exist")]
    PosNotFound,
    #[error("The user does not exist")]
    UserNotFound,
    #[error("Duplicate review")]
    DuplicateReview,
    #[error("The review does not exist")]
    ReviewDoesNotExist,
    #[error("The review could not be found")]
    ReviewNotFound,
    #[error("The POS and the author of a review cannot be changed")]
    ImmutableReference,
    #[error("The author cannot approve their own review")]
    SelfApproval,
    #[error("The review cannot take any more approvals")]
    ApprovalCountOverflow,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

/// How a failed request should be reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request itself is invalid and can be corrected by the caller.
    Validation,
    /// A referenced POS, user or review does not exist.
    NotFound,
}

impl Error {
    /// Infrastructure failures of the storage have no kind.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::EmptyReview
            | Self::MissingPosReference
            | Self::MissingAuthorReference
            | Self::DuplicateReview
            | Self::ReviewDoesNotExist
            | Self::ImmutableReference
            | Self::SelfApproval => Some(ErrorKind::Validation),
            Self::PosNotFound | Self::UserNotFound | Self::ReviewNotFound => {
                Some(ErrorKind::NotFound)
            }
            Self::Repo(repositories::Error::NotFound) => Some(ErrorKind::NotFound),
            Self::ApprovalCountOverflow | Self::Repo(_) => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.kind() == Some(ErrorKind::Validation)
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == Some(ErrorKind::NotFound)
    }
}
