use std::{fmt, num::NonZeroU32};
use thiserror::Error;

/// Minimum number of approvals a review needs to become visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApprovalQuorum(NonZeroU32);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApprovalQuorumError {
    #[error("The approval quorum must be a positive integer")]
    Zero,
}

impl ApprovalQuorum {
    pub fn new(min_count: u32) -> Result<Self, ApprovalQuorumError> {
        NonZeroU32::new(min_count)
            .map(Self)
            .ok_or(ApprovalQuorumError::Zero)
    }

    pub const fn min_count(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for ApprovalQuorum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reject_zero() {
        assert_eq!(Err(ApprovalQuorumError::Zero), ApprovalQuorum::new(0));
    }

    #[test]
    fn positive_min_count() {
        let quorum = ApprovalQuorum::new(3).unwrap();
        assert_eq!(3, quorum.min_count());
        assert_eq!("3", quorum.to_string());
    }
}
