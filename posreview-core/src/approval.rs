//! Approval policy of reviews.
//!
//! A review is approved if and only if its approval count has
//! reached the configured quorum. All functions are pure.

use crate::entities::*;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalStatus {
    Pending,
    Approved,
}

impl From<bool> for ApprovalStatus {
    fn from(approved: bool) -> Self {
        if approved {
            Self::Approved
        } else {
            Self::Pending
        }
    }
}

impl From<&Review> for ApprovalStatus {
    fn from(review: &Review) -> Self {
        review.approved.into()
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Pending => f.write_str("pending"),
            Self::Approved => f.write_str("approved"),
        }
    }
}

pub fn is_approved(review: &Review, quorum: ApprovalQuorum) -> bool {
    review.approval_count >= quorum.min_count()
}

/// Recompute the approved flag from the current approval count.
pub fn with_recomputed_approval(review: &Review, quorum: ApprovalQuorum) -> Review {
    log::debug!(
        "Updating approval status of review {:?} ({} of {} approvals)",
        review.id,
        review.approval_count,
        quorum
    );
    review.with_approved(is_approved(review, quorum))
}

/// The next version of a review after one more user approved it.
///
/// Returns `None` if the approval count cannot be incremented.
pub fn next_approval(review: &Review, quorum: ApprovalQuorum) -> Option<Review> {
    let count = review.approval_count.checked_add(1)?;
    let next = with_recomputed_approval(&review.with_approval_count(count), quorum);
    debug_assert_eq!(next.approved, is_approved(&next, quorum));
    Some(next)
}
