use super::{prelude::*, *};
use crate::approval;

pub fn approve_review<R>(
    repo: &R,
    quorum: ApprovalQuorum,
    review_id: ReviewId,
    user_id: UserId,
) -> Result<Review>
where
    R: UserRepo + ReviewRepo,
{
    log::info!("Processing approval request for review {review_id} by user {user_id}");
    get_existing_user(repo, user_id)?;

    // The review id stems from the request itself
    let review = repo.get_review(review_id).map_err(|err| match err {
        RepoError::NotFound => Error::ReviewDoesNotExist,
        err => err.into(),
    })?;

    if review.author_id == user_id {
        log::warn!("User {user_id} tried to approve their own review {review_id}");
        return Err(Error::SelfApproval);
    }

    let updated = approval::next_approval(&review, quorum).ok_or_else(|| {
        log::warn!("Approval count of review {review_id} is exhausted");
        Error::ApprovalCountOverflow
    })?;
    let saved = repo.save_review(updated)?;
    if saved.approved && !review.approved {
        log::info!(
            "Review {review_id} has been approved after {} approvals",
            saved.approval_count
        );
    }
    Ok(saved)
}
