use super::*;

/// Record the approval of a review by a user.
///
/// Reading the current approval count, checking the request and
/// writing the next version of the review happens within a single
/// exclusive transaction. Concurrent approvals of the same review
/// are never lost.
pub fn approve_review(
    connections: &sqlite::Connections,
    quorum: ApprovalQuorum,
    review_id: ReviewId,
    user_id: UserId,
) -> Result<Review> {
    let review = connections.exclusive()?.transaction(|conn| {
        usecases::approve_review(conn, quorum, review_id, user_id).map_err(|err| {
            warn!(
                "Failed to approve review {} by user {}: {}",
                review_id, user_id, err
            );
            err
        })
    })?;
    debug_assert_eq!(
        review.approved,
        posreview_core::approval::is_approved(&review, quorum)
    );
    Ok(review)
}
