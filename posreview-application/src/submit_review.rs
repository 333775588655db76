use super::*;

pub fn submit_review(
    connections: &sqlite::Connections,
    new_review: usecases::NewReview,
) -> Result<Review> {
    let review = connections.exclusive()?.transaction(|conn| {
        usecases::submit_review(conn, new_review).map_err(|err| {
            warn!("Failed to submit review: {}", err);
            err
        })
    })?;
    Ok(review)
}
