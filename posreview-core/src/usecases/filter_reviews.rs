use super::{prelude::*, *};

/// All reviews of an existing POS with the requested approval state.
///
/// An empty list is returned if no reviews match.
pub fn filter_reviews<R>(repo: &R, pos_id: PosId, approved: bool) -> Result<Vec<Review>>
where
    R: PosRepo + ReviewRepo,
{
    let pos = get_existing_pos(repo, pos_id)?;
    Ok(repo.filter_reviews(pos.id, approved)?)
}

pub fn get_review<R: ReviewRepo>(repo: &R, id: ReviewId) -> Result<Review> {
    repo.get_review(id).map_err(|err| match err {
        RepoError::NotFound => Error::ReviewNotFound,
        err => err.into(),
    })
}
