use super::{prelude::*, *};

/// A review candidate as submitted by a client.
///
/// Without an `id` a new review is created. With an `id` the text
/// of the stored review is replaced.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub id        : Option<ReviewId>,
    pub pos_id    : Option<PosId>,
    pub author_id : Option<UserId>,
    pub text      : String,
}

pub fn submit_review<D: Db>(repo: &D, new_review: NewReview) -> Result<Review> {
    let NewReview {
        id,
        pos_id,
        author_id,
        text,
    } = new_review;
    if text.trim().is_empty() {
        return Err(Error::EmptyReview);
    }

    let pos_id = pos_id.ok_or(Error::MissingPosReference)?;
    get_existing_pos(repo, pos_id)?;

    let author_id = author_id.ok_or(Error::MissingAuthorReference)?;
    get_existing_user(repo, author_id)?;

    let review = match id {
        None => {
            let existing = repo.find_reviews_by_pos_and_author(pos_id, author_id)?;
            if !existing.is_empty() {
                log::warn!("User {author_id} has already reviewed POS {pos_id}");
                return Err(Error::DuplicateReview);
            }
            Review::new(pos_id, author_id, text)
        }
        Some(id) => {
            let stored = repo.get_review(id).map_err(|err| match err {
                RepoError::NotFound => Error::ReviewDoesNotExist,
                err => err.into(),
            })?;
            if stored.pos_id != pos_id || stored.author_id != author_id {
                return Err(Error::ImmutableReference);
            }
            // Approvals are kept when editing
            stored.with_text(text)
        }
    };

    let saved = repo.save_review(review).map_err(|err| match err {
        RepoError::AlreadyExists => Error::DuplicateReview,
        err => err.into(),
    })?;
    log::info!(
        "Saved review {:?} of POS {pos_id} by user {author_id}",
        saved.id
    );
    Ok(saved)
}
