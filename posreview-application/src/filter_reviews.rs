use super::*;

pub fn filter_reviews(
    connections: &sqlite::Connections,
    pos_id: PosId,
    approved: bool,
) -> Result<Vec<Review>> {
    let db = connections.shared()?;
    Ok(usecases::filter_reviews(&db, pos_id, approved)?)
}

pub fn get_review(connections: &sqlite::Connections, id: ReviewId) -> Result<Review> {
    let db = connections.shared()?;
    Ok(usecases::get_review(&db, id)?)
}
