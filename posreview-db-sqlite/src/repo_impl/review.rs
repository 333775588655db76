use super::*;

impl ReviewRepo for DbConnection<'_> {
    fn get_review(&self, id: ReviewId) -> Result<Review> {
        get_review(&mut self.conn.borrow_mut(), id)
    }
    fn find_reviews_by_pos_and_author(
        &self,
        pos_id: PosId,
        author_id: UserId,
    ) -> Result<Vec<Review>> {
        find_reviews_by_pos_and_author(&mut self.conn.borrow_mut(), pos_id, author_id)
    }
    fn filter_reviews(&self, pos_id: PosId, approved: bool) -> Result<Vec<Review>> {
        filter_reviews(&mut self.conn.borrow_mut(), pos_id, approved)
    }
    fn save_review(&self, review: Review) -> Result<Review> {
        save_review(&mut self.conn.borrow_mut(), review)
    }
}

impl ReviewRepo for DbReadOnly<'_> {
    fn get_review(&self, id: ReviewId) -> Result<Review> {
        get_review(&mut self.conn.borrow_mut(), id)
    }
    fn find_reviews_by_pos_and_author(
        &self,
        pos_id: PosId,
        author_id: UserId,
    ) -> Result<Vec<Review>> {
        find_reviews_by_pos_and_author(&mut self.conn.borrow_mut(), pos_id, author_id)
    }
    fn filter_reviews(&self, pos_id: PosId, approved: bool) -> Result<Vec<Review>> {
        filter_reviews(&mut self.conn.borrow_mut(), pos_id, approved)
    }
    fn save_review(&self, _review: Review) -> Result<Review> {
        Err(read_only_access())
    }
}

fn load_review(entity: models::ReviewEntity) -> Result<Review> {
    let models::ReviewEntity {
        id,
        created_at,
        updated_at,
        pos_id,
        author_id,
        text,
        approval_count,
        approved,
    } = entity;
    let approval_count = u32::try_from(approval_count).map_err(|_| {
        // Prevented by a check constraint
        repo::Error::Other(anyhow!(
            "Invalid approval count of review {id}: {approval_count}"
        ))
    })?;
    Ok(Review {
        id: Some(id.into()),
        created_at: Some(Timestamp::from_millis(created_at)),
        updated_at: Some(Timestamp::from_millis(updated_at)),
        pos_id: pos_id.into(),
        author_id: author_id.into(),
        text,
        approval_count,
        approved,
    })
}

fn load_reviews(entities: Vec<models::ReviewEntity>) -> Result<Vec<Review>> {
    entities.into_iter().map(load_review).collect()
}

fn get_review(conn: &mut SqliteConnection, id: ReviewId) -> Result<Review> {
    use schema::reviews::dsl;
    let entity = dsl::reviews
        .filter(dsl::id.eq(id.to_inner()))
        .first::<models::ReviewEntity>(conn)
        .map_err(from_diesel_err)?;
    load_review(entity)
}

fn find_reviews_by_pos_and_author(
    conn: &mut SqliteConnection,
    pos_id: PosId,
    author_id: UserId,
) -> Result<Vec<Review>> {
    use schema::reviews::dsl;
    let entities = dsl::reviews
        .filter(dsl::pos_id.eq(pos_id.to_inner()))
        .filter(dsl::author_id.eq(author_id.to_inner()))
        .load::<models::ReviewEntity>(conn)
        .map_err(from_diesel_err)?;
    debug_assert!(entities.len() <= 1);
    load_reviews(entities)
}

fn filter_reviews(
    conn: &mut SqliteConnection,
    pos_id: PosId,
    approved: bool,
) -> Result<Vec<Review>> {
    use schema::reviews::dsl;
    let entities = dsl::reviews
        .filter(dsl::pos_id.eq(pos_id.to_inner()))
        .filter(dsl::approved.eq(approved))
        .order_by(dsl::id)
        .load::<models::ReviewEntity>(conn)
        .map_err(from_diesel_err)?;
    load_reviews(entities)
}

fn save_review(conn: &mut SqliteConnection, review: Review) -> Result<Review> {
    let now = Timestamp::now();
    match review.id {
        None => create_review(conn, &review, now),
        Some(id) => update_review(conn, id, &review, now),
    }
}

fn create_review(conn: &mut SqliteConnection, review: &Review, now: Timestamp) -> Result<Review> {
    let new_review = models::NewReview {
        created_at: now.as_millis(),
        updated_at: now.as_millis(),
        pos_id: review.pos_id.to_inner(),
        author_id: review.author_id.to_inner(),
        text: &review.text,
        approval_count: review.approval_count.into(),
        approved: review.approved,
    };
    diesel::insert_into(schema::reviews::table)
        .values(&new_review)
        .execute(conn)
        .map_err(from_diesel_err)?;
    let id = inserted_rowid(conn)?;
    Ok(Review {
        id: Some(id.into()),
        created_at: Some(now),
        updated_at: Some(now),
        ..review.clone()
    })
}

// The POS and the author of a stored review are never updated.
fn update_review(
    conn: &mut SqliteConnection,
    id: ReviewId,
    review: &Review,
    now: Timestamp,
) -> Result<Review> {
    use schema::reviews::dsl;
    let changeset = models::ReviewChangeset {
        updated_at: now.as_millis(),
        text: &review.text,
        approval_count: review.approval_count.into(),
        approved: review.approved,
    };
    let count = diesel::update(dsl::reviews.filter(dsl::id.eq(id.to_inner())))
        .set(&changeset)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(1, count);
    get_review(conn, id)
}
