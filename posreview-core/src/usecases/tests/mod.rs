use super::prelude::*;
use std::cell::{Cell, RefCell};

type RepoResult<T> = std::result::Result<T, RepoError>;

#[derive(Default)]
pub struct MockDb {
    pub pos: RefCell<Vec<Pos>>,
    pub users: RefCell<Vec<User>>,
    pub reviews: RefCell<Vec<Review>>,
    last_id: Cell<i64>,
}

impl MockDb {
    pub fn with_pos_and_users(pos_ids: &[i64], user_ids: &[i64]) -> Self {
        let db = Self::default();
        db.pos.borrow_mut().extend(pos_ids.iter().map(|id| Pos {
            id: (*id).into(),
            name: format!("POS #{id}"),
        }));
        db.users.borrow_mut().extend(user_ids.iter().map(|id| User {
            id: (*id).into(),
            login_name: format!("user{id}"),
        }));
        db
    }

    fn next_id(&self) -> i64 {
        let id = self.last_id.get() + 1;
        self.last_id.set(id);
        id
    }
}

impl PosRepo for MockDb {
    fn create_pos(&self, name: &str) -> RepoResult<Pos> {
        let pos = Pos {
            id: self.next_id().into(),
            name: name.into(),
        };
        self.pos.borrow_mut().push(pos.clone());
        Ok(pos)
    }

    fn get_pos(&self, id: PosId) -> RepoResult<Pos> {
        self.pos
            .borrow()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }
}

impl UserRepo for MockDb {
    fn create_user(&self, login_name: &str) -> RepoResult<User> {
        if self.users.borrow().iter().any(|u| u.login_name == login_name) {
            return Err(RepoError::AlreadyExists);
        }
        let user = User {
            id: self.next_id().into(),
            login_name: login_name.into(),
        };
        self.users.borrow_mut().push(user.clone());
        Ok(user)
    }

    fn get_user(&self, id: UserId) -> RepoResult<User> {
        self.users
            .borrow()
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }
}

impl ReviewRepo for MockDb {
    fn get_review(&self, id: ReviewId) -> RepoResult<Review> {
        self.reviews
            .borrow()
            .iter()
            .find(|r| r.id == Some(id))
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn find_reviews_by_pos_and_author(
        &self,
        pos_id: PosId,
        author_id: UserId,
    ) -> RepoResult<Vec<Review>> {
        Ok(self
            .reviews
            .borrow()
            .iter()
            .filter(|r| r.pos_id == pos_id && r.author_id == author_id)
            .cloned()
            .collect())
    }

    fn filter_reviews(&self, pos_id: PosId, approved: bool) -> RepoResult<Vec<Review>> {
        Ok(self
            .reviews
            .borrow()
            .iter()
            .filter(|r| r.pos_id == pos_id && r.approved == approved)
            .cloned()
            .collect())
    }

    fn save_review(&self, review: Review) -> RepoResult<Review> {
        let now = Timestamp::now();
        let mut reviews = self.reviews.borrow_mut();
        match review.id {
            None => {
                if reviews
                    .iter()
                    .any(|r| r.pos_id == review.pos_id && r.author_id == review.author_id)
                {
                    return Err(RepoError::AlreadyExists);
                }
                let saved = Review {
                    id: Some(self.next_id().into()),
                    created_at: Some(now),
                    updated_at: Some(now),
                    ..review
                };
                reviews.push(saved.clone());
                Ok(saved)
            }
            Some(id) => {
                let stored = reviews
                    .iter_mut()
                    .find(|r| r.id == Some(id))
                    .ok_or(RepoError::NotFound)?;
                let saved = Review {
                    created_at: stored.created_at,
                    updated_at: Some(now),
                    ..review
                };
                *stored = saved.clone();
                Ok(saved)
            }
        }
    }
}

// Walks through the complete life cycle of a single review.
#[test]
fn approval_scenario_with_quorum_of_two() {
    use super::*;

    let db = MockDb::with_pos_and_users(&[1], &[10, 20, 30]);
    let quorum = ApprovalQuorum::new(2).unwrap();

    let review = submit_review(
        &db,
        NewReview {
            id: None,
            pos_id: Some(PosId::new(1)),
            author_id: Some(UserId::new(10)),
            text: "Friendly staff".into(),
        },
    )
    .unwrap();
    let id = review.id.unwrap();
    assert_eq!((0, false), (review.approval_count, review.approved));

    let review = approve_review(&db, quorum, id, UserId::new(20)).unwrap();
    assert_eq!((1, false), (review.approval_count, review.approved));

    let err = approve_review(&db, quorum, id, UserId::new(10)).unwrap_err();
    assert!(matches!(err, Error::SelfApproval));
    assert_eq!(1, get_review(&db, id).unwrap().approval_count);

    let review = approve_review(&db, quorum, id, UserId::new(30)).unwrap();
    assert_eq!((2, true), (review.approval_count, review.approved));

    assert_eq!(
        vec![review],
        filter_reviews(&db, PosId::new(1), true).unwrap()
    );
    assert!(filter_reviews(&db, PosId::new(1), false).unwrap().is_empty());
}
