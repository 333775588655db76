pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::review_builder::*;

pub mod review_builder {

    use super::*;
    use crate::{id::*, review::*, time::*};

    #[derive(Debug)]
    pub struct ReviewBuild {
        review: Review,
    }

    impl ReviewBuild {
        pub fn id(mut self, id: i64) -> Self {
            self.review.id = Some(id.into());
            self
        }
        pub fn pos(mut self, pos_id: i64) -> Self {
            self.review.pos_id = pos_id.into();
            self
        }
        pub fn author(mut self, author_id: i64) -> Self {
            self.review.author_id = author_id.into();
            self
        }
        pub fn text(mut self, text: &str) -> Self {
            self.review.text = text.into();
            self
        }
        pub fn approval_count(mut self, count: u32) -> Self {
            self.review.approval_count = count;
            self
        }
        pub fn approved(mut self, approved: bool) -> Self {
            self.review.approved = approved;
            self
        }
        pub fn created_at(mut self, at: Timestamp) -> Self {
            self.review.created_at = Some(at);
            self.review.updated_at = Some(at);
            self
        }
        pub fn finish(self) -> Review {
            self.review
        }
    }

    impl Builder for Review {
        type Build = ReviewBuild;
        fn build() -> ReviewBuild {
            ReviewBuild {
                review: Review::new(PosId::new(0), UserId::new(0), "review"),
            }
        }
    }
}
