
pub mod prelude {
    pub(crate) use crate::{error::AppError, prelude as flows, sqlite};
    pub use posreview_core::{
        entities::*,
        usecases::{self, ErrorKind},
    };

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
        pub quorum: ApprovalQuorum,
    }

    impl BackendFixture {
        pub fn new(min_approvals: u32) -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            posreview_db_sqlite::run_embedded_database_migrations(
                db_connections.exclusive().unwrap(),
            )
            .unwrap();
            Self {
                db_connections,
                quorum: ApprovalQuorum::new(min_approvals).unwrap(),
            }
        }

        pub fn create_pos(&self, name: &str) -> PosId {
            flows::create_pos(&self.db_connections, name).unwrap().id
        }

        pub fn create_user(&self, login_name: &str) -> UserId {
            flows::create_user(&self.db_connections, login_name)
                .unwrap()
                .id
        }

        pub fn submit(
            &self,
            pos_id: PosId,
            author_id: UserId,
            text: &str,
        ) -> Result<Review, AppError> {
            flows::submit_review(
                &self.db_connections,
                usecases::NewReview {
                    id: None,
                    pos_id: Some(pos_id),
                    author_id: Some(author_id),
                    text: text.into(),
                },
            )
        }

        pub fn approve(&self, review_id: ReviewId, user_id: UserId) -> Result<Review, AppError> {
            flows::approve_review(&self.db_connections, self.quorum, review_id, user_id)
        }

        pub fn review(&self, review_id: ReviewId) -> Review {
            flows::get_review(&self.db_connections, review_id).unwrap()
        }
    }
}
