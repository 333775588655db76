use crate::{id::*, time::Timestamp};

/// A review of a point of sale written by a user.
///
/// `id`, `created_at` and `updated_at` are assigned by the storage
/// and remain `None` until the review has been saved for the first time.
/// The `approved` flag is derived from `approval_count` and must only be
/// recomputed by the approval workflow.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id             : Option<ReviewId>,
    pub created_at     : Option<Timestamp>,
    pub updated_at     : Option<Timestamp>,
    pub pos_id         : PosId,
    pub author_id      : UserId,
    pub text           : String,
    pub approval_count : u32,
    pub approved       : bool,
}

impl Review {
    /// A new, unsaved and pending review.
    pub fn new(pos_id: PosId, author_id: UserId, text: impl Into<String>) -> Self {
        Self {
            id: None,
            created_at: None,
            updated_at: None,
            pos_id,
            author_id,
            text: text.into(),
            approval_count: 0,
            approved: false,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    // The following functions derive the next version of
    // a review and never modify the original value.

    #[must_use]
    pub fn with_approval_count(&self, approval_count: u32) -> Self {
        Self {
            approval_count,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_approved(&self, approved: bool) -> Self {
        Self {
            approved,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..self.clone()
        }
    }
}
