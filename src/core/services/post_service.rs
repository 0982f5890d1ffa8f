use uuid::Uuid;

use crate::domain::{Post, PostDraft};
use crate::storage::ClubStore;

use super::{ServiceError, ServiceResult};

/// Upper bound on stored body size; rich-text payloads beyond this are
/// rejected before any write.
pub const MAX_BODY_BYTES: usize = 256 * 1024;

pub struct PostService;

impl PostService {
    /// Validates and persists an edit. On rejection the stored post is
    /// untouched; there is no partial write.
    pub fn apply(
        store: &dyn ClubStore,
        id: Uuid,
        draft: &PostDraft,
        actor: Uuid,
    ) -> ServiceResult<Post> {
        Self::validate(draft)?;
        if store.get_post(id)?.is_none() {
            return Err(ServiceError::PostNotFound(id));
        }
        store.update_post(id, draft, actor).map_err(ServiceError::from)
    }

    fn validate(draft: &PostDraft) -> ServiceResult<()> {
        if draft.title.trim().is_empty() {
            return Err(ServiceError::Invalid("post title must not be empty".into()));
        }
        if draft.body.len() > MAX_BODY_BYTES {
            return Err(ServiceError::Invalid(format!(
                "post body of {} bytes exceeds the {} byte limit",
                draft.body.len(),
                MAX_BODY_BYTES
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_title_is_rejected() {
        let err = PostService::validate(&PostDraft::new("   ", "body")).expect_err("blank title");
        assert!(matches!(err, ServiceError::Invalid(_)));
    }

    #[test]
    fn oversized_body_is_rejected() {
        let body = "x".repeat(MAX_BODY_BYTES + 1);
        let err = PostService::validate(&PostDraft::new("Title", body)).expect_err("body too big");
        assert!(matches!(err, ServiceError::Invalid(_)));
    }
}
