//! 管理员审核用例

use crate::error::{Error, Result};
use crate::model::AdminVerificationRequest;
use crate::repository::AdminRepository;
use std::sync::Arc;

/// 审核决定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Reject,
}

pub struct ReviewVerification {
    repository: Arc<dyn AdminRepository>,
}

impl ReviewVerification {
    pub fn new(repository: Arc<dyn AdminRepository>) -> Self {
        Self { repository }
    }

    /// 空白备注按未填写处理；终态请求的重复处理由服务端拒绝
    pub async fn execute(
        &self,
        id: i64,
        decision: ReviewDecision,
        admin_note: Option<String>,
    ) -> Result<AdminVerificationRequest> {
        if id <= 0 {
            return Err(Error::InvalidParam(format!("invalid verification id: {}", id)));
        }
        let note = admin_note
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        match decision {
            ReviewDecision::Approve => self.repository.approve_verification(id, note).await,
            ReviewDecision::Reject => self.repository.reject_verification(id, note).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::VerificationStatus;
    use crate::repository::admin::MockAdminRepository;
    use mockall::predicate::eq;

    fn reviewed(
        id: i64,
        status: VerificationStatus,
        note: Option<String>,
    ) -> AdminVerificationRequest {
        AdminVerificationRequest {
            id,
            user_id: 2,
            sender_name: "Kim".to_string(),
            sender_email: "kim@example.com".to_string(),
            receiver_id: 3,
            receiver_name: "Park".to_string(),
            status,
            death_certificate_url: "https://s3/d.pdf".to_string(),
            family_relation_certificate_url: "https://s3/f.pdf".to_string(),
            admin_note: note,
            created_at: "2025-02-01T10:00:00".to_string(),
        }
    }

    #[tokio::test]
    async fn test_approve_passes_note() {
        let mut repo = MockAdminRepository::new();
        repo.expect_approve_verification()
            .with(eq(10), eq(Some("looks good".to_string())))
            .times(1)
            .returning(|id, note| Ok(reviewed(id, VerificationStatus::Approved, note)));
        let use_case = ReviewVerification::new(Arc::new(repo));

        let result = use_case
            .execute(10, ReviewDecision::Approve, Some("  looks good ".to_string()))
            .await
            .unwrap();
        assert_eq!(result.status, VerificationStatus::Approved);
    }

    #[tokio::test]
    async fn test_reject_blank_note_becomes_none() {
        let mut repo = MockAdminRepository::new();
        repo.expect_reject_verification()
            .with(eq(11), eq(None::<String>))
            .times(1)
            .returning(|id, note| Ok(reviewed(id, VerificationStatus::Rejected, note)));
        let use_case = ReviewVerification::new(Arc::new(repo));

        let result = use_case
            .execute(11, ReviewDecision::Reject, Some("   ".to_string()))
            .await
            .unwrap();
        assert!(result.admin_note.is_none());
    }

    #[tokio::test]
    async fn test_invalid_id() {
        let repo = MockAdminRepository::new();
        let use_case = ReviewVerification::new(Arc::new(repo));
        assert!(matches!(
            use_case.execute(0, ReviewDecision::Approve, None).await,
            Err(Error::InvalidParam(_))
        ));
    }
}
