//! 接收者流程用例
//!
//! UI（此处为 CLI）按顺序组合：校验认证码 → 上传两份证明 → 提交 → 按需查询状态。
//! 各用例之间没有编排逻辑，状态流转全部在服务端。

use crate::error::{Error, Result};
use crate::model::*;
use crate::repository::{ReceiverAuthRepository, ReceiverDocumentUploadRepository};
use crate::session::ReceiverSession;
use std::path::Path;
use std::sync::Arc;

fn require_auth_code(auth_code: &str) -> Result<&str> {
    let auth_code = auth_code.trim();
    if auth_code.is_empty() {
        return Err(Error::InvalidParam("auth code must not be empty".to_string()));
    }
    Ok(auth_code)
}

fn require_url<'a>(name: &str, url: &'a str) -> Result<&'a str> {
    let url = url.trim();
    if url.is_empty() {
        return Err(Error::InvalidParam(format!("{} must not be empty", name)));
    }
    Ok(url)
}

/// 校验认证码，成功后写入会话
pub struct VerifyReceiverAuthCode {
    repository: Arc<dyn ReceiverAuthRepository>,
    session: ReceiverSession,
}

impl VerifyReceiverAuthCode {
    pub fn new(repository: Arc<dyn ReceiverAuthRepository>, session: ReceiverSession) -> Self {
        Self {
            repository,
            session,
        }
    }

    pub async fn execute(&self, auth_code: &str) -> Result<ReceiverAuthVerifyResult> {
        let auth_code = require_auth_code(auth_code)?;
        let result = self.repository.verify(auth_code).await?;

        self.session
            .begin(auth_code, result.sender_name.clone())
            .await;
        Ok(result)
    }
}

/// 上传一份证明材料，返回 `file_url`
pub struct UploadReceiverDocument {
    repository: Arc<dyn ReceiverDocumentUploadRepository>,
}

impl UploadReceiverDocument {
    pub fn new(repository: Arc<dyn ReceiverDocumentUploadRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, auth_code: &str, path: &Path) -> Result<String> {
        let auth_code = require_auth_code(auth_code)?;
        self.repository.upload_document(auth_code, path).await
    }
}

/// 提交死亡证明与家庭关系证明
///
/// 不检查是否已有 PENDING 请求，重复提交由服务端拒绝。
pub struct SubmitDeliveryVerification {
    repository: Arc<dyn ReceiverAuthRepository>,
}

impl SubmitDeliveryVerification {
    pub fn new(repository: Arc<dyn ReceiverAuthRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(
        &self,
        auth_code: &str,
        death_certificate_url: &str,
        family_relation_certificate_url: &str,
    ) -> Result<()> {
        let auth_code = require_auth_code(auth_code)?;
        let death = require_url("death certificate URL", death_certificate_url)?;
        let family = require_url(
            "family relation certificate URL",
            family_relation_certificate_url,
        )?;

        self.repository
            .submit_delivery_verification(auth_code, death, family)
            .await?;
        Ok(())
    }
}

/// 查询审核状态，由调用方决定何时轮询
pub struct GetDeliveryVerificationStatus {
    repository: Arc<dyn ReceiverAuthRepository>,
}

impl GetDeliveryVerificationStatus {
    pub fn new(repository: Arc<dyn ReceiverAuthRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, auth_code: &str) -> Result<DeliveryVerificationStatus> {
        let auth_code = require_auth_code(auth_code)?;
        self.repository
            .get_delivery_verification_status(auth_code)
            .await
    }
}

/// 已校验会话下的内容查看，认证码从会话读取
pub struct ReceiverContent {
    repository: Arc<dyn ReceiverAuthRepository>,
    session: ReceiverSession,
}

impl ReceiverContent {
    pub fn new(repository: Arc<dyn ReceiverAuthRepository>, session: ReceiverSession) -> Self {
        Self {
            repository,
            session,
        }
    }

    async fn auth_code(&self) -> Result<String> {
        self.session.auth_code().await.ok_or(Error::NotAuthenticated)
    }

    pub async fn message(&self) -> Result<SenderMessage> {
        let code = self.auth_code().await?;
        self.repository.get_message(&code).await
    }

    pub async fn time_letters(&self) -> Result<ReceivedPage<ReceivedTimeLetter>> {
        let code = self.auth_code().await?;
        self.repository.get_time_letters(&code).await
    }

    /// 拉取详情并记为当前选中的信件
    pub async fn select_time_letter(
        &self,
        time_letter_receiver_id: i64,
    ) -> Result<ReceivedTimeLetter> {
        let code = self.auth_code().await?;
        let letter = self
            .repository
            .get_time_letter_detail(&code, time_letter_receiver_id)
            .await?;
        self.session
            .set_selected_time_letter(Some(letter.clone()))
            .await;
        Ok(letter)
    }

    pub async fn mind_records(&self) -> Result<ReceivedPage<ReceivedMindRecord>> {
        let code = self.auth_code().await?;
        self.repository.get_mind_records(&code).await
    }

    pub async fn mind_record_detail(
        &self,
        mind_record_id: i64,
    ) -> Result<ReceivedMindRecordDetail> {
        let code = self.auth_code().await?;
        self.repository
            .get_mind_record_detail(&code, mind_record_id)
            .await
    }

    pub async fn after_notes(&self) -> Result<ReceivedPage<ReceivedAfternote>> {
        let code = self.auth_code().await?;
        self.repository.get_after_notes(&code).await
    }

    pub async fn afternote_detail(&self, afternote_id: i64) -> Result<ReceivedAfternoteDetail> {
        let code = self.auth_code().await?;
        self.repository
            .get_afternote_detail(&code, afternote_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::receiver_auth::MockReceiverAuthRepository;
    use crate::repository::upload::MockReceiverDocumentUploadRepository;

    fn verification(status: &str) -> DeliveryVerification {
        DeliveryVerification {
            id: 1,
            status: VerificationStatus::from_wire(status),
            death_certificate_url: "https://death.pdf".to_string(),
            family_relation_certificate_url: "https://family.pdf".to_string(),
            admin_note: None,
            created_at: "2025-01-01T00:00:00".to_string(),
        }
    }

    #[tokio::test]
    async fn test_verify_stores_code_and_sender() {
        let mut repo = MockReceiverAuthRepository::new();
        repo.expect_verify()
            .withf(|code| code == "abc-123")
            .times(1)
            .returning(|_| {
                Ok(ReceiverAuthVerifyResult {
                    receiver_id: 42,
                    receiver_name: None,
                    sender_name: Some("Kim".to_string()),
                    relation: None,
                })
            });
        let session = ReceiverSession::new();
        let use_case = VerifyReceiverAuthCode::new(Arc::new(repo), session.clone());

        let result = use_case.execute(" abc-123 ").await.unwrap();

        assert_eq!(result.receiver_id, 42);
        assert_eq!(session.auth_code().await.as_deref(), Some("abc-123"));
        assert_eq!(session.sender_name().await.as_deref(), Some("Kim"));

        session.clear_auth_code().await;
        assert!(session.sender_name().await.is_none());
    }

    #[tokio::test]
    async fn test_verify_failure_leaves_session_empty() {
        let mut repo = MockReceiverAuthRepository::new();
        repo.expect_verify().returning(|_| {
            Err(Error::Http {
                status: 404,
                message: "invalid auth code".to_string(),
            })
        });
        let session = ReceiverSession::new();
        let use_case = VerifyReceiverAuthCode::new(Arc::new(repo), session.clone());

        assert!(use_case.execute("wrong").await.is_err());
        assert!(!session.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_blank_auth_code_never_reaches_repository() {
        let repo = MockReceiverAuthRepository::new();
        let use_case = VerifyReceiverAuthCode::new(Arc::new(repo), ReceiverSession::new());
        assert!(matches!(
            use_case.execute("   ").await,
            Err(Error::InvalidParam(_))
        ));
    }

    #[tokio::test]
    async fn test_upload_returns_file_url() {
        let mut repo = MockReceiverDocumentUploadRepository::new();
        repo.expect_upload_document()
            .withf(|code, path| code == "auth-123" && path == Path::new("death.pdf"))
            .times(1)
            .returning(|_, _| {
                Ok("https://bucket.s3.amazonaws.com/receiver-docs/abc.pdf".to_string())
            });
        let use_case = UploadReceiverDocument::new(Arc::new(repo));

        let url = use_case
            .execute("auth-123", Path::new("death.pdf"))
            .await
            .unwrap();
        assert_eq!(url, "https://bucket.s3.amazonaws.com/receiver-docs/abc.pdf");
    }

    #[tokio::test]
    async fn test_upload_failure_keeps_message() {
        let mut repo = MockReceiverDocumentUploadRepository::new();
        repo.expect_upload_document()
            .returning(|_, _| Err(Error::Upload("Upload failed".to_string())));
        let use_case = UploadReceiverDocument::new(Arc::new(repo));

        match use_case.execute("code", Path::new("uri")).await {
            Err(Error::Upload(msg)) => assert_eq!(msg, "Upload failed"),
            other => panic!("expected upload error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_submit_success_returns_unit() {
        let mut repo = MockReceiverAuthRepository::new();
        repo.expect_submit_delivery_verification()
            .withf(|code, death, family| {
                code == "auth-code"
                    && death == "https://death.pdf"
                    && family == "https://family.pdf"
            })
            .times(1)
            .returning(|_, _, _| Ok(verification("PENDING")));
        let use_case = SubmitDeliveryVerification::new(Arc::new(repo));

        let result = use_case
            .execute("auth-code", "https://death.pdf", "https://family.pdf")
            .await;
        assert!(matches!(result, Ok(())));
    }

    #[tokio::test]
    async fn test_submit_failure_keeps_message() {
        let mut repo = MockReceiverAuthRepository::new();
        repo.expect_submit_delivery_verification()
            .returning(|_, _, _| Err(Error::Network("Server error".to_string())));
        let use_case = SubmitDeliveryVerification::new(Arc::new(repo));

        let err = use_case.execute("auth-code", "url1", "url2").await.unwrap_err();
        match err {
            Error::Network(msg) => assert_eq!(msg, "Server error"),
            other => panic!("expected network error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_submit_rejects_blank_url() {
        let repo = MockReceiverAuthRepository::new();
        let use_case = SubmitDeliveryVerification::new(Arc::new(repo));
        assert!(matches!(
            use_case.execute("auth-code", "https://death.pdf", "").await,
            Err(Error::InvalidParam(_))
        ));
    }

    #[tokio::test]
    async fn test_status_pending() {
        let mut repo = MockReceiverAuthRepository::new();
        repo.expect_get_delivery_verification_status()
            .withf(|code| code == "auth-code")
            .times(1)
            .returning(|_| Ok(verification("PENDING").into()));
        let use_case = GetDeliveryVerificationStatus::new(Arc::new(repo));

        let status = use_case.execute("auth-code").await.unwrap();
        assert_eq!(status.status, VerificationStatus::Pending);
        assert!(status.admin_note.is_none());
    }

    #[tokio::test]
    async fn test_status_failure() {
        let mut repo = MockReceiverAuthRepository::new();
        repo.expect_get_delivery_verification_status()
            .returning(|_| Err(Error::Network("Network error".to_string())));
        let use_case = GetDeliveryVerificationStatus::new(Arc::new(repo));
        assert!(use_case.execute("auth-code").await.is_err());
    }

    #[tokio::test]
    async fn test_content_requires_verified_session() {
        let repo = MockReceiverAuthRepository::new();
        let content = ReceiverContent::new(Arc::new(repo), ReceiverSession::new());
        assert!(matches!(
            content.time_letters().await,
            Err(Error::NotAuthenticated)
        ));
    }

    #[tokio::test]
    async fn test_select_time_letter_updates_session() {
        let mut repo = MockReceiverAuthRepository::new();
        repo.expect_get_time_letter_detail()
            .withf(|code, id| code == "abc-123" && *id == 7)
            .returning(|_, id| {
                Ok(ReceivedTimeLetter {
                    time_letter_id: 1,
                    time_letter_receiver_id: id,
                    title: Some("Hello".to_string()),
                    content: None,
                    send_at: None,
                    status: None,
                    sender_name: None,
                    delivered_at: None,
                    created_at: None,
                    media_list: Vec::new(),
                    is_read: true,
                })
            });
        let session = ReceiverSession::new();
        session.set_auth_code("abc-123").await;
        let content = ReceiverContent::new(Arc::new(repo), session.clone());

        let letter = content.select_time_letter(7).await.unwrap();
        assert_eq!(
            session.selected_time_letter().await,
            Some(letter)
        );
    }

    #[tokio::test]
    async fn test_verifying_another_code_drops_selected_letter() {
        let mut repo = MockReceiverAuthRepository::new();
        repo.expect_verify()
            .withf(|code| code == "code-B")
            .times(1)
            .returning(|_| {
                Ok(ReceiverAuthVerifyResult {
                    receiver_id: 43,
                    receiver_name: None,
                    sender_name: Some("Lee".to_string()),
                    relation: None,
                })
            });
        let session = ReceiverSession::new();
        session.begin("code-A", Some("Kim".to_string())).await;
        session
            .set_selected_time_letter(Some(ReceivedTimeLetter {
                time_letter_id: 1,
                time_letter_receiver_id: 10,
                title: Some("From Kim".to_string()),
                content: None,
                send_at: None,
                status: None,
                sender_name: Some("Kim".to_string()),
                delivered_at: None,
                created_at: None,
                media_list: Vec::new(),
                is_read: false,
            }))
            .await;
        let use_case = VerifyReceiverAuthCode::new(Arc::new(repo), session.clone());

        use_case.execute("code-B").await.unwrap();

        assert_eq!(session.auth_code().await.as_deref(), Some("code-B"));
        assert_eq!(session.sender_name().await.as_deref(), Some("Lee"));
        assert!(session.selected_time_letter().await.is_none());
    }
}
