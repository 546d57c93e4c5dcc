//! 管理员审核仓库
//!
//! 需要 ADMIN 权限的 Bearer 令牌；未认证 401、无权限 403、不存在 404。
//! 已处理（APPROVED/REJECTED）的请求再次处理时由服务端拒绝。

use crate::client::{ApiClient, Auth};
use crate::dto::admin::{AdminVerificationResponse, ReviewRequest};
use crate::error::Result;
use crate::model::AdminVerificationRequest;
use async_trait::async_trait;
use tracing::info;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminRepository: Send + Sync {
    /// 待审核（PENDING）的请求列表
    async fn get_pending_verifications(&self) -> Result<Vec<AdminVerificationRequest>>;

    /// 详情中的材料地址是预签名 URL，过期前查看
    async fn get_verification_detail(&self, id: i64) -> Result<AdminVerificationRequest>;

    /// 批准后发送者的 conditionFulfilled 变为 true，接收者可以查看内容
    async fn approve_verification(
        &self,
        id: i64,
        admin_note: Option<String>,
    ) -> Result<AdminVerificationRequest>;

    /// 拒绝后接收者可以重新提交材料
    async fn reject_verification(
        &self,
        id: i64,
        admin_note: Option<String>,
    ) -> Result<AdminVerificationRequest>;
}

#[derive(Debug, Clone)]
pub struct RemoteAdminRepository {
    client: ApiClient,
}

impl RemoteAdminRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    async fn review(
        &self,
        id: i64,
        action: &str,
        admin_note: Option<String>,
    ) -> Result<AdminVerificationRequest> {
        let path = format!("/api/admin/verifications/{}/{}", id, action);
        let body = ReviewRequest { admin_note };
        let data: AdminVerificationResponse = self
            .client
            .post(&path, Auth::Bearer, &body)
            .await?
            .require_data()?;

        let request = AdminVerificationRequest::from(data);
        info!("Verification {} is now {}", request.id, request.status);
        Ok(request)
    }
}

#[async_trait]
impl AdminRepository for RemoteAdminRepository {
    async fn get_pending_verifications(&self) -> Result<Vec<AdminVerificationRequest>> {
        let data: Vec<AdminVerificationResponse> = self
            .client
            .get("/api/admin/verifications", Auth::Bearer)
            .await?
            .require_data()?;
        Ok(data.into_iter().map(Into::into).collect())
    }

    async fn get_verification_detail(&self, id: i64) -> Result<AdminVerificationRequest> {
        let path = format!("/api/admin/verifications/{}", id);
        let data: AdminVerificationResponse = self
            .client
            .get(&path, Auth::Bearer)
            .await?
            .require_data()?;
        Ok(data.into())
    }

    async fn approve_verification(
        &self,
        id: i64,
        admin_note: Option<String>,
    ) -> Result<AdminVerificationRequest> {
        info!("Approving verification {}", id);
        self.review(id, "approve", admin_note).await
    }

    async fn reject_verification(
        &self,
        id: i64,
        admin_note: Option<String>,
    ) -> Result<AdminVerificationRequest> {
        info!("Rejecting verification {}", id);
        self.review(id, "reject", admin_note).await
    }
}
