//! 接收者认证码仓库
//!
//! 认证码通过 `X-Auth-Code` 请求头传递（校验接口除外，放在 body 中）。
//! 每个方法只发起一次请求，任何失败都以 `Err` 返回给调用方。

use crate::client::{mask_secret, ApiClient, Auth};
use crate::dto::receiver_auth::*;
use crate::error::Result;
use crate::model::*;
use async_trait::async_trait;
use tracing::{debug, info};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReceiverAuthRepository: Send + Sync {
    /// 校验认证码，返回接收者/发送者信息
    async fn verify(&self, auth_code: &str) -> Result<ReceiverAuthVerifyResult>;

    /// 为死亡证明等材料申请预签名上传地址
    async fn get_presigned_url(&self, auth_code: &str, extension: &str) -> Result<PresignedUpload>;

    /// 提交死亡证明与家庭关系证明，服务端创建 PENDING 请求
    async fn submit_delivery_verification(
        &self,
        auth_code: &str,
        death_certificate_url: &str,
        family_relation_certificate_url: &str,
    ) -> Result<DeliveryVerification>;

    /// 查询最近一次提交的审核状态
    async fn get_delivery_verification_status(
        &self,
        auth_code: &str,
    ) -> Result<DeliveryVerificationStatus>;

    async fn get_message(&self, auth_code: &str) -> Result<SenderMessage>;

    async fn get_time_letters(&self, auth_code: &str) -> Result<ReceivedPage<ReceivedTimeLetter>>;

    /// 查看详情的同时服务端会标记为已读
    async fn get_time_letter_detail(
        &self,
        auth_code: &str,
        time_letter_receiver_id: i64,
    ) -> Result<ReceivedTimeLetter>;

    async fn get_mind_records(&self, auth_code: &str) -> Result<ReceivedPage<ReceivedMindRecord>>;

    async fn get_mind_record_detail(
        &self,
        auth_code: &str,
        mind_record_id: i64,
    ) -> Result<ReceivedMindRecordDetail>;

    async fn get_after_notes(&self, auth_code: &str) -> Result<ReceivedPage<ReceivedAfternote>>;

    async fn get_afternote_detail(
        &self,
        auth_code: &str,
        afternote_id: i64,
    ) -> Result<ReceivedAfternoteDetail>;
}

/// 基于 HTTP 的实现
#[derive(Debug, Clone)]
pub struct RemoteReceiverAuthRepository {
    client: ApiClient,
}

impl RemoteReceiverAuthRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ReceiverAuthRepository for RemoteReceiverAuthRepository {
    async fn verify(&self, auth_code: &str) -> Result<ReceiverAuthVerifyResult> {
        info!("Verifying receiver auth code: {}", mask_secret(auth_code));

        let body = VerifyRequest {
            auth_code: auth_code.to_string(),
        };
        let data: VerifyResponse = self
            .client
            .post("/api/receiver-auth/verify", Auth::None, &body)
            .await?
            .require_data()?;

        info!("Auth code verified for receiver {}", data.receiver_id);
        Ok(data.into())
    }

    async fn get_presigned_url(&self, auth_code: &str, extension: &str) -> Result<PresignedUpload> {
        debug!("Requesting receiver presigned URL for .{}", extension);

        let body = PresignedUrlRequest {
            extension: extension.to_string(),
        };
        let data: PresignedUrlResponse = self
            .client
            .post("/api/receiver-auth/presigned-url", Auth::AuthCode(auth_code), &body)
            .await?
            .require_data()?;

        Ok(data.into())
    }

    async fn submit_delivery_verification(
        &self,
        auth_code: &str,
        death_certificate_url: &str,
        family_relation_certificate_url: &str,
    ) -> Result<DeliveryVerification> {
        info!("Submitting delivery verification documents");

        let body = DeliveryVerificationRequest {
            death_certificate_url: death_certificate_url.to_string(),
            family_relation_certificate_url: family_relation_certificate_url.to_string(),
        };
        let data: DeliveryVerificationResponse = self
            .client
            .post(
                "/api/receiver-auth/delivery-verification",
                Auth::AuthCode(auth_code),
                &body,
            )
            .await?
            .require_data()?;

        let verification = DeliveryVerification::from(data);
        info!(
            "Delivery verification {} submitted with status {}",
            verification.id, verification.status
        );
        Ok(verification)
    }

    async fn get_delivery_verification_status(
        &self,
        auth_code: &str,
    ) -> Result<DeliveryVerificationStatus> {
        let data: DeliveryVerificationResponse = self
            .client
            .get(
                "/api/receiver-auth/delivery-verification/status",
                Auth::AuthCode(auth_code),
            )
            .await?
            .require_data()?;

        debug!("Delivery verification status: {}", data.status);
        Ok(data.into())
    }

    async fn get_message(&self, auth_code: &str) -> Result<SenderMessage> {
        let data: MessageResponse = self
            .client
            .get("/api/receiver-auth/message", Auth::AuthCode(auth_code))
            .await?
            .require_data()?;
        Ok(data.into())
    }

    async fn get_time_letters(&self, auth_code: &str) -> Result<ReceivedPage<ReceivedTimeLetter>> {
        let data: TimeLetterListResponse = self
            .client
            .get("/api/receiver-auth/time-letters", Auth::AuthCode(auth_code))
            .await?
            .require_data()?;

        debug!("Fetched {} time letters", data.time_letters.len());
        Ok(data.into())
    }

    async fn get_time_letter_detail(
        &self,
        auth_code: &str,
        time_letter_receiver_id: i64,
    ) -> Result<ReceivedTimeLetter> {
        let path = format!("/api/receiver-auth/time-letters/{}", time_letter_receiver_id);
        let data: TimeLetterResponse = self
            .client
            .get(&path, Auth::AuthCode(auth_code))
            .await?
            .require_data()?;
        Ok(data.into())
    }

    async fn get_mind_records(&self, auth_code: &str) -> Result<ReceivedPage<ReceivedMindRecord>> {
        let data: MindRecordListResponse = self
            .client
            .get("/api/receiver-auth/mind-records", Auth::AuthCode(auth_code))
            .await?
            .require_data()?;

        debug!("Fetched {} mind records", data.mind_records.len());
        Ok(data.into())
    }

    async fn get_mind_record_detail(
        &self,
        auth_code: &str,
        mind_record_id: i64,
    ) -> Result<ReceivedMindRecordDetail> {
        let path = format!("/api/receiver-auth/mind-records/{}", mind_record_id);
        let data: MindRecordDetailResponse = self
            .client
            .get(&path, Auth::AuthCode(auth_code))
            .await?
            .require_data()?;
        Ok(data.into())
    }

    async fn get_after_notes(&self, auth_code: &str) -> Result<ReceivedPage<ReceivedAfternote>> {
        let data: AfternoteListResponse = self
            .client
            .get("/api/receiver-auth/after-notes", Auth::AuthCode(auth_code))
            .await?
            .require_data()?;

        debug!("Fetched {} afternotes", data.afternotes.len());
        Ok(data.into())
    }

    async fn get_afternote_detail(
        &self,
        auth_code: &str,
        afternote_id: i64,
    ) -> Result<ReceivedAfternoteDetail> {
        let path = format!("/api/receiver-auth/after-notes/{}", afternote_id);
        let data: AfternoteDetailResponse = self
            .client
            .get(&path, Auth::AuthCode(auth_code))
            .await?
            .require_data()?;
        Ok(data.into())
    }
}
