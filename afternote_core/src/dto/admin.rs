//! 管理员审核接口数据结构
//!
//! - GET  /api/admin/verifications
//! - GET  /api/admin/verifications/{id}
//! - POST /api/admin/verifications/{id}/approve
//! - POST /api/admin/verifications/{id}/reject

use serde::{Deserialize, Serialize};

/// 批准与拒绝共用，`adminNote` 可省略
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_note: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminVerificationResponse {
    pub id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub sender_name: String,
    #[serde(default)]
    pub sender_email: String,
    pub receiver_id: i64,
    #[serde(default)]
    pub receiver_name: String,
    pub status: String,
    #[serde(default)]
    pub death_certificate_url: String,
    #[serde(default)]
    pub family_relation_certificate_url: String,
    pub admin_note: Option<String>,
    pub created_at: String,
}
