//! receiver-auth 接口数据结构，与服务端 JSON 字段一一对应
//!
//! - POST /api/receiver-auth/verify
//! - POST /api/receiver-auth/presigned-url
//! - POST /api/receiver-auth/delivery-verification
//! - GET  /api/receiver-auth/delivery-verification/status
//! - GET  /api/receiver-auth/message
//! - GET  /api/receiver-auth/{time-letters|mind-records|after-notes}[/{id}]

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    pub auth_code: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    pub receiver_id: i64,
    pub receiver_name: Option<String>,
    pub sender_name: Option<String>,
    pub relation: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub sender_name: String,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeLetterMediaResponse {
    pub id: i64,
    pub media_type: Option<String>,
    pub media_url: String,
}

/// 列表与详情接口共用同一结构
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeLetterResponse {
    pub id: i64,
    pub time_letter_receiver_id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub send_at: Option<String>,
    pub status: Option<String>,
    pub sender_name: Option<String>,
    pub delivered_at: Option<String>,
    pub created_at: Option<String>,
    #[serde(default)]
    pub media_list: Vec<TimeLetterMediaResponse>,
    #[serde(default)]
    pub is_read: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeLetterListResponse {
    #[serde(default)]
    pub time_letters: Vec<TimeLetterResponse>,
    #[serde(default)]
    pub total_count: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MindRecordResponse {
    pub id: i64,
    #[serde(rename = "type")]
    pub record_type: Option<String>,
    pub title: Option<String>,
    pub record_date: Option<String>,
    #[serde(default)]
    pub is_draft: bool,
    pub sender_name: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MindRecordListResponse {
    #[serde(default)]
    pub mind_records: Vec<MindRecordResponse>,
    #[serde(default)]
    pub total_count: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MindRecordImageResponse {
    pub id: i64,
    pub media_type: Option<String>,
    pub image_url: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MindRecordDetailResponse {
    pub id: i64,
    #[serde(rename = "type")]
    pub record_type: Option<String>,
    pub title: Option<String>,
    pub record_date: Option<String>,
    pub content: Option<String>,
    pub question_id: Option<i64>,
    pub question_content: Option<String>,
    pub category: Option<String>,
    pub sender_name: Option<String>,
    pub created_at: Option<String>,
    #[serde(default)]
    pub image_list: Vec<MindRecordImageResponse>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AfternoteResponse {
    pub id: i64,
    pub title: Option<String>,
    pub category: Option<String>,
    pub leave_message: Option<String>,
    pub sender_id: Option<i64>,
    pub sender_name: Option<String>,
    pub created_at: Option<String>,
}

/// 服务端字段名为 `afternotes`，与路径 `after-notes` 不同
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AfternoteListResponse {
    #[serde(default)]
    pub afternotes: Vec<AfternoteResponse>,
    #[serde(default)]
    pub total_count: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongInfoResponse {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub cover_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemorialVideoResponse {
    pub video_url: Option<String>,
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistInfoResponse {
    pub atmosphere: Option<String>,
    #[serde(default)]
    pub songs: Vec<SongInfoResponse>,
    pub memorial_video: Option<MemorialVideoResponse>,
}

/// 类别为 SOCIAL / GALLERY / PLAYLIST
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AfternoteDetailResponse {
    pub id: i64,
    pub category: Option<String>,
    pub title: Option<String>,
    pub process_method: Option<String>,
    #[serde(default)]
    pub actions: Vec<String>,
    pub leave_message: Option<String>,
    pub sender_name: Option<String>,
    pub created_at: Option<String>,
    pub playlist: Option<PlaylistInfoResponse>,
}

/// 扩展名：pdf, jpg, jpeg, png, gif, webp, heic
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresignedUrlRequest {
    pub extension: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresignedUrlResponse {
    pub presigned_url: String,
    pub file_url: String,
    #[serde(default)]
    pub content_type: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryVerificationRequest {
    pub death_certificate_url: String,
    pub family_relation_certificate_url: String,
}

/// 状态值：PENDING, APPROVED, REJECTED
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryVerificationResponse {
    pub id: i64,
    pub status: String,
    #[serde(default)]
    pub death_certificate_url: String,
    #[serde(default)]
    pub family_relation_certificate_url: String,
    pub admin_note: Option<String>,
    pub created_at: String,
}
