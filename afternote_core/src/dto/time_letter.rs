//! 发送者 time-letter 接口数据结构
//!
//! - GET/POST /time-letters
//! - GET/PATCH /time-letters/{timeLetterId}
//! - POST /time-letters/delete
//! - GET/DELETE /time-letters/temporary

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeLetterStatusDto {
    Draft,
    Scheduled,
    Sent,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaTypeDto {
    Image,
    Video,
    Audio,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeLetterMediaRequest {
    pub media_type: MediaTypeDto,
    pub media_url: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeLetterCreateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_at: Option<String>,
    pub status: TimeLetterStatusDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_list: Option<Vec<TimeLetterMediaRequest>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub receiver_ids: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivered_at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeLetterUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TimeLetterStatusDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_list: Option<Vec<TimeLetterMediaRequest>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeLetterDeleteRequest {
    pub time_letter_ids: Vec<i64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeLetterMediaItem {
    pub id: i64,
    pub media_type: MediaTypeDto,
    pub media_url: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeLetterDetailResponse {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub send_at: Option<String>,
    pub status: TimeLetterStatusDto,
    pub media_list: Option<Vec<TimeLetterMediaItem>>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// 列表与临时保存列表共用
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeLetterPageResponse {
    #[serde(default)]
    pub time_letters: Vec<TimeLetterDetailResponse>,
    #[serde(default)]
    pub total_count: u32,
}
