//! 发送者 afternote 接口数据结构
//!
//! - GET/POST /afternotes
//! - GET/PATCH/DELETE /afternotes/{afternoteId}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AfternoteCategoryDto {
    Social,
    Gallery,
    Playlist,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize)]
pub struct AfternoteListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<AfternoteCategoryDto>,
    pub page: u32,
    pub size: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AfternoteListItem {
    pub afternote_id: i64,
    #[serde(default)]
    pub title: String,
    pub category: AfternoteCategoryDto,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AfternotePageResponse {
    #[serde(default)]
    pub content: Vec<AfternoteListItem>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub has_next: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialsDto {
    pub id: String,
    pub password: String,
}

/// 写入时只带 receiverId，读取时带名字等展示字段
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AfternoteReceiverDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver_id: Option<i64>,
    #[serde(alias = "receiverName", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemorialVideoDto {
    pub video_url: Option<String>,
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atmosphere: Option<String>,
    #[serde(default)]
    pub songs: Vec<SongDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memorial_video: Option<MemorialVideoDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AfternoteDetailData {
    pub afternote_id: i64,
    pub category: AfternoteCategoryDto,
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "created_at")]
    pub created_at: String,
    #[serde(default, alias = "updated_at")]
    pub updated_at: String,
    pub credentials: Option<CredentialsDto>,
    #[serde(default)]
    pub receivers: Vec<AfternoteReceiverDto>,
    pub process_method: Option<String>,
    #[serde(default)]
    pub actions: Vec<String>,
    pub leave_message: Option<String>,
    pub playlist: Option<PlaylistDto>,
}

/// 创建（POST）与修改（PATCH）共用，未设置的字段不发送
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AfternoteWriteRequest {
    pub category: AfternoteCategoryDto,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leave_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<CredentialsDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receivers: Option<Vec<AfternoteReceiverDto>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playlist: Option<PlaylistDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AfternoteIdResponse {
    #[serde(alias = "afternote_id")]
    pub afternote_id: i64,
}
