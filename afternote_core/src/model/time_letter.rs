//! 发送者自己写的 time letter

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeLetterStatus {
    /// 临时保存
    Draft,
    Scheduled,
    Sent,
    Unknown,
}

impl TimeLetterStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Scheduled => "SCHEDULED",
            Self::Sent => "SENT",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for TimeLetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Image,
    Video,
    Audio,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLetterMedia {
    pub id: i64,
    pub media_type: MediaType,
    pub media_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLetter {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub send_at: Option<String>,
    pub status: TimeLetterStatus,
    pub media_list: Vec<TimeLetterMedia>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLetterList {
    pub letters: Vec<TimeLetter>,
    pub total_count: u32,
}

/// 已上传的附件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTimeLetterMedia {
    pub media_type: MediaType,
    pub media_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTimeLetter {
    pub title: Option<String>,
    pub content: Option<String>,
    pub send_at: Option<String>,
    pub status: TimeLetterStatus,
    pub media: Vec<NewTimeLetterMedia>,
    pub receiver_ids: Vec<i64>,
    pub delivered_at: Option<String>,
}

/// `None` 的字段保持不变
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeLetterUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub send_at: Option<String>,
    pub status: Option<TimeLetterStatus>,
    pub media: Option<Vec<NewTimeLetterMedia>>,
}
