//! 发送者自己的 afternote

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfternoteCategory {
    Social,
    Gallery,
    Playlist,
    /// 服务端新增的类别，只读
    Unknown,
}

impl AfternoteCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Social => "SOCIAL",
            Self::Gallery => "GALLERY",
            Self::Playlist => "PLAYLIST",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for AfternoteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AfternoteSummary {
    pub afternote_id: i64,
    pub title: String,
    pub category: AfternoteCategory,
    pub created_at: String,
}

/// 分页从 0 开始
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AfternotePage {
    pub items: Vec<AfternoteSummary>,
    pub page: u32,
    pub size: u32,
    pub has_next: bool,
}

/// 社交账号的登录信息
#[derive(Clone, PartialEq, Eq)]
pub struct AfternoteCredentials {
    pub id: String,
    pub password: String,
}

impl fmt::Debug for AfternoteCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AfternoteCredentials")
            .field("id", &self.id)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AfternoteRecipient {
    pub receiver_id: Option<i64>,
    pub name: Option<String>,
    pub relation: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistSong {
    pub id: Option<i64>,
    pub title: String,
    pub artist: String,
    pub cover_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorialVideo {
    pub video_url: Option<String>,
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AfternotePlaylist {
    pub profile_photo: Option<String>,
    pub atmosphere: Option<String>,
    pub songs: Vec<PlaylistSong>,
    pub memorial_video: Option<MemorialVideo>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AfternoteDetail {
    pub afternote_id: i64,
    pub category: AfternoteCategory,
    pub title: String,
    pub created_at: String,
    pub updated_at: String,
    pub credentials: Option<AfternoteCredentials>,
    pub receivers: Vec<AfternoteRecipient>,
    pub process_method: Option<String>,
    pub actions: Vec<String>,
    pub leave_message: Option<String>,
    pub playlist: Option<AfternotePlaylist>,
}

/// 按类别区分的正文，类别由变体决定
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AfternoteContent {
    Social {
        process_method: String,
        actions: Vec<String>,
        leave_message: Option<String>,
        credentials: Option<AfternoteCredentials>,
    },
    Gallery {
        process_method: String,
        actions: Vec<String>,
        leave_message: Option<String>,
    },
    Playlist(AfternotePlaylist),
}

impl AfternoteContent {
    pub fn category(&self) -> AfternoteCategory {
        match self {
            Self::Social { .. } => AfternoteCategory::Social,
            Self::Gallery { .. } => AfternoteCategory::Gallery,
            Self::Playlist(_) => AfternoteCategory::Playlist,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAfternote {
    pub title: String,
    pub receiver_ids: Vec<i64>,
    pub content: AfternoteContent,
}

/// `receiver_ids` 为 `None` 时不修改接收者
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AfternoteUpdate {
    pub title: String,
    pub receiver_ids: Option<Vec<i64>>,
    pub content: AfternoteContent,
}
