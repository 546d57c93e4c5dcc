//! 接收者通过认证码查看的内容

/// 认证码校验结果，服务端可能省略任意身份字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiverAuthVerifyResult {
    pub receiver_id: i64,
    pub receiver_name: Option<String>,
    pub sender_name: Option<String>,
    pub relation: Option<String>,
}

/// 发送者留给接收者的话
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderMessage {
    pub sender_name: String,
    pub message: Option<String>,
}

/// 列表结果及服务端给出的总数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedPage<T> {
    pub items: Vec<T>,
    pub total_count: u32,
}

impl<T> ReceivedPage<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedTimeLetterMedia {
    pub id: i64,
    pub media_type: Option<String>,
    pub media_url: String,
}

/// 收到的时间信件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedTimeLetter {
    pub time_letter_id: i64,
    pub time_letter_receiver_id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub send_at: Option<String>,
    pub status: Option<String>,
    pub sender_name: Option<String>,
    pub delivered_at: Option<String>,
    pub created_at: Option<String>,
    pub media_list: Vec<ReceivedTimeLetterMedia>,
    pub is_read: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedMindRecord {
    pub mind_record_id: i64,
    pub source_type: Option<String>,
    pub title: Option<String>,
    pub record_date: Option<String>,
    pub sender_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedMindRecordImage {
    pub id: i64,
    pub media_type: Option<String>,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedMindRecordDetail {
    pub mind_record_id: i64,
    pub source_type: Option<String>,
    pub title: Option<String>,
    pub record_date: Option<String>,
    pub content: Option<String>,
    pub question: Option<String>,
    pub category: Option<String>,
    pub sender_name: Option<String>,
    pub images: Vec<ReceivedMindRecordImage>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedAfternote {
    pub id: i64,
    pub title: Option<String>,
    pub source_type: String,
    pub last_updated_at: String,
    pub leave_message: Option<String>,
    pub sender_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedPlaylistSong {
    pub title: String,
    pub artist: String,
    pub cover_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedMemorialVideo {
    pub video_url: Option<String>,
    pub thumbnail_url: Option<String>,
}

/// 追悼歌单（仅 PLAYLIST 类别）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedAfternotePlaylist {
    pub atmosphere: Option<String>,
    pub songs: Vec<ReceivedPlaylistSong>,
    pub memorial_video: Option<ReceivedMemorialVideo>,
}

/// 收到的 afternote 详情
///
/// `process_method` 与 `actions` 只在 SOCIAL / GALLERY 类别出现，
/// `playlist` 只在 PLAYLIST 类别出现。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedAfternoteDetail {
    pub id: i64,
    pub category: Option<String>,
    pub title: Option<String>,
    pub process_method: Option<String>,
    pub actions: Vec<String>,
    pub leave_message: Option<String>,
    pub sender_name: Option<String>,
    pub playlist: Option<ReceivedAfternotePlaylist>,
}

/// 预签名上传地址
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresignedUpload {
    /// PUT 目标地址
    pub presigned_url: String,
    /// 上传完成后引用的文件地址
    pub file_url: String,
    pub content_type: String,
}
