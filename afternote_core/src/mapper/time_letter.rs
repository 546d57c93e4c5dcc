//! time-letter 请求/响应与领域模型互转

use crate::dto::time_letter::*;
use crate::model::*;

impl From<TimeLetterStatusDto> for TimeLetterStatus {
    fn from(dto: TimeLetterStatusDto) -> Self {
        match dto {
            TimeLetterStatusDto::Draft => Self::Draft,
            TimeLetterStatusDto::Scheduled => Self::Scheduled,
            TimeLetterStatusDto::Sent => Self::Sent,
            TimeLetterStatusDto::Unknown => Self::Unknown,
        }
    }
}

impl From<TimeLetterStatus> for TimeLetterStatusDto {
    fn from(status: TimeLetterStatus) -> Self {
        match status {
            TimeLetterStatus::Draft => Self::Draft,
            TimeLetterStatus::Scheduled => Self::Scheduled,
            TimeLetterStatus::Sent => Self::Sent,
            TimeLetterStatus::Unknown => Self::Unknown,
        }
    }
}

impl From<MediaTypeDto> for MediaType {
    fn from(dto: MediaTypeDto) -> Self {
        match dto {
            MediaTypeDto::Image => Self::Image,
            MediaTypeDto::Video => Self::Video,
            MediaTypeDto::Audio => Self::Audio,
            MediaTypeDto::Unknown => Self::Unknown,
        }
    }
}

impl From<MediaType> for MediaTypeDto {
    fn from(kind: MediaType) -> Self {
        match kind {
            MediaType::Image => Self::Image,
            MediaType::Video => Self::Video,
            MediaType::Audio => Self::Audio,
            MediaType::Unknown => Self::Unknown,
        }
    }
}

impl From<NewTimeLetterMedia> for TimeLetterMediaRequest {
    fn from(media: NewTimeLetterMedia) -> Self {
        Self {
            media_type: media.media_type.into(),
            media_url: media.media_url,
        }
    }
}

impl From<TimeLetterDetailResponse> for TimeLetter {
    fn from(dto: TimeLetterDetailResponse) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            content: dto.content,
            send_at: dto.send_at,
            status: dto.status.into(),
            media_list: dto
                .media_list
                .unwrap_or_default()
                .into_iter()
                .map(|m| TimeLetterMedia {
                    id: m.id,
                    media_type: m.media_type.into(),
                    media_url: m.media_url,
                })
                .collect(),
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        }
    }
}

impl From<TimeLetterPageResponse> for TimeLetterList {
    fn from(dto: TimeLetterPageResponse) -> Self {
        let letters: Vec<TimeLetter> = dto.time_letters.into_iter().map(Into::into).collect();
        let total_count = if dto.total_count == 0 {
            letters.len() as u32
        } else {
            dto.total_count
        };
        Self {
            letters,
            total_count,
        }
    }
}

// 空附件列表不发送
fn media_request(media: Vec<NewTimeLetterMedia>) -> Option<Vec<TimeLetterMediaRequest>> {
    if media.is_empty() {
        None
    } else {
        Some(media.into_iter().map(Into::into).collect())
    }
}

impl From<NewTimeLetter> for TimeLetterCreateRequest {
    fn from(letter: NewTimeLetter) -> Self {
        Self {
            title: letter.title,
            content: letter.content,
            send_at: letter.send_at,
            status: letter.status.into(),
            media_list: media_request(letter.media),
            receiver_ids: letter.receiver_ids,
            delivered_at: letter.delivered_at,
        }
    }
}

impl From<TimeLetterUpdate> for TimeLetterUpdateRequest {
    fn from(update: TimeLetterUpdate) -> Self {
        Self {
            title: update.title,
            content: update.content,
            send_at: update.send_at,
            status: update.status.map(Into::into),
            media_list: update
                .media
                .map(|m| m.into_iter().map(Into::into).collect()),
        }
    }
}
