//! receiver-auth 响应 → 领域模型

use crate::dto::receiver_auth::*;
use crate::model::*;

impl From<VerifyResponse> for ReceiverAuthVerifyResult {
    fn from(dto: VerifyResponse) -> Self {
        Self {
            receiver_id: dto.receiver_id,
            receiver_name: dto.receiver_name,
            sender_name: dto.sender_name,
            relation: dto.relation,
        }
    }
}

impl From<MessageResponse> for SenderMessage {
    fn from(dto: MessageResponse) -> Self {
        Self {
            sender_name: dto.sender_name,
            message: dto.message,
        }
    }
}

impl From<TimeLetterMediaResponse> for ReceivedTimeLetterMedia {
    fn from(dto: TimeLetterMediaResponse) -> Self {
        Self {
            id: dto.id,
            media_type: dto.media_type,
            media_url: dto.media_url,
        }
    }
}

impl From<TimeLetterResponse> for ReceivedTimeLetter {
    fn from(dto: TimeLetterResponse) -> Self {
        Self {
            time_letter_id: dto.id,
            time_letter_receiver_id: dto.time_letter_receiver_id,
            title: dto.title,
            content: dto.content,
            send_at: dto.send_at,
            status: dto.status,
            sender_name: dto.sender_name,
            delivered_at: dto.delivered_at,
            created_at: dto.created_at,
            media_list: dto.media_list.into_iter().map(Into::into).collect(),
            is_read: dto.is_read,
        }
    }
}

impl From<TimeLetterListResponse> for ReceivedPage<ReceivedTimeLetter> {
    fn from(dto: TimeLetterListResponse) -> Self {
        page(dto.time_letters, dto.total_count)
    }
}

impl From<MindRecordResponse> for ReceivedMindRecord {
    fn from(dto: MindRecordResponse) -> Self {
        Self {
            mind_record_id: dto.id,
            source_type: dto.record_type,
            title: dto.title,
            record_date: dto.record_date,
            sender_name: dto.sender_name,
        }
    }
}

impl From<MindRecordListResponse> for ReceivedPage<ReceivedMindRecord> {
    fn from(dto: MindRecordListResponse) -> Self {
        page(dto.mind_records, dto.total_count)
    }
}

impl From<MindRecordDetailResponse> for ReceivedMindRecordDetail {
    fn from(dto: MindRecordDetailResponse) -> Self {
        Self {
            mind_record_id: dto.id,
            source_type: dto.record_type,
            title: dto.title,
            record_date: dto.record_date,
            content: dto.content,
            question: dto.question_content,
            category: dto.category,
            sender_name: dto.sender_name,
            images: dto
                .image_list
                .into_iter()
                .map(|img| ReceivedMindRecordImage {
                    id: img.id,
                    media_type: img.media_type,
                    image_url: img.image_url,
                })
                .collect(),
        }
    }
}

impl From<AfternoteResponse> for ReceivedAfternote {
    fn from(dto: AfternoteResponse) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            source_type: dto.category.unwrap_or_default(),
            last_updated_at: dto.created_at.unwrap_or_default(),
            leave_message: dto.leave_message,
            sender_name: dto.sender_name,
        }
    }
}

impl From<AfternoteListResponse> for ReceivedPage<ReceivedAfternote> {
    fn from(dto: AfternoteListResponse) -> Self {
        page(dto.afternotes, dto.total_count)
    }
}

impl From<SongInfoResponse> for ReceivedPlaylistSong {
    fn from(dto: SongInfoResponse) -> Self {
        Self {
            title: dto.title.unwrap_or_default(),
            artist: dto.artist.unwrap_or_default(),
            cover_url: dto.cover_url,
        }
    }
}

impl From<AfternoteDetailResponse> for ReceivedAfternoteDetail {
    fn from(dto: AfternoteDetailResponse) -> Self {
        Self {
            id: dto.id,
            category: dto.category,
            title: dto.title,
            process_method: dto.process_method,
            actions: dto.actions,
            leave_message: dto.leave_message,
            sender_name: dto.sender_name,
            playlist: dto.playlist.map(|p| ReceivedAfternotePlaylist {
                atmosphere: p.atmosphere,
                songs: p.songs.into_iter().map(Into::into).collect(),
                memorial_video: p.memorial_video.map(|v| ReceivedMemorialVideo {
                    video_url: v.video_url,
                    thumbnail_url: v.thumbnail_url,
                }),
            }),
        }
    }
}

impl From<PresignedUrlResponse> for PresignedUpload {
    fn from(dto: PresignedUrlResponse) -> Self {
        Self {
            presigned_url: dto.presigned_url,
            file_url: dto.file_url,
            content_type: dto.content_type,
        }
    }
}

impl From<DeliveryVerificationResponse> for DeliveryVerification {
    fn from(dto: DeliveryVerificationResponse) -> Self {
        Self {
            id: dto.id,
            status: VerificationStatus::from_wire(&dto.status),
            death_certificate_url: dto.death_certificate_url,
            family_relation_certificate_url: dto.family_relation_certificate_url,
            admin_note: dto.admin_note,
            created_at: dto.created_at,
        }
    }
}

impl From<DeliveryVerificationResponse> for DeliveryVerificationStatus {
    fn from(dto: DeliveryVerificationResponse) -> Self {
        DeliveryVerification::from(dto).into()
    }
}

// totalCount 缺省为 0 时以实际条数为准
fn page<D, T>(items: Vec<D>, total_count: u32) -> ReceivedPage<T>
where
    D: Into<T>,
{
    let items: Vec<T> = items.into_iter().map(Into::into).collect();
    let total_count = total_count.max(items.len() as u32);
    ReceivedPage { items, total_count }
}
