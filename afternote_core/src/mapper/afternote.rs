//! afternote 请求/响应与领域模型互转

use crate::dto::afternote::*;
use crate::model::*;

impl From<AfternoteCategoryDto> for AfternoteCategory {
    fn from(dto: AfternoteCategoryDto) -> Self {
        match dto {
            AfternoteCategoryDto::Social => Self::Social,
            AfternoteCategoryDto::Gallery => Self::Gallery,
            AfternoteCategoryDto::Playlist => Self::Playlist,
            AfternoteCategoryDto::Unknown => Self::Unknown,
        }
    }
}

impl From<AfternoteCategory> for AfternoteCategoryDto {
    fn from(category: AfternoteCategory) -> Self {
        match category {
            AfternoteCategory::Social => Self::Social,
            AfternoteCategory::Gallery => Self::Gallery,
            AfternoteCategory::Playlist => Self::Playlist,
            AfternoteCategory::Unknown => Self::Unknown,
        }
    }
}

impl From<AfternotePageResponse> for AfternotePage {
    fn from(dto: AfternotePageResponse) -> Self {
        Self {
            items: dto
                .content
                .into_iter()
                .map(|item| AfternoteSummary {
                    afternote_id: item.afternote_id,
                    title: item.title,
                    category: item.category.into(),
                    created_at: item.created_at,
                })
                .collect(),
            page: dto.page,
            size: dto.size,
            has_next: dto.has_next,
        }
    }
}

impl From<CredentialsDto> for AfternoteCredentials {
    fn from(dto: CredentialsDto) -> Self {
        Self {
            id: dto.id,
            password: dto.password,
        }
    }
}

impl From<AfternoteCredentials> for CredentialsDto {
    fn from(credentials: AfternoteCredentials) -> Self {
        Self {
            id: credentials.id,
            password: credentials.password,
        }
    }
}

impl From<PlaylistDto> for AfternotePlaylist {
    fn from(dto: PlaylistDto) -> Self {
        Self {
            profile_photo: dto.profile_photo,
            atmosphere: dto.atmosphere,
            songs: dto
                .songs
                .into_iter()
                .map(|s| PlaylistSong {
                    id: s.id,
                    title: s.title,
                    artist: s.artist,
                    cover_url: s.cover_url,
                })
                .collect(),
            memorial_video: dto.memorial_video.map(|v| MemorialVideo {
                video_url: v.video_url,
                thumbnail_url: v.thumbnail_url,
            }),
        }
    }
}

impl From<AfternotePlaylist> for PlaylistDto {
    fn from(playlist: AfternotePlaylist) -> Self {
        Self {
            profile_photo: playlist.profile_photo,
            atmosphere: playlist.atmosphere,
            songs: playlist
                .songs
                .into_iter()
                .map(|s| SongDto {
                    id: s.id,
                    title: s.title,
                    artist: s.artist,
                    cover_url: s.cover_url,
                })
                .collect(),
            memorial_video: playlist.memorial_video.map(|v| MemorialVideoDto {
                video_url: v.video_url,
                thumbnail_url: v.thumbnail_url,
            }),
        }
    }
}

impl From<AfternoteDetailData> for AfternoteDetail {
    fn from(dto: AfternoteDetailData) -> Self {
        Self {
            afternote_id: dto.afternote_id,
            category: dto.category.into(),
            title: dto.title,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
            credentials: dto.credentials.map(Into::into),
            receivers: dto
                .receivers
                .into_iter()
                .map(|r| AfternoteRecipient {
                    receiver_id: r.receiver_id,
                    name: r.name,
                    relation: r.relation,
                    phone: r.phone,
                })
                .collect(),
            process_method: dto.process_method,
            actions: dto.actions,
            leave_message: dto.leave_message,
            playlist: dto.playlist.map(Into::into),
        }
    }
}

impl From<NewAfternote> for AfternoteWriteRequest {
    fn from(note: NewAfternote) -> Self {
        write_request(note.title, Some(note.receiver_ids), note.content)
    }
}

impl From<AfternoteUpdate> for AfternoteWriteRequest {
    fn from(update: AfternoteUpdate) -> Self {
        write_request(update.title, update.receiver_ids, update.content)
    }
}

// 只填写该类别用到的字段
fn write_request(
    title: String,
    receiver_ids: Option<Vec<i64>>,
    content: AfternoteContent,
) -> AfternoteWriteRequest {
    let mut request = AfternoteWriteRequest {
        category: content.category().into(),
        title,
        process_method: None,
        actions: None,
        leave_message: None,
        credentials: None,
        receivers: receiver_ids.map(|ids| {
            ids.into_iter()
                .map(|id| AfternoteReceiverDto {
                    receiver_id: Some(id),
                    name: None,
                    relation: None,
                    phone: None,
                })
                .collect()
        }),
        playlist: None,
    };
    match content {
        AfternoteContent::Social {
            process_method,
            actions,
            leave_message,
            credentials,
        } => {
            request.process_method = Some(process_method);
            request.actions = Some(actions);
            request.leave_message = leave_message;
            request.credentials = credentials.map(Into::into);
        }
        AfternoteContent::Gallery {
            process_method,
            actions,
            leave_message,
        } => {
            request.process_method = Some(process_method);
            request.actions = Some(actions);
            request.leave_message = leave_message;
        }
        AfternoteContent::Playlist(playlist) => {
            request.playlist = Some(playlist.into());
        }
    }
    request
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_social_request_carries_credentials_and_receiver_ids() {
        let body = AfternoteWriteRequest::from(NewAfternote {
            title: "Instagram".to_string(),
            receiver_ids: vec![3, 4],
            content: AfternoteContent::Social {
                process_method: "MEMORIAL".to_string(),
                actions: vec!["keep photos".to_string()],
                leave_message: None,
                credentials: Some(AfternoteCredentials {
                    id: "kim".to_string(),
                    password: "pw".to_string(),
                }),
            },
        });
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "category": "SOCIAL",
                "title": "Instagram",
                "processMethod": "MEMORIAL",
                "actions": ["keep photos"],
                "credentials": { "id": "kim", "password": "pw" },
                "receivers": [{ "receiverId": 3 }, { "receiverId": 4 }]
            })
        );
    }

    #[test]
    fn test_playlist_request_omits_social_fields() {
        let body = AfternoteWriteRequest::from(AfternoteUpdate {
            title: "Songs".to_string(),
            receiver_ids: None,
            content: AfternoteContent::Playlist(AfternotePlaylist {
                atmosphere: Some("calm".to_string()),
                songs: vec![PlaylistSong {
                    id: None,
                    title: "Yesterday".to_string(),
                    artist: "The Beatles".to_string(),
                    cover_url: None,
                }],
                ..Default::default()
            }),
        });
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["category"], "PLAYLIST");
        assert_eq!(json["playlist"]["songs"][0]["title"], "Yesterday");
        assert!(json.get("processMethod").is_none());
        assert!(json.get("receivers").is_none());
    }

    #[test]
    fn test_detail_accepts_snake_case_timestamps() {
        let dto: AfternoteDetailData = serde_json::from_value(json!({
            "afternoteId": 7,
            "category": "GALLERY",
            "title": "Photos",
            "created_at": "2025-01-01",
            "updated_at": "2025-01-02",
            "receivers": [{ "receiverName": "Park", "relation": "DAUGHTER" }],
            "actions": ["delete all"]
        }))
        .unwrap();
        let detail = AfternoteDetail::from(dto);
        assert_eq!(detail.category, AfternoteCategory::Gallery);
        assert_eq!(detail.updated_at, "2025-01-02");
        assert_eq!(detail.receivers[0].name.as_deref(), Some("Park"));
        assert!(detail.credentials.is_none());
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let credentials = AfternoteCredentials {
            id: "kim".to_string(),
            password: "hunter2".to_string(),
        };
        assert!(!format!("{:?}", credentials).contains("hunter2"));
    }
}
