use crate::dto::admin::AdminVerificationResponse;
use crate::model::{AdminVerificationRequest, VerificationStatus};

impl From<AdminVerificationResponse> for AdminVerificationRequest {
    fn from(dto: AdminVerificationResponse) -> Self {
        Self {
            id: dto.id,
            user_id: dto.user_id,
            sender_name: dto.sender_name,
            sender_email: dto.sender_email,
            receiver_id: dto.receiver_id,
            receiver_name: dto.receiver_name,
            status: VerificationStatus::from_wire(&dto.status),
            death_certificate_url: dto.death_certificate_url,
            family_relation_certificate_url: dto.family_relation_certificate_url,
            admin_note: dto.admin_note,
            created_at: dto.created_at,
        }
    }
}
