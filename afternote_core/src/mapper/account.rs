//! auth / user 响应 → 领域模型

use crate::dto::auth::{LoginData, SignUpData, SignUpRequest};
use crate::dto::user::*;
use crate::model::*;
use crate::token::Tokens;

impl From<LoginData> for Tokens {
    fn from(dto: LoginData) -> Self {
        Self {
            access_token: dto.access_token,
            refresh_token: dto.refresh_token,
        }
    }
}

impl From<SignUpData> for SignUpResult {
    fn from(dto: SignUpData) -> Self {
        Self {
            user_id: dto.user_id,
            email: dto.email,
        }
    }
}

impl From<NewAccount> for SignUpRequest {
    fn from(account: NewAccount) -> Self {
        Self {
            email: account.email,
            password: account.password,
            name: account.name,
            profile_url: account.profile_url,
        }
    }
}

impl From<ProfileUpdate> for UserUpdateProfileRequest {
    fn from(update: ProfileUpdate) -> Self {
        Self {
            name: update.name,
            phone: update.phone,
            profile_image_url: update.profile_image_url,
        }
    }
}

impl From<PushSettingsResponse> for PushSettings {
    fn from(dto: PushSettingsResponse) -> Self {
        Self {
            time_letter: dto.time_letter,
            mind_record: dto.mind_record,
            after_note: dto.after_note,
        }
    }
}

impl From<PushSettingsUpdate> for PushSettingsRequest {
    fn from(update: PushSettingsUpdate) -> Self {
        Self {
            time_letter: update.time_letter,
            mind_record: update.mind_record,
            after_note: update.after_note,
        }
    }
}

impl From<DailyQuestionAnswerListResponse> for DailyQuestionPage {
    fn from(dto: DailyQuestionAnswerListResponse) -> Self {
        Self {
            items: dto
                .items
                .into_iter()
                .map(|item| DailyQuestionAnswer {
                    daily_question_answer_id: item.daily_question_answer_id,
                    question: item.question,
                    answer: item.answer,
                    record_date: item.record_date,
                })
                .collect(),
            has_next: dto.has_next,
        }
    }
}

impl From<UserResponse> for UserProfile {
    fn from(dto: UserResponse) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            phone: dto.phone,
            profile_image_url: dto.profile_image_url,
        }
    }
}

impl From<ReceiverItem> for ReceiverListItem {
    fn from(dto: ReceiverItem) -> Self {
        Self {
            receiver_id: dto.receiver_id,
            name: dto.name,
            relation: dto.relation,
        }
    }
}

impl From<ReceiverDetailResponse> for ReceiverDetail {
    fn from(dto: ReceiverDetailResponse) -> Self {
        Self {
            receiver_id: dto.receiver_id,
            name: dto.name,
            relation: dto.relation,
            phone: dto.phone,
            email: dto.email,
            daily_question_count: dto.daily_question_count,
            time_letter_count: dto.time_letter_count,
            after_note_count: dto.after_note_count,
        }
    }
}

impl From<NewReceiver> for RegisterReceiverRequest {
    fn from(receiver: NewReceiver) -> Self {
        Self {
            name: receiver.name,
            phone: receiver.phone,
            relation: receiver.relation,
            email: receiver.email,
        }
    }
}

impl From<DeliveryConditionTypeDto> for DeliveryConditionType {
    fn from(dto: DeliveryConditionTypeDto) -> Self {
        match dto {
            DeliveryConditionTypeDto::None => Self::None,
            DeliveryConditionTypeDto::DeathCertificate => Self::DeathCertificate,
            DeliveryConditionTypeDto::Inactivity => Self::Inactivity,
            DeliveryConditionTypeDto::SpecificDate => Self::SpecificDate,
            DeliveryConditionTypeDto::Unknown => Self::Unknown,
        }
    }
}

impl From<DeliveryConditionType> for DeliveryConditionTypeDto {
    fn from(kind: DeliveryConditionType) -> Self {
        match kind {
            DeliveryConditionType::None => Self::None,
            DeliveryConditionType::DeathCertificate => Self::DeathCertificate,
            DeliveryConditionType::Inactivity => Self::Inactivity,
            DeliveryConditionType::SpecificDate => Self::SpecificDate,
            DeliveryConditionType::Unknown => Self::Unknown,
        }
    }
}

impl From<DeliveryConditionResponse> for DeliveryCondition {
    fn from(dto: DeliveryConditionResponse) -> Self {
        Self {
            condition_type: dto.condition_type.into(),
            inactivity_period_days: dto.inactivity_period_days,
            specific_date: dto.specific_date,
            condition_fulfilled: dto.condition_fulfilled,
            condition_met: dto.condition_met,
        }
    }
}

/// 只携带与条件类型相关的字段
pub fn delivery_condition_request(
    condition_type: DeliveryConditionType,
    inactivity_period_days: Option<u32>,
    specific_date: Option<String>,
) -> DeliveryConditionRequest {
    let (days, date) = match condition_type {
        DeliveryConditionType::Inactivity => (inactivity_period_days, None),
        DeliveryConditionType::SpecificDate => (None, specific_date),
        DeliveryConditionType::None
        | DeliveryConditionType::DeathCertificate
        | DeliveryConditionType::Unknown => (None, None),
    };
    DeliveryConditionRequest {
        condition_type: condition_type.into(),
        inactivity_period_days: days,
        specific_date: date,
    }
}
