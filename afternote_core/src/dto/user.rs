//! 用户接口数据结构
//!
//! - GET/PATCH /users/me
//! - GET/PATCH /users/push-settings
//! - GET /users/receivers/{receiverId}/daily-questions
//! - GET/POST /users/receivers, GET /users/receivers/{receiverId}
//! - GET/PATCH /users/delivery-condition

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub profile_image_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiverItem {
    pub receiver_id: i64,
    pub name: String,
    pub relation: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterReceiverRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub relation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterReceiverResponse {
    pub receiver_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiverDetailResponse {
    pub receiver_id: i64,
    pub name: String,
    pub relation: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub daily_question_count: u32,
    #[serde(default)]
    pub time_letter_count: u32,
    #[serde(default)]
    pub after_note_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryConditionTypeDto {
    None,
    DeathCertificate,
    Inactivity,
    SpecificDate,
    /// 客户端尚不认识的取值
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryConditionResponse {
    pub condition_type: DeliveryConditionTypeDto,
    pub inactivity_period_days: Option<u32>,
    pub specific_date: Option<String>,
    #[serde(default)]
    pub condition_fulfilled: bool,
    #[serde(default)]
    pub condition_met: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryConditionRequest {
    pub condition_type: DeliveryConditionTypeDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inactivity_period_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specific_date: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushSettingsResponse {
    #[serde(default)]
    pub time_letter: bool,
    #[serde(default)]
    pub mind_record: bool,
    #[serde(default)]
    pub after_note: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PushSettingsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_letter: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mind_record: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_note: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyQuestionAnswerItem {
    pub daily_question_answer_id: i64,
    pub question: String,
    pub answer: String,
    pub record_date: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyQuestionAnswerListResponse {
    #[serde(default)]
    pub items: Vec<DailyQuestionAnswerItem>,
    #[serde(default)]
    pub has_next: bool,
}
