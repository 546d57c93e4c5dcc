//! 发送者（登录用户）侧的账户模型

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub profile_image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiverListItem {
    pub receiver_id: i64,
    pub name: String,
    pub relation: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiverDetail {
    pub receiver_id: i64,
    pub name: String,
    pub relation: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub daily_question_count: u32,
    pub time_letter_count: u32,
    pub after_note_count: u32,
}

/// 注册成功后的账户
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpResult {
    pub user_id: i64,
    pub email: String,
}

/// 新注册账户
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub email: String,
    pub password: String,
    pub name: String,
    pub profile_url: Option<String>,
}

/// 个人资料修改，`None` 表示不变
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub profile_image_url: Option<String>,
}

/// 各类内容的推送开关
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PushSettings {
    pub time_letter: bool,
    pub mind_record: bool,
    pub after_note: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PushSettingsUpdate {
    pub time_letter: Option<bool>,
    pub mind_record: Option<bool>,
    pub after_note: Option<bool>,
}

/// 接收者可见的每日一问回答
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyQuestionAnswer {
    pub daily_question_answer_id: i64,
    pub question: String,
    pub answer: String,
    pub record_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyQuestionPage {
    pub items: Vec<DailyQuestionAnswer>,
    pub has_next: bool,
}

/// 新登记的接收者
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReceiver {
    pub name: String,
    pub relation: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// 传达条件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryConditionType {
    None,
    DeathCertificate,
    Inactivity,
    SpecificDate,
    /// 服务端新增的类型，只读
    Unknown,
}

impl DeliveryConditionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::DeathCertificate => "DEATH_CERTIFICATE",
            Self::Inactivity => "INACTIVITY",
            Self::SpecificDate => "SPECIFIC_DATE",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for DeliveryConditionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 传达条件及服务端判定结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryCondition {
    pub condition_type: DeliveryConditionType,
    pub inactivity_period_days: Option<u32>,
    pub specific_date: Option<String>,
    pub condition_fulfilled: bool,
    pub condition_met: bool,
}
