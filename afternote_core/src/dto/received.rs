//! received 接口数据结构（发送者为内容登记接收者，并按接收者查询）
//!
//! - POST /api/received/time-letters
//! - POST /api/received/mind-records
//! - GET  /api/received/{receiverId}/{time-letters|mind-records|after-notes}
//!
//! 列表响应与 receiver-auth 相同，复用 [`crate::dto::receiver_auth`] 中的结构。

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeLetterReceiverRequest {
    pub time_letter_id: i64,
    pub receiver_ids: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivered_at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MindRecordReceiverRequest {
    pub mind_record_id: i64,
    pub receiver_ids: Vec<i64>,
}
