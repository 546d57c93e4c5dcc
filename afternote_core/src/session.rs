//! 接收者流程会话
//!
//! 显式传递的上下文对象，而不是全局状态。三个字段放在同一把锁下，
//! `clear_auth_code` 一次性清空，不会留下残余字段。不做持久化，
//! 每次启动都需要重新校验认证码。

use crate::model::ReceivedTimeLetter;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Default)]
struct SessionState {
    auth_code: Option<String>,
    sender_name: Option<String>,
    selected_time_letter: Option<ReceivedTimeLetter>,
}

/// 接收者会话，克隆后共享同一份状态
#[derive(Debug, Clone, Default)]
pub struct ReceiverSession {
    state: Arc<RwLock<SessionState>>,
}

impl ReceiverSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_auth_code(&self, auth_code: impl Into<String>) {
        self.state.write().await.auth_code = Some(auth_code.into());
    }

    pub async fn auth_code(&self) -> Option<String> {
        self.state.read().await.auth_code.clone()
    }

    pub async fn set_sender_name(&self, sender_name: Option<String>) {
        self.state.write().await.sender_name = sender_name;
    }

    pub async fn sender_name(&self) -> Option<String> {
        self.state.read().await.sender_name.clone()
    }

    pub async fn set_selected_time_letter(&self, letter: Option<ReceivedTimeLetter>) {
        self.state.write().await.selected_time_letter = letter;
    }

    pub async fn selected_time_letter(&self) -> Option<ReceivedTimeLetter> {
        self.state.read().await.selected_time_letter.clone()
    }

    /// 校验成功后写入认证码与发送者；认证码变化时先清空旧的选中信件
    pub async fn begin(&self, auth_code: impl Into<String>, sender_name: Option<String>) {
        let auth_code = auth_code.into();
        let mut state = self.state.write().await;
        if state.auth_code.as_deref() != Some(auth_code.as_str()) {
            *state = SessionState::default();
        }
        state.auth_code = Some(auth_code);
        state.sender_name = sender_name;
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.auth_code.is_some()
    }

    /// 退出接收者流程：三个字段一起清空
    pub async fn clear_auth_code(&self) {
        *self.state.write().await = SessionState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(id: i64) -> ReceivedTimeLetter {
        ReceivedTimeLetter {
            time_letter_id: id,
            time_letter_receiver_id: id * 10,
            title: Some("To my son".to_string()),
            content: None,
            send_at: None,
            status: Some("SENT".to_string()),
            sender_name: Some("Kim".to_string()),
            delivered_at: None,
            created_at: None,
            media_list: Vec::new(),
            is_read: false,
        }
    }

    #[tokio::test]
    async fn test_new_session_is_empty() {
        let session = ReceiverSession::new();
        assert!(session.auth_code().await.is_none());
        assert!(session.sender_name().await.is_none());
        assert!(session.selected_time_letter().await.is_none());
        assert!(!session.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_set_auth_code_round_trip() {
        let session = ReceiverSession::new();
        for code in ["abc-123", "0f8fad5b-d9cb-469f-a165-70867728950e", "x"] {
            session.set_auth_code(code).await;
            assert_eq!(session.auth_code().await.as_deref(), Some(code));
        }
    }

    #[tokio::test]
    async fn test_writers_replace_whole_field() {
        let session = ReceiverSession::new();
        session.set_sender_name(Some("Kim".to_string())).await;
        session.set_sender_name(Some("Lee".to_string())).await;
        assert_eq!(session.sender_name().await.as_deref(), Some("Lee"));

        session.set_selected_time_letter(Some(letter(1))).await;
        session.set_selected_time_letter(Some(letter(2))).await;
        assert_eq!(
            session.selected_time_letter().await.map(|l| l.time_letter_id),
            Some(2)
        );
    }

    #[tokio::test]
    async fn test_clear_resets_every_field() {
        let session = ReceiverSession::new();
        session.set_auth_code("abc-123").await;
        session.set_sender_name(Some("Kim".to_string())).await;
        session.set_selected_time_letter(Some(letter(1))).await;

        session.clear_auth_code().await;

        assert!(session.auth_code().await.is_none());
        assert!(session.sender_name().await.is_none());
        assert!(session.selected_time_letter().await.is_none());
    }

    #[tokio::test]
    async fn test_clear_on_partial_state() {
        let session = ReceiverSession::new();
        session.set_sender_name(Some("Kim".to_string())).await;
        session.clear_auth_code().await;
        assert!(session.sender_name().await.is_none());
        assert!(session.auth_code().await.is_none());
    }

    #[tokio::test]
    async fn test_clones_observe_latest_write() {
        let session = ReceiverSession::new();
        let reader = session.clone();
        let writer = tokio::spawn({
            let session = session.clone();
            async move {
                session.set_auth_code("from-task").await;
            }
        });
        writer.await.unwrap();
        assert_eq!(reader.auth_code().await.as_deref(), Some("from-task"));
    }

    #[tokio::test]
    async fn test_begin_with_same_code_keeps_selection() {
        let session = ReceiverSession::new();
        session.begin("abc-123", Some("Kim".to_string())).await;
        session.set_selected_time_letter(Some(letter(1))).await;

        session.begin("abc-123", Some("Kim".to_string())).await;
        assert_eq!(
            session.selected_time_letter().await.map(|l| l.time_letter_id),
            Some(1)
        );

        session.begin("other", None).await;
        assert_eq!(session.auth_code().await.as_deref(), Some("other"));
        assert!(session.sender_name().await.is_none());
        assert!(session.selected_time_letter().await.is_none());
    }
}
