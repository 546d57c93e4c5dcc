//! 发送者为内容登记接收者，并按接收者查看已传达的内容（Bearer）

use crate::client::{ApiClient, Auth};
use crate::dto::received::*;
use crate::dto::receiver_auth::{
    AfternoteListResponse, MindRecordListResponse, TimeLetterListResponse,
};
use crate::error::{Error, Result};
use crate::model::*;
use async_trait::async_trait;
use tracing::{debug, info};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReceivedRepository: Send + Sync {
    /// 返回新建的 time-letter 接收记录 ID
    async fn register_time_letter_receivers(
        &self,
        time_letter_id: i64,
        receiver_ids: Vec<i64>,
        delivered_at: Option<String>,
    ) -> Result<Vec<i64>>;

    /// 返回新建的 mind-record 接收记录 ID
    async fn register_mind_record_receivers(
        &self,
        mind_record_id: i64,
        receiver_ids: Vec<i64>,
    ) -> Result<Vec<i64>>;

    async fn get_time_letters(&self, receiver_id: i64) -> Result<ReceivedPage<ReceivedTimeLetter>>;

    async fn get_mind_records(&self, receiver_id: i64) -> Result<ReceivedPage<ReceivedMindRecord>>;

    async fn get_after_notes(&self, receiver_id: i64) -> Result<ReceivedPage<ReceivedAfternote>>;
}

#[derive(Debug, Clone)]
pub struct RemoteReceivedRepository {
    client: ApiClient,
}

impl RemoteReceivedRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

fn require_receivers(receiver_ids: &[i64]) -> Result<()> {
    if receiver_ids.is_empty() {
        return Err(Error::InvalidParam("receiver ids are empty".to_string()));
    }
    Ok(())
}

#[async_trait]
impl ReceivedRepository for RemoteReceivedRepository {
    async fn register_time_letter_receivers(
        &self,
        time_letter_id: i64,
        receiver_ids: Vec<i64>,
        delivered_at: Option<String>,
    ) -> Result<Vec<i64>> {
        require_receivers(&receiver_ids)?;
        info!(
            "Registering {} receivers for time letter {}",
            receiver_ids.len(),
            time_letter_id
        );

        let body = TimeLetterReceiverRequest {
            time_letter_id,
            receiver_ids,
            delivered_at,
        };
        self.client
            .post("/api/received/time-letters", Auth::Bearer, &body)
            .await?
            .require_data()
    }

    async fn register_mind_record_receivers(
        &self,
        mind_record_id: i64,
        receiver_ids: Vec<i64>,
    ) -> Result<Vec<i64>> {
        require_receivers(&receiver_ids)?;
        info!(
            "Registering {} receivers for mind record {}",
            receiver_ids.len(),
            mind_record_id
        );

        let body = MindRecordReceiverRequest {
            mind_record_id,
            receiver_ids,
        };
        self.client
            .post("/api/received/mind-records", Auth::Bearer, &body)
            .await?
            .require_data()
    }

    async fn get_time_letters(&self, receiver_id: i64) -> Result<ReceivedPage<ReceivedTimeLetter>> {
        let path = format!("/api/received/{}/time-letters", receiver_id);
        let data: TimeLetterListResponse = self
            .client
            .get(&path, Auth::Bearer)
            .await?
            .require_data()?;

        debug!("Receiver {} has {} time letters", receiver_id, data.time_letters.len());
        Ok(data.into())
    }

    async fn get_mind_records(&self, receiver_id: i64) -> Result<ReceivedPage<ReceivedMindRecord>> {
        let path = format!("/api/received/{}/mind-records", receiver_id);
        let data: MindRecordListResponse = self
            .client
            .get(&path, Auth::Bearer)
            .await?
            .require_data()?;
        Ok(data.into())
    }

    async fn get_after_notes(&self, receiver_id: i64) -> Result<ReceivedPage<ReceivedAfternote>> {
        let path = format!("/api/received/{}/after-notes", receiver_id);
        let data: AfternoteListResponse = self
            .client
            .get(&path, Auth::Bearer)
            .await?
            .require_data()?;
        Ok(data.into())
    }
}
