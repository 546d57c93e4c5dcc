//! 发送者 time letter 仓库（Bearer）
//!
//! DRAFT 状态的信件即临时保存，有单独的列表和一键清空接口。

use crate::client::{ApiClient, Auth};
use crate::dto::time_letter::*;
use crate::error::{Error, Result};
use crate::model::*;
use async_trait::async_trait;
use tracing::{debug, info};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TimeLetterRepository: Send + Sync {
    async fn get_time_letters(&self) -> Result<TimeLetterList>;

    async fn create_time_letter(&self, letter: NewTimeLetter) -> Result<TimeLetter>;

    async fn get_time_letter(&self, time_letter_id: i64) -> Result<TimeLetter>;

    async fn update_time_letter(
        &self,
        time_letter_id: i64,
        update: TimeLetterUpdate,
    ) -> Result<TimeLetter>;

    /// 批量删除，ID 列表不能为空
    async fn delete_time_letters(&self, time_letter_ids: Vec<i64>) -> Result<()>;

    async fn get_temporary_time_letters(&self) -> Result<TimeLetterList>;

    async fn delete_all_temporary(&self) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct RemoteTimeLetterRepository {
    client: ApiClient,
}

impl RemoteTimeLetterRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

fn require_writable(status: TimeLetterStatus) -> Result<()> {
    if status == TimeLetterStatus::Unknown {
        return Err(Error::InvalidParam(
            "unknown time letter status cannot be written".to_string(),
        ));
    }
    Ok(())
}

#[async_trait]
impl TimeLetterRepository for RemoteTimeLetterRepository {
    async fn get_time_letters(&self) -> Result<TimeLetterList> {
        let data: TimeLetterPageResponse = self
            .client
            .get("/time-letters", Auth::Bearer)
            .await?
            .require_data()?;

        debug!("Fetched {} time letters", data.time_letters.len());
        Ok(data.into())
    }

    async fn create_time_letter(&self, letter: NewTimeLetter) -> Result<TimeLetter> {
        require_writable(letter.status)?;
        info!("Creating time letter with status {}", letter.status);

        let body = TimeLetterCreateRequest::from(letter);
        let data: TimeLetterDetailResponse = self
            .client
            .post("/time-letters", Auth::Bearer, &body)
            .await?
            .require_data()?;
        Ok(data.into())
    }

    async fn get_time_letter(&self, time_letter_id: i64) -> Result<TimeLetter> {
        let path = format!("/time-letters/{}", time_letter_id);
        let data: TimeLetterDetailResponse = self
            .client
            .get(&path, Auth::Bearer)
            .await?
            .require_data()?;
        Ok(data.into())
    }

    async fn update_time_letter(
        &self,
        time_letter_id: i64,
        update: TimeLetterUpdate,
    ) -> Result<TimeLetter> {
        if let Some(status) = update.status {
            require_writable(status)?;
        }
        info!("Updating time letter {}", time_letter_id);

        let path = format!("/time-letters/{}", time_letter_id);
        let body = TimeLetterUpdateRequest::from(update);
        let data: TimeLetterDetailResponse = self
            .client
            .patch(&path, Auth::Bearer, &body)
            .await?
            .require_data()?;
        Ok(data.into())
    }

    async fn delete_time_letters(&self, time_letter_ids: Vec<i64>) -> Result<()> {
        if time_letter_ids.is_empty() {
            return Err(Error::InvalidParam("no time letter ids to delete".to_string()));
        }
        info!("Deleting time letters: {:?}", time_letter_ids);

        let body = TimeLetterDeleteRequest { time_letter_ids };
        self.client
            .post::<_, serde_json::Value>("/time-letters/delete", Auth::Bearer, &body)
            .await?
            .require_success()?;
        Ok(())
    }

    async fn get_temporary_time_letters(&self) -> Result<TimeLetterList> {
        let data: TimeLetterPageResponse = self
            .client
            .get("/time-letters/temporary", Auth::Bearer)
            .await?
            .require_data()?;
        Ok(data.into())
    }

    async fn delete_all_temporary(&self) -> Result<()> {
        info!("Deleting all temporary time letters");

        self.client
            .delete::<serde_json::Value>("/time-letters/temporary", Auth::Bearer)
            .await?
            .require_success()?;
        Ok(())
    }
}
