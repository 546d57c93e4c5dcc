//! 发送者 afternote 仓库（Bearer）

use crate::client::{ApiClient, Auth};
use crate::dto::afternote::*;
use crate::error::{Error, Result};
use crate::model::*;
use async_trait::async_trait;
use tracing::{debug, info};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AfternoteRepository: Send + Sync {
    /// `category` 为 `None` 时返回全部类别
    async fn get_afternotes(
        &self,
        category: Option<AfternoteCategory>,
        page: u32,
        size: u32,
    ) -> Result<AfternotePage>;

    async fn get_afternote_detail(&self, afternote_id: i64) -> Result<AfternoteDetail>;

    /// 返回新 afternote 的 ID
    async fn create_afternote(&self, afternote: NewAfternote) -> Result<i64>;

    async fn update_afternote(&self, afternote_id: i64, update: AfternoteUpdate) -> Result<i64>;

    async fn delete_afternote(&self, afternote_id: i64) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct RemoteAfternoteRepository {
    client: ApiClient,
}

impl RemoteAfternoteRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

fn require_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(Error::InvalidParam("afternote title is empty".to_string()));
    }
    Ok(())
}

#[async_trait]
impl AfternoteRepository for RemoteAfternoteRepository {
    async fn get_afternotes(
        &self,
        category: Option<AfternoteCategory>,
        page: u32,
        size: u32,
    ) -> Result<AfternotePage> {
        let query = AfternoteListQuery {
            category: category.map(Into::into),
            page,
            size,
        };
        let data: AfternotePageResponse = self
            .client
            .get_with_query("/afternotes", Auth::Bearer, &query)
            .await?
            .require_data()?;

        debug!("Fetched {} afternotes (page {})", data.content.len(), data.page);
        Ok(data.into())
    }

    async fn get_afternote_detail(&self, afternote_id: i64) -> Result<AfternoteDetail> {
        let path = format!("/afternotes/{}", afternote_id);
        let data: AfternoteDetailData = self
            .client
            .get(&path, Auth::Bearer)
            .await?
            .require_data()?;
        Ok(data.into())
    }

    async fn create_afternote(&self, afternote: NewAfternote) -> Result<i64> {
        require_title(&afternote.title)?;
        info!(
            "Creating {} afternote: {}",
            afternote.content.category(),
            afternote.title
        );

        let body = AfternoteWriteRequest::from(afternote);
        let data: AfternoteIdResponse = self
            .client
            .post("/afternotes", Auth::Bearer, &body)
            .await?
            .require_data()?;
        Ok(data.afternote_id)
    }

    async fn update_afternote(&self, afternote_id: i64, update: AfternoteUpdate) -> Result<i64> {
        require_title(&update.title)?;
        info!("Updating afternote {}", afternote_id);

        let path = format!("/afternotes/{}", afternote_id);
        let body = AfternoteWriteRequest::from(update);
        let data: AfternoteIdResponse = self
            .client
            .patch(&path, Auth::Bearer, &body)
            .await?
            .require_data()?;
        Ok(data.afternote_id)
    }

    async fn delete_afternote(&self, afternote_id: i64) -> Result<()> {
        info!("Deleting afternote {}", afternote_id);

        let path = format!("/afternotes/{}", afternote_id);
        self.client
            .delete::<serde_json::Value>(&path, Auth::Bearer)
            .await?
            .require_success()?;
        Ok(())
    }
}
