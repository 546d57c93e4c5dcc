//! 用户仓库：个人资料、推送设置、接收者、传达条件

use crate::client::{ApiClient, Auth};
use crate::dto::user::*;
use crate::error::{Error, Result};
use crate::mapper::account::delivery_condition_request;
use crate::model::*;
use async_trait::async_trait;
use tracing::{debug, info};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_my_profile(&self, user_id: i64) -> Result<UserProfile>;

    async fn update_my_profile(&self, user_id: i64, update: ProfileUpdate) -> Result<UserProfile>;

    async fn get_push_settings(&self, user_id: i64) -> Result<PushSettings>;

    async fn update_push_settings(
        &self,
        user_id: i64,
        update: PushSettingsUpdate,
    ) -> Result<PushSettings>;

    async fn get_receivers(&self, user_id: i64) -> Result<Vec<ReceiverListItem>>;

    async fn get_receiver_detail(&self, user_id: i64, receiver_id: i64) -> Result<ReceiverDetail>;

    /// 发送者查看某位接收者能看到的每日一问回答
    async fn get_receiver_daily_questions(
        &self,
        receiver_id: i64,
        page: u32,
        size: u32,
    ) -> Result<DailyQuestionPage>;

    /// 返回新接收者的 ID
    async fn register_receiver(&self, receiver: NewReceiver) -> Result<i64>;

    async fn get_delivery_condition(&self) -> Result<DeliveryCondition>;

    async fn update_delivery_condition(
        &self,
        condition_type: DeliveryConditionType,
        inactivity_period_days: Option<u32>,
        specific_date: Option<String>,
    ) -> Result<DeliveryCondition>;
}

#[derive(Debug, Clone)]
pub struct RemoteUserRepository {
    client: ApiClient,
}

impl RemoteUserRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserRepository for RemoteUserRepository {
    async fn get_my_profile(&self, user_id: i64) -> Result<UserProfile> {
        let data: UserResponse = self
            .client
            .get_with_query("/users/me", Auth::Bearer, &[("userId", user_id)])
            .await?
            .require_data()?;
        Ok(data.into())
    }

    async fn update_my_profile(&self, user_id: i64, update: ProfileUpdate) -> Result<UserProfile> {
        info!("Updating profile of user {}", user_id);

        let body = UserUpdateProfileRequest::from(update);
        let data: UserResponse = self
            .client
            .patch_with_query("/users/me", Auth::Bearer, &[("userId", user_id)], &body)
            .await?
            .require_data()?;
        Ok(data.into())
    }

    async fn get_push_settings(&self, user_id: i64) -> Result<PushSettings> {
        let data: PushSettingsResponse = self
            .client
            .get_with_query("/users/push-settings", Auth::Bearer, &[("userId", user_id)])
            .await?
            .require_data()?;
        Ok(data.into())
    }

    async fn update_push_settings(
        &self,
        user_id: i64,
        update: PushSettingsUpdate,
    ) -> Result<PushSettings> {
        debug!("Updating push settings: {:?}", update);

        let body = PushSettingsRequest::from(update);
        let data: PushSettingsResponse = self
            .client
            .patch_with_query(
                "/users/push-settings",
                Auth::Bearer,
                &[("userId", user_id)],
                &body,
            )
            .await?
            .require_data()?;
        Ok(data.into())
    }

    async fn get_receivers(&self, user_id: i64) -> Result<Vec<ReceiverListItem>> {
        let data: Vec<ReceiverItem> = self
            .client
            .get_with_query("/users/receivers", Auth::Bearer, &[("userId", user_id)])
            .await?
            .require_data()?;

        debug!("Fetched {} receivers", data.len());
        Ok(data.into_iter().map(Into::into).collect())
    }

    async fn get_receiver_detail(&self, user_id: i64, receiver_id: i64) -> Result<ReceiverDetail> {
        let path = format!("/users/receivers/{}", receiver_id);
        let data: ReceiverDetailResponse = self
            .client
            .get_with_query(&path, Auth::Bearer, &[("userId", user_id)])
            .await?
            .require_data()?;
        Ok(data.into())
    }

    async fn get_receiver_daily_questions(
        &self,
        receiver_id: i64,
        page: u32,
        size: u32,
    ) -> Result<DailyQuestionPage> {
        let path = format!("/users/receivers/{}/daily-questions", receiver_id);
        let data: DailyQuestionAnswerListResponse = self
            .client
            .get_with_query(&path, Auth::Bearer, &[("page", page), ("size", size)])
            .await?
            .require_data()?;

        debug!("Fetched {} daily question answers", data.items.len());
        Ok(data.into())
    }

    async fn register_receiver(&self, receiver: NewReceiver) -> Result<i64> {
        info!("Registering receiver: {}", receiver.name);

        let body = RegisterReceiverRequest::from(receiver);
        let data: RegisterReceiverResponse = self
            .client
            .post("/users/receivers", Auth::Bearer, &body)
            .await?
            .require_data()?;
        Ok(data.receiver_id)
    }

    async fn get_delivery_condition(&self) -> Result<DeliveryCondition> {
        let data: DeliveryConditionResponse = self
            .client
            .get("/users/delivery-condition", Auth::Bearer)
            .await?
            .require_data()?;
        Ok(data.into())
    }

    async fn update_delivery_condition(
        &self,
        condition_type: DeliveryConditionType,
        inactivity_period_days: Option<u32>,
        specific_date: Option<String>,
    ) -> Result<DeliveryCondition> {
        if condition_type == DeliveryConditionType::Unknown {
            return Err(Error::InvalidParam(
                "unknown delivery condition type cannot be set".to_string(),
            ));
        }
        info!("Updating delivery condition to {}", condition_type);

        let body =
            delivery_condition_request(condition_type, inactivity_period_days, specific_date);
        let data: DeliveryConditionResponse = self
            .client
            .patch("/users/delivery-condition", Auth::Bearer, &body)
            .await?
            .require_data()?;
        Ok(data.into())
    }
}
