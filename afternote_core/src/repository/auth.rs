//! 账户认证仓库
//!
//! 登录与重新签发成功后写入共享的令牌存储，登出时清空。
//! 注册前需先完成邮箱验证码校验。

use crate::client::{mask_secret, ApiClient, Auth};
use crate::dto::auth::*;
use crate::error::{Error, Result};
use crate::model::{NewAccount, SignUpResult};
use crate::token::Tokens;
use async_trait::async_trait;
use tracing::{info, warn};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<Tokens>;

    /// 服务端未返回新的刷新令牌时沿用旧值
    async fn reissue(&self, refresh_token: &str) -> Result<Tokens>;

    async fn logout(&self, refresh_token: &str) -> Result<()>;

    async fn send_email_code(&self, email: &str) -> Result<()>;

    /// 服务端未给出结果时视为未通过
    async fn verify_email(&self, email: &str, certificate_code: &str) -> Result<bool>;

    async fn sign_up(&self, account: NewAccount) -> Result<SignUpResult>;

    async fn change_password(&self, current_password: &str, new_password: &str) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct RemoteAuthRepository {
    client: ApiClient,
}

impl RemoteAuthRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthRepository for RemoteAuthRepository {
    async fn login(&self, email: &str, password: &str) -> Result<Tokens> {
        info!("Logging in user: {}", email);

        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let data: LoginData = self
            .client
            .post("/auth/login", Auth::None, &body)
            .await?
            .require_data()?;

        let tokens = Tokens::from(data);
        self.client.tokens().set(tokens.clone()).await;

        info!("User logged in successfully");
        Ok(tokens)
    }

    async fn reissue(&self, refresh_token: &str) -> Result<Tokens> {
        info!("Reissuing tokens with {}", mask_secret(refresh_token));

        let body = RefreshTokenRequest {
            refresh_token: refresh_token.to_string(),
        };
        let data: ReissueData = self
            .client
            .post("/auth/reissue", Auth::None, &body)
            .await?
            .require_data()?;

        let access_token = data
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or(Error::MissingData {
                message: "accessToken".to_string(),
            })?;
        let tokens = Tokens {
            access_token,
            refresh_token: data
                .refresh_token
                .unwrap_or_else(|| refresh_token.to_string()),
        };
        self.client.tokens().set(tokens.clone()).await;
        Ok(tokens)
    }

    async fn logout(&self, refresh_token: &str) -> Result<()> {
        let body = RefreshTokenRequest {
            refresh_token: refresh_token.to_string(),
        };
        let result = self
            .client
            .post::<_, serde_json::Value>("/auth/logout", Auth::Bearer, &body)
            .await
            .and_then(|r| r.require_success());

        // 本地令牌无论如何都清空
        self.client.tokens().clear().await;

        if let Err(e) = result {
            warn!("Logout request failed, but tokens were cleared: {}", e);
            return Err(e);
        }
        info!("User logged out successfully");
        Ok(())
    }

    async fn send_email_code(&self, email: &str) -> Result<()> {
        info!("Sending email verification code to {}", email);

        let body = EmailSendRequest {
            email: email.to_string(),
        };
        self.client
            .post::<_, serde_json::Value>("/auth/email/send", Auth::None, &body)
            .await?
            .require_success()?;
        Ok(())
    }

    async fn verify_email(&self, email: &str, certificate_code: &str) -> Result<bool> {
        if certificate_code.trim().is_empty() {
            return Err(Error::InvalidParam("certificate code is empty".to_string()));
        }

        let body = EmailVerifyRequest {
            email: email.to_string(),
            certificate_code: certificate_code.to_string(),
        };
        let data: Option<EmailVerifyData> = self
            .client
            .post("/auth/email/verify", Auth::None, &body)
            .await?
            .require_success()?;

        let verified = data.and_then(|d| d.is_verified).unwrap_or(false);
        info!("Email {} verified: {}", email, verified);
        Ok(verified)
    }

    async fn sign_up(&self, account: NewAccount) -> Result<SignUpResult> {
        info!("Signing up user: {}", account.email);

        let body = SignUpRequest::from(account);
        let data: SignUpData = self
            .client
            .post("/auth/sign-up", Auth::None, &body)
            .await?
            .require_data()?;
        Ok(data.into())
    }

    async fn change_password(&self, current_password: &str, new_password: &str) -> Result<()> {
        if new_password.is_empty() {
            return Err(Error::InvalidParam("new password is empty".to_string()));
        }

        let body = PasswordChangeRequest {
            current_password: current_password.to_string(),
            new_password: new_password.to_string(),
        };
        self.client
            .post::<_, serde_json::Value>("/auth/password/change", Auth::Bearer, &body)
            .await?
            .require_success()?;

        info!("Password changed");
        Ok(())
    }
}
