//! Afternote HTTP 客户端
//!
//! 所有仓库共用的传输层：拼接地址、附加认证头、检查 HTTP 状态、
//! 解析统一响应信封。单次请求，不重试。

use crate::config::ClientConfig;
use crate::envelope::ApiResponse;
use crate::error::{Error, Result};
use crate::token::TokenStore;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

/// 接收者认证码所在的请求头
pub const AUTH_CODE_HEADER: &str = "X-Auth-Code";

/// 日志中只显示认证码/令牌的前几位
pub(crate) fn mask_secret(secret: &str) -> String {
    let prefix: String = secret.chars().take(8).collect();
    format!("{}...", prefix)
}

/// 请求的认证方式
#[derive(Debug, Clone, Copy)]
pub enum Auth<'a> {
    /// 公开接口
    None,
    /// 接收者认证码，放在 `X-Auth-Code` 头中
    AuthCode(&'a str),
    /// 登录用户的 Bearer 令牌（从令牌存储读取）
    Bearer,
}

/// 通用 API 客户端
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ClientConfig,
    http_client: Client,
    tokens: TokenStore,
}

impl ApiClient {
    /// 创建新的客户端实例
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_tokens(config, TokenStore::new())
    }

    /// 使用已有的令牌存储创建客户端
    pub fn with_tokens(config: ClientConfig, tokens: TokenStore) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .danger_accept_invalid_certs(!config.verify_tls)
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self {
            config,
            http_client,
            tokens,
        })
    }

    /// 使用默认配置创建客户端
    pub fn with_server_url(server_url: &str) -> Result<Self> {
        let config = ClientConfig {
            server_url: server_url.to_string(),
            ..ClientConfig::default()
        };
        Self::new(config)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    pub async fn get<T>(&self, path: &str, auth: Auth<'_>) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        let request = self.request(Method::GET, &url, auth).await;
        self.send(request, &url).await
    }

    pub async fn get_with_query<T, Q>(
        &self,
        path: &str,
        auth: Auth<'_>,
        query: &Q,
    ) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.config.endpoint(path);
        let request = self.request(Method::GET, &url, auth).await.query(query);
        self.send(request, &url).await
    }

    pub async fn post<B, T>(&self, path: &str, auth: Auth<'_>, body: &B) -> Result<ApiResponse<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        let request = self.request(Method::POST, &url, auth).await.json(body);
        self.send(request, &url).await
    }

    pub async fn patch<B, T>(&self, path: &str, auth: Auth<'_>, body: &B) -> Result<ApiResponse<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        let request = self.request(Method::PATCH, &url, auth).await.json(body);
        self.send(request, &url).await
    }

    pub async fn patch_with_query<B, T, Q>(
        &self,
        path: &str,
        auth: Auth<'_>,
        query: &Q,
        body: &B,
    ) -> Result<ApiResponse<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.config.endpoint(path);
        let request = self
            .request(Method::PATCH, &url, auth)
            .await
            .query(query)
            .json(body);
        self.send(request, &url).await
    }

    pub async fn delete<T>(&self, path: &str, auth: Auth<'_>) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        let request = self.request(Method::DELETE, &url, auth).await;
        self.send(request, &url).await
    }

    /// 向预签名地址直接 PUT 原始字节（不经过应用服务器，不带认证头）
    pub async fn put_presigned(
        &self,
        presigned_url: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<()> {
        debug!("Uploading {} bytes ({})", bytes.len(), content_type);

        let response = self
            .http_client
            .put(presigned_url)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await
            .map_err(|e| Error::from_transport(presigned_url, e))?;

        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("");
            return Err(Error::Upload(format!(
                "S3 upload failed: {} {}",
                status.as_u16(),
                reason
            )));
        }

        Ok(())
    }

    /// 健康检查
    pub async fn health_check(&self) -> Result<bool> {
        let url = self.config.endpoint("/actuator/health");
        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::from_transport(&url, e))?;

        Ok(response.status().is_success())
    }

    async fn request(&self, method: Method, url: &str, auth: Auth<'_>) -> RequestBuilder {
        let builder = self.http_client.request(method, url);
        match auth {
            Auth::None => builder,
            Auth::AuthCode(code) => builder.header(AUTH_CODE_HEADER, code),
            Auth::Bearer => match self.tokens.access_token().await {
                Some(token) if !token.is_empty() => builder.bearer_auth(token),
                _ => {
                    warn!("No access token available for {}", url);
                    builder
                }
            },
        }
    }

    async fn send<T>(&self, request: RequestBuilder, url: &str) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned,
    {
        let response = request
            .send()
            .await
            .map_err(|e| Error::from_transport(url, e))?;

        // 检查 HTTP 状态码
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::from_transport(url, e))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiResponse<serde_json::Value>>(&body)
                .ok()
                .and_then(|r| r.message)
                .unwrap_or(body);
            if status.as_u16() == 404 {
                warn!("404 from {}: check that the endpoint exists", url);
            }
            return Err(Error::Http {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body)
            .map_err(|e| Error::Decode(format!("Failed to parse response from {}: {}", url, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_client_creation() {
        let client = ApiClient::with_server_url("http://localhost:8080");
        assert!(client.is_ok());
        let client = client.unwrap();
        assert_eq!(client.config().server_url, "http://localhost:8080");
        assert_eq!(client.config().timeout, 30);
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("0f8fad5b-d9cb-469f"), "0f8fad5b...");
        assert_eq!(mask_secret("abc"), "abc...");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        let config = ClientConfig {
            // 保留端口，连接必然被拒绝
            server_url: "http://127.0.0.1:9".to_string(),
            timeout: 2,
            verify_tls: true,
        };
        let client = ApiClient::new(config).unwrap();
        let result = client.get::<serde_json::Value>("/api/ping", Auth::None).await;
        assert!(matches!(result, Err(Error::Network(_))));
    }
}
