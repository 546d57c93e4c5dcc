//! 客户端配置
//!
//! 默认值可被环境变量覆盖（`AFTERNOTE_SERVER_URL`、`AFTERNOTE_TIMEOUT`、
//! `AFTERNOTE_VERIFY_TLS`），支持从 `.env` 文件加载。

use crate::error::{Error, Result};
use serde::Deserialize;

/// 客户端配置
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// 服务器 URL
    #[serde(default = "default_server_url")]
    pub server_url: String,
    /// 请求超时（秒）
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// 是否验证 TLS 证书
    #[serde(default = "default_verify_tls")]
    pub verify_tls: bool,
}

fn default_server_url() -> String {
    "https://afternote.kro.kr".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_verify_tls() -> bool {
    true
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            timeout: default_timeout(),
            verify_tls: default_verify_tls(),
        }
    }
}

impl ClientConfig {
    /// 从环境变量加载配置（`.env` 文件可选）
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// 从键值对加载配置，只识别 `AFTERNOTE_` 前缀
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed("AFTERNOTE_")
            .from_iter(vars)
            .map_err(|e| Error::Config(e.to_string()))
    }

    /// 拼接完整的接口地址
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.server_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
