//! 错误类型定义

use thiserror::Error;

/// 错误类型
#[derive(Debug, Error)]
pub enum Error {
    /// 网络错误（连接失败、超时等）
    #[error("Network error: {0}")]
    Network(String),

    /// HTTP 状态码错误（400/401/403/404 等）
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// API 错误（信封中的业务错误码）
    #[error("API error (code {code}): {message}")]
    Api { code: i32, message: String },

    /// 服务端返回成功但 data 为空
    #[error("Missing data in response: {message}")]
    MissingData { message: String },

    /// 编解码错误
    #[error("Encoding/Decoding error: {0}")]
    Decode(String),

    /// 参数错误
    #[error("Invalid parameter: {0}")]
    InvalidParam(String),

    /// 未认证错误（会话中没有认证码或令牌）
    #[error("Not authenticated")]
    NotAuthenticated,

    /// 预签名 URL 上传失败
    #[error("Upload failed: {0}")]
    Upload(String),

    /// 配置错误
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO 错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// 将 reqwest 错误归类为网络错误，保留底层原因
    pub(crate) fn from_transport(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Network(format!("Request to {} timed out: {}", url, err))
        } else if err.is_decode() {
            Error::Decode(format!("Failed to parse response from {}: {}", url, err))
        } else {
            Error::Network(format!("Failed to connect to {}: {}", url, err))
        }
    }
}

/// 结果类型
pub type Result<T> = std::result::Result<T, Error>;
