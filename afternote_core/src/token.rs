//! 登录令牌存储
//!
//! 仅保存在内存中，进程退出即丢失。

use std::sync::Arc;
use tokio::sync::RwLock;

/// 访问令牌与刷新令牌
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens {
    pub access_token: String,
    pub refresh_token: String,
}

/// 令牌存储，克隆后共享同一份状态
#[derive(Debug, Clone, Default)]
pub struct TokenStore {
    inner: Arc<RwLock<Option<Tokens>>>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set(&self, tokens: Tokens) {
        *self.inner.write().await = Some(tokens);
    }

    pub async fn get(&self) -> Option<Tokens> {
        self.inner.read().await.clone()
    }

    pub async fn access_token(&self) -> Option<String> {
        self.inner
            .read()
            .await
            .as_ref()
            .map(|t| t.access_token.clone())
    }

    pub async fn refresh_token(&self) -> Option<String> {
        self.inner
            .read()
            .await
            .as_ref()
            .map(|t| t.refresh_token.clone())
    }

    pub async fn clear(&self) {
        *self.inner.write().await = None;
    }
}
