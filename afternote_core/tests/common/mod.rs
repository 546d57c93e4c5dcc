//! 集成测试公共部分：在随机端口上启动桩服务

#![allow(dead_code)]

use afternote_core::{ApiClient, ClientConfig, Tokens};
use axum::Router;
use serde_json::{json, Value};

/// 启动桩服务，`build` 接收服务地址（用于拼接预签名 URL）
pub async fn serve<F>(build: F) -> String
where
    F: FnOnce(String) -> Router,
{
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub server");
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let app = build(base_url.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server failed");
    });
    base_url
}

pub fn client(base_url: &str) -> ApiClient {
    client_with_timeout(base_url, 5)
}

pub fn client_with_timeout(base_url: &str, timeout: u64) -> ApiClient {
    let config = ClientConfig {
        server_url: base_url.to_string(),
        timeout,
        verify_tls: false,
    };
    ApiClient::new(config).expect("Failed to create client")
}

pub const ACCESS: &str = "access-token-1";

/// 已登录的客户端
pub async fn signed_in(base_url: &str) -> ApiClient {
    let api = client(base_url);
    api.tokens()
        .set(Tokens {
            access_token: ACCESS.to_string(),
            refresh_token: "refresh-token-1".to_string(),
        })
        .await;
    api
}

pub fn bearer(headers: &axum::http::HeaderMap) -> Option<String> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// 成功信封
pub fn ok(data: Value) -> Value {
    json!({ "status": 200, "code": 200, "message": "OK", "data": data })
}
