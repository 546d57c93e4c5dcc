//! 统一 API 响应信封
//!
//! 服务端所有非流式响应都包裹在 `{status, code, message, data}` 中。
//! 解包只在这里进行，调用方不直接匹配信封字段。

use crate::error::{Error, Result};
use serde::Deserialize;

/// 统一 API 响应
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub status: Option<i32>,
    pub code: Option<i32>,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// 取出 data；data 为空时返回 `MissingData`
    pub fn require_data(self) -> Result<T> {
        self.check_code()?;
        let message = self.message.unwrap_or_default();
        self.data.ok_or(Error::MissingData { message })
    }

    /// 只检查状态，允许 data 为空
    pub fn require_success(self) -> Result<Option<T>> {
        self.check_code()?;
        Ok(self.data)
    }

    fn check_code(&self) -> Result<()> {
        // status 优先，其次 code；两者都缺省时视为成功
        match self.status.or(self.code) {
            Some(code) if !(200..300).contains(&code) => Err(Error::Api {
                code,
                message: self.message.clone().unwrap_or_default(),
            }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Payload {
        value: i64,
    }

    #[test]
    fn test_require_data_returns_payload_unchanged() {
        let response: ApiResponse<Payload> = serde_json::from_str(
            r#"{"status":200,"code":200,"message":"OK","data":{"value":7}}"#,
        )
        .unwrap();
        assert_eq!(response.require_data().unwrap(), Payload { value: 7 });
    }

    #[test]
    fn test_require_data_null_payload_is_missing_data() {
        let response: ApiResponse<Payload> =
            serde_json::from_str(r#"{"status":200,"message":"empty","data":null}"#).unwrap();
        match response.require_data() {
            Err(Error::MissingData { message }) => assert_eq!(message, "empty"),
            other => panic!("expected MissingData, got {:?}", other),
        }
    }

    #[test]
    fn test_require_data_absent_payload_is_missing_data() {
        let response: ApiResponse<Payload> = serde_json::from_str(r#"{"status":200}"#).unwrap();
        assert!(matches!(
            response.require_data(),
            Err(Error::MissingData { .. })
        ));
    }

    #[test]
    fn test_failure_code_is_api_error() {
        let response: ApiResponse<Payload> = serde_json::from_str(
            r#"{"status":409,"message":"already processed","data":null}"#,
        )
        .unwrap();
        match response.require_data() {
            Err(Error::Api { code, message }) => {
                assert_eq!(code, 409);
                assert_eq!(message, "already processed");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_require_success_tolerates_null_data() {
        let response: ApiResponse<()> =
            serde_json::from_str(r#"{"status":200,"data":null}"#).unwrap();
        assert!(response.require_success().unwrap().is_none());
    }
}
