//! 通用文件上传（POST /files/presigned-url, POST /images/presigned-url）

use serde::{Deserialize, Serialize};

/// directory 取值：profiles | timeletters | afternotes
#[derive(Debug, Clone, Serialize)]
pub struct PresignedUrlRequest {
    pub directory: String,
    pub extension: String,
}

/// `/images` 返回 `imageUrl`，`/files` 返回 `fileUrl`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresignedUrlResponse {
    pub presigned_url: String,
    #[serde(alias = "imageUrl")]
    pub file_url: String,
    #[serde(default)]
    pub content_type: String,
}
