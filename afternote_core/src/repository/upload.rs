//! 预签名 URL 上传
//!
//! 流程：申请预签名地址 → 读取本地文件 → PUT 原始字节 → 返回 `file_url`。
//! 不重试、不支持断点续传；两次上传之间没有原子性保证。

use crate::client::ApiClient;
use crate::client::Auth;
use crate::dto::file::{PresignedUrlRequest, PresignedUrlResponse};
use crate::error::{Error, Result};
use crate::model::PresignedUpload;
use crate::repository::receiver_auth::ReceiverAuthRepository;
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// 接收者证明材料允许的扩展名
pub const DOCUMENT_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "heic", "pdf"];

/// 普通图片允许的扩展名
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];

const DEFAULT_EXTENSION: &str = "jpg";

/// 从文件名推断扩展名（小写、不带点），不在允许列表中时回退为 jpg
pub fn extension_for(path: &Path, allowed: &[&str]) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .filter(|ext| allowed.contains(&ext.as_str()))
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string())
}

/// 服务端未返回 Content-Type 时按扩展名推断
pub fn default_content_type(extension: &str) -> &'static str {
    match extension {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "heic" => "image/heic",
        _ => "image/jpeg",
    }
}

async fn put_file(
    client: &ApiClient,
    presigned: &PresignedUpload,
    extension: &str,
    path: &Path,
) -> Result<String> {
    let bytes = tokio::fs::read(path).await?;

    let content_type = if presigned.content_type.trim().is_empty() {
        default_content_type(extension)
    } else {
        presigned.content_type.as_str()
    };
    client
        .put_presigned(&presigned.presigned_url, content_type, bytes)
        .await?;

    info!("Uploaded {} -> {}", path.display(), presigned.file_url);
    Ok(presigned.file_url.clone())
}

/// 接收者证明材料上传
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReceiverDocumentUploadRepository: Send + Sync {
    /// 上传一个文件，返回可在提交时引用的 `file_url`
    async fn upload_document(&self, auth_code: &str, path: &Path) -> Result<String>;
}

pub struct RemoteReceiverDocumentUploadRepository {
    client: ApiClient,
    receiver_auth: Arc<dyn ReceiverAuthRepository>,
}

impl RemoteReceiverDocumentUploadRepository {
    pub fn new(client: ApiClient, receiver_auth: Arc<dyn ReceiverAuthRepository>) -> Self {
        Self {
            client,
            receiver_auth,
        }
    }
}

#[async_trait]
impl ReceiverDocumentUploadRepository for RemoteReceiverDocumentUploadRepository {
    async fn upload_document(&self, auth_code: &str, path: &Path) -> Result<String> {
        let extension = extension_for(path, DOCUMENT_EXTENSIONS);
        let presigned = self
            .receiver_auth
            .get_presigned_url(auth_code, &extension)
            .await?;
        put_file(&self.client, &presigned, &extension, path).await
    }
}

/// 上传目标接口
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    /// POST /images/presigned-url
    Image,
    /// POST /files/presigned-url
    File,
}

impl UploadKind {
    fn endpoint(&self) -> &'static str {
        match self {
            UploadKind::Image => "/images/presigned-url",
            UploadKind::File => "/files/presigned-url",
        }
    }

    fn allowed_extensions(&self) -> &'static [&'static str] {
        match self {
            UploadKind::Image => IMAGE_EXTENSIONS,
            UploadKind::File => DOCUMENT_EXTENSIONS,
        }
    }
}

/// 登录用户的通用上传（头像、时间信件附件、追悼照片等）
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FileUploadRepository: Send + Sync {
    async fn upload(&self, kind: UploadKind, directory: &str, path: &Path) -> Result<String>;
}

#[derive(Debug, Clone)]
pub struct RemoteFileUploadRepository {
    client: ApiClient,
}

impl RemoteFileUploadRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FileUploadRepository for RemoteFileUploadRepository {
    async fn upload(&self, kind: UploadKind, directory: &str, path: &Path) -> Result<String> {
        if directory.trim().is_empty() {
            return Err(Error::InvalidParam("directory must not be empty".to_string()));
        }

        let extension = extension_for(path, kind.allowed_extensions());
        let body = PresignedUrlRequest {
            directory: directory.to_string(),
            extension: extension.clone(),
        };
        let data: PresignedUrlResponse = self
            .client
            .post(kind.endpoint(), Auth::Bearer, &body)
            .await?
            .require_data()?;

        let presigned = PresignedUpload {
            presigned_url: data.presigned_url,
            file_url: data.file_url,
            content_type: data.content_type,
        };
        put_file(&self.client, &presigned, &extension, path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_for_known_types() {
        assert_eq!(extension_for(Path::new("/tmp/death.PDF"), DOCUMENT_EXTENSIONS), "pdf");
        assert_eq!(extension_for(Path::new("scan.heic"), DOCUMENT_EXTENSIONS), "heic");
        assert_eq!(extension_for(Path::new("photo.jpeg"), IMAGE_EXTENSIONS), "jpeg");
    }

    #[test]
    fn test_extension_for_falls_back_to_jpg() {
        assert_eq!(extension_for(Path::new("notes.txt"), DOCUMENT_EXTENSIONS), "jpg");
        assert_eq!(extension_for(Path::new("no_extension"), DOCUMENT_EXTENSIONS), "jpg");
        // heic 不在普通图片列表中
        assert_eq!(extension_for(Path::new("a.heic"), IMAGE_EXTENSIONS), "jpg");
    }

    #[test]
    fn test_default_content_type() {
        assert_eq!(default_content_type("pdf"), "application/pdf");
        assert_eq!(default_content_type("png"), "image/png");
        assert_eq!(default_content_type("jpg"), "image/jpeg");
        assert_eq!(default_content_type("jpeg"), "image/jpeg");
    }

    #[tokio::test]
    async fn test_presigned_failure_skips_upload() {
        let mut receiver_auth = crate::repository::receiver_auth::MockReceiverAuthRepository::new();
        receiver_auth
            .expect_get_presigned_url()
            .withf(|code, ext| code == "auth-123" && ext == "pdf")
            .times(1)
            .returning(|_, _| Err(Error::Network("presign down".to_string())));

        let client = ApiClient::with_server_url("http://127.0.0.1:9").unwrap();
        let repo = RemoteReceiverDocumentUploadRepository::new(client, Arc::new(receiver_auth));

        let result = repo.upload_document("auth-123", Path::new("/nonexistent/death.pdf")).await;
        match result {
            Err(Error::Network(msg)) => assert_eq!(msg, "presign down"),
            other => panic!("expected network error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let mut receiver_auth = crate::repository::receiver_auth::MockReceiverAuthRepository::new();
        receiver_auth.expect_get_presigned_url().returning(|_, _| {
            Ok(PresignedUpload {
                presigned_url: "http://127.0.0.1:9/upload".to_string(),
                file_url: "https://bucket/receiver-docs/a.pdf".to_string(),
                content_type: "application/pdf".to_string(),
            })
        });

        let client = ApiClient::with_server_url("http://127.0.0.1:9").unwrap();
        let repo = RemoteReceiverDocumentUploadRepository::new(client, Arc::new(receiver_auth));

        let result = repo.upload_document("auth-123", Path::new("/nonexistent/death.pdf")).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
