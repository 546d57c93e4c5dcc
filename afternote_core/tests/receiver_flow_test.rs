//! 接收者流程集成测试 - 连接本地桩服务

mod common;

use afternote_core::repository::{
    ReceiverAuthRepository, ReceiverDocumentUploadRepository, RemoteReceiverAuthRepository,
    RemoteReceiverDocumentUploadRepository,
};
use afternote_core::usecase::{
    GetDeliveryVerificationStatus, ReceiverContent, SubmitDeliveryVerification,
    UploadReceiverDocument, VerifyReceiverAuthCode,
};
use afternote_core::{Error, ReceiverSession, VerificationStatus};
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use common::{client, client_with_timeout, ok, serve};
use serde_json::{json, Value};
use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn auth_code(headers: &HeaderMap) -> Option<String> {
    headers
        .get("X-Auth-Code")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

#[tokio::test]
async fn test_verify_then_session_keeps_sender() {
    let seen = Arc::new(Mutex::new(None::<Value>));
    let captured = seen.clone();
    let base = serve(move |_| {
        Router::new().route(
            "/api/receiver-auth/verify",
            post(move |Json(body): Json<Value>| {
                let captured = captured.clone();
                async move {
                    *captured.lock().unwrap() = Some(body);
                    Json(ok(json!({ "receiverId": 42, "senderName": "Kim" })))
                }
            }),
        )
    })
    .await;

    let repo = Arc::new(RemoteReceiverAuthRepository::new(client(&base)));
    let session = ReceiverSession::new();
    let verify = VerifyReceiverAuthCode::new(repo, session.clone());

    let result = verify.execute("abc-123").await.unwrap();

    assert_eq!(result.receiver_id, 42);
    assert_eq!(result.sender_name.as_deref(), Some("Kim"));
    assert!(result.receiver_name.is_none());
    assert_eq!(
        seen.lock().unwrap().clone(),
        Some(json!({ "authCode": "abc-123" }))
    );

    assert_eq!(session.sender_name().await.as_deref(), Some("Kim"));
    session.clear_auth_code().await;
    assert!(session.sender_name().await.is_none());
    assert!(session.auth_code().await.is_none());
}

#[tokio::test]
async fn test_lists_send_auth_code_header() {
    let base = serve(|_| {
        Router::new()
            .route(
                "/api/receiver-auth/time-letters",
                get(|headers: HeaderMap| async move {
                    if auth_code(&headers).as_deref() != Some("abc-123") {
                        return (
                            StatusCode::UNAUTHORIZED,
                            Json(json!({ "status": 401, "message": "bad code" })),
                        );
                    }
                    (
                        StatusCode::OK,
                        Json(ok(json!({
                            "timeLetters": [{
                                "id": 1, "timeLetterReceiverId": 11, "title": "Spring",
                                "mediaList": [
                                    { "id": 5, "mediaType": "IMAGE", "mediaUrl": "https://m/5.jpg" }
                                ]
                            }],
                            "totalCount": 1
                        }))),
                    )
                }),
            )
            .route(
                "/api/receiver-auth/mind-records",
                get(|| async { Json(ok(json!({ "mindRecords": [], "totalCount": 0 }))) }),
            )
            .route(
                "/api/receiver-auth/after-notes",
                get(|| async {
                    Json(ok(json!({
                        "afternotes": [{ "id": 3, "category": "PLAYLIST", "senderName": "Kim" }],
                        "totalCount": 1
                    })))
                }),
            )
    })
    .await;

    let repo = RemoteReceiverAuthRepository::new(client(&base));

    let letters = repo.get_time_letters("abc-123").await.unwrap();
    assert_eq!(letters.total_count, 1);
    assert_eq!(letters.items[0].time_letter_receiver_id, 11);
    assert_eq!(letters.items[0].media_list[0].media_url, "https://m/5.jpg");
    assert!(!letters.items[0].is_read);

    // 空列表也是成功
    let records = repo.get_mind_records("abc-123").await.unwrap();
    assert!(records.is_empty());

    let notes = repo.get_after_notes("abc-123").await.unwrap();
    assert_eq!(notes.items[0].source_type, "PLAYLIST");

    match repo.get_time_letters("wrong").await {
        Err(Error::Http { status, message }) => {
            assert_eq!(status, 401);
            assert_eq!(message, "bad code");
        }
        other => panic!("expected HTTP 401, got {:?}", other),
    }
}

#[tokio::test]
async fn test_content_use_case_reads_code_from_session() {
    let base = serve(|_| {
        Router::new()
            .route(
                "/api/receiver-auth/time-letters/{id}",
                get(|Path(id): Path<i64>, headers: HeaderMap| async move {
                    assert_eq!(auth_code(&headers).as_deref(), Some("abc-123"));
                    Json(ok(json!({
                        "id": 1, "timeLetterReceiverId": id, "content": "Take care", "isRead": true
                    })))
                }),
            )
            .route(
                "/api/receiver-auth/message",
                get(|| async { Json(ok(json!({ "senderName": "Kim", "message": "Thank you" }))) }),
            )
    })
    .await;

    let repo = Arc::new(RemoteReceiverAuthRepository::new(client(&base)));
    let session = ReceiverSession::new();
    session.set_auth_code("abc-123").await;
    let content = ReceiverContent::new(repo, session.clone());

    let letter = content.select_time_letter(77).await.unwrap();
    assert_eq!(letter.time_letter_receiver_id, 77);
    assert!(letter.is_read);
    assert_eq!(session.selected_time_letter().await, Some(letter));

    let message = content.message().await.unwrap();
    assert_eq!(message.sender_name, "Kim");
    assert_eq!(message.message.as_deref(), Some("Thank you"));
}

#[tokio::test]
async fn test_status_pending_has_no_admin_note() {
    let base = serve(|_| {
        Router::new().route(
            "/api/receiver-auth/delivery-verification/status",
            get(|| async {
                Json(ok(json!({
                    "id": 8,
                    "status": "PENDING",
                    "deathCertificateUrl": "https://s3/d.pdf",
                    "familyRelationCertificateUrl": "https://s3/f.pdf",
                    "createdAt": "2025-03-01T09:00:00"
                })))
            }),
        )
    })
    .await;

    let repo = Arc::new(RemoteReceiverAuthRepository::new(client(&base)));
    let status = GetDeliveryVerificationStatus::new(repo)
        .execute("abc-123")
        .await
        .unwrap();

    assert_eq!(status.id, 8);
    assert_eq!(status.status, VerificationStatus::Pending);
    assert!(status.admin_note.is_none());
}

#[tokio::test]
async fn test_null_payload_is_missing_data() {
    let base = serve(|_| {
        Router::new().route(
            "/api/receiver-auth/delivery-verification/status",
            get(|| async {
                Json(json!({ "status": 200, "message": "no request yet", "data": null }))
            }),
        )
    })
    .await;

    let repo = RemoteReceiverAuthRepository::new(client(&base));
    match repo.get_delivery_verification_status("abc-123").await {
        Err(Error::MissingData { message }) => assert_eq!(message, "no request yet"),
        other => panic!("expected MissingData, got {:?}", other),
    }
}

#[tokio::test]
async fn test_timeout_becomes_failure_result() {
    let base = serve(|_| {
        Router::new().route(
            "/api/receiver-auth/verify",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(3)).await;
                Json(ok(json!({ "receiverId": 1 })))
            }),
        )
    })
    .await;

    let repo = RemoteReceiverAuthRepository::new(client_with_timeout(&base, 1));
    let result = repo.verify("abc-123").await;
    assert!(matches!(result, Err(Error::Network(_))), "got {:?}", result);
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let base = serve(|_| {
        Router::new().route(
            "/api/receiver-auth/message",
            get(|| async { "<html>maintenance</html>" }),
        )
    })
    .await;

    let repo = RemoteReceiverAuthRepository::new(client(&base));
    assert!(matches!(
        repo.get_message("abc-123").await,
        Err(Error::Decode(_))
    ));
}

#[derive(Default)]
struct Uploads {
    presign_extensions: Vec<String>,
    puts: Vec<(String, String, Vec<u8>)>,
    submitted: Option<Value>,
}

fn upload_router(base: String, uploads: Arc<Mutex<Uploads>>, put_status: StatusCode) -> Router {
    Router::new()
        .route(
            "/api/receiver-auth/presigned-url",
            post(
                |State((base, uploads)): State<(String, Arc<Mutex<Uploads>>)>,
                 headers: HeaderMap,
                 Json(body): Json<Value>| async move {
                    assert_eq!(auth_code(&headers).as_deref(), Some("abc-123"));
                    let ext = body["extension"].as_str().unwrap_or_default().to_string();
                    uploads.lock().unwrap().presign_extensions.push(ext.clone());
                    let count = uploads.lock().unwrap().presign_extensions.len();
                    let key = format!("doc-{}.{}", count, ext);
                    // 不返回 contentType，由客户端按扩展名推断
                    Json(ok(json!({
                        "presignedUrl": format!("{}/s3/{}", base, key),
                        "fileUrl": format!("https://bucket.s3.amazonaws.com/receiver-docs/{}", key),
                        "contentType": ""
                    })))
                },
            ),
        )
        .route(
            "/s3/{key}",
            put(
                move |State((_, uploads)): State<(String, Arc<Mutex<Uploads>>)>,
                      Path(key): Path<String>,
                      headers: HeaderMap,
                      body: Bytes| async move {
                    let content_type = headers
                        .get("content-type")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string();
                    uploads
                        .lock()
                        .unwrap()
                        .puts
                        .push((key, content_type, body.to_vec()));
                    put_status
                },
            ),
        )
        .route(
            "/api/receiver-auth/delivery-verification",
            post(
                |State((_, uploads)): State<(String, Arc<Mutex<Uploads>>)>,
                 Json(body): Json<Value>| async move {
                    uploads.lock().unwrap().submitted = Some(body.clone());
                    Json(ok(json!({
                        "id": 1,
                        "status": "PENDING",
                        "deathCertificateUrl": body["deathCertificateUrl"],
                        "familyRelationCertificateUrl": body["familyRelationCertificateUrl"],
                        "createdAt": "2025-03-01T09:00:00"
                    })))
                },
            ),
        )
        .with_state((base, uploads))
}

#[tokio::test]
async fn test_upload_two_documents_then_submit() {
    let uploads = Arc::new(Mutex::new(Uploads::default()));
    let state = uploads.clone();
    let base = serve(move |base| upload_router(base, state, StatusCode::OK)).await;

    let dir = tempfile::tempdir().unwrap();
    let death_path = dir.path().join("death.pdf");
    let family_path = dir.path().join("family.PNG");
    std::fs::File::create(&death_path)
        .unwrap()
        .write_all(b"%PDF-1.4 death")
        .unwrap();
    std::fs::File::create(&family_path)
        .unwrap()
        .write_all(b"\x89PNG family")
        .unwrap();

    let api = client(&base);
    let receiver_auth: Arc<dyn ReceiverAuthRepository> =
        Arc::new(RemoteReceiverAuthRepository::new(api.clone()));
    let upload = UploadReceiverDocument::new(Arc::new(RemoteReceiverDocumentUploadRepository::new(
        api,
        receiver_auth.clone(),
    )));

    let death_url = upload.execute("abc-123", &death_path).await.unwrap();
    let family_url = upload.execute("abc-123", &family_path).await.unwrap();
    assert_eq!(death_url, "https://bucket.s3.amazonaws.com/receiver-docs/doc-1.pdf");
    assert_eq!(family_url, "https://bucket.s3.amazonaws.com/receiver-docs/doc-2.png");

    SubmitDeliveryVerification::new(receiver_auth)
        .execute("abc-123", &death_url, &family_url)
        .await
        .unwrap();

    let uploads = uploads.lock().unwrap();
    assert_eq!(uploads.presign_extensions, vec!["pdf", "png"]);
    assert_eq!(uploads.puts.len(), 2);
    assert_eq!(uploads.puts[0].1, "application/pdf");
    assert_eq!(uploads.puts[0].2, b"%PDF-1.4 death".to_vec());
    assert_eq!(uploads.puts[1].1, "image/png");
    assert_eq!(
        uploads.submitted.clone().unwrap(),
        json!({ "deathCertificateUrl": death_url, "familyRelationCertificateUrl": family_url })
    );
}

#[tokio::test]
async fn test_rejected_put_is_upload_error() {
    let uploads = Arc::new(Mutex::new(Uploads::default()));
    let state = uploads.clone();
    let base = serve(move |base| upload_router(base, state, StatusCode::FORBIDDEN)).await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("death.pdf");
    std::fs::write(&path, b"%PDF").unwrap();

    let api = client(&base);
    let repo = RemoteReceiverDocumentUploadRepository::new(
        api.clone(),
        Arc::new(RemoteReceiverAuthRepository::new(api)),
    );

    match repo.upload_document("abc-123", &path).await {
        Err(Error::Upload(msg)) => assert!(msg.contains("403"), "{}", msg),
        other => panic!("expected upload error, got {:?}", other),
    }
}
