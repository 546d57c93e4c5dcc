//! 用例层：校验简单前置条件后委托给仓库

pub mod admin;
pub mod receiver_auth;

pub use admin::{ReviewDecision, ReviewVerification};
pub use receiver_auth::{
    GetDeliveryVerificationStatus, ReceiverContent, SubmitDeliveryVerification,
    UploadReceiverDocument, VerifyReceiverAuthCode,
};
