//! 仓库层：每个功能域一个 trait 和一个 HTTP 实现

pub mod admin;
pub mod afternote;
pub mod auth;
pub mod received;
pub mod receiver_auth;
pub mod time_letter;
pub mod upload;
pub mod user;

pub use admin::{AdminRepository, RemoteAdminRepository};
pub use afternote::{AfternoteRepository, RemoteAfternoteRepository};
pub use auth::{AuthRepository, RemoteAuthRepository};
pub use received::{ReceivedRepository, RemoteReceivedRepository};
pub use receiver_auth::{ReceiverAuthRepository, RemoteReceiverAuthRepository};
pub use time_letter::{RemoteTimeLetterRepository, TimeLetterRepository};
pub use upload::{
    FileUploadRepository, ReceiverDocumentUploadRepository, RemoteFileUploadRepository,
    RemoteReceiverDocumentUploadRepository, UploadKind,
};
pub use user::{RemoteUserRepository, UserRepository};
