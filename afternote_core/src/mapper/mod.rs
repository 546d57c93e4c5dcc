//! DTO 与领域模型之间的转换

pub mod account;
pub mod admin;
pub mod afternote;
pub mod receiver_auth;
pub mod time_letter;
