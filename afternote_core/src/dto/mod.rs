//! 服务端请求/响应结构

pub mod admin;
pub mod afternote;
pub mod auth;
pub mod file;
pub mod received;
pub mod receiver_auth;
pub mod time_letter;
pub mod user;
