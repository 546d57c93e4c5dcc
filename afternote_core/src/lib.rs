//! Afternote 客户端核心库
//!
//! 远程 REST API 之上的一层薄客户端，包括：
//! - 统一响应信封与错误类型
//! - 接口数据结构及到领域模型的映射
//! - 各功能域仓库（接收者认证、证明上传、管理员审核、账户、用户、afternote、time letter、接收者登记）
//! - 接收者会话与用例（认证码校验、证明材料提交、审核状态查询）

pub mod client;
pub mod config;
pub mod dto;
pub mod envelope;
pub mod error;
pub mod mapper;
pub mod model;
pub mod repository;
pub mod session;
pub mod token;
pub mod usecase;

pub use client::{ApiClient, Auth};
pub use config::ClientConfig;
pub use envelope::ApiResponse;
pub use error::{Error, Result};
pub use model::*;
pub use session::ReceiverSession;
pub use token::{TokenStore, Tokens};
