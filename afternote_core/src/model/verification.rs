//! 死亡证明审核请求的领域模型
//!
//! 状态流转完全由服务端负责：`PENDING -> {APPROVED, REJECTED}`，
//! 两个终态之后只有 REJECTED 允许重新提交。客户端只读取状态。

use std::fmt;

/// 人工审核状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationStatus {
    Pending,
    Approved,
    Rejected,
    /// 服务端新增的未知状态，原样保留
    Unknown(String),
}

impl VerificationStatus {
    pub fn from_wire(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Self::Pending,
            "APPROVED" => Self::Approved,
            "REJECTED" => Self::Rejected,
            _ => Self::Unknown(value.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::Unknown(raw) => raw,
        }
    }

    /// APPROVED / REJECTED 为终态
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }

    /// 服务端文档说明：只有被拒绝后才能重新提交
    pub fn allows_resubmission(&self) -> bool {
        matches!(self, Self::Rejected)
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 提交后的完整审核请求（接收者视角）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryVerification {
    pub id: i64,
    pub status: VerificationStatus,
    pub death_certificate_url: String,
    pub family_relation_certificate_url: String,
    pub admin_note: Option<String>,
    pub created_at: String,
}

/// 接收者最近一次提交的审核状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryVerificationStatus {
    pub id: i64,
    pub status: VerificationStatus,
    pub admin_note: Option<String>,
    pub created_at: String,
}

impl From<DeliveryVerification> for DeliveryVerificationStatus {
    fn from(v: DeliveryVerification) -> Self {
        Self {
            id: v.id,
            status: v.status,
            admin_note: v.admin_note,
            created_at: v.created_at,
        }
    }
}

/// 同一条审核请求的管理员视角
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminVerificationRequest {
    pub id: i64,
    pub user_id: i64,
    pub sender_name: String,
    pub sender_email: String,
    pub receiver_id: i64,
    pub receiver_name: String,
    pub status: VerificationStatus,
    pub death_certificate_url: String,
    pub family_relation_certificate_url: String,
    pub admin_note: Option<String>,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_wire() {
        assert_eq!(VerificationStatus::from_wire("PENDING"), VerificationStatus::Pending);
        assert_eq!(VerificationStatus::from_wire("approved"), VerificationStatus::Approved);
        assert_eq!(VerificationStatus::from_wire("REJECTED"), VerificationStatus::Rejected);
        assert_eq!(
            VerificationStatus::from_wire("EXPIRED"),
            VerificationStatus::Unknown("EXPIRED".to_string())
        );
    }

    #[test]
    fn test_terminal_states() {
        assert!(!VerificationStatus::Pending.is_terminal());
        assert!(VerificationStatus::Approved.is_terminal());
        assert!(VerificationStatus::Rejected.is_terminal());
        assert!(VerificationStatus::Rejected.allows_resubmission());
        assert!(!VerificationStatus::Approved.allows_resubmission());
        assert!(!VerificationStatus::Pending.allows_resubmission());
    }
}
