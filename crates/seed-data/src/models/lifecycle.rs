//! 记录生命周期时间戳

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 创建、更新、软删除时间
///
/// 序列化时展开到所属记录的顶层字段。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lifecycle {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Lifecycle {
    /// created_at <= updated_at <= deleted_at（存在时）
    pub fn is_ordered(&self) -> bool {
        self.created_at <= self.updated_at
            && self.deleted_at.is_none_or(|deleted| self.updated_at <= deleted)
    }

    /// 是否已软删除
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_ordered_lifecycle() {
        let created_at = Utc::now() - Duration::days(10);
        let lifecycle = Lifecycle {
            created_at,
            updated_at: created_at + Duration::days(1),
            deleted_at: Some(created_at + Duration::days(2)),
        };
        assert!(lifecycle.is_ordered());
        assert!(lifecycle.is_deleted());
    }

    #[test]
    fn test_equal_timestamps_are_ordered() {
        let now = Utc::now();
        let lifecycle = Lifecycle {
            created_at: now,
            updated_at: now,
            deleted_at: Some(now),
        };
        assert!(lifecycle.is_ordered());
    }

    #[test]
    fn test_deleted_before_updated_is_rejected() {
        let created_at = Utc::now() - Duration::days(10);
        let lifecycle = Lifecycle {
            created_at,
            updated_at: created_at + Duration::days(5),
            deleted_at: Some(created_at + Duration::days(1)),
        };
        assert!(!lifecycle.is_ordered());

        let lifecycle = Lifecycle {
            created_at,
            updated_at: created_at - Duration::days(1),
            deleted_at: None,
        };
        assert!(!lifecycle.is_ordered());
    }
}
