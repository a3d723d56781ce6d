//! 用户模型
//!
//! 用户数据集的记录结构。合作方生成只依赖其中的 `id` 与 `user_type`，
//! 因此另有一个宽松的 [`UserRef`] 用于读取输入文件。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::lifecycle::Lifecycle;

/// 用户记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    /// bcrypt 哈希
    pub password: String,
    pub email: String,
    pub email_verified_at: Option<DateTime<Utc>>,
    pub phone: PhoneNumber,
    pub phone_verified_at: Option<DateTime<Utc>>,
    pub profile_pic: String,
    pub address: String,
    pub user_type: UserType,
    /// 仅客户可能持有套餐
    pub plan_id: Option<Uuid>,
    pub last_login_at: Option<DateTime<Utc>>,
    pub notification_preferences: NotificationPreferences,
    #[serde(flatten)]
    pub lifecycle: Lifecycle,
}

/// 用户角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Client,
    Partner,
    Admin,
}

impl UserType {
    /// 角色及其抽样权重，合计为 1
    pub const WEIGHTED: [(UserType, f64); 3] = [
        (UserType::Client, 0.8),
        (UserType::Partner, 0.15),
        (UserType::Admin, 0.05),
    ];

    /// 序列化时使用的名称
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Partner => "partner",
            Self::Admin => "admin",
        }
    }
}

/// 带国家区号的手机号
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber {
    pub country_code: String,
    pub number: String,
}

/// 通知偏好
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPreferences {
    pub email: bool,
    pub sms: bool,
    pub push: bool,
    pub promotional: bool,
}

/// 用户数据集文件的顶层结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserDataset {
    pub users: Vec<User>,
}

/// 用户引用
///
/// 只要求 `id` 和 `user_type`，其余字段忽略。`user_type` 保持原始字符串，
/// 未知角色不会导致解析失败，只是不会被当作合作方。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserRef {
    pub id: String,
    pub user_type: String,
}

impl UserRef {
    pub fn is_partner(&self) -> bool {
        self.user_type == UserType::Partner.as_str()
    }
}

/// 合作方生成读取的输入结构
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserRoster {
    pub users: Vec<UserRef>,
}

impl UserRoster {
    /// 角色为 partner 的用户 ID，保持输入顺序
    pub fn partner_ids(&self) -> Vec<String> {
        self.users
            .iter()
            .filter(|user| user.is_partner())
            .map(|user| user.id.clone())
            .collect()
    }
}

impl From<&UserDataset> for UserRoster {
    fn from(dataset: &UserDataset) -> Self {
        Self {
            users: dataset
                .users
                .iter()
                .map(|user| UserRef {
                    id: user.id.to_string(),
                    user_type: user.user_type.as_str().to_string(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_type_serialization() {
        assert_eq!(
            serde_json::to_string(&UserType::Partner).unwrap(),
            "\"partner\""
        );
        let parsed: UserType = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(parsed, UserType::Admin);

        for (user_type, _) in UserType::WEIGHTED {
            let json = serde_json::to_value(user_type).unwrap();
            assert_eq!(json, user_type.as_str());
        }
    }

    #[test]
    fn test_weights_sum_to_one() {
        let total: f64 = UserType::WEIGHTED.iter().map(|(_, w)| w).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_roster_ignores_extra_fields() {
        let roster: UserRoster = serde_json::from_value(json!({
            "users": [
                {"id": "a", "user_type": "partner", "username": "alice"},
                {"id": "b", "user_type": "client", "email": "b@example.com"},
                {"id": "c", "user_type": "partner"},
                {"id": "d", "user_type": "moderator"}
            ]
        }))
        .unwrap();

        assert_eq!(roster.users.len(), 4);
        assert_eq!(roster.partner_ids(), vec!["a".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_roster_requires_user_type() {
        let result = serde_json::from_value::<UserRoster>(json!({
            "users": [{"id": "a"}]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_lifecycle_is_flattened() {
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            username: "tester".to_string(),
            password: "$2b$04$hash".to_string(),
            email: "tester@example.com".to_string(),
            email_verified_at: None,
            phone: PhoneNumber {
                country_code: "+91".to_string(),
                number: "9876543210".to_string(),
            },
            phone_verified_at: None,
            profile_pic: "https://randomuser.me/api/portraits/men/1.jpg".to_string(),
            address: "1 Main St, Springfield".to_string(),
            user_type: UserType::Client,
            plan_id: None,
            last_login_at: None,
            notification_preferences: NotificationPreferences {
                email: true,
                sms: false,
                push: true,
                promotional: false,
            },
            lifecycle: Lifecycle {
                created_at: now,
                updated_at: now,
                deleted_at: None,
            },
        };

        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("lifecycle").is_none());
        assert!(value.get("created_at").is_some());
        assert!(value["deleted_at"].is_null());
        assert_eq!(value["user_type"], "client");

        let back: User = serde_json::from_value(value).unwrap();
        assert_eq!(back, user);
    }
}
