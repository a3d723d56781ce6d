//! 生成器模块
//!
//! 用户生成器产出独立的用户记录；合作方生成器读取用户名单，
//! 为每个 partner 角色的用户合成一条合作方记录。

pub mod catalog;
pub mod partner_generator;
pub mod provider;
pub mod sampling;
pub mod timeline;
pub mod user_generator;

pub use partner_generator::PartnerGenerator;
pub use provider::{FakerProvider, ValueProvider};
pub use sampling::{SeedRng, seeded_rng};
pub use timeline::Timeline;
pub use user_generator::UserGenerator;

use seed_shared::config::SeedConfig;

use crate::models::{Partner, User, UserType};

/// 生成器配置
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// 生成的用户数量
    pub user_count: usize,
    /// 写入每个用户的明文密码
    pub password: String,
    pub bcrypt_cost: u32,
    /// created_at 的回溯窗口（天）
    pub lookback_days: u32,
}

impl Default for GeneratorConfig {
    /// 默认配置：3000 用户，两年回溯窗口
    fn default() -> Self {
        Self::from(&SeedConfig::default())
    }
}

impl From<&SeedConfig> for GeneratorConfig {
    fn from(config: &SeedConfig) -> Self {
        Self {
            user_count: config.users.count,
            password: config.users.password.clone(),
            bcrypt_cost: config.users.bcrypt_cost,
            lookback_days: config.lookback_days,
        }
    }
}

/// 统计数据生成结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationStats {
    pub users_count: usize,
    pub clients: usize,
    pub partners: usize,
    pub admins: usize,
    pub soft_deleted_users: usize,
    pub partner_records: usize,
    pub soft_deleted_partners: usize,
}

impl GenerationStats {
    /// 按角色统计用户
    pub fn from_users(users: &[User]) -> Self {
        let count_role = |role: UserType| users.iter().filter(|u| u.user_type == role).count();

        Self {
            users_count: users.len(),
            clients: count_role(UserType::Client),
            partners: count_role(UserType::Partner),
            admins: count_role(UserType::Admin),
            soft_deleted_users: users.iter().filter(|u| u.lifecycle.is_deleted()).count(),
            ..Default::default()
        }
    }

    /// 追加合作方记录统计
    pub fn with_partners(mut self, partners: &[Partner]) -> Self {
        self.partner_records = partners.len();
        self.soft_deleted_partners = partners.iter().filter(|p| p.lifecycle.is_deleted()).count();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.user_count, 3000);
        assert_eq!(config.lookback_days, 730);
        assert_eq!(config.password, "Password@123");
    }

    #[test]
    fn test_config_from_seed_config() {
        let mut seed_config = SeedConfig::default();
        seed_config.lookback_days = 90;
        seed_config.users.count = 12;
        seed_config.users.bcrypt_cost = 4;

        let config = GeneratorConfig::from(&seed_config);
        assert_eq!(config.lookback_days, 90);
        assert_eq!(config.user_count, 12);
        assert_eq!(config.bcrypt_cost, 4);
    }

    #[test]
    fn test_stats_from_empty() {
        let stats = GenerationStats::from_users(&[]).with_partners(&[]);
        assert_eq!(stats, GenerationStats::default());
    }
}
