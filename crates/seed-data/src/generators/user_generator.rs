//! 用户生成器
//!
//! 每条用户记录独立生成：角色按 80/15/5 加权抽取，可选字段由各自独立的门控决定。

use rand::Rng;
use seed_shared::error::{Result, SeedError};
use tracing::debug;

use super::GeneratorConfig;
use super::provider::{FakerProvider, ValueProvider};
use super::sampling::{SeedRng, Weighted, digits, gate, uuid_v4};
use super::timeline::Timeline;
use crate::models::{NotificationPreferences, PhoneNumber, User, UserType};

const EMAIL_VERIFIED_PROBABILITY: f64 = 0.7;
const PHONE_VERIFIED_PROBABILITY: f64 = 0.6;
const LAST_LOGIN_PROBABILITY: f64 = 0.8;
/// 客户持有套餐的概率
const PLAN_PROBABILITY: f64 = 0.5;
const DELETION_PROBABILITY: f64 = 0.1;

const PHONE_COUNTRY_CODE: &str = "+91";
const PHONE_DIGITS: usize = 10;

/// 用户生成器
pub struct UserGenerator<P: ValueProvider = FakerProvider> {
    provider: P,
    timeline: Timeline,
    roles: Weighted<UserType>,
    password: String,
    bcrypt_cost: u32,
}

impl UserGenerator<FakerProvider> {
    pub fn new(config: &GeneratorConfig, timeline: Timeline) -> Result<Self> {
        Self::with_provider(FakerProvider, config, timeline)
    }
}

impl<P: ValueProvider> UserGenerator<P> {
    /// 使用自定义假数据提供者
    pub fn with_provider(provider: P, config: &GeneratorConfig, timeline: Timeline) -> Result<Self> {
        let roles = Weighted::new(&UserType::WEIGHTED)
            .map_err(|e| SeedError::invalid_argument("user_type", e.to_string()))?;

        Ok(Self {
            provider,
            timeline,
            roles,
            password: config.password.clone(),
            bcrypt_cost: config.bcrypt_cost,
        })
    }

    /// 生成指定数量的用户
    ///
    /// 任何一条失败都会中止整批，不返回部分结果。
    pub fn generate_users(&self, rng: &mut SeedRng, count: usize) -> Result<Vec<User>> {
        let users = (0..count)
            .map(|_| self.generate_user(rng))
            .collect::<Result<Vec<_>>>()?;

        debug!(count = users.len(), "用户生成完成");
        Ok(users)
    }

    /// 生成单个用户
    pub fn generate_user(&self, rng: &mut SeedRng) -> Result<User> {
        let user_type = self.draw_user_type(rng);
        let lifecycle = self.timeline.lifecycle(rng, DELETION_PROBABILITY);
        let created_at = lifecycle.created_at;

        let email_verified_at =
            gate(rng, EMAIL_VERIFIED_PROBABILITY).then(|| self.timeline.since(rng, created_at));
        let phone_verified_at =
            gate(rng, PHONE_VERIFIED_PROBABILITY).then(|| self.timeline.since(rng, created_at));
        let last_login_at =
            gate(rng, LAST_LOGIN_PROBABILITY).then(|| self.timeline.since(rng, created_at));

        // 套餐门控只对客户生效
        let plan_id = (user_type == UserType::Client && gate(rng, PLAN_PROBABILITY))
            .then(|| uuid_v4(rng));

        Ok(User {
            id: uuid_v4(rng),
            username: self.provider.username(rng),
            password: self.hash_password(rng)?,
            email: self.provider.email(rng),
            email_verified_at,
            phone: PhoneNumber {
                country_code: PHONE_COUNTRY_CODE.to_string(),
                number: digits(rng, PHONE_DIGITS),
            },
            phone_verified_at,
            profile_pic: profile_pic(rng),
            address: self.provider.address(rng),
            user_type,
            plan_id,
            last_login_at,
            notification_preferences: notification_preferences(rng),
            lifecycle,
        })
    }

    /// 按权重抽取用户角色
    pub fn draw_user_type(&self, rng: &mut SeedRng) -> UserType {
        self.roles.sample(rng)
    }

    /// bcrypt 哈希，盐取自同一随机数源
    fn hash_password(&self, rng: &mut SeedRng) -> Result<String> {
        let salt: [u8; 16] = rng.random();
        bcrypt::hash_with_salt(&self.password, self.bcrypt_cost, salt)
            .map(|parts| parts.format_for_version(bcrypt::Version::TwoB))
            .map_err(|e| SeedError::PasswordHash(e.to_string()))
    }
}

fn profile_pic(rng: &mut SeedRng) -> String {
    let gender = if rng.random_bool(0.5) { "men" } else { "women" };
    format!(
        "https://randomuser.me/api/portraits/{}/{}.jpg",
        gender,
        rng.random_range(1..=99)
    )
}

fn notification_preferences(rng: &mut SeedRng) -> NotificationPreferences {
    NotificationPreferences {
        email: rng.random(),
        sms: rng.random(),
        push: rng.random(),
        promotional: rng.random(),
    }
}
