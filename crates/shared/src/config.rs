//! 配置管理模块
//!
//! 支持 TOML 配置文件加载、环境变量覆盖，以及类型安全的配置访问。
//! 概率和词表是编译期常量，这里只放运行期可调的数量、路径、种子和哈希成本。

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::{Result, SeedError};

/// bcrypt 允许的最小成本
pub const MIN_BCRYPT_COST: u32 = 4;
/// bcrypt 允许的最大成本
pub const MAX_BCRYPT_COST: u32 = 31;
/// created_at 回溯窗口上限（天）
pub const MAX_LOOKBACK_DAYS: u32 = 36_500;

/// 用户数据集配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    /// 生成的用户数量
    pub count: usize,
    /// 用户数据集输出路径
    pub output: PathBuf,
    /// 所有用户共用的明文密码
    pub password: String,
    /// bcrypt 成本因子
    pub bcrypt_cost: u32,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            count: 3000,
            output: PathBuf::from("users_dataset.json"),
            password: "Password@123".to_string(),
            bcrypt_cost: 10,
        }
    }
}

/// 合作方数据集配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PartnerSettings {
    /// 读取的用户数据集路径
    pub input: PathBuf,
    /// 合作方数据集输出路径
    pub output: PathBuf,
}

impl Default for PartnerSettings {
    fn default() -> Self {
        Self {
            input: PathBuf::from("users_dataset.json"),
            output: PathBuf::from("partners_dataset.json"),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_level: String,
    /// 是否输出 JSON 格式日志
    pub json_logs: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// 随机数种子，为空时使用系统熵
    pub seed: Option<u64>,
    /// created_at 的回溯窗口（天）
    pub lookback_days: u32,
    pub users: UserSettings,
    pub partners: PartnerSettings,
    pub logging: LoggingConfig,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            seed: None,
            lookback_days: 730,
            users: UserSettings::default(),
            partners: PartnerSettings::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl SeedConfig {
    /// 从配置文件和环境变量加载配置
    ///
    /// 配置目录取自 `CONFIG_DIR` 环境变量，默认为 `config`。
    pub fn load(service_name: &str) -> Result<Self> {
        let config_dir = std::env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string());
        Self::load_from(Path::new(&config_dir), service_name)
    }

    /// 从指定目录加载配置
    ///
    /// 加载顺序（后加载的会覆盖先加载的同名配置项）：
    /// 1. 内置默认值
    /// 2. {config_dir}/default.toml
    /// 3. {config_dir}/{service_name}.toml
    /// 4. 环境变量（SEED_ 前缀，层级用 `__` 分隔，如 SEED_USERS__COUNT -> users.count）
    pub fn load_from(config_dir: &Path, service_name: &str) -> Result<Self> {
        let builder = Config::builder()
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            .add_source(
                File::from(config_dir.join(format!("{}.toml", service_name))).required(false),
            )
            .add_source(
                Environment::with_prefix("SEED")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// 校验配置取值范围
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_LOOKBACK_DAYS).contains(&self.lookback_days) {
            return Err(SeedError::invalid_argument(
                "lookback_days",
                format!(
                    "必须在 1..={} 天之间，实际为 {}",
                    MAX_LOOKBACK_DAYS, self.lookback_days
                ),
            ));
        }

        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.users.bcrypt_cost) {
            return Err(SeedError::invalid_argument(
                "users.bcrypt_cost",
                format!(
                    "必须在 {}..={} 之间，实际为 {}",
                    MIN_BCRYPT_COST, MAX_BCRYPT_COST, self.users.bcrypt_cost
                ),
            ));
        }

        Ok(())
    }
}
