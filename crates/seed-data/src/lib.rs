//! Seed Data
//!
//! 生成用户与合作方种子数据的 crate，用于开发和测试环境。
//!
//! # 主要模块
//!
//! - `models`: 用户、合作方记录结构
//! - `generators`: 用户生成器、合作方生成器及其抽样原语
//! - `dataset`: 数据集文件读写
//! - `audit`: 数据集不变式校验
//!
//! # 使用示例
//!
//! ```rust
//! use seed_data::generators::{GeneratorConfig, PartnerGenerator, Timeline, UserGenerator, seeded_rng};
//! use seed_data::models::{UserDataset, UserRoster};
//!
//! let config = GeneratorConfig {
//!     user_count: 20,
//!     bcrypt_cost: 4,
//!     ..Default::default()
//! };
//! let timeline = Timeline::starting_now(config.lookback_days);
//! let mut rng = seeded_rng(Some(42));
//!
//! let users = UserGenerator::new(&config, timeline)?.generate_users(&mut rng, config.user_count)?;
//! let dataset = UserDataset { users };
//!
//! let roster = UserRoster::from(&dataset);
//! let partners = PartnerGenerator::new(timeline).generate_for_roster(&mut rng, &roster);
//! assert_eq!(partners.len(), roster.partner_ids().len());
//! # Ok::<(), seed_shared::error::SeedError>(())
//! ```

pub mod audit;
pub mod cli;
pub mod dataset;
pub mod generators;
pub mod models;
