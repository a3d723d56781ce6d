//! CLI 模块
//!
//! 提供命令行接口，支持以下功能：
//!
//! - `users` - 生成用户数据集
//! - `partners` - 读取用户数据集，生成合作方数据集
//! - `all` - 依次执行以上两步
//! - `verify` - 校验两个数据集的不变式与引用完整性
//!
//! # 使用示例
//!
//! ```bash
//! # 生成 3000 个用户
//! seed-data users -c 3000 -o users_dataset.json
//!
//! # 生成合作方
//! seed-data partners -i users_dataset.json -o partners_dataset.json
//!
//! # 固定种子，一次生成全部数据
//! seed-data --seed 42 all
//!
//! # 校验
//! seed-data verify
//! ```

pub mod commands;
pub mod runner;

pub use commands::{Cli, Commands};
pub use runner::CommandRunner;
