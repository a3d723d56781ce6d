//! CLI 命令定义
//!
//! 使用 clap derive 宏定义命令行接口结构。
//! 未指定的参数回退到配置文件（见 `seed_shared::config::SeedConfig`）。

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// 种子数据生成工具
#[derive(Parser, Debug)]
#[command(name = "seed-data")]
#[command(version, about = "生成用户与合作方种子数据")]
#[command(propagate_version = true)]
pub struct Cli {
    /// 日志级别 (trace, debug, info, warn, error)，默认取配置
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// 随机数种子，相同种子生成相同数据
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

/// 子命令枚举
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 生成用户数据集
    Users {
        /// 用户数量
        #[arg(short, long)]
        count: Option<usize>,

        /// 输出文件路径
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 读取用户数据集，为每个 partner 用户生成合作方记录
    Partners {
        /// 用户数据集路径
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// 输出文件路径
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 依次生成用户和合作方数据集
    All {
        /// 用户数量
        #[arg(short, long)]
        count: Option<usize>,

        /// 用户数据集输出路径
        #[arg(long)]
        users_output: Option<PathBuf>,

        /// 合作方数据集输出路径
        #[arg(long)]
        partners_output: Option<PathBuf>,
    },

    /// 校验已生成的数据集
    Verify {
        /// 用户数据集路径
        #[arg(long)]
        users: Option<PathBuf>,

        /// 合作方数据集路径
        #[arg(long)]
        partners: Option<PathBuf>,
    },
}
