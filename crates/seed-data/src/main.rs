//! Seed Data CLI
//!
//! 种子数据生成工具的命令行入口点。

use anyhow::Context;
use clap::Parser;
use seed_data::cli::{Cli, CommandRunner, Commands};
use seed_shared::config::SeedConfig;
use seed_shared::observability::init_logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = SeedConfig::load("seed-data").context("加载配置失败")?;
    if let Some(level) = cli.log_level.clone() {
        config.logging.log_level = level;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    init_logging(&config.logging)?;

    let runner = CommandRunner::new(config);

    match cli.command {
        Commands::Users { count, output } => {
            runner.run_users(count, output)?;
        }
        Commands::Partners { input, output } => {
            runner.run_partners(input, output)?;
        }
        Commands::All {
            count,
            users_output,
            partners_output,
        } => {
            runner.run_all(count, users_output, partners_output)?;
        }
        Commands::Verify { users, partners } => {
            runner.run_verify(users, partners)?;
        }
    }

    Ok(())
}
