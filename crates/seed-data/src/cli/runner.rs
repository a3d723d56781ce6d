//! 命令执行器
//!
//! 负责执行各 CLI 子命令的具体逻辑。
//! 命令行参数优先于配置文件；一次运行只创建一个随机数源和一个时间线。

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{error, info, warn};

use seed_shared::config::SeedConfig;

use crate::audit::{AuditReport, audit};
use crate::dataset::{load_partners, load_user_roster, load_users, write_dataset};
use crate::generators::{
    GenerationStats, GeneratorConfig, PartnerGenerator, SeedRng, Timeline, UserGenerator,
    seeded_rng,
};
use crate::models::{PartnerDataset, UserDataset};

/// 命令执行器
///
/// 作为 CLI 与生成逻辑之间的桥梁，简化 main 函数的复杂度。
pub struct CommandRunner {
    config: SeedConfig,
    timeline: Timeline,
}

impl CommandRunner {
    /// 以当前时间为时间线终点创建执行器
    pub fn new(config: SeedConfig) -> Self {
        let timeline = Timeline::starting_now(config.lookback_days);
        Self::with_timeline(config, timeline)
    }

    /// 使用指定时间线，便于复现
    pub fn with_timeline(config: SeedConfig, timeline: Timeline) -> Self {
        Self { config, timeline }
    }

    /// 执行 users 命令
    pub fn run_users(
        &self,
        count: Option<usize>,
        output: Option<PathBuf>,
    ) -> Result<GenerationStats> {
        let count = count.unwrap_or(self.config.users.count);
        let output = output.unwrap_or_else(|| self.config.users.output.clone());

        let mut rng = self.rng();
        let stats = self.generate_users(&mut rng, count, &output)?;

        println!("Generated {} user records in {}", stats.users_count, output.display());
        Ok(stats)
    }

    /// 执行 partners 命令
    pub fn run_partners(&self, input: Option<PathBuf>, output: Option<PathBuf>) -> Result<usize> {
        let input = input.unwrap_or_else(|| self.config.partners.input.clone());
        let output = output.unwrap_or_else(|| self.config.partners.output.clone());

        let mut rng = self.rng();
        let count = self.generate_partners(&mut rng, &input, &output)?;

        println!("Generated {} partner records in {}", count, output.display());
        Ok(count)
    }

    /// 执行 all 命令
    ///
    /// 合作方阶段从磁盘读取刚写出的用户数据集，与单独运行两个命令的行为一致。
    pub fn run_all(
        &self,
        count: Option<usize>,
        users_output: Option<PathBuf>,
        partners_output: Option<PathBuf>,
    ) -> Result<GenerationStats> {
        let count = count.unwrap_or(self.config.users.count);
        let users_output = users_output.unwrap_or_else(|| self.config.users.output.clone());
        let partners_output =
            partners_output.unwrap_or_else(|| self.config.partners.output.clone());

        let mut rng = self.rng();
        let mut stats = self.generate_users(&mut rng, count, &users_output)?;
        stats.partner_records = self.generate_partners(&mut rng, &users_output, &partners_output)?;

        println!("\n数据生成完成:");
        println!("{}", "-".repeat(30));
        println!("用户数量: {}", stats.users_count);
        println!("  client: {}", stats.clients);
        println!("  partner: {}", stats.partners);
        println!("  admin: {}", stats.admins);
        println!("  软删除: {}", stats.soft_deleted_users);
        println!("合作方数量: {}", stats.partner_records);
        println!("用户数据集: {}", users_output.display());
        println!("合作方数据集: {}", partners_output.display());
        println!("{}", "-".repeat(30));

        Ok(stats)
    }

    /// 执行 verify 命令
    ///
    /// 存在违规时返回错误，进程以非零状态退出。
    pub fn run_verify(
        &self,
        users: Option<PathBuf>,
        partners: Option<PathBuf>,
    ) -> Result<AuditReport> {
        let users_path = users.unwrap_or_else(|| self.config.users.output.clone());
        let partners_path = partners.unwrap_or_else(|| self.config.partners.output.clone());

        let users = load_users(&users_path)
            .with_context(|| format!("读取用户数据集失败: {}", users_path.display()))?;
        let partners = load_partners(&partners_path)
            .with_context(|| format!("读取合作方数据集失败: {}", partners_path.display()))?;

        let report = audit(&users.users, &partners.partners);

        println!("\n校验结果:");
        println!("{}", "-".repeat(30));
        println!("用户记录: {}", report.users_checked);
        println!("合作方记录: {}", report.partners_checked);
        println!("违规数量: {}", report.violations.len());
        println!("{}", "-".repeat(30));

        if !report.is_clean() {
            warn!(violations = report.violations.len(), "数据集校验未通过");
            for violation in &report.violations {
                error!("{}", violation);
            }
            bail!("数据集存在 {} 处违规", report.violations.len());
        }

        info!(
            users = report.users_checked,
            partners = report.partners_checked,
            "数据集校验通过"
        );
        Ok(report)
    }

    // ========================================================================
    // 辅助方法
    // ========================================================================

    fn rng(&self) -> SeedRng {
        if let Some(seed) = self.config.seed {
            info!(seed, "使用固定随机数种子");
        }
        seeded_rng(self.config.seed)
    }

    fn generate_users(
        &self,
        rng: &mut SeedRng,
        count: usize,
        output: &Path,
    ) -> Result<GenerationStats> {
        info!(count, output = %output.display(), "生成用户数据");

        let generator_config = GeneratorConfig {
            user_count: count,
            ..GeneratorConfig::from(&self.config)
        };
        let generator = UserGenerator::new(&generator_config, self.timeline)
            .context("创建用户生成器失败")?;
        let users = generator
            .generate_users(rng, generator_config.user_count)
            .context("生成用户失败")?;

        let stats = GenerationStats::from_users(&users);
        write_dataset(output, &UserDataset { users })
            .with_context(|| format!("写入用户数据集失败: {}", output.display()))?;

        info!(
            users = stats.users_count,
            clients = stats.clients,
            partners = stats.partners,
            admins = stats.admins,
            "用户数据集已写入"
        );
        Ok(stats)
    }

    fn generate_partners(&self, rng: &mut SeedRng, input: &Path, output: &Path) -> Result<usize> {
        info!(input = %input.display(), output = %output.display(), "生成合作方数据");

        let roster = load_user_roster(input)
            .with_context(|| format!("读取用户数据集失败: {}", input.display()))?;

        let partners = PartnerGenerator::new(self.timeline).generate_for_roster(rng, &roster);
        let stats = GenerationStats::default().with_partners(&partners);

        write_dataset(output, &PartnerDataset { partners })
            .with_context(|| format!("写入合作方数据集失败: {}", output.display()))?;

        info!(
            partners = stats.partner_records,
            soft_deleted = stats.soft_deleted_partners,
            "合作方数据集已写入"
        );
        Ok(stats.partner_records)
    }
}

// ============================================================================
// 单元测试
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn test_runner(dir: &Path) -> CommandRunner {
        let mut config = SeedConfig::default();
        config.seed = Some(42);
        config.users.count = 60;
        config.users.bcrypt_cost = 4;
        config.users.output = dir.join("users_dataset.json");
        config.partners.input = dir.join("users_dataset.json");
        config.partners.output = dir.join("partners_dataset.json");
        CommandRunner::new(config)
    }

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("seed-runner-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_run_users_uses_config_defaults() {
        let dir = temp_dir();
        let runner = test_runner(&dir);

        let stats = runner.run_users(None, None).unwrap();
        assert_eq!(stats.users_count, 60);
        assert_eq!(stats.clients + stats.partners + stats.admins, 60);
        assert!(dir.join("users_dataset.json").exists());

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_run_users_cli_overrides() {
        let dir = temp_dir();
        let runner = test_runner(&dir);
        let output = dir.join("custom.json");

        let stats = runner.run_users(Some(5), Some(output.clone())).unwrap();
        assert_eq!(stats.users_count, 5);
        assert_eq!(load_users(&output).unwrap().users.len(), 5);

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_run_partners_without_input_fails() {
        let dir = temp_dir();
        let runner = test_runner(&dir);

        let result = runner.run_partners(None, None);
        assert!(result.is_err());
        // 失败时不产生输出
        assert!(!dir.join("partners_dataset.json").exists());

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_run_all_then_verify() {
        let dir = temp_dir();
        let runner = test_runner(&dir);

        let stats = runner.run_all(None, None, None).unwrap();
        assert_eq!(stats.partner_records, stats.partners);

        let report = runner.run_verify(None, None).unwrap();
        assert!(report.is_clean());
        assert_eq!(report.users_checked, 60);

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_verify_fails_on_tampered_partners() {
        let dir = temp_dir();
        let runner = test_runner(&dir);
        runner.run_all(None, None, None).unwrap();

        let partners_path = dir.join("partners_dataset.json");
        let mut dataset = load_partners(&partners_path).unwrap();
        dataset.partners.push(crate::models::Partner {
            user_id: "not-a-user".to_string(),
            ..dataset.partners[0].clone()
        });
        write_dataset(&partners_path, &dataset).unwrap();

        assert!(runner.run_verify(None, None).is_err());

        fs::remove_dir_all(dir).unwrap();
    }
}
