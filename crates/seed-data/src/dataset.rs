//! 数据集文件读写
//!
//! 输出文件一次性整体写入：先写同目录的临时文件，再原子重命名，
//! 中断的运行不会留下半截文件。输入文件缺失或格式错误直接返回致命错误。

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use seed_shared::error::{Result, SeedError};

use crate::models::{PartnerDataset, UserDataset, UserRoster};

/// 读取并解析 JSON 数据集
pub fn read_dataset<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| SeedError::io(path, e))?;
    serde_json::from_str(&content).map_err(|source| SeedError::MalformedInput {
        path: path.to_path_buf(),
        source,
    })
}

/// 以 2 空格缩进的 JSON 整体写出数据集
pub fn write_dataset<T: Serialize>(path: &Path, dataset: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(dataset)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| SeedError::io(parent, e))?;
    }

    let tmp = temp_path(path);
    let written = fs::write(&tmp, json.as_bytes())
        .map_err(|e| SeedError::io(&tmp, e))
        .and_then(|()| fs::rename(&tmp, path).map_err(|e| SeedError::io(path, e)));
    if let Err(e) = written {
        // 写入或重命名失败都不保留临时文件
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }

    debug!(path = %path.display(), bytes = json.len(), "数据集已写入");
    Ok(())
}

/// 读取合作方生成所需的用户名单
pub fn load_user_roster(path: &Path) -> Result<UserRoster> {
    let roster: UserRoster = read_dataset(path)?;
    info!(
        path = %path.display(),
        users = roster.users.len(),
        "已加载用户名单"
    );
    Ok(roster)
}

pub fn load_users(path: &Path) -> Result<UserDataset> {
    read_dataset(path)
}

pub fn load_partners(path: &Path) -> Result<PartnerDataset> {
    read_dataset(path)
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
