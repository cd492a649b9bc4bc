// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::debug;

/// 当前存储文件格式版本
const STORE_VERSION: u32 = 1;

/// 存储错误类型
#[derive(Error, Debug)]
pub enum StoreError {
    /// IO错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// 序列化错误
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// 不支持的文件版本
    #[error("Unsupported store version: {0}")]
    UnsupportedVersion(u32),
}

/// URL记录
///
/// 以地址为键的一条记录，携带昵称和添加时间
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlRecord {
    /// 地址，记录的唯一键
    pub address: String,
    /// 显示昵称（可选）
    pub nickname: Option<String>,
    /// 添加时间
    pub added_at: DateTime<Utc>,
}

/// 存储文件格式
///
/// 带版本号的JSON文档，记录按插入顺序保存
#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    version: u32,
    records: Vec<UrlRecord>,
}

/// 持久化URL存储
///
/// 维护一个按插入顺序排列、以地址为键的记录集合，
/// 持久化为带版本号的JSON文件
pub struct UrlStore {
    /// 存储文件路径
    path: PathBuf,
    /// 内存中的记录，按首次插入顺序
    records: Vec<UrlRecord>,
}

impl UrlStore {
    /// 创建一个空的存储实例
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: Vec::new(),
        }
    }

    /// 从磁盘加载存储
    ///
    /// 文件不存在时返回空存储；版本号不被支持时返回错误
    /// 而不是错误地解读数据
    ///
    /// # 参数
    ///
    /// * `path` - 存储文件路径
    ///
    /// # 返回值
    ///
    /// * `Ok(UrlStore)` - 加载成功的存储
    /// * `Err(StoreError)` - 加载失败
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        if !Path::new(&path).exists() {
            debug!("Store file {:?} not found, starting empty", path);
            return Ok(Self::new(path));
        }

        let raw = fs::read(&path).await?;
        let file: StoreFile = serde_json::from_slice(&raw)?;

        if file.version != STORE_VERSION {
            return Err(StoreError::UnsupportedVersion(file.version));
        }

        Ok(Self {
            path,
            records: file.records,
        })
    }

    /// 将存储写回磁盘
    pub async fn save(&self) -> Result<(), StoreError> {
        let file = StoreFile {
            version: STORE_VERSION,
            records: self.records.clone(),
        };

        let data = serde_json::to_vec_pretty(&file)?;
        fs::write(&self.path, data).await?;
        debug!("Saved {} records to {:?}", self.records.len(), self.path);
        Ok(())
    }

    /// 插入或更新一条记录
    ///
    /// 地址已存在时更新昵称并保持原有位置，
    /// 否则追加到末尾
    pub fn upsert(&mut self, address: &str, nickname: Option<&str>) {
        if let Some(existing) = self.records.iter_mut().find(|r| r.address == address) {
            existing.nickname = nickname.map(str::to_string);
            return;
        }

        self.records.push(UrlRecord {
            address: address.to_string(),
            nickname: nickname.map(str::to_string),
            added_at: Utc::now(),
        });
    }

    /// 删除一条记录
    ///
    /// # 返回值
    ///
    /// 记录存在并被删除时返回true
    pub fn remove(&mut self, address: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.address != address);
        self.records.len() != before
    }

    /// 按插入顺序返回所有记录
    pub fn records(&self) -> &[UrlRecord] {
        &self.records
    }
}
