// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::models::link::DiscoveredLink;

/// 目录列表实体
///
/// 一次扫描产出的有序链接集合。顺序与文档顺序一致，
/// 可能为空，但完成后永远不会缺失。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryListing {
    /// 被扫描的源地址
    pub source: Url,
    /// 发现的链接，按文档顺序排列
    pub links: Vec<DiscoveredLink>,
    /// 列表生成时间
    pub retrieved_at: DateTime<Utc>,
}

impl DirectoryListing {
    /// 创建一个新的目录列表
    pub fn new(source: Url, links: Vec<DiscoveredLink>) -> Self {
        Self {
            source,
            links,
            retrieved_at: Utc::now(),
        }
    }

    /// 列表中的链接数量
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// 列表是否为空
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}
