// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::utils::url_utils;

/// 发现的链接实体
///
/// 表示从网页或播放列表中解析出的一个可导航地址，
/// 携带显示标签和根据扩展名推断的内容类型。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveredLink {
    /// 解析后的绝对URL
    pub url: Url,
    /// 显示标签，来自锚文本或解码后的文件名
    pub label: String,
    /// 内容类型，根据URL扩展名推断（可选）
    pub content_type: Option<String>,
}

impl DiscoveredLink {
    /// 创建一个新的链接实体
    ///
    /// 标签为空时回退到URL最后一段路径的解码形式
    pub fn new(url: Url, label: &str) -> Self {
        let label = if label.trim().is_empty() {
            url_utils::display_name(&url)
        } else {
            label.trim().to_string()
        };
        let content_type = url_utils::guess_content_type(url.path()).map(str::to_string);

        Self {
            url,
            label,
            content_type,
        }
    }

    /// 判断链接是否可继续浏览
    ///
    /// 文本类内容（目录页、播放列表索引页）可以再次扫描，
    /// 媒体文件则是叶子节点
    pub fn is_browsable(&self) -> bool {
        match &self.content_type {
            Some(content_type) => content_type.starts_with("text/"),
            // No recognized extension usually means a directory-style page
            None => true,
        }
    }
}
