// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use anyhow::Result;
use scraper::{Html, Selector};
use url::Url;

use crate::domain::models::link::DiscoveredLink;

/// 链接发现器
///
/// 负责从HTML内容中按文档顺序提取可导航链接
pub struct LinkDiscoverer;

impl LinkDiscoverer {
    /// 从HTML内容中提取链接
    ///
    /// 按文档顺序返回链接列表，保留重复项；列表即页面的镜像。
    /// 片段、mailto和javascript链接被跳过，无法解析的href
    /// 单独丢弃而不使整次提取失败。
    ///
    /// # 参数
    ///
    /// * `html_content` - HTML内容
    /// * `base_url` - 基础URL，用于解析相对链接
    ///
    /// # 返回值
    ///
    /// * `Ok(Vec<DiscoveredLink>)` - 按文档顺序提取到的链接列表
    /// * `Err(anyhow::Error)` - 提取过程中出现的错误
    pub fn extract_links(html_content: &str, base_url: &Url) -> Result<Vec<DiscoveredLink>> {
        let fragment = Html::parse_document(html_content);
        let selector =
            Selector::parse("a[href]").map_err(|e| anyhow::anyhow!("Invalid selector: {:?}", e))?;
        let mut links = Vec::new();

        for element in fragment.select(&selector) {
            let Some(href) = element.value().attr("href") else {
                continue;
            };

            // Ignore fragment identifiers, mailto and javascript links
            if href.starts_with('#') || href.starts_with("mailto:") || href.starts_with("javascript:")
            {
                continue;
            }

            if let Ok(url) = base_url.join(href) {
                // Only keep http/https links
                if url.scheme() == "http" || url.scheme() == "https" {
                    let label = element.text().collect::<String>();
                    links.push(DiscoveredLink::new(url, &label));
                }
            }
        }

        Ok(links)
    }
}
