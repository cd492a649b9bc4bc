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

use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use url::Url;
use uuid::Uuid;

use crate::domain::models::link::DiscoveredLink;
use crate::domain::models::listing::DirectoryListing;
use crate::domain::services::link_discovery::LinkDiscoverer;
use crate::domain::services::playlist::{PlaylistFormat, PlaylistParser};
use crate::engines::traits::{EngineError, FetchEngine, FetchRequest};

/// 扫描错误类型
#[derive(Error, Debug)]
pub enum ScanError {
    /// 抓取失败
    #[error("Fetch failed: {0}")]
    Fetch(#[from] EngineError),
    /// 地址无效
    #[error("Invalid address: {0}")]
    InvalidAddress(String),
    /// 内容解析失败
    #[error("Parse failed: {0}")]
    Parse(String),
}

/// 扫描结果
///
/// 成功时携带有序的目录列表，失败时携带具体原因。
/// 传输错误和解析错误不再折叠成空列表
pub type ScanOutcome = Result<DirectoryListing, ScanError>;

/// 扫描投递消息
///
/// 后台扫描完成后投递到调用方消息队列的带标签消息。
/// 枚举变体即固定的投递意图标识，调用方据此与其他
/// 异步投递区分
#[derive(Debug)]
pub enum ScanMessage {
    /// 目录内容就绪
    DirectoryContents {
        /// 本次扫描任务的标识
        task_id: Uuid,
        /// 扫描结果
        outcome: ScanOutcome,
    },
}

impl ScanMessage {
    /// 以旧式空列表视角读取消息
    ///
    /// 为依赖"失败即空列表"约定的消费方保留的兼容视图，
    /// 失败原因被丢弃
    pub fn links_or_empty(&self) -> &[DiscoveredLink] {
        match self {
            ScanMessage::DirectoryContents {
                outcome: Ok(listing),
                ..
            } => &listing.links,
            ScanMessage::DirectoryContents { outcome: Err(_), .. } => &[],
        }
    }
}

/// 目录扫描任务
///
/// 抓取给定地址的内容并提取可导航链接，完成后向
/// 调用方的消息队列投递恰好一条结果消息。任务是
/// 一次性的：每次提交产生一个后台工作单元，不重试，
/// 不支持取消，完成后不可复用。
pub struct DirectoryScanTask {
    /// 任务标识
    task_id: Uuid,
    /// 扫描目标地址
    target: Url,
    /// 抓取引擎
    engine: Arc<dyn FetchEngine>,
    /// 结果投递通道，归调用方事件循环所有
    reply_to: UnboundedSender<ScanMessage>,
    /// 单次抓取的读取超时
    timeout: Duration,
}

impl DirectoryScanTask {
    /// 创建新的目录扫描任务
    ///
    /// # 参数
    ///
    /// * `target` - 扫描目标地址
    /// * `engine` - 抓取引擎
    /// * `reply_to` - 结果投递通道
    pub fn new(
        target: Url,
        engine: Arc<dyn FetchEngine>,
        reply_to: UnboundedSender<ScanMessage>,
    ) -> Self {
        Self {
            task_id: Uuid::new_v4(),
            target,
            engine,
            reply_to,
            timeout: Duration::from_secs(6),
        }
    }

    /// 从地址字符串创建目录扫描任务
    ///
    /// 地址必须非空且可解析为http/https URL
    ///
    /// # 返回值
    ///
    /// * `Ok(DirectoryScanTask)` - 创建成功的任务
    /// * `Err(ScanError::InvalidAddress)` - 地址为空或无法解析
    pub fn for_address(
        address: &str,
        engine: Arc<dyn FetchEngine>,
        reply_to: UnboundedSender<ScanMessage>,
    ) -> Result<Self, ScanError> {
        if address.trim().is_empty() {
            return Err(ScanError::InvalidAddress("empty address".to_string()));
        }

        let target = Url::parse(address)
            .map_err(|e| ScanError::InvalidAddress(format!("{}: {}", address, e)))?;

        if target.scheme() != "http" && target.scheme() != "https" {
            return Err(ScanError::InvalidAddress(format!(
                "unsupported scheme: {}",
                target.scheme()
            )));
        }

        Ok(Self::new(target, engine, reply_to))
    }

    /// 设置抓取超时
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// 任务标识
    pub fn task_id(&self) -> Uuid {
        self.task_id
    }

    /// 提交任务
    ///
    /// 在后台执行上下文调度抓取和解析工作并立即返回。
    /// 无论成功与否，每次提交恰好投递一条消息
    pub fn submit(self) -> JoinHandle<()> {
        info!("Scanning directory {}", self.target);

        tokio::spawn(async move {
            let outcome = Self::scan(&self.target, self.engine.as_ref(), self.timeout).await;

            match &outcome {
                Ok(listing) => {
                    debug!("Scan of {} found {} links", self.target, listing.len())
                }
                Err(e) => debug!("Scan of {} failed: {}", self.target, e),
            }

            let message = ScanMessage::DirectoryContents {
                task_id: self.task_id,
                outcome,
            };

            // The receiving side may have shut down; nothing left to notify
            if self.reply_to.send(message).is_err() {
                warn!("Scan result for {} had no receiver", self.target);
            }
        })
    }

    /// 执行抓取和解析
    async fn scan(
        target: &Url,
        engine: &dyn FetchEngine,
        timeout: Duration,
    ) -> ScanOutcome {
        let mut request = FetchRequest::new(target.as_str());
        request.timeout = timeout;

        let response = engine.fetch(&request).await?;

        // An error page is not a directory; its anchors must not be delivered
        if !(200..300).contains(&response.status_code) {
            return Err(ScanError::Fetch(EngineError::HttpStatus(
                response.status_code,
            )));
        }

        let links = match PlaylistFormat::detect(target, Some(&response.content_type)) {
            Some(format) => PlaylistParser::parse(format, &response.content, target)
                .into_iter()
                .map(|entry| {
                    let title = entry.title.unwrap_or_default();
                    DiscoveredLink::new(entry.url, &title)
                })
                .collect(),
            None => LinkDiscoverer::extract_links(&response.content, target)
                .map_err(|e| ScanError::Parse(e.to_string()))?,
        };

        Ok(DirectoryListing::new(target.clone(), links))
    }
}
