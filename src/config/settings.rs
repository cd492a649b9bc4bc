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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// 应用程序配置设置
///
/// 包含抓取和URL存储等所有配置项
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 抓取配置
    pub fetch: FetchSettings,
    /// URL存储配置
    pub store: StoreSettings,
}

/// 抓取配置设置
#[derive(Debug, Deserialize)]
pub struct FetchSettings {
    /// HTTP请求的User-Agent
    pub user_agent: String,
    /// 连接超时时间（秒）
    pub connect_timeout: u64,
    /// 读取超时时间（秒）
    pub read_timeout: u64,
}

impl FetchSettings {
    /// 连接超时时间
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout)
    }

    /// 读取超时时间
    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout)
    }
}

/// URL存储配置设置
#[derive(Debug, Deserialize)]
pub struct StoreSettings {
    /// 存储文件路径
    pub path: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Default fetch settings; 6 second timeouts match the upstream
            // servers this client was written against
            .set_default("fetch.user_agent", "StreamBrowse/0.1")?
            .set_default("fetch.connect_timeout", 6)?
            .set_default("fetch.read_timeout", 6)?
            // Default store settings
            .set_default("store.path", "./urls.json")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("STREAMBROWSE").separator("__"));

        builder.build()?.try_deserialize()
    }
}
