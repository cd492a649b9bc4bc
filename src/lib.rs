// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含核心业务实体和链接发现、播放列表解析等领域服务
pub mod domain;

/// 引擎模块
///
/// 实现网页内容抓取引擎
pub mod engines;

/// 远程控制模块
///
/// 提供媒体按键能力绑定，按编译期能力检测分发
pub mod remote;

/// 存储模块
///
/// 提供持久化的有序URL记录集合
pub mod store;

/// 任务模块
///
/// 实现后台目录扫描任务及其消息投递协议
pub mod tasks;

/// 工具模块
///
/// 提供URL解析、内容类型推断和遥测等辅助功能
pub mod utils;
