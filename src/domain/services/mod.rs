// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 该模块包含系统的核心业务逻辑服务：
/// - 链接发现（link_discovery）：从HTML内容中按文档顺序提取可导航链接
/// - 播放列表解析（playlist）：解析M3U/PLS/ASX格式的播放列表
pub mod link_discovery;
#[cfg(test)]
mod link_discovery_test;
pub mod playlist;
