// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 包含核心业务实体和数据结构定义
pub mod models;

/// 领域服务模块
///
/// 包含链接发现和播放列表解析等核心业务逻辑
pub mod services;
