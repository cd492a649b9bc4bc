// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use url::Url;

/// 播放列表条目实体
///
/// 表示播放列表文件中的一个曲目，按出现顺序编号。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistEntry {
    /// 曲目地址
    pub url: Url,
    /// 曲目标题（可选，PLS/ASX格式提供）
    pub title: Option<String>,
    /// 曲目时长（秒），PLS格式提供，-1表示无限流
    pub length: Option<i64>,
    /// 曲目序号，从1开始
    pub track: u32,
}
