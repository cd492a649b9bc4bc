// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use url::{ParseError, Url};

/// 扩展名到内容类型的映射表
///
/// 覆盖流媒体客户端关心的音频、视频、播放列表和文本类型
static CONTENT_TYPES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("aac", "audio/aac"),
        ("flac", "audio/flac"),
        ("m4a", "audio/mp4"),
        ("mp3", "audio/mpeg"),
        ("oga", "audio/ogg"),
        ("ogg", "audio/ogg"),
        ("opus", "audio/opus"),
        ("wav", "audio/x-wav"),
        ("wma", "audio/x-ms-wma"),
        ("3gp", "video/3gpp"),
        ("avi", "video/x-msvideo"),
        ("flv", "video/x-flv"),
        ("mkv", "video/x-matroska"),
        ("mov", "video/quicktime"),
        ("mp4", "video/mp4"),
        ("mpg", "video/mpeg"),
        ("ogv", "video/ogg"),
        ("webm", "video/webm"),
        ("wmv", "video/x-ms-wmv"),
        ("asx", "video/x-ms-asf"),
        ("m3u", "audio/x-mpegurl"),
        ("m3u8", "audio/x-mpegurl"),
        ("pls", "audio/x-scpls"),
        ("htm", "text/html"),
        ("html", "text/html"),
        ("txt", "text/plain"),
    ])
});

/// 将可能为相对路径的URL转换为绝对路径URL
pub fn resolve_url(base_url: &Url, path: &str) -> Result<Url, ParseError> {
    base_url.join(path)
}

/// 根据URL路径的扩展名推断内容类型
///
/// # 参数
///
/// * `path` - URL路径部分
///
/// # 返回值
///
/// 已知扩展名返回对应的内容类型，否则返回None
pub fn guess_content_type(path: &str) -> Option<&'static str> {
    let name = path.rsplit('/').next()?;
    let extension = name.rsplit_once('.')?.1.to_ascii_lowercase();
    CONTENT_TYPES.get(extension.as_str()).copied()
}

/// 生成URL的显示名称
///
/// 取最后一个非空路径段并进行百分号解码；
/// 没有路径段时回退到完整URL
pub fn display_name(url: &Url) -> String {
    let segment = url
        .path_segments()
        .and_then(|mut segments| segments.rfind(|s| !s.is_empty()));

    match segment {
        Some(name) => urlencoding::decode(name)
            .map(|decoded| decoded.into_owned())
            .unwrap_or_else(|_| name.to_string()),
        None => url.to_string(),
    }
}
