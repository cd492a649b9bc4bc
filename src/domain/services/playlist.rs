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

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use url::Url;

use crate::domain::models::playlist::PlaylistEntry;

/// PLS文件条目键，形如 File1 / TITLE2
static PLS_FILE_KEY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^file\d*$").unwrap());
static PLS_TITLE_KEY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^title\d*$").unwrap());
static PLS_LENGTH_KEY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^length\d*$").unwrap());

/// 播放列表格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistFormat {
    /// M3U / M3U8 行格式
    M3u,
    /// PLS 键值对格式
    Pls,
    /// ASX XML格式
    Asx,
}

impl PlaylistFormat {
    /// 根据URL扩展名和内容类型检测播放列表格式
    ///
    /// # 参数
    ///
    /// * `url` - 播放列表地址
    /// * `content_type` - HTTP响应的内容类型（可选）
    ///
    /// # 返回值
    ///
    /// 识别出的格式，非播放列表返回None
    pub fn detect(url: &Url, content_type: Option<&str>) -> Option<Self> {
        let extension = url
            .path()
            .rsplit('/')
            .next()
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("m3u") | Some("m3u8") => return Some(Self::M3u),
            Some("pls") => return Some(Self::Pls),
            Some("asx") => return Some(Self::Asx),
            _ => {}
        }

        let mime = content_type?.split(';').next()?.trim().to_ascii_lowercase();
        match mime.as_str() {
            "audio/x-mpegurl" | "audio/mpegurl" | "application/x-mpegurl"
            | "application/vnd.apple.mpegurl" => Some(Self::M3u),
            "audio/x-scpls" => Some(Self::Pls),
            "video/x-ms-asf" | "video/x-ms-asx" => Some(Self::Asx),
            _ => None,
        }
    }
}

/// 播放列表解析器
///
/// 将已抓取的播放列表文本解析为有序的曲目条目
pub struct PlaylistParser;

impl PlaylistParser {
    /// 按指定格式解析播放列表内容
    ///
    /// 相对条目根据播放列表地址解析为绝对URL，
    /// 无法解析的条目被跳过
    pub fn parse(format: PlaylistFormat, content: &str, base_url: &Url) -> Vec<PlaylistEntry> {
        match format {
            PlaylistFormat::M3u => Self::parse_m3u(content, base_url),
            PlaylistFormat::Pls => Self::parse_pls(content, base_url),
            PlaylistFormat::Asx => Self::parse_asx(content, base_url),
        }
    }

    /// 解析M3U/M3U8格式
    ///
    /// 每个非空、非注释行是一个曲目地址，按出现顺序编号
    fn parse_m3u(content: &str, base_url: &Url) -> Vec<PlaylistEntry> {
        let mut entries = Vec::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Ok(url) = base_url.join(line) {
                entries.push(PlaylistEntry {
                    url,
                    title: None,
                    length: None,
                    track: entries.len() as u32 + 1,
                });
            }
        }

        entries
    }

    /// 解析PLS格式
    ///
    /// `FileN`键开启新条目，`TitleN`和`LengthN`键补充标题和时长；
    /// 下一个`File`键或文件结束时保存进行中的条目
    fn parse_pls(content: &str, base_url: &Url) -> Vec<PlaylistEntry> {
        let mut entries = Vec::new();
        let mut current_file: Option<String> = None;
        let mut current_title: Option<String> = None;
        let mut current_length: Option<i64> = None;

        let mut flush = |file: &mut Option<String>,
                         title: &mut Option<String>,
                         length: &mut Option<i64>,
                         entries: &mut Vec<PlaylistEntry>| {
            if let Some(value) = file.take() {
                if let Ok(url) = base_url.join(&value) {
                    entries.push(PlaylistEntry {
                        url,
                        title: title.take(),
                        length: length.take(),
                        track: entries.len() as u32 + 1,
                    });
                }
            }
            *title = None;
            *length = None;
        };

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim();

            if PLS_FILE_KEY.is_match(key) {
                flush(
                    &mut current_file,
                    &mut current_title,
                    &mut current_length,
                    &mut entries,
                );
                current_file = Some(value.to_string());
            } else if PLS_TITLE_KEY.is_match(key) {
                current_title = Some(value.to_string());
            } else if PLS_LENGTH_KEY.is_match(key) {
                current_length = value.parse().ok();
            }
            // NumberOfEntries, Version and the [playlist] header are ignored
        }

        flush(
            &mut current_file,
            &mut current_title,
            &mut current_length,
            &mut entries,
        );
        entries
    }

    /// 解析ASX格式
    ///
    /// 标签大小写不敏感；每个`<entry>`取第一个`<ref href>`，
    /// `<title>`作为标题。使用宽容的HTML5解析器处理
    /// 野生ASX文件中常见的不规范XML
    fn parse_asx(content: &str, base_url: &Url) -> Vec<PlaylistEntry> {
        let document = Html::parse_document(content);

        // These selectors are valid; parse only fails on malformed input
        let Ok(entry_selector) = Selector::parse("entry") else {
            return Vec::new();
        };
        let Ok(ref_selector) = Selector::parse("ref[href]") else {
            return Vec::new();
        };
        let Ok(title_selector) = Selector::parse("title") else {
            return Vec::new();
        };

        let mut entries = Vec::new();

        for entry in document.select(&entry_selector) {
            let Some(href) = entry
                .select(&ref_selector)
                .next()
                .and_then(|r| r.value().attr("href"))
            else {
                continue;
            };

            let Ok(url) = base_url.join(href) else {
                continue;
            };

            let title = entry
                .select(&title_selector)
                .next()
                .map(|t| t.text().collect::<String>().trim().to_string())
                .filter(|t| !t.is_empty());

            entries.push(PlaylistEntry {
                url,
                title,
                length: None,
                track: entries.len() as u32 + 1,
            });
        }

        entries
    }
}
