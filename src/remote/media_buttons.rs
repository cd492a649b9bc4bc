// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing::debug;

/// 媒体控制命令
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaCommand {
    /// 播放
    Play,
    /// 暂停
    Pause,
    /// 播放/暂停切换
    TogglePlayback,
    /// 下一曲
    Next,
    /// 上一曲
    Previous,
    /// 停止
    Stop,
}

/// 媒体命令接收端特质
///
/// 由播放控制方实现，接收转发来的媒体按键命令
pub trait MediaCommandSink: Send + Sync {
    /// 处理一条媒体命令
    fn handle(&self, command: MediaCommand);
}

/// 媒体会话句柄
///
/// 仅在运行时具备媒体按键能力时存在
#[derive(Debug)]
pub struct MediaSessionHandle {
    /// 会话注册名
    session_name: &'static str,
}

impl MediaSessionHandle {
    /// 会话注册名
    pub fn session_name(&self) -> &'static str {
        self.session_name
    }
}

/// 媒体按键能力绑定
///
/// 能力检测的结果是一个带标签的变体：支持时携带会话句柄，
/// 不支持时命令分发是无操作。检测在编译期通过特性开关完成，
/// 不依赖运行时反射
#[derive(Debug)]
pub enum MediaButtonBinding {
    /// 运行时支持媒体按键，携带会话句柄
    Supported(MediaSessionHandle),
    /// 运行时不支持媒体按键
    Unsupported,
}

impl MediaButtonBinding {
    /// 探测媒体按键能力并建立绑定
    #[cfg(feature = "media-session")]
    pub fn bind() -> Self {
        debug!("Media button support available, registering session");
        Self::Supported(MediaSessionHandle {
            session_name: "streambrowse",
        })
    }

    /// 探测媒体按键能力并建立绑定
    #[cfg(not(feature = "media-session"))]
    pub fn bind() -> Self {
        debug!("Media button support unavailable, commands will be dropped");
        Self::Unsupported
    }

    /// 是否具备媒体按键能力
    pub fn is_supported(&self) -> bool {
        matches!(self, Self::Supported(_))
    }

    /// 分发一条媒体命令
    ///
    /// # 返回值
    ///
    /// 命令被转发时返回true；能力缺失时是无操作并返回false
    pub fn dispatch(&self, command: MediaCommand, sink: &dyn MediaCommandSink) -> bool {
        match self {
            Self::Supported(handle) => {
                debug!("Dispatching {:?} via session {}", command, handle.session_name());
                sink.handle(command);
                true
            }
            Self::Unsupported => false,
        }
    }
}
