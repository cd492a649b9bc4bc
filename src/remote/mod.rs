// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod media_buttons;

pub use media_buttons::{MediaButtonBinding, MediaCommand, MediaCommandSink};
