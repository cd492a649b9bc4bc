// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod link;
pub mod listing;
pub mod playlist;

pub use link::DiscoveredLink;
pub use listing::DirectoryListing;
pub use playlist::PlaylistEntry;
