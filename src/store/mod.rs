// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod url_store;
#[cfg(test)]
mod url_store_test;
