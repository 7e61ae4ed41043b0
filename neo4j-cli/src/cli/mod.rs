// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! CLI module for neo4j-tool
//!
//! Provides offline inspection of the values, URLs, tokens and
//! configuration the driver works with.

pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{Cli, Commands};
pub use handlers::{handle_auth, handle_config, handle_int, handle_url, handle_version, handle_zone};
