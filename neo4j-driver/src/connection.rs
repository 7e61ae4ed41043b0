// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Seam to the wire runtime
//!
//! The protocol handshake, pooling and routing live behind these traits.
//! A [`Connector`] is shared by every session of a driver and hands out one
//! [`Connection`] per session.

use crate::address::ConnectionUrl;
use crate::auth::AuthToken;
use crate::config::Config;
use crate::error::Result;
use crate::result::RecordStream;
use crate::session::SessionMode;
use crate::statement::Statement;
use async_trait::async_trait;

/// Everything a connector needs to open a connection
#[derive(Debug, Clone, Copy)]
pub struct ConnectionRequest<'a> {
    pub url: &'a ConnectionUrl,
    pub auth: Option<&'a AuthToken>,
    pub config: &'a Config,
    pub mode: SessionMode,
}

/// Factory for connections, implemented by the runtime
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(&self, request: ConnectionRequest<'_>) -> Result<Box<dyn Connection>>;

    /// Release pooled resources. Called once when the driver closes.
    async fn close(&self) {}
}

/// One logical connection owned by a session
#[async_trait]
pub trait Connection: Send {
    /// Send a statement and return the stream of its events. The stream
    /// borrows the connection until it has been consumed.
    async fn run<'a>(&'a mut self, statement: Statement) -> Result<Box<dyn RecordStream + 'a>>;

    /// Open an explicit transaction, waiting for `bookmark` when given
    async fn begin(&mut self, bookmark: Option<String>) -> Result<()>;

    /// Commit the open transaction, returning the new bookmark if any
    async fn commit(&mut self) -> Result<Option<String>>;

    async fn rollback(&mut self) -> Result<()>;

    /// Give the connection back to the runtime
    async fn close(&mut self) {}
}
