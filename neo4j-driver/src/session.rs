// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Sessions
//!
//! A session runs one statement at a time: [`Session::run`] and
//! [`Session::begin_transaction`] take `&mut self` and the returned result or
//! transaction borrows the session until it is finished with. Sessions are
//! independent of each other and may be used from different tasks.

use crate::connection::Connection;
use crate::driver::Driver;
use crate::error::{Neo4jError, Result};
use crate::result::QueryResult;
use crate::statement::Statement;
use crate::transaction::Transaction;
use serde::{Deserialize, Serialize};

/// Access mode constant for read sessions
pub const READ: SessionMode = SessionMode::Read;

/// Access mode constant for write sessions
pub const WRITE: SessionMode = SessionMode::Write;

/// Whether a session reads or writes, used to pick a cluster member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SessionMode {
    Read,
    #[default]
    Write,
}

impl std::str::FromStr for SessionMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "READ" => Ok(SessionMode::Read),
            "WRITE" => Ok(SessionMode::Write),
            _ => Err(format!("Unknown session mode: {}. Valid options: READ, WRITE", s)),
        }
    }
}

impl std::fmt::Display for SessionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionMode::Read => write!(f, "READ"),
            SessionMode::Write => write!(f, "WRITE"),
        }
    }
}

/// Logical unit of work against one connection
pub struct Session {
    driver: Driver,
    mode: SessionMode,
    bookmark: Option<String>,
    connection: Option<Box<dyn Connection>>,
    /// Set when an open transaction was dropped; cleared by the next acquire
    rollback_pending: bool,
}

impl Session {
    pub(crate) fn new(driver: Driver, mode: SessionMode, bookmark: Option<String>) -> Self {
        Self {
            driver,
            mode,
            bookmark,
            connection: None,
            rollback_pending: false,
        }
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    /// Bookmark of the last committed transaction, or the initial bookmark
    pub fn last_bookmark(&self) -> Option<&str> {
        self.bookmark.as_deref()
    }

    /// Run an auto-commit statement
    ///
    /// Failures to reach the server are delivered through the result like
    /// any other failure of the run.
    pub async fn run(&mut self, statement: impl Into<Statement>) -> QueryResult<'_> {
        let statement = statement.into();
        log::debug!("Running statement: {}", statement.text);
        let connection = match self.acquire().await {
            Ok(connection) => connection,
            Err(error) => return QueryResult::failed(error),
        };
        match connection.run(statement).await {
            Ok(stream) => QueryResult::new(stream),
            Err(error) => QueryResult::failed(error),
        }
    }

    /// Start an explicit transaction
    ///
    /// The transaction borrows the session until it is committed, rolled
    /// back or dropped.
    pub async fn begin_transaction(&mut self) -> Result<Transaction<'_>> {
        let bookmark = self.bookmark.clone();
        self.acquire().await?.begin(bookmark).await?;
        log::debug!("Transaction started in {} mode", self.mode);
        Ok(Transaction::new(self))
    }

    /// Return the connection to the runtime and end the session
    pub async fn close(mut self) {
        if let Some(mut connection) = self.connection.take() {
            connection.close().await;
        }
        log::debug!("Session closed");
    }

    pub(crate) fn set_bookmark(&mut self, bookmark: String) {
        self.bookmark = Some(bookmark);
    }

    pub(crate) fn mark_rollback_pending(&mut self) {
        self.rollback_pending = true;
    }

    pub(crate) fn connection_mut(&mut self) -> Result<&mut Box<dyn Connection>> {
        self.connection
            .as_mut()
            .ok_or_else(|| Neo4jError::session_expired("Session has no open connection"))
    }

    async fn acquire(&mut self) -> Result<&mut Box<dyn Connection>> {
        if std::mem::take(&mut self.rollback_pending) {
            if let Some(connection) = self.connection.as_mut() {
                if let Err(error) = connection.rollback().await {
                    log::warn!("Rollback of abandoned transaction failed, reconnecting: {}", error);
                    if let Some(mut broken) = self.connection.take() {
                        broken.close().await;
                    }
                }
            }
        }
        if self.connection.is_none() {
            let connection = self.driver.connect(self.mode).await?;
            log::debug!("Session acquired connection to {}", self.driver.url().address);
            self.connection = Some(connection);
        }
        self.connection_mut()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("driver", &self.driver)
            .field("mode", &self.mode)
            .field("bookmark", &self.bookmark)
            .field("connection", &self.connection.is_some())
            .field("rollback_pending", &self.rollback_pending)
            .finish()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if self.connection.is_some() {
            log::debug!("Session dropped without close, connection released by the runtime");
        }
    }
}
