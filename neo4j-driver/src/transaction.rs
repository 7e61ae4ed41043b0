// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Explicit transactions

use crate::error::Result;
use crate::result::QueryResult;
use crate::session::Session;
use crate::statement::Statement;

/// Multi-statement unit of work, committed or rolled back as a whole
///
/// Holds the session exclusively. Dropping a transaction that is still open
/// rolls it back before the session runs anything else.
pub struct Transaction<'s> {
    session: &'s mut Session,
    open: bool,
}

impl<'s> Transaction<'s> {
    pub(crate) fn new(session: &'s mut Session) -> Self {
        Self { session, open: true }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Run a statement inside the transaction
    pub async fn run(&mut self, statement: impl Into<Statement>) -> QueryResult<'_> {
        let statement = statement.into();
        log::debug!("Running statement in transaction: {}", statement.text);
        let connection = match self.session.connection_mut() {
            Ok(connection) => connection,
            Err(error) => return QueryResult::failed(error),
        };
        match connection.run(statement).await {
            Ok(stream) => QueryResult::new(stream),
            Err(error) => QueryResult::failed(error),
        }
    }

    /// Commit and return the bookmark of the committed transaction
    ///
    /// The bookmark also becomes the session's last bookmark.
    pub async fn commit(mut self) -> Result<Option<String>> {
        self.open = false;
        let bookmark = self.session.connection_mut()?.commit().await?;
        match &bookmark {
            Some(bookmark) => {
                log::debug!("Transaction committed, bookmark {}", bookmark);
                self.session.set_bookmark(bookmark.clone());
            }
            None => log::debug!("Transaction committed"),
        }
        Ok(bookmark)
    }

    pub async fn rollback(mut self) -> Result<()> {
        self.open = false;
        self.session.connection_mut()?.rollback().await?;
        log::debug!("Transaction rolled back");
        Ok(())
    }
}

impl Drop for Transaction<'_> {
    fn drop(&mut self) {
        if self.open {
            log::warn!("Transaction dropped while open, rolling back before the next statement");
            self.session.mark_rollback_pending();
        }
    }
}
