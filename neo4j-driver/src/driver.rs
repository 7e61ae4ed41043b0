// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Driver entry point
//!
//! A [`Driver`] holds the parsed URL, credentials and configuration and
//! shares them with every [`Session`] it creates. It is cheap to clone;
//! clones refer to the same driver.

use crate::address::ConnectionUrl;
use crate::auth::AuthToken;
use crate::config::Config;
use crate::connection::{Connection, ConnectionRequest, Connector};
use crate::error::{Neo4jError, Result, ValueError};
use crate::session::{Session, SessionMode};
use parking_lot::Mutex;
use std::sync::Arc;

/// Create a driver for `url`
///
/// The URL is validated here; no connection is made until a session runs
/// its first statement.
pub fn driver(
    url: &str,
    auth: Option<AuthToken>,
    config: Option<Config>,
    connector: Arc<dyn Connector>,
) -> std::result::Result<Driver, ValueError> {
    let url = ConnectionUrl::parse(url)?;
    log::debug!(
        "Creating driver for {} (routing: {})",
        url,
        url.scheme.is_routing()
    );
    Ok(Driver {
        inner: Arc::new(DriverInner {
            url,
            auth,
            config: config.unwrap_or_default(),
            connector,
            state: Mutex::new(DriverState::default()),
        }),
    })
}

/// Handle to a database, shared across tasks
#[derive(Clone)]
pub struct Driver {
    inner: Arc<DriverInner>,
}

struct DriverInner {
    url: ConnectionUrl,
    auth: Option<AuthToken>,
    config: Config,
    connector: Arc<dyn Connector>,
    state: Mutex<DriverState>,
}

#[derive(Default)]
struct DriverState {
    closed: bool,
    sessions_created: u64,
}

impl Driver {
    pub fn url(&self) -> &ConnectionUrl {
        &self.inner.url
    }

    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    pub fn is_closed(&self) -> bool {
        self.inner.state.lock().closed
    }

    /// Number of sessions created so far
    pub fn sessions_created(&self) -> u64 {
        self.inner.state.lock().sessions_created
    }

    /// Create a session in `mode`, optionally waiting for `bookmark`
    pub fn session(&self, mode: SessionMode, bookmark: Option<String>) -> Result<Session> {
        let mut state = self.inner.state.lock();
        if state.closed {
            return Err(Neo4jError::service_unavailable(format!(
                "Driver for {} has been closed",
                self.inner.url
            )));
        }
        state.sessions_created += 1;
        log::debug!(
            "Session #{} created in {} mode",
            state.sessions_created,
            mode
        );
        Ok(Session::new(self.clone(), mode, bookmark))
    }

    /// Close the driver. Sessions created afterwards fail with
    /// `ServiceUnavailable`; existing sessions fail on their next connect.
    pub async fn close(&self) {
        {
            let mut state = self.inner.state.lock();
            if state.closed {
                return;
            }
            state.closed = true;
        }
        log::debug!("Closing driver for {}", self.inner.url);
        self.inner.connector.close().await;
    }

    pub(crate) async fn connect(&self, mode: SessionMode) -> Result<Box<dyn Connection>> {
        if self.is_closed() {
            return Err(Neo4jError::service_unavailable(format!(
                "Driver for {} has been closed",
                self.inner.url
            )));
        }
        let request = ConnectionRequest {
            url: &self.inner.url,
            auth: self.inner.auth.as_ref(),
            config: &self.inner.config,
            mode,
        };
        self.inner.connector.connect(request).await
    }
}

impl std::fmt::Debug for Driver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Driver")
            .field("url", &self.inner.url)
            .field("auth", &self.inner.auth)
            .field("closed", &self.is_closed())
            .finish()
    }
}
