// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Scripted stand-in for the wire runtime
//!
//! Runs pop their events from a shared queue in the order they were pushed.
//! Every call the driver makes is recorded so tests can assert on it.

use async_trait::async_trait;
use neo4j_driver::{
    Connection, ConnectionRequest, Connector, Neo4jError, RecordStream, SessionMode, Statement,
    StreamEvent,
};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

#[derive(Default)]
struct RuntimeState {
    connect_failure: Option<Neo4jError>,
    rollback_failure: Option<Neo4jError>,
    runs: VecDeque<Result<Vec<StreamEvent>, Neo4jError>>,
    bookmarks: VecDeque<Option<String>>,
    calls: Vec<String>,
    connects: usize,
    cancels: usize,
    closed: bool,
}

/// Connector whose connections replay scripted responses
#[derive(Default)]
pub struct ScriptedRuntime {
    state: Arc<Mutex<RuntimeState>>,
}

impl ScriptedRuntime {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Make every connect attempt fail with `error`
    pub fn fail_connect(&self, error: Neo4jError) {
        self.state.lock().connect_failure = Some(error);
    }

    /// Make the next rollback fail with `error`
    pub fn fail_next_rollback(&self, error: Neo4jError) {
        self.state.lock().rollback_failure = Some(error);
    }

    /// Queue the events of the next run
    pub fn push_run(&self, events: Vec<StreamEvent>) {
        self.state.lock().runs.push_back(Ok(events));
    }

    /// Queue a run that is rejected before any event is produced
    pub fn push_run_failure(&self, error: Neo4jError) {
        self.state.lock().runs.push_back(Err(error));
    }

    /// Queue the bookmark returned by the next commit
    pub fn push_bookmark(&self, bookmark: Option<&str>) {
        self.state.lock().bookmarks.push_back(bookmark.map(String::from));
    }

    /// Calls seen so far, e.g. `RUN RETURN 1`, `BEGIN bm:1`, `COMMIT`
    pub fn calls(&self) -> Vec<String> {
        self.state.lock().calls.clone()
    }

    pub fn connects(&self) -> usize {
        self.state.lock().connects
    }

    pub fn cancels(&self) -> usize {
        self.state.lock().cancels
    }

    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }
}

#[async_trait]
impl Connector for ScriptedRuntime {
    async fn connect(&self, request: ConnectionRequest<'_>) -> Result<Box<dyn Connection>, Neo4jError> {
        let mut state = self.state.lock();
        if let Some(error) = &state.connect_failure {
            return Err(error.clone());
        }
        state.connects += 1;
        state.calls.push(format!("CONNECT {} {}", request.url.address, request.mode));
        Ok(Box::new(ScriptedConnection {
            state: Arc::clone(&self.state),
            mode: request.mode,
        }))
    }

    async fn close(&self) {
        self.state.lock().closed = true;
    }
}

struct ScriptedConnection {
    state: Arc<Mutex<RuntimeState>>,
    mode: SessionMode,
}

#[async_trait]
impl Connection for ScriptedConnection {
    async fn run<'a>(&'a mut self, statement: Statement) -> Result<Box<dyn RecordStream + 'a>, Neo4jError> {
        let mut state = self.state.lock();
        state.calls.push(format!("RUN {}", statement.text));
        let events = state
            .runs
            .pop_front()
            .unwrap_or_else(|| Err(Neo4jError::protocol(format!("No scripted run for {}", statement.text))))?;
        Ok(Box::new(ScriptedStream {
            state: Arc::clone(&self.state),
            events: events.into(),
        }))
    }

    async fn begin(&mut self, bookmark: Option<String>) -> Result<(), Neo4jError> {
        let call = match bookmark {
            Some(bookmark) => format!("BEGIN {} {}", self.mode, bookmark),
            None => format!("BEGIN {}", self.mode),
        };
        self.state.lock().calls.push(call);
        Ok(())
    }

    async fn commit(&mut self) -> Result<Option<String>, Neo4jError> {
        let mut state = self.state.lock();
        state.calls.push("COMMIT".to_string());
        Ok(state.bookmarks.pop_front().flatten())
    }

    async fn rollback(&mut self) -> Result<(), Neo4jError> {
        let mut state = self.state.lock();
        state.calls.push("ROLLBACK".to_string());
        match state.rollback_failure.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    async fn close(&mut self) {
        self.state.lock().calls.push("CLOSE".to_string());
    }
}

struct ScriptedStream {
    state: Arc<Mutex<RuntimeState>>,
    events: VecDeque<StreamEvent>,
}

#[async_trait]
impl RecordStream for ScriptedStream {
    async fn next_event(&mut self) -> Option<StreamEvent> {
        self.events.pop_front()
    }

    async fn cancel(&mut self) {
        self.state.lock().cancels += 1;
    }
}
