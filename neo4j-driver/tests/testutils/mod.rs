// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Shared helpers for integration tests

#![allow(dead_code)]

pub mod scripted_runtime;

use neo4j_driver::{Record, ResultSummary, ServerInfo, Statement, StreamEvent, Value};
use std::collections::BTreeMap;

/// Record event with the given columns
pub fn record_event(keys: &[&str], values: Vec<Value>) -> StreamEvent {
    let keys = keys.iter().map(|k| k.to_string()).collect();
    StreamEvent::Record(Record::new(keys, values).expect("Failed to build record"))
}

/// Summary event for `text` with the given metadata
pub fn summary_event(text: &str, metadata: BTreeMap<String, Value>) -> StreamEvent {
    StreamEvent::Summary(ResultSummary::from_metadata(
        Statement::new(text),
        &metadata,
        ServerInfo {
            address: Some("localhost:7687".to_string()),
            version: Some("Neo4j/3.4.0".to_string()),
        },
    ))
}

/// Route driver logs to the test output when `RUST_LOG` is set
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
