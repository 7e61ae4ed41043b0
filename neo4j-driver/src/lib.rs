// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Neo4j driver - typed client surface for Neo4j over Bolt
//!
//! This crate provides the values a query returns (graph entities, temporal
//! and spatial types, lossless 64-bit integers), the driver, session and
//! transaction entry points, and the result delivery contract. The wire
//! runtime plugs in through the [`Connector`] trait.
//!
//! # Quick Start
//!
//! ```no_run
//! use neo4j_driver::{auth, driver, session, Connector};
//! use std::sync::Arc;
//!
//! # async fn example(runtime: Arc<dyn Connector>) -> Result<(), Box<dyn std::error::Error>> {
//! let driver = driver("bolt://localhost", Some(auth::basic("neo4j", "secret", None)), None, runtime)?;
//! let mut session = driver.session(session::READ, None)?;
//!
//! let result = session.run("MATCH (p:Person) RETURN p.name AS name").await.collect().await?;
//! for record in &result.records {
//!     println!("{:?}", record.get("name"));
//! }
//! session.close().await;
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`auth`] - Authentication token factories
//! - [`types`] - Graph, spatial and temporal value types
//! - [`session`] - Sessions and the `READ` / `WRITE` access modes
//! - [`error`] - Error kinds and classification code constants
//! - [`integer`] - Lossless integer and its conversion helpers

pub mod address;
pub mod auth;
pub mod config;
pub mod connection;
pub mod driver;
pub mod error;
pub mod integer;
pub mod record;
pub mod result;
pub mod session;
pub mod statement;
pub mod summary;
pub mod transaction;
pub mod types;
pub mod value;

pub use address::{ConnectionUrl, Scheme, ServerAddress};
pub use auth::AuthToken;
pub use config::{Config, EncryptionLevel, LoadBalancingStrategy, TrustStrategy};
pub use connection::{Connection, ConnectionRequest, Connector};
pub use driver::{driver, Driver};
pub use error::{Classification, ErrorCode, Neo4jError, Result, ValueError};
pub use integer::{in_safe_range, int, Integer, Numeric};
pub use record::Record;
pub use result::{Delivery, Observer, QueryResult, RecordStream, StatementResult, StreamEvent};
pub use session::{Session, SessionMode};
pub use statement::{Parameters, Statement};
pub use summary::{
    Notification, NotificationPosition, Plan, ProfiledPlan, ResultSummary, ServerInfo,
    StatementStatistics, StatementType,
};
pub use transaction::Transaction;
pub use types::{
    is_date, is_date_time_with_zone_id, is_date_time_with_zone_offset, is_duration,
    is_local_date_time, is_local_time, is_point, is_time, Date, DateTimeWithZoneId,
    DateTimeWithZoneOffset, Duration, LocalDateTime, LocalTime, Node, Path, PathSegment, Point,
    Relationship, Time, UnboundRelationship,
};
pub use value::{is_int, Properties, Value, ValueKind};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
