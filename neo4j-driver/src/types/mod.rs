// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Entity and value types returned by queries
//!
//! This module provides:
//! - Graph entities (nodes, relationships, paths)
//! - Spatial points
//! - Temporal values generic over their numeric representation
//! - Records and result summaries

pub mod graph;
pub mod spatial;
pub mod temporal;

pub use graph::{Node, Path, PathSegment, Relationship, UnboundRelationship};
pub use spatial::{is_point, Point};
pub use temporal::{
    is_date, is_date_time_with_zone_id, is_date_time_with_zone_offset, is_duration,
    is_local_date_time, is_local_time, is_time, Date, DateTimeWithZoneId, DateTimeWithZoneOffset,
    Duration, LocalDateTime, LocalTime, Time,
};

pub use crate::record::Record;
pub use crate::result::{QueryResult, StatementResult};
pub use crate::summary::ResultSummary;
