// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Result summaries
//!
//! A [`ResultSummary`] is captured once a statement has completed. It is
//! built from the metadata map the server sends with its final message:
//!
//! - `type`: statement type (`r`, `rw`, `w`, `s`)
//! - `stats`: update counters keyed `nodes-created`, `properties-set`, ...
//! - `plan` / `profile`: execution plan trees
//! - `notifications`: warnings and hints
//! - `result_available_after` / `result_consumed_after` (or `t_first` / `t_last`)

use crate::integer::Integer;
use crate::statement::Statement;
use crate::value::Value;
use serde::Serialize;
use std::collections::BTreeMap;

type Metadata = BTreeMap<String, Value>;

/// Kind of statement that was executed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StatementType {
    ReadOnly,
    ReadWrite,
    WriteOnly,
    SchemaWrite,
}

impl StatementType {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "r" => Some(StatementType::ReadOnly),
            "rw" => Some(StatementType::ReadWrite),
            "w" => Some(StatementType::WriteOnly),
            "s" => Some(StatementType::SchemaWrite),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            StatementType::ReadOnly => "r",
            StatementType::ReadWrite => "rw",
            StatementType::WriteOnly => "w",
            StatementType::SchemaWrite => "s",
        }
    }
}

/// Update counters of a statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatementStatistics {
    pub nodes_created: i64,
    pub nodes_deleted: i64,
    pub relationships_created: i64,
    pub relationships_deleted: i64,
    pub properties_set: i64,
    pub labels_added: i64,
    pub labels_removed: i64,
    pub indexes_added: i64,
    pub indexes_removed: i64,
    pub constraints_added: i64,
    pub constraints_removed: i64,
}

impl StatementStatistics {
    /// Read counters from a `stats` map; unknown keys are ignored
    pub fn from_metadata(stats: &Metadata) -> Self {
        let mut counters = Self::default();
        for (key, value) in stats {
            let Some(count) = value.as_integer().map(|i| i.as_i64()) else {
                continue;
            };
            let slot = match key.as_str() {
                "nodes-created" => &mut counters.nodes_created,
                "nodes-deleted" => &mut counters.nodes_deleted,
                "relationships-created" => &mut counters.relationships_created,
                "relationships-deleted" => &mut counters.relationships_deleted,
                "properties-set" => &mut counters.properties_set,
                "labels-added" => &mut counters.labels_added,
                "labels-removed" => &mut counters.labels_removed,
                "indexes-added" => &mut counters.indexes_added,
                "indexes-removed" => &mut counters.indexes_removed,
                "constraints-added" => &mut counters.constraints_added,
                "constraints-removed" => &mut counters.constraints_removed,
                _ => continue,
            };
            *slot = count;
        }
        counters
    }

    /// Whether the statement changed anything
    pub fn contains_updates(&self) -> bool {
        *self != Self::default()
    }
}

/// Node of an execution plan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plan {
    pub operator_type: String,
    pub identifiers: Vec<String>,
    pub arguments: BTreeMap<String, Value>,
    pub children: Vec<Plan>,
}

impl Plan {
    pub fn from_metadata(plan: &Metadata) -> Self {
        Self {
            operator_type: string_entry(plan, "operatorType"),
            identifiers: string_list(plan, "identifiers"),
            arguments: map_entry(plan, "args"),
            children: child_maps(plan).map(Plan::from_metadata).collect(),
        }
    }
}

/// Node of a profiled execution plan, with runtime counters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfiledPlan {
    pub operator_type: String,
    pub identifiers: Vec<String>,
    pub arguments: BTreeMap<String, Value>,
    pub db_hits: i64,
    pub rows: i64,
    pub children: Vec<ProfiledPlan>,
}

impl ProfiledPlan {
    pub fn from_metadata(profile: &Metadata) -> Self {
        Self {
            operator_type: string_entry(profile, "operatorType"),
            identifiers: string_list(profile, "identifiers"),
            arguments: map_entry(profile, "args"),
            db_hits: int_entry(profile, "dbHits").unwrap_or(0),
            rows: int_entry(profile, "rows").unwrap_or(0),
            children: child_maps(profile).map(ProfiledPlan::from_metadata).collect(),
        }
    }
}

/// Location in the statement text a notification refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NotificationPosition {
    pub offset: i64,
    pub line: i64,
    pub column: i64,
}

/// Warning or hint reported by the server
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub code: String,
    pub title: String,
    pub description: String,
    pub severity: String,
    pub position: Option<NotificationPosition>,
}

impl Notification {
    pub fn from_metadata(notification: &Metadata) -> Self {
        let position = notification
            .get("position")
            .and_then(Value::as_map)
            .map(|p| NotificationPosition {
                offset: int_entry(p, "offset").unwrap_or(0),
                line: int_entry(p, "line").unwrap_or(0),
                column: int_entry(p, "column").unwrap_or(0),
            });
        Self {
            code: string_entry(notification, "code"),
            title: string_entry(notification, "title"),
            description: string_entry(notification, "description"),
            severity: string_entry(notification, "severity"),
            position,
        }
    }
}

/// Server that executed the statement
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ServerInfo {
    pub address: Option<String>,
    pub version: Option<String>,
}

/// Immutable snapshot of a completed statement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultSummary {
    pub statement: Statement,
    pub statement_type: Option<StatementType>,
    pub counters: StatementStatistics,
    pub plan: Option<Plan>,
    pub profile: Option<ProfiledPlan>,
    pub notifications: Vec<Notification>,
    pub server: ServerInfo,
    /// Milliseconds until the first record was available
    pub result_available_after: Option<Integer>,
    /// Milliseconds until all records were consumed
    pub result_consumed_after: Option<Integer>,
}

impl ResultSummary {
    /// Build from the metadata the server attaches to a completed statement
    pub fn from_metadata(statement: Statement, metadata: &Metadata, server: ServerInfo) -> Self {
        let counters = metadata
            .get("stats")
            .and_then(Value::as_map)
            .map(StatementStatistics::from_metadata)
            .unwrap_or_default();
        let profile = metadata
            .get("profile")
            .and_then(Value::as_map)
            .map(ProfiledPlan::from_metadata);
        // A profiled statement carries its plan inside the profile
        let plan = metadata
            .get("plan")
            .or_else(|| metadata.get("profile"))
            .and_then(Value::as_map)
            .map(Plan::from_metadata);
        let notifications = metadata
            .get("notifications")
            .and_then(Value::as_list)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_map)
                    .map(Notification::from_metadata)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            statement,
            statement_type: metadata
                .get("type")
                .and_then(Value::as_str)
                .and_then(StatementType::from_code),
            counters,
            plan,
            profile,
            notifications,
            server,
            result_available_after: metadata
                .get("result_available_after")
                .or_else(|| metadata.get("t_first"))
                .and_then(Value::as_integer),
            result_consumed_after: metadata
                .get("result_consumed_after")
                .or_else(|| metadata.get("t_last"))
                .and_then(Value::as_integer),
        }
    }

    pub fn has_plan(&self) -> bool {
        self.plan.is_some()
    }

    pub fn has_profile(&self) -> bool {
        self.profile.is_some()
    }
}

fn string_entry(map: &Metadata, key: &str) -> String {
    map.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn int_entry(map: &Metadata, key: &str) -> Option<i64> {
    map.get(key).and_then(Value::as_integer).map(|i| i.as_i64())
}

fn string_list(map: &Metadata, key: &str) -> Vec<String> {
    map.get(key)
        .and_then(Value::as_list)
        .map(|items| items.iter().filter_map(Value::as_str).map(String::from).collect())
        .unwrap_or_default()
}

fn map_entry(map: &Metadata, key: &str) -> BTreeMap<String, Value> {
    map.get(key).and_then(Value::as_map).cloned().unwrap_or_default()
}

fn child_maps(map: &Metadata) -> impl Iterator<Item = &Metadata> + '_ {
    map.get("children")
        .and_then(Value::as_list)
        .unwrap_or_default()
        .iter()
        .filter_map(Value::as_map)
}
