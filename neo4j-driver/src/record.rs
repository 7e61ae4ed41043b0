// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Records: one row of a statement result

use crate::error::ValueError;
use crate::value::Value;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::{BTreeMap, HashMap};

/// A row of values keyed by return column
///
/// Keys keep the statement's return-column order. Values are reachable by
/// key or by position.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    keys: Vec<String>,
    fields: Vec<Value>,
    field_lookup: HashMap<String, usize>,
}

impl Record {
    pub fn new(keys: Vec<String>, fields: Vec<Value>) -> Result<Self, ValueError> {
        if keys.len() != fields.len() {
            return Err(ValueError::FieldCountMismatch {
                keys: keys.len(),
                values: fields.len(),
            });
        }
        // Later duplicates never shadow the first column with that name
        let mut field_lookup = HashMap::with_capacity(keys.len());
        for (index, key) in keys.iter().enumerate() {
            field_lookup.entry(key.clone()).or_insert(index);
        }
        Ok(Self {
            keys,
            fields,
            field_lookup,
        })
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn values(&self) -> &[Value] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.index_of(key).map(|index| &self.fields[index])
    }

    pub fn get_by_index(&self, index: usize) -> Option<&Value> {
        self.fields.get(index)
    }

    pub fn has(&self, key: &str) -> bool {
        self.field_lookup.contains_key(key)
    }

    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.field_lookup.get(key).copied()
    }

    /// Key/value pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.keys
            .iter()
            .map(String::as_str)
            .zip(self.fields.iter())
    }

    pub fn to_map(&self) -> BTreeMap<String, Value> {
        self.iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
