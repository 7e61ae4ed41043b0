// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Value type system for record fields, parameters and properties
//!
//! [`Value`] is the tagged union over every scalar, collection, graph,
//! spatial and temporal type the server exchanges. Generic decoding code
//! dispatches on [`Value::kind`] instead of inspecting structure.

use crate::integer::Integer;
use crate::types::graph::{Node, Path, Relationship, UnboundRelationship};
use crate::types::spatial::Point;
use crate::types::temporal::{
    Date, DateTimeWithZoneId, DateTimeWithZoneOffset, Duration, LocalDateTime, LocalTime, Time,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Property maps of nodes and relationships
pub type Properties = BTreeMap<String, Value>;

/// Field value of a record or statement parameter
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(Integer),
    Float(f64),
    String(String),
    Bytes(Vec<u8>),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
    Node(Node),
    Relationship(Relationship),
    UnboundRelationship(UnboundRelationship),
    Path(Path),
    Point(Point),
    Duration(Duration),
    LocalTime(LocalTime),
    Time(Time),
    Date(Date),
    LocalDateTime(LocalDateTime),
    DateTimeWithZoneOffset(DateTimeWithZoneOffset),
    DateTimeWithZoneId(DateTimeWithZoneId),
}

/// Discriminant of a [`Value`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ValueKind {
    Null,
    Boolean,
    Integer,
    Float,
    String,
    Bytes,
    List,
    Map,
    Node,
    Relationship,
    UnboundRelationship,
    Path,
    Point,
    Duration,
    LocalTime,
    Time,
    Date,
    LocalDateTime,
    DateTimeWithZoneOffset,
    DateTimeWithZoneId,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Integer(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Float,
            Value::String(_) => ValueKind::String,
            Value::Bytes(_) => ValueKind::Bytes,
            Value::List(_) => ValueKind::List,
            Value::Map(_) => ValueKind::Map,
            Value::Node(_) => ValueKind::Node,
            Value::Relationship(_) => ValueKind::Relationship,
            Value::UnboundRelationship(_) => ValueKind::UnboundRelationship,
            Value::Path(_) => ValueKind::Path,
            Value::Point(_) => ValueKind::Point,
            Value::Duration(_) => ValueKind::Duration,
            Value::LocalTime(_) => ValueKind::LocalTime,
            Value::Time(_) => ValueKind::Time,
            Value::Date(_) => ValueKind::Date,
            Value::LocalDateTime(_) => ValueKind::LocalDateTime,
            Value::DateTimeWithZoneOffset(_) => ValueKind::DateTimeWithZoneOffset,
            Value::DateTimeWithZoneId(_) => ValueKind::DateTimeWithZoneId,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<Integer> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric value as a double; integers outside the safe range yield `None`
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Integer(i) => i.to_number().ok(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Value::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_relationship(&self) -> Option<&Relationship> {
        match self {
            Value::Relationship(rel) => Some(rel),
            _ => None,
        }
    }

    pub fn as_path(&self) -> Option<&Path> {
        match self {
            Value::Path(path) => Some(path),
            _ => None,
        }
    }
}

/// Whether the value is an [`Integer`]
pub fn is_int(value: &Value) -> bool {
    matches!(value, Value::Integer(_))
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{:?}", x),
            Value::String(s) => write!(f, "{:?}", s),
            Value::Bytes(bytes) => {
                write!(f, "#")?;
                for byte in bytes {
                    write!(f, "{:02x}", byte)?;
                }
                Ok(())
            }
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}:{}", key, value)?;
                }
                write!(f, "}}")
            }
            Value::Node(node) => write!(f, "{}", node),
            Value::Relationship(rel) => write!(f, "{}", rel),
            Value::UnboundRelationship(rel) => write!(f, "{}", rel),
            Value::Path(path) => write!(f, "{}", path),
            Value::Point(point) => write!(f, "{}", point),
            Value::Duration(d) => write!(f, "{}", d),
            Value::LocalTime(t) => write!(f, "{}", t),
            Value::Time(t) => write!(f, "{}", t),
            Value::Date(d) => write!(f, "{}", d),
            Value::LocalDateTime(dt) => write!(f, "{}", dt),
            Value::DateTimeWithZoneOffset(dt) => write!(f, "{}", dt),
            Value::DateTimeWithZoneId(dt) => write!(f, "{}", dt),
        }
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::Integer(Integer::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_from_variant {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::$variant(value)
                }
            }
        )*
    };
}

impl_from_variant!(
    bool => Boolean,
    Integer => Integer,
    f64 => Float,
    String => String,
    Vec<u8> => Bytes,
    BTreeMap<String, Value> => Map,
    Node => Node,
    Relationship => Relationship,
    UnboundRelationship => UnboundRelationship,
    Path => Path,
    Point => Point,
    Duration => Duration,
    LocalTime => LocalTime,
    Time => Time,
    Date => Date,
    LocalDateTime => LocalDateTime,
    DateTimeWithZoneOffset => DateTimeWithZoneOffset,
    DateTimeWithZoneId => DateTimeWithZoneId,
);

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::List(values)
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::List(iter.into_iter().map(Into::into).collect())
    }
}

/// Build a parameter or property map
///
/// ```ignore
/// let params = params! { "name" => "Alice", "age" => 42 };
/// ```
#[macro_export]
macro_rules! params {
    () => {
        $crate::Parameters::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::Parameters::new();
        $(
            map.insert(String::from($key), $crate::Value::from($value));
        )+
        map
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::spatial::CARTESIAN_2D_SRID;

    #[test]
    fn test_kind_dispatch() {
        assert_eq!(Value::Null.kind(), ValueKind::Null);
        assert_eq!(Value::from(3).kind(), ValueKind::Integer);
        assert_eq!(Value::from(3.5).kind(), ValueKind::Float);
        assert_eq!(Value::from("x").kind(), ValueKind::String);
        assert_eq!(
            Value::from(Point::new_2d(CARTESIAN_2D_SRID, 1.0, 2.0)).kind(),
            ValueKind::Point
        );
    }

    #[test]
    fn test_is_int() {
        assert!(is_int(&Value::from(Integer::MAX_VALUE)));
        assert!(!is_int(&Value::Float(1.0)));
        assert!(!is_int(&Value::Null));
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some("a")), Value::String("a".to_string()));
        let list: Value = vec![1, 2, 3].into_iter().collect();
        assert_eq!(list.as_list().map(|l| l.len()), Some(3));
        assert_eq!(Value::from(Integer::MAX_VALUE).as_f64(), None);
        assert_eq!(Value::from(7).as_f64(), Some(7.0));
    }

    #[test]
    fn test_display() {
        let map = params! { "b" => vec![Value::from(1), Value::Null], "a" => "x" };
        assert_eq!(Value::Map(map).to_string(), "{a:\"x\",b:[1,null]}");
        assert_eq!(Value::Bytes(vec![0x0a, 0xff]).to_string(), "#0aff");
        assert_eq!(Value::Float(2.0).to_string(), "2.0");
    }
}
