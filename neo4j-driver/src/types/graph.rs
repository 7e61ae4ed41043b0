// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Graph entities returned by queries
//!
//! Nodes, relationships and paths are built by the result decoder from
//! fully-formed field values. Cross references (relationship endpoints,
//! path contiguity) are not validated here.

use crate::integer::Integer;
use crate::value::{Properties, Value};
use serde::Serialize;
use std::fmt;

/// A node with its labels and properties
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    /// Server-assigned identity, unique within one result
    pub identity: Integer,
    /// Labels, without duplicates
    pub labels: Vec<String>,
    pub properties: Properties,
}

impl Node {
    /// Create a node; repeated labels keep their first occurrence only
    pub fn new<L, S>(identity: impl Into<Integer>, labels: L, properties: Properties) -> Self
    where
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for label in labels {
            let label = label.into();
            if !unique.contains(&label) {
                unique.push(label);
            }
        }
        Self {
            identity: identity.into(),
            labels: unique,
            properties,
        }
    }

    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.identity)?;
        for label in &self.labels {
            write!(f, ":{}", label)?;
        }
        write_properties(f, &self.properties)?;
        write!(f, ")")
    }
}

/// A relationship between two nodes of the same result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Relationship {
    pub identity: Integer,
    /// Identity of the start node
    pub start: Integer,
    /// Identity of the end node
    pub end: Integer,
    #[serde(rename = "type")]
    pub rel_type: String,
    pub properties: Properties,
}

impl Relationship {
    pub fn new(
        identity: impl Into<Integer>,
        start: impl Into<Integer>,
        end: impl Into<Integer>,
        rel_type: impl Into<String>,
        properties: Properties,
    ) -> Self {
        Self {
            identity: identity.into(),
            start: start.into(),
            end: end.into(),
            rel_type: rel_type.into(),
            properties,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})-[:{}", self.start, self.rel_type)?;
        write_properties(f, &self.properties)?;
        write!(f, "]->({})", self.end)
    }
}

/// A relationship as it appears inside a path, without endpoint identities
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnboundRelationship {
    pub identity: Integer,
    #[serde(rename = "type")]
    pub rel_type: String,
    pub properties: Properties,
}

impl UnboundRelationship {
    pub fn new(identity: impl Into<Integer>, rel_type: impl Into<String>, properties: Properties) -> Self {
        Self {
            identity: identity.into(),
            rel_type: rel_type.into(),
            properties,
        }
    }

    /// Attach endpoint identities, producing a full relationship
    pub fn bind(&self, start: impl Into<Integer>, end: impl Into<Integer>) -> Relationship {
        Relationship {
            identity: self.identity,
            start: start.into(),
            end: end.into(),
            rel_type: self.rel_type.clone(),
            properties: self.properties.clone(),
        }
    }
}

impl fmt::Display for UnboundRelationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-[:{}", self.rel_type)?;
        write_properties(f, &self.properties)?;
        write!(f, "]->")
    }
}

/// One hop of a path, traversed start to end as returned by the server
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathSegment {
    pub start: Node,
    pub relationship: UnboundRelationship,
    pub end: Node,
}

impl PathSegment {
    pub fn new(start: Node, relationship: UnboundRelationship, end: Node) -> Self {
        Self {
            start,
            relationship,
            end,
        }
    }

    /// The segment's relationship bound in traversal direction
    pub fn bound_relationship(&self) -> Relationship {
        self.relationship.bind(self.start.identity, self.end.identity)
    }
}

/// An ordered walk through the graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path {
    pub start: Node,
    pub end: Node,
    pub segments: Vec<PathSegment>,
}

impl Path {
    pub fn new(start: Node, end: Node, segments: Vec<PathSegment>) -> Self {
        Self {
            start,
            end,
            segments,
        }
    }

    /// Number of relationships in the path
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Nodes in traversal order, each shared endpoint visited once
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        std::iter::once(&self.start).chain(self.segments.iter().map(|segment| &segment.end))
    }

    pub fn relationships(&self) -> impl Iterator<Item = &UnboundRelationship> + '_ {
        self.segments.iter().map(|segment| &segment.relationship)
    }

    /// Whether every segment starts where the previous one ended and the
    /// path endpoints agree with the first and last segment
    pub fn is_contiguous(&self) -> bool {
        match (self.segments.first(), self.segments.last()) {
            (Some(first), Some(last)) => {
                first.start.identity == self.start.identity
                    && last.end.identity == self.end.identity
                    && self
                        .segments
                        .windows(2)
                        .all(|pair| pair[0].end.identity == pair[1].start.identity)
            }
            _ => self.start.identity == self.end.identity,
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start)?;
        for segment in &self.segments {
            write!(f, "{}{}", segment.relationship, segment.end)?;
        }
        Ok(())
    }
}

fn write_properties(f: &mut fmt::Formatter<'_>, properties: &Properties) -> fmt::Result {
    if properties.is_empty() {
        return Ok(());
    }
    write!(f, " {{")?;
    for (i, (key, value)) in properties.iter().enumerate() {
        if i > 0 {
            write!(f, ",")?;
        }
        write!(f, "{}:{}", key, value)?;
    }
    write!(f, "}}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params;

    fn node(id: i64, label: &str) -> Node {
        Node::new(id, [label], Properties::new())
    }

    #[test]
    fn test_node_labels_deduplicated() {
        let n = Node::new(1, ["Person", "Actor", "Person"], Properties::new());
        assert_eq!(n.labels, vec!["Person".to_string(), "Actor".to_string()]);
        assert!(n.has_label("Actor"));
        assert!(!n.has_label("Movie"));
    }

    #[test]
    fn test_display_renderings() {
        let n = Node::new(1, ["Person"], params! { "name" => "Alice", "age" => 30 });
        assert_eq!(n.to_string(), "(1:Person {age:30,name:\"Alice\"})");

        let r = Relationship::new(7, 1, 2, "KNOWS", Properties::new());
        assert_eq!(r.to_string(), "(1)-[:KNOWS]->(2)");
    }

    #[test]
    fn test_bind_unbound_relationship() {
        let unbound = UnboundRelationship::new(9, "LIKES", params! { "since" => 2001 });
        let bound = unbound.bind(3, 4);
        assert_eq!(bound.identity, Integer::from(9));
        assert_eq!(bound.start, Integer::from(3));
        assert_eq!(bound.end, Integer::from(4));
        assert_eq!(bound.rel_type, "LIKES");
        assert_eq!(bound.get("since"), Some(&Value::from(2001)));
    }

    #[test]
    fn test_contiguity_check() {
        let (a, b, c) = (node(1, "A"), node(2, "B"), node(3, "C"));
        let rel = UnboundRelationship::new(10, "NEXT", Properties::new());
        let good = Path::new(
            a.clone(),
            c.clone(),
            vec![
                PathSegment::new(a.clone(), rel.clone(), b.clone()),
                PathSegment::new(b.clone(), rel.clone(), c.clone()),
            ],
        );
        assert!(good.is_contiguous());

        let broken = Path::new(
            a.clone(),
            c.clone(),
            vec![
                PathSegment::new(a.clone(), rel.clone(), b),
                PathSegment::new(a.clone(), rel, c),
            ],
        );
        assert!(!broken.is_contiguous());

        let single = Path::new(a.clone(), a, vec![]);
        assert!(single.is_contiguous());
        assert!(single.is_empty());
    }
}
