// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Connection URL parsing
//!
//! Accepted forms:
//!
//! ```text
//! bolt://host[:port]
//! bolt+routing://host[:port][?key=value&...]
//! neo4j://host[:port][?key=value&...]
//! ```
//!
//! The query string is the routing context and is only allowed for the
//! routing schemes. IPv6 hosts are written in brackets.

use crate::error::ValueError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

pub const DEFAULT_PORT: u16 = 7687;

static URL_PATTERN: Lazy<Result<Regex, regex::Error>> = Lazy::new(|| {
    Regex::new(
        r"^(?P<scheme>[A-Za-z][A-Za-z0-9+.\-]*)://(?P<host>\[[^\]]*\]|[^:/?#\[\]]*)(?::(?P<port>[^/?#]*))?/?(?:\?(?P<query>[^#]*))?$",
    )
});

/// URL scheme, selecting direct or routed connections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Scheme {
    /// Direct connection to a single server
    Bolt,
    /// Routed connections to a cluster
    BoltRouting,
    /// Routed connections to a cluster
    Neo4j,
}

impl Scheme {
    pub fn is_routing(&self) -> bool {
        !matches!(self, Scheme::Bolt)
    }
}

impl std::str::FromStr for Scheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bolt" => Ok(Scheme::Bolt),
            "bolt+routing" => Ok(Scheme::BoltRouting),
            "neo4j" => Ok(Scheme::Neo4j),
            _ => Err(format!(
                "Unknown scheme: {}. Valid options: bolt, bolt+routing, neo4j",
                s
            )),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Scheme::Bolt => "bolt",
            Scheme::BoltRouting => "bolt+routing",
            Scheme::Neo4j => "neo4j",
        };
        write!(f, "{}", name)
    }
}

/// Host and port of a server
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ServerAddress {
    pub host: String,
    pub port: u16,
}

impl fmt::Display for ServerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}

/// Parsed connection URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionUrl {
    pub scheme: Scheme,
    pub address: ServerAddress,
    /// Routing context from the query string
    pub routing_context: BTreeMap<String, String>,
}

impl ConnectionUrl {
    pub fn parse(url: &str) -> Result<Self, ValueError> {
        let invalid = |reason: &str| ValueError::InvalidUrl {
            url: url.to_string(),
            reason: reason.to_string(),
        };

        let pattern = URL_PATTERN
            .as_ref()
            .map_err(|e| invalid(&format!("URL pattern failed to compile: {}", e)))?;
        let captures = pattern
            .captures(url.trim())
            .ok_or_else(|| invalid("expected <scheme>://<host>[:<port>][?<routing context>]"))?;

        let scheme: Scheme = captures["scheme"].parse().map_err(|e: String| invalid(&e))?;

        let host = captures["host"].trim_start_matches('[').trim_end_matches(']');
        if host.is_empty() {
            return Err(invalid("missing host"));
        }

        let port = match captures.name("port").map(|m| m.as_str()) {
            None => DEFAULT_PORT,
            Some(text) => text
                .parse::<u16>()
                .map_err(|_| invalid(&format!("invalid port '{}'", text)))?,
        };

        let routing_context = match captures.name("query").map(|m| m.as_str()) {
            None | Some("") => BTreeMap::new(),
            Some(_) if !scheme.is_routing() => {
                return Err(invalid(&format!(
                    "routing context is not supported with scheme '{}'",
                    scheme
                )))
            }
            Some(query) => parse_routing_context(query).map_err(|e| invalid(&e))?,
        };

        Ok(Self {
            scheme,
            address: ServerAddress {
                host: host.to_string(),
                port,
            },
            routing_context,
        })
    }
}

fn parse_routing_context(query: &str) -> Result<BTreeMap<String, String>, String> {
    let mut context = BTreeMap::new();
    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| format!("invalid parameter '{}'", pair))?;
        if key.is_empty() || value.is_empty() {
            return Err(format!("invalid parameter '{}'", pair));
        }
        if context.insert(key.to_string(), value.to_string()).is_some() {
            return Err(format!("duplicated parameter '{}'", key));
        }
    }
    Ok(context)
}

impl fmt::Display for ConnectionUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.address)?;
        for (i, (key, value)) in self.routing_context.iter().enumerate() {
            let separator = if i == 0 { '?' } else { '&' };
            write!(f, "{}{}={}", separator, key, value)?;
        }
        Ok(())
    }
}
