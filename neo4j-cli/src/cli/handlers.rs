// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! CLI command handlers for neo4j-tool
//!
//! Each handler builds a [`Report`] and prints it in the requested format.

use chrono::NaiveDateTime;
use neo4j_driver::address::DEFAULT_PORT;
use neo4j_driver::{
    auth, AuthToken, Config, ConnectionUrl, DateTimeWithZoneId, DateTimeWithZoneOffset, Integer,
    LocalDateTime, Parameters, Value,
};
use std::path::Path;

use super::commands::{AuthScheme, OutputFormat};
use super::output::Report;

type HandlerResult<T> = Result<T, Box<dyn std::error::Error>>;

fn print_report(report: &Report, format: OutputFormat) -> HandlerResult<()> {
    println!("{}", report.render(format)?);
    Ok(())
}

/// Handle the version command
pub fn handle_version(format: OutputFormat) -> HandlerResult<()> {
    print_report(&version_report(), format)
}

pub fn version_report() -> Report {
    Report::new("neo4j-tool")
        .field("tool", env!("CARGO_PKG_VERSION"))
        .field("driver", neo4j_driver::VERSION)
        .field("schemes", "bolt, bolt+routing, neo4j")
        .field("default port", DEFAULT_PORT)
}

/// Handle the int command
pub fn handle_int(value: &str, radix: u32, format: OutputFormat) -> HandlerResult<()> {
    print_report(&int_report(value, radix)?, format)
}

pub fn int_report(value: &str, radix: u32) -> HandlerResult<Report> {
    let integer = Integer::from_string(value, radix)?;
    log::debug!("Parsed {} in radix {} as {}", value, radix, integer);

    let number = match integer.to_number() {
        Ok(number) => serde_json::Value::from(number),
        Err(e) => {
            log::warn!("{}", e);
            serde_json::Value::Null
        }
    };
    Ok(Report::new("Integer")
        .field("decimal", integer.to_string())
        .field("hex", integer.to_string_radix(16)?)
        .field("high bits", integer.high_bits())
        .field("low bits", integer.low_bits())
        .field("safe range", integer.in_safe_range())
        .field("number", number)
        .field("nearest number", integer.to_number_lossy()))
}

/// Handle the auth command
pub fn handle_auth(scheme: AuthScheme, format: OutputFormat) -> HandlerResult<()> {
    print_report(&auth_report(&auth_token(scheme)?)?, format)
}

pub fn auth_token(scheme: AuthScheme) -> HandlerResult<AuthToken> {
    let token = match scheme {
        AuthScheme::Basic { user, password, realm } => auth::basic(user, password, realm.as_deref()),
        AuthScheme::Kerberos { ticket } => auth::kerberos(ticket),
        AuthScheme::Custom {
            principal,
            credentials,
            realm,
            scheme,
            params,
        } => {
            let mut parameters = Parameters::new();
            for param in params {
                let (key, value) = param
                    .split_once('=')
                    .ok_or_else(|| format!("Invalid parameter '{}', expected KEY=VALUE", param))?;
                parameters.insert(key.to_string(), Value::from(value));
            }
            auth::custom(principal, credentials, realm, scheme, Some(parameters))
        }
    };
    Ok(token)
}

pub fn auth_report(token: &AuthToken) -> HandlerResult<Report> {
    let redacted = token.redacted();
    Ok(Report::new("Authentication token")
        .field("scheme", redacted.scheme.as_str())
        .field("principal", redacted.principal.as_str())
        .field("credentials", redacted.credentials.as_str())
        .field("realm", redacted.realm.clone())
        .field("parameters", serde_json::to_value(&redacted.parameters)?))
}

/// Handle the url command
pub fn handle_url(url: &str, format: OutputFormat) -> HandlerResult<()> {
    print_report(&url_report(url)?, format)
}

pub fn url_report(url: &str) -> HandlerResult<Report> {
    let parsed = ConnectionUrl::parse(url)?;
    Ok(Report::new("Connection URL")
        .field("scheme", parsed.scheme.to_string())
        .field("host", parsed.address.host.as_str())
        .field("port", parsed.address.port)
        .field("routing", parsed.scheme.is_routing())
        .field("routing context", serde_json::to_value(&parsed.routing_context)?)
        .field("normalized", parsed.to_string()))
}

/// Handle the zone command
pub fn handle_zone(zone_id: &str, local_date_time: &str, format: OutputFormat) -> HandlerResult<()> {
    print_report(&zone_report(zone_id, local_date_time)?, format)
}

pub fn zone_report(zone_id: &str, local_date_time: &str) -> HandlerResult<Report> {
    let naive = NaiveDateTime::parse_from_str(local_date_time, "%Y-%m-%dT%H:%M:%S%.f")?;
    let zoned: DateTimeWithZoneId = DateTimeWithZoneId::new(LocalDateTime::<Integer>::from(naive), zone_id)?;
    let resolved = zoned.to_chrono()?;
    let with_offset = DateTimeWithZoneOffset::from(resolved.fixed_offset());

    Ok(Report::new("Zoned date time")
        .field("zone id", zoned.zone_id())
        .field("local", zoned.local_date_time().to_string())
        .field("offset seconds", zoned.offset_seconds()?)
        .field("with zone id", zoned.to_string())
        .field("with offset", with_offset.to_string()))
}

/// Handle the config command
pub fn handle_config(path: &Path, format: OutputFormat) -> HandlerResult<()> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
    print_report(&config_report(&text)?, format)
}

pub fn config_report(json: &str) -> HandlerResult<Report> {
    let config = Config::from_json_str(json)?;
    let display = |value: Option<String>| value.map(serde_json::Value::from).unwrap_or_default();

    Ok(Report::new("Driver configuration")
        .field("encrypted", display(config.encrypted.map(|e| e.to_string())))
        .field("trust", display(config.trust.map(|t| t.to_string())))
        .field("trusted certificates", config.trusted_certificates.join(", "))
        .field("known hosts", display(config.known_hosts.clone()))
        .field("max connection pool size", config.max_connection_pool_size)
        .field("max transaction retry time (ms)", config.max_transaction_retry_time)
        .field("load balancing strategy", serde_json::to_value(config.load_balancing_strategy)?)
        .field("max connection lifetime (ms)", config.max_connection_lifetime)
        .field("connection timeout (ms)", config.connection_timeout)
        .field("lossless integers", !config.disable_lossless_integers))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_report_outside_safe_range() {
        let report = int_report("9007199254740993", 10).unwrap();
        assert_eq!(report.get("safe range"), Some(&serde_json::Value::Bool(false)));
        assert_eq!(report.get("number"), Some(&serde_json::Value::Null));
        assert_eq!(report.get("hex"), Some(&serde_json::Value::from("20000000000001")));
        assert_eq!(report.get("high bits"), Some(&serde_json::Value::from(0x0020_0000)));

        assert!(int_report("zz", 10).is_err());
    }

    #[test]
    fn test_auth_report_redacts_credentials() {
        let token = auth_token(AuthScheme::Basic {
            user: "neo4j".to_string(),
            password: "hunter2".to_string(),
            realm: None,
        })
        .unwrap();
        let report = auth_report(&token).unwrap();
        assert_eq!(report.get("credentials"), Some(&serde_json::Value::from("*****")));
        assert_eq!(report.get("realm"), Some(&serde_json::Value::Null));

        let bad = auth_token(AuthScheme::Custom {
            principal: "alice".to_string(),
            credentials: "pw".to_string(),
            realm: "corp".to_string(),
            scheme: "ldap".to_string(),
            params: vec!["group".to_string()],
        });
        assert!(bad.is_err());
    }

    #[test]
    fn test_url_report() {
        let report = url_report("neo4j://db.example.com?region=eu").unwrap();
        assert_eq!(report.get("port"), Some(&serde_json::Value::from(7687)));
        assert_eq!(report.get("routing"), Some(&serde_json::Value::Bool(true)));
        assert_eq!(
            report.get("normalized"),
            Some(&serde_json::Value::from("neo4j://db.example.com:7687?region=eu"))
        );
        assert!(url_report("ftp://db.example.com").is_err());
    }

    #[test]
    fn test_zone_report_uses_summer_time() {
        let report = zone_report("Europe/Stockholm", "2018-07-01T12:00:00").unwrap();
        assert_eq!(report.get("offset seconds"), Some(&serde_json::Value::from(7200)));
        assert_eq!(
            report.get("with offset"),
            Some(&serde_json::Value::from("2018-07-01T12:00:00+02:00"))
        );
        assert!(zone_report("Mars/Olympus", "2018-07-01T12:00:00").is_err());
    }

    #[test]
    fn test_config_report_fills_defaults() {
        let report = config_report(r#"{"encrypted": true, "maxConnectionPoolSize": 5}"#).unwrap();
        assert_eq!(report.get("encrypted"), Some(&serde_json::Value::from("ENCRYPTION_ON")));
        assert_eq!(report.get("max connection pool size"), Some(&serde_json::Value::from(5)));
        assert_eq!(
            report.get("load balancing strategy"),
            Some(&serde_json::Value::from("least_connected"))
        );
        assert!(config_report("{\"encrypted\": 3}").is_err());
    }
}
