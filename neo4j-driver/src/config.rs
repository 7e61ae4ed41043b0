// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Driver configuration
//!
//! The options are handed to the runtime as-is; this crate only parses and
//! carries them. Partial JSON documents are accepted, missing options take
//! their defaults:
//!
//! ```json
//! { "encrypted": "ENCRYPTION_ON", "trust": "TRUST_SYSTEM_CA_SIGNED_CERTIFICATES",
//!   "maxConnectionPoolSize": 50 }
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Whether connections are encrypted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EncryptedSetting", into = "String")]
pub enum EncryptionLevel {
    On,
    Off,
}

/// `encrypted` accepts a flag or a level name
#[derive(Deserialize)]
#[serde(untagged)]
enum EncryptedSetting {
    Flag(bool),
    Level(String),
}

impl TryFrom<EncryptedSetting> for EncryptionLevel {
    type Error = String;

    fn try_from(setting: EncryptedSetting) -> Result<Self, Self::Error> {
        match setting {
            EncryptedSetting::Flag(flag) => Ok(EncryptionLevel::from(flag)),
            EncryptedSetting::Level(name) => name.parse(),
        }
    }
}

impl From<bool> for EncryptionLevel {
    fn from(flag: bool) -> Self {
        if flag {
            EncryptionLevel::On
        } else {
            EncryptionLevel::Off
        }
    }
}

impl From<EncryptionLevel> for String {
    fn from(level: EncryptionLevel) -> Self {
        level.to_string()
    }
}

impl std::str::FromStr for EncryptionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ENCRYPTION_ON" => Ok(EncryptionLevel::On),
            "ENCRYPTION_OFF" => Ok(EncryptionLevel::Off),
            _ => Err(format!(
                "Unknown encryption level: {}. Valid options: ENCRYPTION_ON, ENCRYPTION_OFF",
                s
            )),
        }
    }
}

impl std::fmt::Display for EncryptionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EncryptionLevel::On => "ENCRYPTION_ON",
            EncryptionLevel::Off => "ENCRYPTION_OFF",
        };
        write!(f, "{}", name)
    }
}

/// How server certificates are trusted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrustStrategy {
    /// Accept any certificate
    TrustAllCertificates,
    /// Remember the first certificate seen per host in the known hosts file
    TrustOnFirstUse,
    /// Certificates signed by the configured trusted certificates
    TrustSignedCertificates,
    /// Certificates signed by the configured custom CAs
    TrustCustomCaSignedCertificates,
    /// Certificates signed by the system CAs
    TrustSystemCaSignedCertificates,
}

impl std::str::FromStr for TrustStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TRUST_ALL_CERTIFICATES" => Ok(TrustStrategy::TrustAllCertificates),
            "TRUST_ON_FIRST_USE" => Ok(TrustStrategy::TrustOnFirstUse),
            "TRUST_SIGNED_CERTIFICATES" => Ok(TrustStrategy::TrustSignedCertificates),
            "TRUST_CUSTOM_CA_SIGNED_CERTIFICATES" => Ok(TrustStrategy::TrustCustomCaSignedCertificates),
            "TRUST_SYSTEM_CA_SIGNED_CERTIFICATES" => Ok(TrustStrategy::TrustSystemCaSignedCertificates),
            _ => Err(format!("Unknown trust strategy: {}", s)),
        }
    }
}

impl std::fmt::Display for TrustStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TrustStrategy::TrustAllCertificates => "TRUST_ALL_CERTIFICATES",
            TrustStrategy::TrustOnFirstUse => "TRUST_ON_FIRST_USE",
            TrustStrategy::TrustSignedCertificates => "TRUST_SIGNED_CERTIFICATES",
            TrustStrategy::TrustCustomCaSignedCertificates => "TRUST_CUSTOM_CA_SIGNED_CERTIFICATES",
            TrustStrategy::TrustSystemCaSignedCertificates => "TRUST_SYSTEM_CA_SIGNED_CERTIFICATES",
        };
        write!(f, "{}", name)
    }
}

/// Reader/writer selection among cluster members
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadBalancingStrategy {
    #[default]
    LeastConnected,
    RoundRobin,
}

/// Options passed through to the driver runtime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted: Option<EncryptionLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trust: Option<TrustStrategy>,
    /// Certificate files used with the signed-certificate strategies
    pub trusted_certificates: Vec<String>,
    /// Known hosts file used with trust on first use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub known_hosts: Option<String>,
    pub max_connection_pool_size: usize,
    /// Milliseconds
    pub max_transaction_retry_time: u64,
    pub load_balancing_strategy: LoadBalancingStrategy,
    /// Milliseconds
    pub max_connection_lifetime: u64,
    /// Milliseconds; zero disables the timeout
    pub connection_timeout: u64,
    /// Decode integers as `f64` instead of lossless `Integer`
    pub disable_lossless_integers: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            encrypted: None,
            trust: None,
            trusted_certificates: Vec::new(),
            known_hosts: None,
            max_connection_pool_size: 100,
            max_transaction_retry_time: 30_000,
            load_balancing_strategy: LoadBalancingStrategy::LeastConnected,
            max_connection_lifetime: 60 * 60 * 1000,
            connection_timeout: 5_000,
            disable_lossless_integers: false,
        }
    }
}

impl Config {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn connection_timeout(&self) -> Option<Duration> {
        (self.connection_timeout > 0).then(|| Duration::from_millis(self.connection_timeout))
    }

    pub fn max_transaction_retry_time(&self) -> Duration {
        Duration::from_millis(self.max_transaction_retry_time)
    }

    pub fn max_connection_lifetime(&self) -> Duration {
        Duration::from_millis(self.max_connection_lifetime)
    }
}
