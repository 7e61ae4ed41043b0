// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! CLI command definitions for neo4j-tool

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Log level options
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only errors
    Error,
    /// Warnings and errors
    Warn,
    /// Info, warnings, and errors
    Info,
    /// Debug messages and above (verbose)
    Debug,
    /// All messages including trace (very verbose)
    Trace,
    /// Disable all logging
    Off,
}

impl LogLevel {
    /// Convert to log::LevelFilter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Off => log::LevelFilter::Off,
        }
    }
}

/// neo4j-tool - inspect driver values, URLs and configuration
#[derive(Parser)]
#[command(name = "neo4j-tool")]
#[command(about = "Inspect Neo4j driver values, connection URLs and configuration")]
#[command(version)]
pub struct Cli {
    /// Set log level (error, warn, info, debug, trace, off)
    #[arg(short = 'l', long = "log-level", global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Verbose mode (equivalent to --log-level debug)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Level requested on the command line, if any
    pub fn level_filter(&self) -> Option<log::LevelFilter> {
        if self.verbose {
            Some(log::LevelFilter::Debug)
        } else {
            self.log_level.map(LogLevel::to_level_filter)
        }
    }
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show detailed version information
    Version,

    /// Inspect a 64-bit integer as the driver sees it
    Int {
        /// Integer text, optionally signed
        value: String,

        /// Radix of the input (2-36)
        #[arg(short, long, default_value_t = 10)]
        radix: u32,
    },

    /// Build an authentication token (credentials are redacted)
    Auth {
        #[command(subcommand)]
        scheme: AuthScheme,
    },

    /// Parse a connection URL
    Url {
        /// bolt://, bolt+routing:// or neo4j:// URL
        url: String,
    },

    /// Resolve a local date time in an IANA time zone
    Zone {
        /// Zone id, e.g. Europe/Stockholm
        zone_id: String,

        /// Local date time, e.g. 2018-07-01T12:00:00
        local_date_time: String,
    },

    /// Validate a JSON driver configuration file
    Config {
        /// Path to the configuration file
        path: PathBuf,
    },
}

/// Authentication schemes
#[derive(Subcommand)]
pub enum AuthScheme {
    /// Username and password
    Basic {
        #[arg(short = 'u', long = "user")]
        user: String,

        #[arg(short = 'p', long = "password")]
        password: String,

        #[arg(long)]
        realm: Option<String>,
    },

    /// Base64 encoded Kerberos ticket
    Kerberos { ticket: String },

    /// Custom authentication provider
    Custom {
        principal: String,
        credentials: String,
        realm: String,
        scheme: String,

        /// Extra parameter as key=value (repeatable)
        #[arg(long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,
    },
}

/// Output format options
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}
