// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! neo4j-tool entry point

mod cli;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // RUST_LOG applies unless a level is given on the command line
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(level) = cli.level_filter() {
        builder.filter_level(level);
    }
    builder.init();

    let format = cli.format;
    let result = match cli.command {
        Commands::Version => cli::handle_version(format),
        Commands::Int { value, radix } => cli::handle_int(&value, radix, format),
        Commands::Auth { scheme } => cli::handle_auth(scheme, format),
        Commands::Url { url } => cli::handle_url(&url, format),
        Commands::Zone {
            zone_id,
            local_date_time,
        } => cli::handle_zone(&zone_id, &local_date_time, format),
        Commands::Config { path } => cli::handle_config(&path, format),
    };

    if let Err(e) = result {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}
