//! CLI tool for vgrid - lays out a grid from a JSON config and prints a report
//!
//! Usage:
//!   vgrid_cli <config.json>              # Output JSON report to stdout
//!   vgrid_cli <config.json> -o out.json  # Output JSON report to file
//!
//! Set `RUST_LOG=vgrid=debug` to trace measurement and scrolling.

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};

use tracing_subscriber::EnvFilter;
use vgrid::config::{GridConfig, GridReport};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: vgrid_cli <config.json> [-o output.json]");
        std::process::exit(1);
    }

    let input_path = &args[1];
    let output_path = if args.len() > 3 && args[2] == "-o" {
        Some(&args[3])
    } else {
        None
    };

    // Read and validate config
    let config = match GridConfig::from_path(input_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading {}: {}", input_path, e);
            std::process::exit(1);
        }
    };

    let report = match GridReport::from_config(&config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error laying out grid: {}", e);
            std::process::exit(1);
        }
    };

    // Serialize to JSON
    let json = match serde_json::to_string_pretty(&report) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

    // Output
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &json) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
            eprintln!("Written: {}", path);
        }
        None => {
            io::stdout().write_all(json.as_bytes()).unwrap();
            println!();
        }
    }
}
