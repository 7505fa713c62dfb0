// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Talks to a running DetectMate component's admin HTTP surface.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "detectmate-ctl", about = "Control a running DetectMate component")]
struct Args {
    /// Base URL of the component's admin API.
    #[arg(long, default_value = "http://localhost:8000")]
    url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    Start,
    Stop,
    Status,
    Reconfigure {
        /// YAML file containing the new configuration tree.
        file: PathBuf,
        /// Persist the change to the component's config file.
        #[arg(long)]
        persist: bool,
    },
    Shutdown,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let client = reqwest::blocking::Client::new();

    let result = match args.command {
        Command::Start => client.post(format!("{}/admin/start", args.url)).send(),
        Command::Stop => client.post(format!("{}/admin/stop", args.url)).send(),
        Command::Status => client.get(format!("{}/admin/status", args.url)).send(),
        Command::Shutdown => client.post(format!("{}/admin/shutdown", args.url)).send(),
        Command::Reconfigure { file, persist } => reconfigure(&client, &args.url, &file, persist),
    };

    match result.and_then(|resp| resp.error_for_status()) {
        Ok(resp) => {
            let status = resp.status();
            match resp.text() {
                Ok(body) if !body.is_empty() => println!("{body}"),
                Ok(_) => println!("{status}"),
                Err(_) => println!("{status}"),
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("request failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn reconfigure(
    client: &reqwest::blocking::Client,
    base_url: &str,
    file: &PathBuf,
    persist: bool,
) -> reqwest::Result<reqwest::blocking::Response> {
    let text = std::fs::read_to_string(file).unwrap_or_else(|err| {
        eprintln!("failed to read {}: {err}", file.display());
        std::process::exit(1);
    });
    let config: serde_yaml::Value = serde_yaml::from_str(&text).unwrap_or_else(|err| {
        eprintln!("failed to parse {}: {err}", file.display());
        std::process::exit(1);
    });
    let body = serde_json::json!({ "config": config, "persist": persist });
    client.post(format!("{base_url}/admin/reconfigure")).json(&body).send()
}
