//! Command-line tool for domain-search.
//!
//! Runs the search pipeline in-process, without the HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # Search a name across the popular extensions
//! cargo run --bin domain-search-cli -- search "my cool site"
//!
//! # Search specific extensions, print JSON
//! cargo run --bin domain-search-cli -- search example --tlds .com,.dev,.ai --json
//!
//! # Show what a query normalizes to
//! cargo run --bin domain-search-cli -- normalize "HTTPS://WWW.Example.com/"
//!
//! # List the TLD catalog
//! cargo run --bin domain-search-cli -- tlds
//! ```
//!
//! # Environment Variables
//!
//! Same as the server (see `domain_search::config`); `.env` is loaded if present.

use domain_search::api::dto::search::SearchResponse;
use domain_search::config;
use domain_search::domain::entities::{TldEntry, Verdict};
use domain_search::server::build_search_service;
use domain_search::utils::label_normalizer::{label_violation, normalize_label};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;

/// CLI tool for domain-search.
#[derive(Parser)]
#[command(name = "domain-search-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Search a domain name across extensions
    Search {
        /// Raw query, normalized like the HTTP API does
        query: String,

        /// Comma-separated extensions (popular ones when omitted)
        #[arg(short, long, value_delimiter = ',')]
        tlds: Vec<String>,

        /// Print the raw JSON response
        #[arg(long)]
        json: bool,
    },

    /// Show the label a query normalizes to
    Normalize {
        /// Raw query
        raw: String,
    },

    /// List offered extensions and prices
    Tlds,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    match cli.command {
        Commands::Search { query, tlds, json } => {
            let catalog = config.load_catalog()?;
            let service = build_search_service(&config, catalog);
            let requested = (!tlds.is_empty()).then_some(tlds.as_slice());

            let outcome = service
                .search(Some(&query), requested)
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?;

            if json {
                let response = SearchResponse::from(outcome);
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                print_results(&outcome.normalized_query, &outcome.primary, &outcome.suggestions);
            }
        }
        Commands::Normalize { raw } => print_normalized(&raw),
        Commands::Tlds => {
            let catalog = config.load_catalog()?;
            print_catalog(catalog.entries());
        }
    }

    Ok(())
}

/// Prints primary results and suggestions.
///
/// # Output Format
///
/// ```text
/// Results for example
///
///   example.com                    TAKEN       12.99
///   example.io                     AVAILABLE   39.99
///   example.ai                     PREMIUM    799.90
/// ```
fn print_results(label: &str, primary: &[Verdict], suggestions: &[Verdict]) {
    println!("{} {}", "Results for".bright_blue().bold(), label.cyan().bold());
    println!();

    for verdict in primary {
        print_verdict(verdict);
    }

    println!();
    if suggestions.is_empty() {
        println!("{}", "  No suggestions available".yellow());
    } else {
        println!("{}", "Suggestions".bright_blue().bold());
        println!();
        for verdict in suggestions {
            print_verdict(verdict);
        }
    }
    println!();
}

fn print_verdict(verdict: &Verdict) {
    let status = if verdict.is_premium {
        "PREMIUM".magenta()
    } else if verdict.available {
        "AVAILABLE".green()
    } else {
        "TAKEN".red()
    };

    println!(
        "  {:<30} {:<10} {:>8.2}",
        verdict.full_domain.bright_white(),
        status,
        verdict.price
    );
}

fn print_normalized(raw: &str) {
    let label = normalize_label(raw);

    println!("  Input:      {}", raw.bright_black());
    println!("  Normalized: {}", label.cyan().bold());
    match label_violation(&label) {
        None => println!("  Valid:      {}", "yes".green()),
        Some(violation) => println!("  Valid:      {} ({})", "no".red(), violation),
    }
}

fn print_catalog(entries: &[TldEntry]) {
    println!(
        "  {:<8} {:>8}  {:<8} {}",
        "TLD".bright_white().bold(),
        "Price".bright_white().bold(),
        "Popular".bright_white().bold(),
        "Description".bright_white().bold()
    );
    println!("  {}", "-".repeat(70).bright_black());

    for entry in entries {
        let popular = if entry.is_popular {
            "yes".green()
        } else {
            "no".bright_black()
        };

        println!(
            "  {:<8} {:>8.2}  {:<8} {}",
            entry.extension.cyan(),
            entry.base_price,
            popular,
            entry.description
        );
    }

    println!();
    println!(
        "  Total: {}",
        entries.len().to_string().bright_white().bold()
    );
}
