//! Command-line argument parsing for ragsearch

use clap::{Parser, Subcommand};

/// ragsearch - answer questions from a vector index of document passages
#[derive(Parser, Debug)]
#[command(name = "ragsearch")]
#[command(version)]
#[command(about = "Retrieval-augmented question answering with optional HyDE expansion", long_about = None)]
pub struct Args {
    /// Question to answer
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    /// Expand the query with a hypothetical answer document before retrieval
    /// (accepts true/false, yes/no, 1/0)
    #[arg(long, default_value = "false", value_parser = parse_bool_flag, value_name = "BOOL", action = clap::ArgAction::Set)]
    pub hyde: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check that the embedder, vector index, and chat service are reachable
    Check,
}

impl Args {
    /// A query is required unless a subcommand was given
    pub fn validate(&self) -> Result<(), String> {
        if self.command.is_none() && self.query.is_none() {
            return Err("Query required. Use 'ragsearch <QUERY>' or run a subcommand.".to_string());
        }

        if self.command.is_some() && self.query.is_some() {
            return Err("Cannot specify a query with a subcommand.".to_string());
        }

        Ok(())
    }
}

/// Decode a textual boolean from the request boundary
pub fn parse_bool_flag(raw: &str) -> Result<bool, String> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        other => Err(format!("expected true or false, got '{}'", other)),
    }
}
