//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for conflink using clap's derive
//! macros, plus the command runner. With no subcommand the binary starts
//! the HTTP server instead.

use clap::{Parser, Subcommand};

use crate::errors::Result;
use crate::{shortener, token};

/// Conflink - A tiny short-link generator for Confluence pages
#[derive(Parser)]
#[command(name = "conflink")]
#[command(version)]
#[command(about = "Generate /x/ short links from Confluence page URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Shorten a Confluence page URL
    Shorten {
        /// Full Confluence page URL
        #[arg(long, short = 'u')]
        url: String,

        /// Custom base URL for the short link (default: derived from the page URL)
        #[arg(long, short = 'b')]
        base: Option<String>,
    },

    /// Decode a 6-character token back into its page ID
    Decode {
        /// Token to decode
        token: String,
    },
}

/// Run a CLI command, printing the result to stdout.
///
/// Errors are returned to the caller; main prints them colored to stderr
/// and exits non-zero.
pub fn run_command(command: Commands) -> Result<()> {
    match command {
        Commands::Shorten { url, base } => {
            let short_url = shortener::shorten_url(&url, base.as_deref())?;
            println!("{}", short_url);
        }
        Commands::Decode { token } => {
            let page_id = token::decode(&token)?;
            println!("{}", page_id);
        }
    }
    Ok(())
}
