//! Conflink - A tiny short-link generator for Confluence pages
//!
//! This library resolves arbitrarily-shaped Confluence page URLs into their
//! numeric page identifier and packs that identifier into the 6-character
//! URL-safe token Confluence serves under `/x/`.
//!
//! # Architecture
//! - `resolver`: ordered URL shape matching and base-origin extraction
//! - `token`: bijective pageId ↔ 6-character token codec
//! - `shortener`: composition of the two into a short link
//! - `services`: HTTP JSON endpoints (actix-web)
//! - `cli`: command-line interface (clap)
//! - `config` / `logging`: server-mode environment config and tracing setup
//!
//! The core modules (`resolver`, `token`, `shortener`) are pure functions:
//! no I/O, no logging, no shared state.

pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod resolver;
pub mod services;
pub mod shortener;
pub mod token;
