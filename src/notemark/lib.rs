//! # NoteMark Architecture
//!
//! NoteMark is a **UI-agnostic command-reference library**. This is not a CLI
//! application that happens to have some library code—it's a catalog library
//! that happens to have a CLI client.
//!
//! This distinction drives the entire architecture and should guide all
//! development.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (domain names → Domain, slugs)         │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic: search, resolve, group              │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog Layer (catalog/)                                   │
//! │  - Immutable built-in collections, one per Domain           │
//! │  - Validated once at startup, read-only afterwards          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Slug System
//!
//! Topics are addressed by slug, a URL-safe token derived from the topic
//! name. Resolution never decodes a slug: it re-derives the slug from each
//! candidate name and compares. That keeps the codec one-directional and
//! total, and makes slug uniqueness a catalog invariant that
//! [`catalog::Library::builtin`] enforces before anything else runs.
//! See slug.rs for the canonical derivation policy.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, catalog), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! The catalogs are resident and immutable, so everything in the core is a
//! synchronous, side-effect-free computation a caller may invoke from any
//! thread without ordering constraints.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): Thorough unit tests of business logic.
//!    This is where the lion's share of testing lives.
//!
//! 2. **Catalog integrity** (`tests/`): property-style assertions over the
//!    shipped collections (slug round-trips, no collisions).
//!
//! 3. **CLI** (`cli/` + thin `main.rs`): end-to-end tests driving the
//!    binary and asserting on terminal output.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`catalog`]: The built-in collections and their validation
//! - [`model`]: Core data types (`Topic`, `Example`, `Domain`)
//! - [`slug`]: Slug derivation and resolution
//! - [`group`]: Category bucketing for sectioned display
//! - [`gateway`]: Request/response contract for the AI study gateway
//! - [`practical`]: State-transition tables for the simulated demos
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing, printing, and templated rendering for the
//!   binary (not part of the lib API)

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod gateway;
pub mod group;
pub mod model;
pub mod practical;
pub mod slug;
