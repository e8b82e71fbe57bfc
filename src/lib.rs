//! # Stundenreport
//!
//! A command-line utility that turns Clockify time entries into client-facing
//! PDF timesheet reports.
//!
//! ## Features
//!
//! - **Flexible Periods**: Day-first date input with sensible defaults
//! - **Client/Project Selection**: Interactive narrowing with ambiguous-name resolution
//! - **Month-Range Labels**: Compact period titles such as "Juni/Juli/August 2025"
//! - **Deterministic Filenames**: Collision-resistant report names per client and period
//! - **Output Formats**: PDF reports plus CSV, JSON and Excel exports
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stundenreport::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
