//! # Streakr
//!
//! A command-line utility that keeps daily usage streaks for selected desktop
//! applications.
//!
//! ## Features
//!
//! - **Usage Sampling**: Periodically checks which tracked applications are running
//! - **Activity Detection**: Counts usage only while keyboard or mouse input is seen
//! - **Streaks**: Current and longest streak per application, at most one step per day
//! - **Persistence**: Plain JSON documents in the per-user data directory
//!
//! ## Usage
//!
//! ```rust,no_run
//! use streakr::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod libs;
