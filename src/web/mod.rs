//! Web server for hosting-platform liveness checks
//!
//! Runs alongside the Discord bot so uptime monitors can confirm the
//! process is alive.

mod server;

pub use server::start_liveness_server;
