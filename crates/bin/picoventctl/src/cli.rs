//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use picovent_domain::light::LightState;

/// Read and control a picovent fan controller.
#[derive(Debug, Parser)]
#[command(name = "picoventctl", version, about)]
pub struct Cli {
    /// Configuration file (defaults to `picovent.toml` when present).
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Device base URL, overriding configuration and `PICOVENT_URL`.
    #[arg(long, global = true)]
    pub url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show the current value of every metric.
    Status {
        /// Only show the metric bound to this element id.
        #[arg(long)]
        metric: Option<String>,
    },
    /// Switch the light, then show the state the device reports.
    Light {
        /// Requested state, e.g. `on` or `off`.
        state: LightState,
    },
}
