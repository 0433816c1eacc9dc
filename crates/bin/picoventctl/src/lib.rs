//! # picoventctl
//!
//! Composition root of the command-line client.
//!
//! ## Responsibilities
//! - Parse configuration (CLI args, env vars, config file)
//! - Construct the reqwest transport and the terminal status board (adapters)
//! - Construct the metric service, injecting both via port traits
//! - Run one command and print the board
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

pub mod board;
pub mod cli;
pub mod config;

use std::io::Write;

use anyhow::bail;
use picovent_adapter_http_reqwest::ReqwestTransport;
use picovent_app::services::metric_service::{ControlOutcome, MetricService};
use picovent_domain::binding::{LIGHT_STATE, MetricBinding, find_binding};

use board::StatusBoard;
use cli::Command;
use config::Config;

/// Execute `command` against the configured device and print the result.
///
/// Failing metrics are logged and shown as `-`; they do not fail the command.
///
/// # Errors
///
/// Returns an error for an unknown `--metric` id or when writing to `out` fails.
pub async fn run(command: &Command, config: &Config, out: &mut impl Write) -> anyhow::Result<()> {
    let transport = ReqwestTransport::new(config.device.base_url.as_str());

    match command {
        Command::Status { metric } => {
            let bindings: Vec<MetricBinding> = match metric {
                Some(id) => match find_binding(config.bindings(), id) {
                    Some(binding) => vec![binding.clone()],
                    None => bail!("unknown metric {id:?}"),
                },
                None => config.bindings().to_vec(),
            };
            let board = StatusBoard::new(bindings.iter().map(MetricBinding::element_id));
            let service = MetricService::new(transport, &board);
            service.refresh_all(&bindings).await;
            write!(out, "{}", board.render())?;
        }
        Command::Light { state } => {
            let board = StatusBoard::new([LIGHT_STATE.element_id()]);
            let service = MetricService::new(transport, &board);
            match service.set_light_state(state).await {
                ControlOutcome::Applied { reply, .. } => writeln!(out, "device: {reply}")?,
                ControlOutcome::Failed(_) => writeln!(out, "light state unchanged")?,
            }
            write!(out, "{}", board.render())?;
        }
    }
    Ok(())
}
