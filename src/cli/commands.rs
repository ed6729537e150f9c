//! CLI command handlers.

use std::fmt::Write as _;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use tracing::warn;

use crate::cli::args::{Args, Commands};
use crate::config::{self, Settings};
use crate::core::{ipsec_conf, query};
use crate::state::{Configuration, StatusMap};
use crate::utils;

/// Resolves settings from the config file and command-line overrides.
///
/// # Errors
///
/// Returns an error if an existing settings file cannot be read or parsed.
pub fn resolve_settings(args: &Args) -> Result<Settings> {
    let mut settings = match args.config.clone().or_else(config::default_config_path) {
        Some(path) => Settings::load(&path)?,
        None => Settings::default(),
    };

    if args.sudo {
        settings.use_sudo = true;
    }
    if let Some(path) = &args.ipsec_conf {
        settings.ipsec_conf.clone_from(path);
    }
    if let Some(binary) = &args.ipsec_binary {
        settings.ipsec_binary.clone_from(binary);
    }
    Ok(settings)
}

/// Dispatches the parsed command.
///
/// # Errors
///
/// Returns an error if settings or the tunnel list cannot be loaded, or if
/// output cannot be serialized.
pub fn run(args: &Args) -> Result<()> {
    let settings = resolve_settings(args)?;
    let tunnels = ipsec_conf::load(&settings.ipsec_conf)
        .wrap_err("Failed to load tunnel configuration")?;

    match args.command {
        Commands::Status { json } => {
            if !settings.use_sudo && !utils::is_root() {
                warn!("not running as root and sudo is disabled; ipsec may refuse to report");
            }
            let statuses = query::query_status(&tunnels, &settings.provider());
            if json {
                println!("{}", serde_json::to_string_pretty(&statuses)?);
            } else {
                print!("{}", format_status_table(&statuses));
            }
        }
        Commands::Tunnels => print!("{}", format_tunnel_list(&tunnels)),
    }
    Ok(())
}

fn format_status_table(statuses: &StatusMap) -> String {
    let width = statuses
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(0)
        .max("TUNNEL".len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<width$}  {:<9}  {:<22}  {:>12}  {:>12}  {:>10}  {:>10}",
        "TUNNEL", "REACHABLE", "STATE", "BYTES IN", "BYTES OUT", "PKTS IN", "PKTS OUT"
    );
    for (name, record) in statuses.iter() {
        let reachable = if record.reachable { "yes" } else { "no" };
        let _ = writeln!(
            out,
            "{:<width$}  {:<9}  {:<22}  {:>12}  {:>12}  {:>10}  {:>10}",
            name,
            reachable,
            record.state.to_string(),
            record.bytes_in,
            record.bytes_out,
            record.packets_in,
            record.packets_out
        );
    }
    out
}

fn format_tunnel_list(tunnels: &Configuration) -> String {
    if tunnels.is_empty() {
        return "No tunnels configured\n".to_string();
    }
    let mut out = String::new();
    for tunnel in tunnels.tunnels() {
        if tunnel.ignored {
            let _ = writeln!(out, "{} (ignored)", tunnel.name);
        } else {
            let _ = writeln!(out, "{}", tunnel.name);
        }
    }
    out
}
