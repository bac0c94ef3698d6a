use std::fs;
use std::path::{Path, PathBuf};

use clap::ArgMatches;
use tracing::{error, info};

use rdproxy_core::config::defaults::TEMPLATE;
use rdproxy_core::events;
use rdproxy_core::ProxyConfig;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup(matches.subcommand_name().unwrap_or("none"));

    match matches.subcommand() {
        Some(("check", sub_matches)) => handle_check_command(sub_matches),
        Some(("print", sub_matches)) => handle_print_command(sub_matches),
        Some(("dump-config", sub_matches)) => handle_dump_config_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}

fn config_path(matches: &ArgMatches) -> Result<PathBuf, Box<dyn std::error::Error>> {
    matches
        .get_one::<String>("config")
        .map(PathBuf::from)
        .ok_or_else(|| "Config argument is required".into())
}

/// Load a config file, reporting failures on stderr and in the log.
fn load_config(path: &Path) -> Result<ProxyConfig, Box<dyn std::error::Error>> {
    match ProxyConfig::load_from_file(path) {
        Ok(config) => Ok(config),
        Err(e) => {
            eprintln!("Invalid configuration '{}': {}", path.display(), e);
            events::log_config_rejected(path, &e);
            Err(e.into())
        }
    }
}

fn handle_check_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let path = config_path(matches)?;

    info!(event = "cli.check_started", path = %path.display());

    load_config(&path)?;
    println!("Configuration OK: {}", path.display());

    info!(event = "cli.check_completed", path = %path.display());
    Ok(())
}

fn handle_print_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let path = config_path(matches)?;
    let json_output = matches.get_flag("json");

    info!(
        event = "cli.print_started",
        path = %path.display(),
        json_output = json_output
    );

    let config = load_config(&path)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        print!("{}", config);
    }

    info!(event = "cli.print_completed", path = %path.display());
    Ok(())
}

fn handle_dump_config_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let output = matches
        .get_one::<String>("output")
        .map(PathBuf::from)
        .ok_or("Output argument is required")?;
    let force = matches.get_flag("force");

    info!(
        event = "cli.dump_config_started",
        path = %output.display(),
        force = force
    );

    if output.exists() && !force {
        eprintln!(
            "Refusing to overwrite '{}'. Use --force to replace it.",
            output.display()
        );
        error!(
            event = "cli.dump_config_failed",
            path = %output.display(),
            reason = "exists"
        );
        return Err(format!("'{}' already exists", output.display()).into());
    }

    if let Err(e) = fs::write(&output, TEMPLATE) {
        eprintln!("Failed to write '{}': {}", output.display(), e);
        error!(
            event = "cli.dump_config_failed",
            path = %output.display(),
            error = %e
        );
        return Err(e.into());
    }

    println!("Template configuration written to {}", output.display());

    info!(event = "cli.dump_config_completed", path = %output.display());
    Ok(())
}
