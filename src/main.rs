//! axebridge - BCR2000 to Axe-FX II control bridge

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::path::Path;

use axebridge::config::{self, BridgeConfig};
use axebridge::device::{axefx, bcr2000, decode_parameter};
use axebridge::mapping::{ControlId, MappingEntry};
use axebridge::Bridge;

mod cli;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Commands::Check { config: config_path } => {
            println!("Checking configuration at {:?}...", config_path);

            match config::load_config(&config_path) {
                Ok(cfg) => {
                    let channels = cfg.channels()?;
                    let (min, max) = cfg.scale().range();
                    println!("Configuration is valid!");
                    println!("  Axe-FX: {} on channel {}", cfg.device.model.name(), channels.axefx);
                    println!("  BCR2000 channel: {}", channels.bcr);
                    println!("  Switch threshold: {}", cfg.switch.threshold);
                    println!("  Scaling: {}..={}", min, max);
                    match &cfg.mappings {
                        Some(rows) => println!("  Mappings: {}", rows.len()),
                        None => println!("  Mappings: built-in layout"),
                    }
                }
                Err(e) => {
                    println!("Configuration is invalid: {:#}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Table { config: config_path } => {
            let cfg = load_or_default(config_path.as_deref())?;
            let table = cfg.mapping_table()?;

            println!("{} mappings:", table.len());
            for entry in table.iter() {
                println!("  {}", format_entry(entry));
            }
        }

        Commands::Resolve {
            config: config_path,
            control,
            value,
        } => {
            let cfg = load_or_default(config_path.as_deref())?;
            let bridge = Bridge::from_config(&cfg)?;
            let control = parse_control(&control)?;

            match bridge.translate(control, value) {
                Some(t) => {
                    println!("Control {} = {}", control_label(control), value);
                    println!("  Target: {}", axefx::describe(t.change.address));
                    println!("  Type: {:?}", t.change.control_type);
                    println!("  Value: {} (wire {})", t.change.value, t.wire_value);
                    println!("  SysEx: {}", t.message);
                }
                None => println!("Control {} is not mapped.", control_label(control)),
            }
        }

        Commands::Decode { message } => {
            let joined: String = message.concat().split_whitespace().collect();
            let bytes = hex::decode(&joined).context("invalid hex input")?;
            let decoded = decode_parameter(&bytes)?;

            let mode = if decoded.set { "set" } else { "get" };
            println!("{} parameter {}", decoded.model.name(), mode);
            println!("  Target: {}", axefx::describe(decoded.address));
            println!("  Block: {}", decoded.address.block);
            println!("  Parameter: {}", decoded.address.param);
            if decoded.set {
                println!("  Value: {}", decoded.value);
            }
        }

        Commands::Init => {
            let path = "bridge.yaml";
            if Path::new(path).exists() {
                println!("bridge.yaml already exists. Not overwriting.");
            } else {
                std::fs::write(path, config::EXAMPLE_CONFIG)?;
                println!("Created bridge.yaml with example configuration.");
            }
        }
    }

    Ok(())
}

fn load_or_default(path: Option<&Path>) -> Result<BridgeConfig> {
    match path {
        Some(path) => config::load_config(path),
        None => Ok(BridgeConfig::default()),
    }
}

fn parse_control(text: &str) -> Result<ControlId> {
    if let Ok(number) = text.parse::<u16>() {
        return Ok(ControlId::try_from(number)?);
    }
    bcr2000::find(text).ok_or_else(|| anyhow!("unknown BCR2000 control '{}'", text))
}

fn control_label(id: ControlId) -> String {
    match bcr2000::element(id) {
        Some(element) => format!("{:>3} {}", id, element),
        None => format!("{:>3}", id),
    }
}

fn format_entry(entry: &MappingEntry) -> String {
    format!(
        "{:<24} -> {:<16} {:?}",
        control_label(entry.control),
        axefx::describe(entry.address),
        entry.control_type,
    )
}
