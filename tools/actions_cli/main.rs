//! Command-line host for the actions.
//!
//!   actions_cli geo-uri --latitude 37.7749 --longitude -122.4194 --accuracy 35
//!   actions_cli bluetooth --duration 10 --include-unnamed --json
//!   actions_cli geo-uri --latitude 48.8584 --longitude 2.2945 --no-accuracy

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;

use shortcut_actions_lib::config::{AppConfig, default_config_dir};
use shortcut_actions_lib::core::bluetooth;
use shortcut_actions_lib::core::geo::{self, Coordinate, Placemark};
use shortcut_actions_lib::host::HeadlessHost;
use shortcut_actions_lib::logging::init_env_logger;
use shortcut_actions_lib::state::AppState;
use shortcut_actions_lib::status::StatusBoard;

#[derive(Parser)]
#[command(name = "actions_cli", about = "Run the shortcut actions from a terminal")]
struct Cli {
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a location to a geo URI
    GeoUri {
        #[arg(long, allow_hyphen_values = true)]
        latitude: f64,
        #[arg(long, allow_hyphen_values = true)]
        longitude: f64,
        /// Horizontal accuracy in meters
        #[arg(long)]
        accuracy: Option<f64>,
        /// Append the accuracy when it is known
        #[arg(long, conflicts_with = "no_accuracy")]
        include_accuracy: bool,
        /// Leave the accuracy out even when it is known
        #[arg(long)]
        no_accuracy: bool,
    },
    /// List the Bluetooth devices in range
    Bluetooth {
        /// Scan duration in seconds (0-25)
        #[arg(short, long)]
        duration: Option<f64>,
        /// Include devices without a name
        #[arg(long, conflicts_with = "exclude_unnamed")]
        include_unnamed: bool,
        /// Leave out devices without a name
        #[arg(long)]
        exclude_unnamed: bool,
        /// Print the devices as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Resolves an `--x`/`--no-x` pair; `None` leaves the configured default.
fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_env_logger(if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });

    let status = StatusBoard::with_listener(|message| {
        if let Some(message) = message {
            eprintln!("{}...", message);
        }
    });
    let app_state = match default_config_dir() {
        Some(config_dir) => AppState::new(config_dir, status)
            .await
            .context("Failed to load config")?,
        None => AppState {
            config: tokio::sync::Mutex::new(AppConfig::default()),
            config_dir: std::env::current_dir()?,
            status,
        },
    };
    let config = app_state.config().await;

    match cli.command {
        Command::GeoUri {
            latitude,
            longitude,
            accuracy,
            include_accuracy,
            no_accuracy,
        } => {
            let mut coordinate = Coordinate::new(latitude, longitude);
            coordinate.horizontal_accuracy = accuracy;
            let place = Placemark::new(Some(coordinate));
            let include_accuracy = flag_pair(include_accuracy, no_accuracy)
                .unwrap_or(config.geo.include_accuracy);
            println!("{}", geo::geo_uri(&place, include_accuracy)?);
        }
        Command::Bluetooth {
            duration,
            include_unnamed,
            exclude_unnamed,
            json,
        } => {
            let options = config
                .scan
                .options(duration, flag_pair(include_unnamed, exclude_unnamed));
            let host = HeadlessHost::new(config.scan.ready_timeout());
            let devices =
                bluetooth::get_bluetooth_devices(&host, &app_state.status, &options).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&devices)?);
            } else {
                for device in &devices {
                    println!("{}", device.name.as_deref().unwrap_or(""));
                    for line in device.summary().lines() {
                        println!("  {}", line);
                    }
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_pair_overrides_config_both_ways() {
        assert_eq!(flag_pair(true, false), Some(true));
        assert_eq!(flag_pair(false, true), Some(false));
        assert_eq!(flag_pair(false, false), None);
    }

    #[test]
    fn test_exclude_unnamed_overrides_config() {
        let cli = Cli::try_parse_from(["actions_cli", "bluetooth", "--exclude-unnamed"]).unwrap();
        let Command::Bluetooth {
            include_unnamed,
            exclude_unnamed,
            ..
        } = cli.command
        else {
            panic!("expected the bluetooth command");
        };

        let scan = shortcut_actions_lib::config::scan_config::ScanConfig {
            include_unnamed_devices: true,
            ..Default::default()
        };
        let options = scan.options(None, flag_pair(include_unnamed, exclude_unnamed));
        assert!(!options.include_unnamed);
    }

    #[test]
    fn test_include_accuracy_overrides_config() {
        let cli = Cli::try_parse_from([
            "actions_cli",
            "geo-uri",
            "--latitude",
            "37.7749",
            "--longitude",
            "-122.4194",
            "--include-accuracy",
        ])
        .unwrap();
        let Command::GeoUri {
            include_accuracy,
            no_accuracy,
            ..
        } = cli.command
        else {
            panic!("expected the geo-uri command");
        };

        assert!(flag_pair(include_accuracy, no_accuracy).unwrap_or(false));
    }

    #[test]
    fn test_conflicting_flags_are_rejected() {
        let parsed = Cli::try_parse_from([
            "actions_cli",
            "bluetooth",
            "--include-unnamed",
            "--exclude-unnamed",
        ]);
        assert!(parsed.is_err());
    }
}
