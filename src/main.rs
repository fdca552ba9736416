use std::sync::Arc;

use clap::{Parser, Subcommand};
use nhl_statsapi::Client;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use nhl_roster::data_provider::RosterDataProvider;
use nhl_roster::{commands, config, tui};

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "nhl-roster")]
#[command(
    about = "NHL roster and player stats browser",
    long_about = "NHL roster and player stats browser\n\nIf no command is specified, the program starts in interactive mode."
)]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Use fixture data instead of the live API
    #[cfg(feature = "development")]
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// List the team directory
    Teams,
    /// Display a team's roster
    Roster {
        /// Team id (defaults to the configured default team)
        #[arg(short, long)]
        team: Option<i64>,
    },
    /// Display a player's bio and single-season stats
    Player {
        /// Player id (e.g. 8471214)
        player_id: i64,
    },
    /// Display current configuration
    Config,
}

#[cfg_attr(not(feature = "development"), allow(unused_variables))]
fn create_provider(cli: &Cli) -> Arc<dyn RosterDataProvider> {
    #[cfg(feature = "development")]
    if cli.mock {
        return Arc::new(nhl_roster::dev::MockClient::new());
    }

    match Client::new() {
        Ok(client) => Arc::new(client),
        Err(e) => {
            let error_msg = format!("Failed to create stats API client: {}", e);
            tracing::error!("{}", error_msg);
            eprintln!("{}", error_msg);
            std::process::exit(1);
        }
    }
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command() {
    let cfg = config::read();

    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!(
        "Configuration File: {} (Exists: {})",
        path_str,
        if exists { "yes" } else { "no" }
    );
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("default_team_id: {}", cfg.default_team_id);
    println!();
    println!("[theme]");
    println!("selection_fg: {:?}", cfg.theme.selection_fg);
    println!(
        "unfocused_selection_fg: {:?}{}",
        cfg.theme.unfocused_selection_fg(),
        if cfg.theme.unfocused_selection_fg.is_none() {
            " (auto: 50% darker)"
        } else {
            ""
        }
    );
    println!("error_fg: {:?}", cfg.theme.error_fg);
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Run TUI mode: fetch the team directory, then hand off to the runtime
///
/// The directory fetch happens before the terminal enters the alternate
/// screen; a failure here is fatal and the process never reaches
/// interactive state.
async fn run_tui_mode(
    client: Arc<dyn RosterDataProvider>,
    config: config::Config,
) -> Result<(), std::io::Error> {
    let teams = match client.teams().await {
        Ok(teams) => teams,
        Err(e) => {
            let error_msg = format!("Failed to fetch team directory: {}", e);
            tracing::error!("{}", error_msg);
            eprintln!("{}", error_msg);
            std::process::exit(1);
        }
    };

    tui::run(client, config, teams).await
}

/// Execute a CLI command by routing it to the appropriate command handler
async fn execute_command(
    client: &dyn RosterDataProvider,
    command: Commands,
    config: &config::Config,
) -> anyhow::Result<()> {
    match command {
        Commands::Config => unreachable!("Config command should be handled before execute_command"),
        Commands::Teams => commands::teams::run(client).await,
        Commands::Roster { team } => {
            let team_id = team.unwrap_or(config.default_team_id);
            commands::roster::run(client, team_id).await
        }
        Commands::Player { player_id } => commands::player::run(client, player_id).await,
    }
}

#[tokio::main]
async fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    // If no subcommand, run TUI
    if cli.command.is_none() {
        let client = create_provider(&cli);
        if let Err(e) = run_tui_mode(client, config).await {
            eprintln!("Error running TUI: {}", e);
            std::process::exit(1);
        }
        return;
    }

    let command = cli.command.clone().unwrap();

    // Handle Config command separately (doesn't need a client)
    if let Commands::Config = command {
        handle_config_command();
        return;
    }

    // Create client and execute command
    let client = create_provider(&cli);
    if let Err(e) = execute_command(client.as_ref(), command, &config).await {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
