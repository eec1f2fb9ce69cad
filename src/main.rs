// Copyright (c) 2024 Nexero. All rights reserved.

mod api;
mod config;
mod consts;
mod data_source;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod mock;
mod models;
mod pretty;
mod runtime;
mod session;
mod ui;
mod workers;

use crate::config::{Config, get_config_path};
use crate::data_source::DataSource;
use crate::environment::Environment;
use crate::models::{DataOrigin, WindowSize};
use crate::pretty::{handle_cmd_error, print_banner, print_cmd_error, print_cmd_info};
use crate::session::{build_data_source, run_headless_mode, run_tui_mode, setup_session};
use crate::ui::dashboard::ViewSynchronizer;
use crate::ui::dashboard::table::{ActionTable, COLUMNS, SessionTable, TableRow};
use crate::ui::theme::{ConfigThemeStore, ThemeController, ThemeMode, ThemeStore};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Analytics dashboard for VR property tours
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the dashboard
    Start {
        /// Trailing window in days: 7, 30, 90 or 365
        #[arg(long, value_parser = parse_window)]
        days: Option<WindowSize>,

        /// Use generated demo data instead of a backend
        #[arg(long, conflicts_with = "api_url")]
        mock: bool,

        /// Analytics API base URL, e.g. http://localhost:8000/api/v1
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,

        /// Print events to the console instead of drawing the dashboard
        #[arg(long = "headless", action = clap::ArgAction::SetTrue)]
        headless: bool,

        /// Fill panels with the theme's surface color
        #[arg(long = "with-background", action = clap::ArgAction::SetTrue)]
        with_background: bool,
    },
    /// Fetch one snapshot and print its KPIs and sessions
    Snapshot {
        /// Trailing window in days: 7, 30, 90 or 365
        #[arg(long, value_parser = parse_window)]
        days: Option<WindowSize>,

        /// Use generated demo data instead of a backend
        #[arg(long, conflicts_with = "api_url")]
        mock: bool,

        /// Analytics API base URL, e.g. http://localhost:8000/api/v1
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,

        /// Read the table from the sessions endpoint instead of the snapshot
        #[arg(long, action = clap::ArgAction::SetTrue)]
        sessions: bool,
    },
    /// Show or set the saved theme
    Theme {
        /// light or dark; omit to print the current theme
        #[arg(value_parser = parse_theme)]
        mode: Option<ThemeMode>,
    },
}

fn parse_window(s: &str) -> Result<WindowSize, String> {
    s.parse::<u32>()
        .ok()
        .and_then(WindowSize::from_days)
        .ok_or_else(|| format!("unsupported window '{}', expected 7, 30, 90 or 365", s))
}

fn parse_theme(s: &str) -> Result<ThemeMode, String> {
    s.parse::<ThemeMode>()
        .map_err(|_| format!("unknown theme '{}', expected light or dark", s))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let nexero_environment_str = std::env::var("NEXERO_ENVIRONMENT").unwrap_or_default();
    let environment = nexero_environment_str
        .parse::<Environment>()
        .unwrap_or(Environment::default());

    // Without a home directory the dashboard still runs on defaults; only the
    // theme command needs the file.
    let config_path = get_config_path();
    let config = match &config_path {
        Ok(path) => Config::load_or_default(path).unwrap_or_else(|e| {
            log::warn!("Ignoring unreadable config {}: {}", path.display(), e);
            Config::default()
        }),
        Err(e) => {
            log::warn!("Using default settings: {}", e);
            Config::default()
        }
    };
    // An explicit --days wins over the saved default.
    let resolve_window = |days: Option<WindowSize>| {
        days.or_else(|| config.default_days.and_then(WindowSize::from_days))
            .unwrap_or_default()
    };

    let args = Args::parse();
    match args.command {
        Command::Start {
            days,
            mock,
            api_url,
            headless,
            with_background,
        } => {
            let window = resolve_window(days);
            let session = setup_session(environment, api_url, mock, window.days())
                .await
                .map_err(|e| handle_cmd_error!(e, "Failed to start the dashboard."))?;
            if headless {
                print_banner();
                run_headless_mode(session).await
            } else {
                run_tui_mode(session, window, with_background).await
            }
        }
        Command::Snapshot {
            days,
            mock,
            api_url,
            sessions,
        } => {
            let (source, label) = build_data_source(&environment, api_url, mock)?;
            print_snapshot(&source, &label, resolve_window(days), sessions).await;
            Ok(())
        }
        Command::Theme { mode } => {
            let config_path = config_path.map_err(|e| {
                print_cmd_error!("Cannot locate the config file.", "{}", e);
                e
            })?;
            let store = ConfigThemeStore::new(config_path);
            match mode {
                Some(mode) => {
                    store.save(mode).map_err(|e| {
                        print_cmd_error!("Failed to save theme.", "{}", e);
                        e
                    })?;
                    println!("Theme set to {}", mode);
                }
                None => {
                    let controller = ThemeController::init(Box::new(store));
                    println!("Current theme: {}", controller.mode());
                }
            }
            Ok(())
        }
    }
}

/// Fetches one snapshot and prints it the way the dashboard would show it.
async fn print_snapshot(source: &DataSource, label: &str, window: WindowSize, from_sessions: bool) {
    println!("Reading {} from {}", window, label);

    let (analytics, sessions) = futures::future::join(
        source.fetch_analytics(window.days()),
        async {
            if from_sessions {
                Some(source.fetch_sessions(window.days()).await)
            } else {
                None
            }
        },
    )
    .await;

    if let Some(fallback) = &analytics.fallback {
        print_cmd_info!("Backend unavailable", "{}", fallback.reason);
    }
    let origin = analytics.origin();
    let mut synchronizer = ViewSynchronizer::new();
    synchronizer.synchronize(analytics.value(), origin);

    if origin == DataOrigin::Demo {
        println!("** DEMO DATA **");
    }
    for (name, value) in synchronizer.kpis().cards() {
        println!("{:<18} {}", name, value);
    }
    println!();

    let table = match sessions {
        Some(sessions) => {
            if let Some(fallback) = &sessions.fallback {
                print_cmd_info!("Sessions unavailable", "{}", fallback.reason);
            }
            SessionTable::build(sessions.value(), &mut ActionTable::default())
        }
        None => synchronizer.table().clone(),
    };
    print_table(&table);
}

fn print_table(table: &SessionTable) {
    println!(
        "{:<10} {:<18} {:<14} {:<9} {:<10} {}",
        COLUMNS[0], COLUMNS[1], COLUMNS[2], COLUMNS[3], COLUMNS[4], COLUMNS[5]
    );
    for row in table.rows() {
        match row {
            TableRow::Placeholder { message, .. } => println!("{}", message),
            TableRow::Session(s) => println!(
                "{:<10} {:<18} {:<14} {:<9} {:<10} {}",
                s.id, s.property, s.start_time, s.duration, s.status, s.action
            ),
        }
    }
}
