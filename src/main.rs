//! Mergington Activities: extracurricular signup server
//!
//! A single-process HTTP server holding the school's activities in memory.
//! Students list activities, sign up, and unregister. Nothing is persisted:
//! a restart returns every roster to the seed data.
//!
//! Usage:
//!   activities-server                              # Default port 8000
//!   activities-server --port 8080                  # Custom port
//!   activities-server --static-dir ./web           # Front-end from another directory
//!   activities-server --no-static                  # API only
//!   activities-server --seed-file activities.json  # Alternate seed data
//!   activities-server --enforce-capacity           # Reject signups when full

use std::path::PathBuf;

use activities_services::{CapacityPolicy, Directory, load_seed_file};
use activities_transport::{TransportConfig, TransportServer};
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "activities-server", about = "Mergington High School activities API")]
struct Cli {
    /// Port to listen on (0 for OS-assigned)
    #[arg(long, default_value = "8000")]
    port: u16,

    /// Hostname to bind to
    #[arg(long, default_value = "127.0.0.1")]
    hostname: String,

    /// Directory served under /static (the root path redirects to its index.html)
    #[arg(long, default_value = "static")]
    static_dir: PathBuf,

    /// Serve the API only, without the front-end
    #[arg(long)]
    no_static: bool,

    /// JSON file replacing the built-in activities
    #[arg(long)]
    seed_file: Option<PathBuf>,

    /// Reject signups once an activity reaches max_participants
    #[arg(long)]
    enforce_capacity: bool,

    /// Enable permissive CORS
    #[arg(long)]
    cors: bool,

    /// Enable verbose logging
    #[arg(long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,

    /// Write logs to a file (defaults to ~/.mergington/logs/activities.log if no path given)
    #[arg(long, default_missing_value = "DEFAULT", num_args = 0..=1)]
    log_file: Option<String>,
}

fn init_tracing(cli: &Cli) {
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let Some(ref log_file_arg) = cli.log_file else {
        if cli.json_logs {
            builder.json().init();
        } else {
            builder.init();
        }
        return;
    };

    let log_path = if log_file_arg == "DEFAULT" {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp"))
            .join(".mergington/logs/activities.log")
    } else {
        PathBuf::from(log_file_arg)
    };

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Failed to open log file {}: {e}", log_path.display());
            std::process::exit(1);
        }
    };

    let builder = builder
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false);
    if cli.json_logs {
        builder.json().init();
    } else {
        builder.init();
    }

    eprintln!("Logging to {}", log_path.display());
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    let policy = if cli.enforce_capacity {
        CapacityPolicy::Enforced
    } else {
        CapacityPolicy::Unenforced
    };

    let directory = match &cli.seed_file {
        Some(path) => match load_seed_file(path) {
            Ok(activities) => Directory::new(activities, policy),
            Err(e) => {
                error!("Failed to load seed data: {e}");
                std::process::exit(1);
            }
        },
        None => Directory::seeded(policy),
    };

    let static_dir = if cli.no_static {
        None
    } else if cli.static_dir.is_dir() {
        Some(cli.static_dir.clone())
    } else {
        warn!(
            "Static directory {} not found, serving the API only",
            cli.static_dir.display()
        );
        None
    };

    println!();
    println!("  Mergington High School Activities");
    println!();
    println!("  Activities: {}", directory.len());
    match &cli.seed_file {
        Some(path) => println!("  Seed:       {}", path.display()),
        None => println!("  Seed:       built-in"),
    }
    match policy {
        CapacityPolicy::Enforced => println!("  Capacity:   enforced"),
        CapacityPolicy::Unenforced => println!("  Capacity:   not enforced"),
    }
    match &static_dir {
        Some(dir) => println!("  Static:     {}", dir.display()),
        None => println!("  Static:     disabled"),
    }
    println!();

    let config = TransportConfig {
        port: cli.port,
        hostname: cli.hostname.clone(),
        enable_cors: cli.cors,
        static_dir,
    };

    let mut transport = match TransportServer::start(config, directory).await {
        Ok(t) => t,
        Err(e) => {
            error!("Failed to start server: {e}");
            std::process::exit(1);
        }
    };

    println!("  Server running on http://{}:{}", cli.hostname, transport.port());
    println!("  Press Ctrl+C to stop.");
    println!();

    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
    }

    info!("Shutdown requested");
    transport.stop().await;
    println!("  Server stopped.");
}
