//! Matchday CLI - Database migrations and provisioning tools.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! matchday-cli migrate
//!
//! # Provision an admin credential (admins are never self-registered)
//! matchday-cli admin create -u gatekeeper -p <password>
//!
//! # Seed demo registrants
//! matchday-cli seed --count 15
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `admin create` - Provision admin credentials
//! - `seed` - Seed the database with demo registrants

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "matchday-cli")]
#[command(version, about = "Matchday CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Manage admin credentials
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Seed the database with demo registrants
    Seed {
        /// Number of registrants to insert
        #[arg(short, long, default_value_t = 15)]
        count: u32,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Provision a new admin credential
    Create {
        /// Admin username
        #[arg(short, long)]
        username: String,

        /// Admin password
        #[arg(short, long)]
        password: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Admin { action } => match action {
            AdminAction::Create { username, password } => {
                commands::admin::create(&username, &password).await?;
            }
        },
        Commands::Seed { count } => commands::seed::registrants(count).await?,
    }
    Ok(())
}
