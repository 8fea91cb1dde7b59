pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "soporte")]
#[command(about = "Soporte CLI - Command-line interface for the helpdesk API")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the API server")]
    Serve {
        #[arg(long, help = "Port to bind (overrides SOPORTE_API_PORT)")]
        port: Option<u16>,
    },

    #[command(about = "Configuration inspection")]
    Config {
        #[command(subcommand)]
        cmd: commands::config::ConfigCommands,
    },

    #[command(about = "Authentication and token utilities")]
    Auth {
        #[command(subcommand)]
        cmd: commands::auth::AuthCommands,
    },
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Serve { port } => crate::routes::serve(port).await,
        Commands::Config { cmd } => commands::config::run(cmd, cli.json).await,
        Commands::Auth { cmd } => commands::auth::run(cmd, cli.json).await,
    }
}
