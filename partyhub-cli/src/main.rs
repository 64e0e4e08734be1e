mod commands;
mod config;

use clap::{Parser, Subcommand};
use partyhub_core::DrawError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "partyhub")]
#[command(about = "Party Hub - lottery draws and mini-games in the terminal")]
#[command(version)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lottery draw commands
    #[command(subcommand)]
    Lottery(commands::LotteryCommands),

    /// Mini-game commands
    #[command(subcommand)]
    Games(commands::GameCommands),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "partyhub_cli={},partyhub_core={},partyhub_games={}",
            log_level, log_level, log_level
        )))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::CliConfig::default();

    // Execute command
    let result = match cli.command {
        Commands::Lottery(cmd) => commands::handle_lottery_command(cmd, &config).await,
        Commands::Games(cmd) => commands::handle_game_command(cmd, &config).await,
    };

    if let Err(e) = result {
        if let Some(draw_err) = e.downcast_ref::<DrawError>() {
            match draw_err {
                DrawError::InvalidCount(_) => {
                    eprintln!("Error: {}", draw_err);
                    eprintln!("Please enter a whole number of winners, at least 1.");
                }
                DrawError::NoParticipants => {
                    eprintln!("Error: {}", draw_err);
                    eprintln!("Add at least one participant before drawing winners.");
                }
                DrawError::TooManyWinners { .. } => {
                    eprintln!("Error: {}", draw_err);
                    eprintln!("Number of winners cannot exceed the number of participants.");
                }
            }
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}
