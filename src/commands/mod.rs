pub mod add;
pub mod apps;
pub mod init;
pub mod list;
pub mod remove;
pub mod settings;
pub mod stats;
pub mod watch;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure tracking settings interactively")]
    Init,
    #[command(about = "Start tracking an application")]
    Add(add::AddArgs),
    #[command(about = "Stop tracking an application and delete its streak", arg_required_else_help = true)]
    Remove(remove::RemoveArgs),
    #[command(about = "List tracked applications")]
    List,
    #[command(about = "Show current and longest streaks")]
    Stats,
    #[command(about = "Show or change tracking settings")]
    Settings(settings::SettingsArgs),
    #[command(about = "List running applications")]
    Apps,
    #[command(about = "Track application usage until interrupted")]
    Watch,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Add(args) => add::cmd(args),
            Commands::Remove(args) => remove::cmd(args),
            Commands::List => list::cmd(),
            Commands::Stats => stats::cmd(),
            Commands::Settings(args) => settings::cmd(args),
            Commands::Apps => apps::cmd(),
            Commands::Watch => watch::cmd().await,
        }
    }
}
