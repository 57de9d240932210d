//! CLI module for ideagen
//!
//! Without a subcommand the desktop window opens. Subcommands run headless.

mod commands;
mod output;

use clap::{Parser, Subcommand};

pub use output::{print_error, OutputFormat};

/// ideagen - Business Idea Generator
#[derive(Parser, Debug)]
#[command(name = "ideagen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[command(flatten)]
    pub output: OutputOptions,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output formatting options
#[derive(Parser, Debug, Clone)]
pub struct OutputOptions {
    /// Output in JSON format (for machine parsing)
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress confirmation messages; a fetched idea or error is always printed
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl OutputOptions {
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch one idea from the backend and print it
    Fetch(commands::fetch::FetchArgs),

    /// Configuration management
    Config {
        #[command(subcommand)]
        command: commands::config::ConfigCommands,
    },
}

/// Run a headless subcommand
pub async fn run(command: Commands, output: &OutputOptions) -> anyhow::Result<()> {
    let format = output.format();
    let quiet = output.quiet;

    match command {
        Commands::Fetch(args) => commands::fetch::run(args, format).await,
        Commands::Config { command } => commands::config::run(command, format, quiet).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_opens_window() {
        let cli = Cli::try_parse_from(["ideagen"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.output.format(), OutputFormat::Text);
    }

    #[test]
    fn test_fetch_with_origin_and_json() {
        let cli = Cli::try_parse_from(["ideagen", "fetch", "--origin", "http://localhost:9000", "--json"])
            .unwrap();
        assert_eq!(cli.output.format(), OutputFormat::Json);
        match cli.command {
            Some(Commands::Fetch(args)) => {
                assert_eq!(args.origin.as_deref(), Some("http://localhost:9000"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_quiet_is_global_but_fetch_still_reports() {
        let cli = Cli::try_parse_from(["ideagen", "fetch", "-q"]).unwrap();
        assert!(cli.output.quiet);
        assert!(matches!(cli.command, Some(Commands::Fetch(_))));
    }

    #[test]
    fn test_config_set_parses() {
        let cli = Cli::try_parse_from(["ideagen", "config", "set", "auth.require_sign_in", "true"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                command: commands::config::ConfigCommands::Set { .. }
            })
        ));
    }
}
