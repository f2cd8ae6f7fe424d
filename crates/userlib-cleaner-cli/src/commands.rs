use clap::{Args, Parser, Subcommand};
use userlib_cleaner_core::ConfigOverrides;

#[derive(Debug, Parser)]
#[command(name = "userlib-cleaner")]
#[command(about = "Find and remove duplicate JARs in a userlib directory", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub run: RunArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Path to userlib
    #[arg(long, global = true)]
    pub target: Option<String>,

    /// Actually remove the duplicate JARs
    #[arg(long, global = true)]
    pub clean: bool,

    /// Show debug information
    #[arg(long, global = true)]
    pub verbose: bool,

    /// JAR parsing mode. Supported options: auto, strict
    #[arg(long, global = true)]
    pub mode: Option<String>,

    /// Skip the confirmation prompt before removing files
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,
}

impl RunArgs {
    /// Only flags that were actually passed override the configuration.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            target: self.target.clone(),
            clean: self.clean.then_some(true),
            verbose: self.verbose.then_some(true),
            mode: self.mode.clone(),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse all JARs, pick one per package and report or remove the rest (default)
    Process,
    /// Print the metadata resolved for each JAR without cleaning anything
    List,
    /// Print configuration values
    PrintConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_means_no_overrides() {
        let cli = Cli::parse_from(["userlib-cleaner"]);
        assert!(cli.command.is_none());
        let overrides = cli.run.overrides();
        assert_eq!(overrides.target, None);
        assert_eq!(overrides.clean, None);
        assert_eq!(overrides.verbose, None);
        assert_eq!(overrides.mode, None);
    }

    #[test]
    fn test_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "userlib-cleaner",
            "process",
            "--target",
            "/srv/app/userlib",
            "--clean",
            "--mode",
            "strict",
        ]);
        assert!(matches!(cli.command, Some(Commands::Process)));
        let overrides = cli.run.overrides();
        assert_eq!(overrides.target.as_deref(), Some("/srv/app/userlib"));
        assert_eq!(overrides.clean, Some(true));
        assert_eq!(overrides.mode.as_deref(), Some("strict"));
    }

    #[test]
    fn test_list_subcommand() {
        let cli = Cli::parse_from(["userlib-cleaner", "--verbose", "list"]);
        assert!(matches!(cli.command, Some(Commands::List)));
        assert!(cli.run.verbose);
    }
}
