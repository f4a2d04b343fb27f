use crate::error::CliError;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pax-cli")]
#[command(about = "Command line interface tool for exporting PlentyMarkets attribute data")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true)]
    pub config_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Authentication commands
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Export attribute identifiers and translations
    Export(ExportArgs),
}

#[derive(Subcommand, Debug)]
pub enum AuthCommands {
    /// Verify credentials against the backend and store them
    Login,
    /// Remove the stored credentials
    Logout,
    /// Show authentication status
    Status,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Set configuration value
    Set {
        /// Configuration key
        key: String,
        /// Configuration value
        value: String,
    },
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Pull all variations / a whole item / a single variation
    #[arg(short, long, value_enum, default_value = "all")]
    pub scope: ScopeArg,

    /// Item ID for the scope=item option
    #[arg(short, long)]
    pub item: Option<u64>,

    /// Variation ID for the scope=variation option
    #[arg(long = "var")]
    pub variation: Option<u64>,

    /// Language to be exported from PlentyMarkets
    #[arg(short, long, value_enum, default_value = "en")]
    pub lang: Lang,

    /// Do not write a file but print to the console instead
    #[arg(short = 'o', long)]
    pub stdout: bool,

    /// Write the CSV to this path instead of a generated name
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl ExportArgs {
    /// Check that the scope has its required id argument.
    pub fn validate(&self) -> Result<(), CliError> {
        match self.scope {
            ScopeArg::Item if self.item.is_none() => Err(CliError::InvalidArguments(
                "The scope=item option requires: [-i/--item]".to_string(),
            )),
            ScopeArg::Variation if self.variation.is_none() => Err(CliError::InvalidArguments(
                "The scope=variation option requires: [--var]".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScopeArg {
    All,
    Item,
    Variation,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lang {
    En,
    Fr,
    It,
    Es,
}

impl Lang {
    /// Language code as used by the names route.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Fr => "fr",
            Lang::It => "it",
            Lang::Es => "es",
        }
    }
}
