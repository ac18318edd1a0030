#![forbid(unsafe_code)]
//! readmecraft Command Line Interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use readmecraft::commands::{
    execute_blocks, execute_generate, execute_init, execute_prefs, execute_watch, BlocksOptions,
    GenerateOptions, InitOptions, PrefsOptions, PrefsSubcommand, WatchOptions,
};
use readmecraft::config::CONFIG_FILE;
use readmecraft::{Config, Language};

#[derive(Parser)]
#[command(name = "readmecraft")]
#[command(about = "Compose a GitHub profile README from toggleable, localized blocks")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Preference store path (defaults to the user config directory)
    #[arg(long, global = true, env = "READMECRAFT_PREFERENCES")]
    preferences: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter profile document and config
    Init {
        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,

        /// Skip interactive prompts
        #[arg(short = 'y', long)]
        yes: bool,

        /// Profile document to create
        #[arg(short, long)]
        profile: Option<PathBuf>,
    },

    /// Compose the README from the profile document
    Generate {
        #[command(flatten)]
        args: GenerateArgs,

        /// Print to stdout instead of writing the output file
        #[arg(long, conflicts_with_all = ["diff", "check"])]
        stdout: bool,

        /// Show a unified diff against the existing output file
        #[arg(long)]
        diff: bool,

        /// Exit non-zero when the output file is out of date
        #[arg(long)]
        check: bool,
    },

    /// List blocks with their localized titles
    Blocks {
        /// Profile document
        #[arg(short, long)]
        profile: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Title language (zh, en)
        #[arg(long)]
        lang: Option<Language>,
    },

    /// Regenerate the README whenever the profile document changes
    Watch {
        #[command(flatten)]
        args: GenerateArgs,
    },

    /// Show or change stored preferences
    Prefs {
        #[command(subcommand)]
        cmd: PrefsCommands,
    },
}

#[derive(clap::Args)]
struct GenerateArgs {
    /// Profile document (YAML or JSON)
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// Output file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output language (zh, en)
    #[arg(long)]
    lang: Option<Language>,

    /// Enable a block by id (can specify multiple)
    #[arg(long)]
    enable: Vec<String>,

    /// Disable a block by id (can specify multiple)
    #[arg(long)]
    disable: Vec<String>,
}

#[derive(Subcommand)]
enum PrefsCommands {
    /// Print stored preferences
    Show,

    /// Set a preference (language, theme)
    Set {
        /// Preference key
        key: String,
        /// New value
        value: String,
    },

    /// Flip a preference to its other value
    Toggle {
        /// Preference key
        key: String,
    },
}

impl GenerateArgs {
    fn into_options(self, preferences: Option<PathBuf>) -> GenerateOptions {
        GenerateOptions {
            profile: self.profile,
            output: self.output,
            lang: self.lang,
            enable: self.enable,
            disable: self.disable,
            preferences,
            ..Default::default()
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "readmecraft=debug" } else { "readmecraft=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(&cli.config)?;

    match cli.command {
        Commands::Init { force, yes, profile } => {
            let options = InitOptions {
                force,
                yes,
                profile,
                config_path: Some(cli.config),
            };
            execute_init(options)?;
        }

        Commands::Generate {
            args,
            stdout,
            diff,
            check,
        } => {
            let options = GenerateOptions {
                stdout,
                diff,
                check,
                ..args.into_options(cli.preferences)
            };
            execute_generate(options, &config)?;
        }

        Commands::Blocks {
            profile,
            json,
            lang,
        } => {
            let options = BlocksOptions {
                profile,
                json,
                lang,
                preferences: cli.preferences,
            };
            execute_blocks(options, &config)?;
        }

        Commands::Watch { args } => {
            let options = WatchOptions {
                generate: args.into_options(cli.preferences),
            };
            execute_watch(options, &config)?;
        }

        Commands::Prefs { cmd } => {
            let subcommand = match cmd {
                PrefsCommands::Show => PrefsSubcommand::Show,
                PrefsCommands::Set { key, value } => PrefsSubcommand::Set { key, value },
                PrefsCommands::Toggle { key } => PrefsSubcommand::Toggle { key },
            };
            execute_prefs(PrefsOptions {
                subcommand,
                path: cli.preferences,
            })?;
        }
    }

    Ok(())
}
