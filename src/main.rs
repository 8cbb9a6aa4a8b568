use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use snipforge::config::Config;

mod cli;

#[derive(Parser)]
#[command(name = "snipforge")]
#[command(about = "Turn editor selections into user snippets")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.snipforge/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a snippet from a selection read from a file or stdin
    Create {
        /// Read the selection from this file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Language id (skips the language prompt)
        #[arg(short, long)]
        language: Option<String>,

        /// Snippet name (skips the name prompt)
        #[arg(long)]
        name: Option<String>,

        /// Snippet shortcut (skips the shortcut prompt)
        #[arg(long)]
        shortcut: Option<String>,

        /// Snippet description (skips the description prompt)
        #[arg(long)]
        description: Option<String>,
    },

    /// List the snippets stored for a language
    List {
        /// Language id
        language: String,

        /// Print the snippets file as JSON
        #[arg(long)]
        json: bool,
    },

    /// Strip comments from a JSONC file and print the result
    Strip {
        /// Input file (defaults to stdin)
        file: Option<PathBuf>,

        /// Delete comments instead of blanking them with spaces
        #[arg(long)]
        no_whitespace: bool,
    },

    /// Show where config and snippet files are looked up
    Paths {
        /// Also show the snippets file for this language
        #[arg(short, long)]
        language: Option<String>,
    },

    /// Accept snippets from editor extensions over HTTP
    Serve {
        /// Port to listen on (overrides the config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Write a default ~/.snipforge/config.toml
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.clone();

    match cli.command {
        Commands::Create {
            file,
            language,
            name,
            shortcut,
            description,
        } => {
            let config = Config::load(config_path.as_deref())?;
            let args = cli::create::CreateArgs {
                file,
                language,
                name,
                shortcut,
                description,
            };
            cli::create::create_command(&config, args).await?;
        }
        Commands::List { language, json } => {
            let config = Config::load(config_path.as_deref())?;
            cli::list::list_command(&config, &language, json).await?;
        }
        Commands::Strip {
            file,
            no_whitespace,
        } => {
            cli::strip::strip_command(file.as_deref(), !no_whitespace).await?;
        }
        Commands::Paths { language } => {
            let config = Config::load(config_path.as_deref())?;
            cli::paths::paths_command(&config, config_path.as_deref(), language.as_deref())?;
        }
        Commands::Serve { port } => {
            let config = Config::load(config_path.as_deref())?;
            cli::serve::serve_command(config, port).await?;
        }
        Commands::Init { force } => {
            cli::init::init_command(config_path.as_deref(), force)?;
        }
    }

    Ok(())
}
