mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "formcheck")]
#[command(version, about = "Form validation engine CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a form definition file without validating values
    Check {
        /// Path to the definition file (YAML or TOML)
        definition: String,
    },

    /// Validate a JSON value document against a form schema
    Validate {
        /// Path to the JSON document with the submitted values
        values: String,

        /// Path to a definition file (YAML or TOML)
        #[arg(short, long, required_unless_present = "builtin", conflicts_with = "builtin")]
        schema: Option<String>,

        /// Name of a built-in form (see `formcheck forms`)
        #[arg(short, long)]
        builtin: Option<String>,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// List the built-in form schemas
    Forms,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    match cli.command {
        Commands::Check { definition } => commands::check::execute(&definition),

        Commands::Validate {
            values,
            schema,
            builtin,
            format,
        } => commands::validate::execute(&values, schema.as_deref(), builtin.as_deref(), &format),

        Commands::Forms => commands::forms::execute(),
    }
}
