mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands};

// Re-export from lib for internal use
use morse_encoder::error;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "morse_encoder=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Encode {
            input,
            output,
            parallel,
            format,
        } => cli::encode(&cli.table, input, output, parallel, &format),
        Commands::Table { format } => cli::show_table(&cli.table, &format),
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        eprintln!("{}", e.operator_message());
        std::process::exit(1);
    }

    Ok(())
}
