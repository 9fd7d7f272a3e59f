//! relm - install and switch versions of released binaries

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use relm_cli::{Cli, Commands, Context, cmd};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let ctx = Context::new(&cli)?;
    tracing::debug!("{ctx:?}");

    match cli.command {
        Commands::List => cmd::list::list(&ctx).await,
        Commands::Versions { product } => cmd::versions::versions(&ctx, &product).await,
        Commands::Download { product, version } => {
            cmd::download::download(&ctx, &product, &version).await
        }
        Commands::Install { product, version } => {
            cmd::install::install(&ctx, &product, &version).await
        }
        Commands::Use { product, version } => {
            cmd::r#use::use_version(&ctx, &product, &version).await
        }
        Commands::Current { name } => cmd::current::current(&ctx, &name),
    }
}
