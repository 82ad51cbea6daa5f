use clap::Parser;
use eyre::Result;
use starknet_scripts::{
    cli::{CliArgs, Commands},
    commands::{deploy::deploy_and_configure, encode::encode_calldata},
};
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    match CliArgs::parse().command {
        Commands::Deploy(args) => deploy_and_configure(args).await?,
        Commands::Encode(args) => encode_calldata(args)?,
    };

    Ok(())
}
