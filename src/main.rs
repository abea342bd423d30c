//! DesignDeck - a terminal client for AI-generated system designs
//!
//! This is the binary entry point. All logic lives in the crates.

use clap::Parser;
use color_eyre::eyre::WrapErr;

use ddeck_client::{HttpGateway, SessionContext};

/// DesignDeck - generate and browse system architecture designs
#[derive(Parser, Debug)]
#[command(name = "ddeck")]
#[command(about = "A terminal client for AI-generated system architecture designs", long_about = None)]
struct Args {
    /// Base URL of the design service API
    #[arg(long, default_value = "http://localhost:8080/api/v1")]
    base_url: String,

    /// Bearer token for this run only; overrides the persisted session
    #[arg(long)]
    token: Option<String>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    ddeck_core::logging::init().wrap_err("failed to initialize logging")?;

    let session = match args.token {
        Some(token) => SessionContext::in_memory(Some(token)),
        None => SessionContext::load(),
    };
    let authenticated = session.is_authenticated();

    let gateway = HttpGateway::new(&args.base_url, session)
        .wrap_err("failed to construct the design service gateway")?;

    ddeck_tui::run(gateway, authenticated)
        .await
        .wrap_err("terminal session ended with an error")
}
