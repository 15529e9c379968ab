mod cli;

use crate::cli::Cli;
use anyhow::Result;
use clap::Parser;
use dropbox_diff::compare::write_report;
use dropbox_diff::token::read_token;
use dropbox_diff::{local, missing_locally_in_remote, DropboxClient};
use std::path::Path;
use tracing::{error, info, Level};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Cli::parse();

    let level = if args.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(args).await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(args: Cli) -> Result<()> {
    args.validate()?;

    info!("Comparing Dropbox ({}) to local ({})...", args.dropbox, args.local);

    let token = read_token(&args.token_file)?;
    let client = DropboxClient::with_base_url(reqwest::Client::new(), &args.api_url);
    let remote = client
        .list(&args.dropbox, &token, &args.listing_options())
        .await?;
    info!("Dropbox folder {} has {} entries", args.dropbox, remote.len());

    let local_entries = local::read_dir(&args.local)?;
    let missing = missing_locally_in_remote(&remote, &local_entries);
    write_report(std::io::stdout().lock(), Path::new(&args.local), &missing)?;

    info!("Done");
    Ok(())
}
