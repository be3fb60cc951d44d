use std::io::{self, Write};

use anyhow::Result;
use clap::Args;
use git_url::extract_protocols;

use crate::{Cli, Format};

#[derive(Args)]
pub struct ProtocolsArgs {
    /// URLs to inspect
    #[arg(required = true)]
    urls: Vec<String>,
}

pub fn run(args: &ProtocolsArgs, cli: &Cli) -> Result<i32> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for url in &args.urls {
        let protocols = extract_protocols(url);
        match cli.format {
            // Empty line for SCP-like input.
            Format::Text => writeln!(out, "{}", protocols.join("+"))?,
            Format::Json => writeln!(out, "{}", serde_json::to_string(&protocols)?)?,
        }
    }

    Ok(0)
}
