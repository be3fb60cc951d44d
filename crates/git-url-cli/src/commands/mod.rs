pub mod parse;
pub mod protocols;

use anyhow::Result;
use clap::Subcommand;

use crate::Cli;

#[derive(Subcommand)]
pub enum Commands {
    /// Split git URLs into protocol, host, port, user, owner and name
    Parse(parse::ParseArgs),
    /// Print the protocols named in front of `://`
    Protocols(protocols::ProtocolsArgs),
}

pub fn run(cli: &Cli) -> Result<i32> {
    match &cli.command {
        Commands::Parse(args) => parse::run(args, cli),
        Commands::Protocols(args) => protocols::run(args, cli),
    }
}
