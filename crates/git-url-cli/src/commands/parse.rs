use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use git_url::{Matcher, ParsedUrl};

use crate::{Cli, Format};

/// A single field of the parsed record, in record order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Field {
    Pathname,
    Protocols,
    Protocol,
    Href,
    Resource,
    User,
    Port,
    Name,
    Owner,
}

impl Field {
    const ALL: [Field; 9] = [
        Field::Pathname,
        Field::Protocols,
        Field::Protocol,
        Field::Href,
        Field::Resource,
        Field::User,
        Field::Port,
        Field::Name,
        Field::Owner,
    ];

    fn label(self) -> &'static str {
        match self {
            Field::Pathname => "pathname",
            Field::Protocols => "protocols",
            Field::Protocol => "protocol",
            Field::Href => "href",
            Field::Resource => "resource",
            Field::User => "user",
            Field::Port => "port",
            Field::Name => "name",
            Field::Owner => "owner",
        }
    }

    /// Value of this field, `None` when absent. An empty protocol list counts
    /// as absent.
    fn value(self, url: &ParsedUrl) -> Option<String> {
        match self {
            Field::Pathname => url.pathname.clone(),
            Field::Protocols if url.protocols.is_empty() => None,
            Field::Protocols => Some(url.protocols.join(",")),
            Field::Protocol => Some(url.protocol.clone()),
            Field::Href => Some(url.href.clone()),
            Field::Resource => url.resource.clone(),
            Field::User => url.user.clone(),
            Field::Port => url.port.clone(),
            Field::Name => url.name.clone(),
            Field::Owner => url.owner.clone(),
        }
    }
}

#[derive(Args)]
pub struct ParseArgs {
    /// Print only this field for each URL
    #[arg(long, value_enum)]
    field: Option<Field>,

    /// Read URLs from a file, one per line
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Read URLs from standard input, one per line
    #[arg(long)]
    stdin: bool,

    /// URLs to parse
    urls: Vec<String>,
}

pub fn run(args: &ParseArgs, cli: &Cli) -> Result<i32> {
    let urls = collect_urls(args)?;
    if urls.is_empty() {
        bail!("no URL given");
    }
    tracing::debug!(count = urls.len(), "parsing URLs");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failed = false;
    let mut printed = 0usize;

    for url in &urls {
        let parsed = match ParsedUrl::parse(url) {
            Ok(parsed) => parsed,
            Err(e) => {
                eprintln!("error: {e}");
                failed = true;
                continue;
            }
        };

        if let Some(field) = args.field {
            writeln!(out, "{}", field.value(&parsed).unwrap_or_default())?;
            continue;
        }

        match cli.format {
            Format::Json => writeln!(out, "{}", serde_json::to_string(&parsed)?)?,
            Format::Text => {
                if printed > 0 {
                    writeln!(out)?;
                }
                write_text(&mut out, &parsed, cli.verbose)?;
            }
        }
        printed += 1;
    }

    Ok(if failed { 1 } else { 0 })
}

/// Positional URLs first, then `--file`, then `--stdin`.
fn collect_urls(args: &ParseArgs) -> Result<Vec<String>> {
    let mut urls = args.urls.clone();

    if let Some(ref path) = args.file {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read '{}'", path.display()))?;
        urls.extend(url_lines(&content));
    }

    if args.stdin {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("cannot read standard input")?;
        urls.extend(url_lines(&content));
    }

    Ok(urls)
}

fn url_lines(content: &str) -> impl Iterator<Item = String> + '_ {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
}

fn write_text(out: &mut impl Write, url: &ParsedUrl, verbose: bool) -> io::Result<()> {
    for field in Field::ALL {
        let value = field.value(url);
        writeln!(out, "{}: {}", field.label(), value.as_deref().unwrap_or("-"))?;
    }
    if verbose {
        if let Some(matcher) = Matcher::find(&url.href) {
            writeln!(out, "matcher: {matcher}")?;
        }
    }
    Ok(())
}
