use calver::prelude::*;
use calver::DEFAULT_MODIFIER;
use clap::{Args, CommandFactory, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const EXAMPLES: &str = "\
Examples, run on 2020-12-20:
  $ calver 2020.12.20
  2020.12.20-1

  $ calver 2020.12.20-1
  2020.12.20-2

  $ calver --pre-release 2020.12.20-2
  2020.12.20-dev.3

  $ calver --format YYYY.0W 2019.01
  2020.51

  $ calver --format YY.MM 19.01
  20.12

For more information about Calendar Versioning, please visit https://calver.org";

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("{0}")]
    Version(#[from] VersionError),

    #[error("{0}")]
    Date(#[from] DateError),

    #[error("{usage}")]
    MissingVersion { usage: String },
}

/// Where today's date comes from.
#[derive(Debug, Clone, Copy)]
enum DateProvider {
    Local,
    Utc,
    Explicit(Date),
}

impl Clock for DateProvider {
    fn today(&self) -> Date {
        match self {
            DateProvider::Local => LocalClock.today(),
            DateProvider::Utc => UtcClock.today(),
            DateProvider::Explicit(date) => *date,
        }
    }
}

#[derive(Args, Debug)]
#[group(required = false, multiple = false)]
struct DateArg {
    /// [DATE PROVIDER] Use the current local date. This is the default. Exclusive with other date
    /// providers.
    #[arg(long)]
    local: bool,

    /// [DATE PROVIDER] Use the current UTC date. Exclusive with other date providers.
    #[arg(long)]
    utc: bool,

    /// [DATE PROVIDER] Use a date in format `YYYY-MM-DD`. Exclusive with other date providers.
    #[arg(long, value_name = "YYYY-MM-DD")]
    date: Option<String>,
}

impl DateArg {
    fn to_provider(&self) -> Result<DateProvider, CliError> {
        // this struct acts like an enumeration since multiple is false
        if self.utc {
            return Ok(DateProvider::Utc);
        }
        if let Some(date) = &self.date {
            return Ok(DateProvider::Explicit(date.parse()?));
        }
        Ok(DateProvider::Local)
    }
}

/// calver is a small utility to handle calendar versioning.
///
/// Prints the version that follows VERSION today: a fresh date-derived version on a new day, or
/// the same version with a bumped increment when one was already released today.
#[derive(Parser, Debug)]
#[command(author, version, about, after_help = EXAMPLES)]
struct Cli {
    /// Format to parse the provided version
    #[arg(long, default_value = "YYYY.MM.DD", env = "CALVER_FORMAT")]
    format: String,

    /// Modifier for pre-release versions
    #[arg(long, default_value = DEFAULT_MODIFIER, env = "CALVER_MODIFIER")]
    modifier: String,

    /// Create a pre-release
    #[arg(long)]
    pre_release: bool,

    #[command(flatten)]
    date: DateArg,

    /// The current version, or the format itself if nothing has been released yet
    #[arg(value_name = "VERSION")]
    current: Option<String>,
}

fn main() {
    let filter = EnvFilter::try_from_env("CALVER_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => {
            println!("{output}");
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<String, CliError> {
    let Some(current) = cli.current else {
        return Err(CliError::MissingVersion {
            usage: Cli::command().render_help().to_string(),
        });
    };

    let kind = if cli.pre_release {
        ReleaseKind::PreRelease
    } else {
        ReleaseKind::Release
    };
    let provider = cli.date.to_provider()?;
    debug!(?provider, ?kind, "bumping {current}");

    Ok(calver::next_version(
        &current,
        &cli.format,
        &cli.modifier,
        kind,
        &provider,
    )?)
}
