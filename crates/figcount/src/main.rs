//! Command-line entry point for the `figcount` tool.
//!
//! Enumerates discrete figures for each selected connectivity and prints a
//! report section per selection.

use std::process;

use clap::Parser;
use clap::error::ErrorKind;
use figgen::registry::{CONNECTIVITY_TOKENS, Connectivity};

/// Run orchestration for one connectivity selection.
mod cmd;
/// Report section formatting.
mod report;

/// Validate a connectivity token against the supported set.
fn parse_connectivity(s: &str) -> Result<Connectivity, String> {
    Connectivity::from_token(s).map_err(|err| err.to_string())
}

#[derive(Parser)]
#[command(name = "figcount")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Count discrete figures (polyominoes) by size under configurable connectivity")]
/// Top-level CLI options.
struct Cli {
    #[arg(
        required = true,
        value_parser = parse_connectivity,
        help = &format!(
            "Connectivity selections; first digit constrains the figure, second the \
             background, 0 disables it (options: {})",
            CONNECTIVITY_TOKENS.join(", ")
        )
    )]
    /// Connectivity selections to enumerate, in order.
    connectivities: Vec<Connectivity>,

    #[arg(
        short = 'n',
        value_name = "K",
        required = true,
        value_parser = clap::value_parser!(u32).range(1..=figgen::NMAX as i64),
        help = "Maximum figure size to enumerate"
    )]
    /// Maximum figure size, bounded by the build-time constant.
    max_size: u32,

    #[arg(
        long = "stat",
        conflicts_with = "mt",
        help = "Collect generation statistics (slower; offline analysis only)"
    )]
    /// Enable the statistics counters.
    stat: bool,

    #[arg(
        long = "alt",
        conflicts_with = "mt",
        help = "Drive the enumeration stepwise instead of with the callback sweep"
    )]
    /// Use the stepwise driver.
    alt: bool,

    #[arg(long = "mt", help = "Enumerate on a thread pool")]
    /// Use the parallel driver.
    mt: bool,
}

fn main() {
    let cli = Cli::try_parse().unwrap_or_else(|err| {
        if err.kind() == ErrorKind::UnknownArgument {
            eprintln!("Unrecognized argument.");
        }
        let _ = err.print();
        process::exit(1);
    });

    let flags = cmd::RunFlags {
        stat: cli.stat,
        alt: cli.alt,
        mt: cli.mt,
    };

    for conn in cli.connectivities {
        match cmd::run(conn, cli.max_size, &flags) {
            Ok(section) => print!("{section}"),
            Err(err) => {
                eprintln!("{err}");
                process::exit(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_tokens() {
        assert_eq!(parse_connectivity("40").unwrap(), Connectivity::C40);
        assert_eq!(parse_connectivity("88").unwrap(), Connectivity::C88);
        assert!(parse_connectivity("42").is_err());
    }

    #[test]
    fn accepts_attached_size_argument() {
        let cli = Cli::try_parse_from(["figcount", "44", "-n8"]).unwrap();
        assert_eq!(cli.max_size, 8);
        assert_eq!(cli.connectivities, vec![Connectivity::C44]);
    }

    #[test]
    fn rejects_incompatible_flags() {
        assert!(Cli::try_parse_from(["figcount", "40", "-n5", "--mt", "--stat"]).is_err());
        assert!(Cli::try_parse_from(["figcount", "40", "-n5", "--mt", "--alt"]).is_err());
        assert!(Cli::try_parse_from(["figcount", "40", "-n5", "--stat", "--alt"]).is_ok());
    }

    #[test]
    fn requires_a_connectivity_and_a_size() {
        assert!(Cli::try_parse_from(["figcount", "-n5"]).is_err());
        assert!(Cli::try_parse_from(["figcount", "40"]).is_err());
        assert!(Cli::try_parse_from(["figcount", "40", "-n0"]).is_err());
        assert!(Cli::try_parse_from(["figcount", "40", "-n99"]).is_err());
    }
}
