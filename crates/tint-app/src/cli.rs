use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// tint: resolve and validate terminal color specifications.
#[derive(Parser, Debug)]
#[command(name = "tint", version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Emit JSON instead of tab-separated lines.
    #[arg(long, global = true)]
    pub json: bool,

    /// Log level override (debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the renderer-compatible form of each color.
    Resolve {
        #[arg(required = true)]
        colors: Vec<String>,
    },

    /// Report whether each color is valid.
    Check {
        #[arg(required = true)]
        colors: Vec<String>,
    },

    /// List the known color names.
    Names {
        /// Only names the renderer supports natively.
        #[arg(long, conflicts_with = "mapped")]
        supported: bool,

        /// Only web color names translated to hex.
        #[arg(long)]
        mapped: bool,
    },

    /// Validate a palette file (TOML or YAML) and print it resolved.
    Palette { path: PathBuf },
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_resolve_with_global_flags() {
        let args =
            Args::try_parse_from(["tint", "resolve", "red", "#ABC", "--json", "--log-level", "debug"])
                .unwrap();
        assert!(args.json);
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        match args.command {
            Command::Resolve { colors } => assert_eq!(colors, vec!["red", "#ABC"]),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn resolve_requires_a_color() {
        assert!(Args::try_parse_from(["tint", "resolve"]).is_err());
    }

    #[test]
    fn names_filters_conflict() {
        assert!(Args::try_parse_from(["tint", "names", "--supported", "--mapped"]).is_err());
    }
}
