use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "nb", about = concat!("noteblocks v", env!("CARGO_PKG_VERSION"), " - generated text in, content blocks out"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Number block ids sequentially instead of using random UUIDs
    #[arg(long, global = true)]
    pub stable_ids: bool,

    /// Config file (default: ./noteblocks.toml if present)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse text into content blocks
    Parse(InputArgs),
    /// Parse text and print it back in canonical form
    Fmt(InputArgs),
    /// Count the blocks parsed from text
    Stats(InputArgs),
}

#[derive(Args)]
pub struct InputArgs {
    /// File to read (default: stdin; `-` also means stdin)
    pub file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let cli = Cli::try_parse_from(["nb", "parse", "page.txt", "--json"]).unwrap();
        assert!(cli.json);
        assert!(!cli.stable_ids);
        match cli.command {
            Commands::Parse(args) => assert_eq!(args.file, Some(PathBuf::from("page.txt"))),
            _ => panic!("Expected parse command"),
        }
    }

    #[test]
    fn test_global_flags_before_subcommand() {
        let cli = Cli::try_parse_from(["nb", "--stable-ids", "-c", "x.toml", "stats"]).unwrap();
        assert!(cli.stable_ids);
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
        assert!(matches!(cli.command, Commands::Stats(InputArgs { file: None })));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["nb"]).is_err());
    }
}
