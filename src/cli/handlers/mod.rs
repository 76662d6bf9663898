use std::path::Path;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::input::read_input;
use crate::model::block::ContentBlock;
use crate::model::config::Config;
use crate::ops::stats::block_stats;
use crate::parse::{RandomIds, SequentialIds, parse_blocks_with_ids, serialize_blocks};

/// Output settings after command-line flags are layered over the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub json: bool,
    pub pretty: bool,
    pub stable_ids: bool,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        Settings {
            json: cli.json || config.output.json,
            pretty: config.output.pretty,
            stable_ids: cli.stable_ids || config.output.stable_ids,
        }
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::resolve(&cli, config);

    match cli.command {
        Commands::Parse(args) => cmd_parse(args, settings),
        Commands::Fmt(args) => cmd_fmt(args, settings),
        Commands::Stats(args) => cmd_stats(args, settings),
    }
}

fn load_blocks(
    args: &InputArgs,
    settings: Settings,
) -> Result<Vec<ContentBlock>, Box<dyn std::error::Error>> {
    let text = read_input(args.file.as_deref())?;
    let blocks = parse_with_settings(&text, settings);
    tracing::debug!(
        source = %args.file.as_deref().unwrap_or(Path::new("-")).display(),
        lines = text.lines().count(),
        blocks = blocks.len(),
        "parsed input"
    );
    Ok(blocks)
}

pub fn parse_with_settings(text: &str, settings: Settings) -> Vec<ContentBlock> {
    if settings.stable_ids {
        parse_blocks_with_ids(text, &mut SequentialIds::new())
    } else {
        parse_blocks_with_ids(text, &mut RandomIds)
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_parse(args: InputArgs, settings: Settings) -> Result<(), Box<dyn std::error::Error>> {
    let blocks = load_blocks(&args, settings)?;
    if settings.json {
        println!("{}", to_json(&blocks, settings.pretty)?);
    } else {
        for line in format_outline(&blocks) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_fmt(args: InputArgs, settings: Settings) -> Result<(), Box<dyn std::error::Error>> {
    let blocks = load_blocks(&args, settings)?;
    print!("{}", serialize_blocks(&blocks));
    Ok(())
}

fn cmd_stats(args: InputArgs, settings: Settings) -> Result<(), Box<dyn std::error::Error>> {
    let blocks = load_blocks(&args, settings)?;
    let stats = block_stats(&blocks);
    if settings.json {
        println!("{}", to_json(&stats, settings.pretty)?);
    } else {
        for line in format_stats(&stats) {
            println!("{}", line);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_flags_override_config() {
        let mut config = Config::default();
        config.output.pretty = false;
        let cli = Cli::try_parse_from(["nb", "parse", "--json"]).unwrap();
        assert_eq!(
            Settings::resolve(&cli, &config),
            Settings {
                json: true,
                pretty: false,
                stable_ids: false,
            }
        );
    }

    #[test]
    fn test_config_enables_stable_ids() {
        let mut config = Config::default();
        config.output.stable_ids = true;
        let cli = Cli::try_parse_from(["nb", "fmt"]).unwrap();
        let settings = Settings::resolve(&cli, &config);
        let blocks = parse_with_settings("# A\ntext", settings);
        assert_eq!(blocks[0].id().as_str(), "b1");
        assert_eq!(blocks[1].id().as_str(), "b2");
    }
}
