//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use sleepiq_core::service::sleepiq::DEFAULT_BASE_URL;
use sleepiq_core::{Position, Side};

/// Move one side of a SleepIQ bed to a preset position and wait until it stops
#[derive(Parser, Debug)]
#[command(name = "sleepiq-position")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Name of the target bed (Account Settings -> My Sleep Number Beds -> X/Y Bed Online -> <Bed Name>)
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub bed_name: String,

    /// Which side of the bed to be altered (Left or Right)
    #[arg(long)]
    pub side: Side,

    /// Target position: 1=Favorite, 2=Read, 3=WatchTV, 4=Flat, 5=ZeroG, 6=Snore
    #[arg(long)]
    pub position: Position,

    /// Path to configuration file
    #[arg(long, default_value = "config.yaml")]
    pub config: PathBuf,

    /// Verbose (debug) logging
    #[arg(short, long)]
    pub verbose: bool,

    /// SleepIQ API root
    #[arg(long, hide = true, env = "SLEEPIQ_API_URL", default_value = DEFAULT_BASE_URL)]
    pub api_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_parse_full_invocation() {
        let cli = Cli::try_parse_from([
            "sleepiq-position",
            "--bed-name",
            "Main",
            "--side",
            "Left",
            "--position",
            "4",
        ])
        .unwrap();

        assert_eq!(cli.bed_name, "Main");
        assert_eq!(cli.side, Side::Left);
        assert_eq!(cli.position, Position::Flat);
        assert_eq!(cli.config, PathBuf::from("config.yaml"));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_position_zero_rejected() {
        let err = Cli::try_parse_from([
            "sleepiq-position",
            "--bed-name",
            "Main",
            "--side",
            "Right",
            "--position",
            "0",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_unknown_side_rejected() {
        let err = Cli::try_parse_from([
            "sleepiq-position",
            "--bed-name",
            "Main",
            "--side",
            "Top",
            "--position",
            "1",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_missing_bed_name() {
        let err = Cli::try_parse_from(["sleepiq-position", "--side", "Left", "--position", "1"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_empty_bed_name_rejected() {
        let err = Cli::try_parse_from([
            "sleepiq-position",
            "--bed-name",
            "",
            "--side",
            "Left",
            "--position",
            "1",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
