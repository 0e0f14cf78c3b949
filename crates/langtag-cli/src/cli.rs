//! Argument parsing and command dispatch for the `langtag` binary.

use std::io::{self, Write};

use clap::{Args, Parser, Subcommand};
use eyre::{Context, Result};
use langtag::{LanguageTag, TruncateOptions};
use langtag_cli::config::{CliConfig, LogLevel};

use crate::output::{
    Format, MatchReport, SuitabilityReport, TruncationReport, write_inspections, write_match,
    write_suitability, write_truncation,
};

/// Inspect, match and truncate BCP 47 language tags.
#[derive(Parser, Debug)]
#[command(name = "langtag", author, version, about)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// Emit JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,
}

/// Supported commands.
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Show the fields and subtag kinds of each tag.
    Inspect {
        /// Tags to inspect.
        #[arg(required = true)]
        tags: Vec<String>,
    },
    /// Test a tag against a language range such as `en-*`.
    Matches {
        /// Tag to test.
        tag: String,
        /// Language range, or a plain tag when TAG is a wildcard.
        range: String,
    },
    /// Test whether a tag can stand in for another.
    Suitable {
        /// Candidate tag.
        tag: String,
        /// Tag whose language, script, region and variant must be honoured.
        other: String,
    },
    /// Drop extension and private-use areas, and optionally more.
    Truncate(TruncateArgs),
    /// Reduce a tag to its language and region.
    Minimal {
        /// Tag to reduce.
        tag: String,
    },
}

#[derive(Args, Debug)]
pub(crate) struct TruncateArgs {
    /// Tag to truncate.
    pub tag: String,
    /// Drop extended-language subtags.
    #[arg(long)]
    pub no_extlang: bool,
    /// Drop script subtags.
    #[arg(long)]
    pub no_script: bool,
    /// Drop variant subtags.
    #[arg(long)]
    pub no_variant: bool,
}

impl TruncateArgs {
    const fn options(&self) -> TruncateOptions {
        TruncateOptions {
            extlang: !self.no_extlang,
            script: !self.no_script,
            variant: !self.no_variant,
        }
    }
}

/// Run `command`, writing its report to stdout.
pub(crate) fn run(command: Commands, config: &CliConfig) -> Result<()> {
    let format = Format::from_json_flag(config.json);
    let mut stdout = io::stdout().lock();
    dispatch(&mut stdout, format, command)?;
    stdout.flush().wrap_err("failed to flush report to stdout")
}

fn dispatch(writer: &mut dyn Write, format: Format, command: Commands) -> Result<()> {
    tracing::debug!(?command, ?format, "dispatching command");
    match command {
        Commands::Inspect { tags } => {
            let parsed: Vec<LanguageTag> = tags.iter().map(|raw| LanguageTag::parse(raw)).collect();
            write_inspections(writer, format, &parsed)
        }
        Commands::Matches { tag, range } => {
            let tag = LanguageTag::parse(&tag);
            let report = MatchReport {
                matches: tag.matches(&range),
                tag: &tag,
                range: &range,
            };
            write_match(writer, format, &report)
        }
        Commands::Suitable { tag, other } => {
            let tag = LanguageTag::parse(&tag);
            let report = SuitabilityReport {
                suitable: tag.suitable_for(&other),
                tag: &tag,
                other: &other,
            };
            write_suitability(writer, format, &report)
        }
        Commands::Truncate(args) => {
            let tag = LanguageTag::parse(&args.tag);
            let truncated = tag.truncate(args.options());
            write_truncation(
                writer,
                format,
                &TruncationReport {
                    tag: &tag,
                    truncated: &truncated,
                },
            )
        }
        Commands::Minimal { tag } => {
            let tag = LanguageTag::parse(&tag);
            let truncated = tag.minimal();
            write_truncation(
                writer,
                format,
                &TruncationReport {
                    tag: &tag,
                    truncated: &truncated,
                },
            )
        }
    }
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests decode captured output")]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("langtag").chain(args.iter().copied()))
            .expect("arguments parse")
    }

    fn output_of(args: &[&str]) -> String {
        let cli = parse(args);
        let mut buffer = Vec::new();
        dispatch(&mut buffer, Format::from_json_flag(cli.json), cli.command)
            .expect("command succeeds");
        String::from_utf8(buffer).expect("output is UTF-8")
    }

    #[test]
    fn global_flags_follow_the_subcommand() {
        let cli = parse(&["minimal", "en-Latn-US", "--json", "--log-level", "debug"]);
        assert!(cli.json);
        assert_eq!(cli.log_level, Some(LogLevel::Debug));
    }

    #[test]
    fn rejects_unknown_log_level() {
        let result = Cli::try_parse_from(["langtag", "--log-level", "loud", "minimal", "en"]);
        assert!(result.is_err());
    }

    #[test]
    fn inspect_requires_a_tag() {
        assert!(Cli::try_parse_from(["langtag", "inspect"]).is_err());
    }

    #[rstest]
    #[case(&["matches", "en-Latn-US", "en-*"], "true\n")]
    #[case(&["matches", "en-US", "fr-*"], "false\n")]
    #[case(&["matches", "en-*", "en-GB"], "true\n")]
    #[case(&["suitable", "en-Latn-US", "en-US"], "true\n")]
    #[case(&["suitable", "en-US", "en-Latn-US"], "false\n")]
    #[case(&["minimal", "en-Latn-US"], "en-US\n")]
    #[case(&["truncate", "zh-cmn-Hans-CN-x-private"], "zh-cmn-Hans-CN\n")]
    #[case(&["truncate", "zh-cmn-Hans-CN", "--no-extlang"], "zh-Hans-CN\n")]
    #[case(&["truncate", "sl-rozaj-biske", "--no-variant"], "sl\n")]
    #[case(&["truncate", "en-Latn-US", "--no-script"], "en-US\n")]
    fn commands_write_plain_results(#[case] args: &[&str], #[case] expected: &str) {
        assert_eq!(output_of(args), expected);
    }

    #[test]
    fn truncation_options_default_to_keeping_subtags() {
        let Commands::Truncate(args) = parse(&["truncate", "en"]).command else {
            panic!("expected truncate command");
        };
        assert_eq!(args.options(), TruncateOptions::default());
    }

    #[test]
    fn json_flag_switches_report_format() {
        let text = output_of(&["--json", "truncate", "en-Latn-US-a-bbb"]);
        let value: serde_json::Value = serde_json::from_str(&text).expect("valid JSON");
        assert_eq!(value["tag"], "en-Latn-US-a-bbb");
        assert_eq!(value["truncated"], "en-Latn-US");
    }
}
