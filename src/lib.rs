pub mod cli;
pub mod filter;

use anyhow::Context;
use colored::Colorize;
use log::{LevelFilter, debug, info};
use serde_json::json;
use std::io::{self, BufRead, Write};

pub use cli::{Cli, ColorMode, Commands, OutputFormat, cli_parse};
pub use filter::{
    CategoryFilter, Decision, InvalidInputError, PatternKind, SharedCategoryFilter, WILDCARD,
};

/// Build the filter from `--rules`, then `--include` / `--exclude`.
///
/// Command line patterns replace the corresponding rules list when given.
pub fn build_filter(cli: &Cli) -> anyhow::Result<CategoryFilter> {
    let mut filter = match &cli.rules {
        Some(raw) => serde_json::from_str::<CategoryFilter>(raw)
            .context("Invalid --rules value")?,
        None => CategoryFilter::new(),
    };

    if !cli.include.is_empty() {
        filter.set_included(cli.include.iter().cloned());
    }
    if !cli.exclude.is_empty() {
        filter.set_excluded(cli.exclude.iter().cloned());
    }

    Ok(filter)
}

fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    // RUST_LOG, when set, wins over the flags.
    let _ = env_logger::Builder::new()
        .filter_level(log_level(verbose, quiet))
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}

/// Write one line per category with its decision
pub fn write_check<W: Write>(
    out: &mut W,
    filter: &CategoryFilter,
    categories: &[String],
    format: OutputFormat,
    explain: bool,
) -> io::Result<()> {
    for category in categories {
        let decision = filter.decide(category);
        match format {
            OutputFormat::Text => {
                let verdict = if decision.is_excluded() {
                    "excluded".red()
                } else {
                    "allowed".green()
                };
                if explain {
                    writeln!(out, "{}\t{}\t({})", category, verdict, decision)?;
                } else {
                    writeln!(out, "{}\t{}", category, verdict)?;
                }
            }
            OutputFormat::Json => {
                let mut record = json!({
                    "category": category,
                    "excluded": decision.is_excluded(),
                });
                if explain {
                    record["decision"] = json!(decision);
                }
                writeln!(out, "{}", record)?;
            }
        }
    }
    Ok(())
}

/// Copy the lines whose category passes the filter (or fails it, with `invert`).
///
/// Returns how many lines were written.
pub fn filter_lines<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    filter: &CategoryFilter,
    invert: bool,
) -> io::Result<usize> {
    let mut written = 0;
    for line in input.lines() {
        let category = line?;
        if filter.is_excluded(&category) == invert {
            writeln!(out, "{}", category)?;
            written += 1;
        }
    }
    Ok(written)
}

pub fn run() -> anyhow::Result<()> {
    let cli = cli_parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.color {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Auto => {}
    }

    let filter = build_filter(&cli)?;
    info!(
        "filter ready: {} include, {} exclude patterns",
        filter.included().len(),
        filter.excluded().len()
    );
    debug!("include: {:?}", filter.included());
    debug!("exclude: {:?}", filter.excluded());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::Check {
            categories,
            format,
            explain,
        } => {
            write_check(&mut out, &filter, categories, *format, *explain)
                .context("Failed to write results")?;
        }
        Commands::Filter { invert } => {
            let stdin = io::stdin();
            let written = filter_lines(stdin.lock(), &mut out, &filter, *invert)
                .context("Failed to filter categories from stdin")?;
            info!("{} categories written", written);
        }
    }

    out.flush().context("Failed to flush output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Cursor;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["log-category-filter"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).expect("valid arguments")
    }

    #[test]
    fn test_build_filter_from_rules_and_flags() {
        let cli = parse(&[
            "--rules",
            r#"{"include": ["App\\*"], "exclude": ["App\\Noise"]}"#,
            "-e",
            "App\\Cache",
            "filter",
        ]);
        let filter = build_filter(&cli).expect("valid rules");
        assert_eq!(filter.included(), ["App\\*"]);
        assert_eq!(filter.excluded(), ["App\\Cache"]);
    }

    #[test]
    fn test_build_filter_reports_bad_rules() {
        let cli = parse(&["--rules", r#"{"exclude": [true]}"#, "filter"]);
        let err = build_filter(&cli).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("Invalid --rules value"), "{}", message);
        assert!(message.contains("got boolean"), "{}", message);
    }

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(log_level(0, false), LevelFilter::Warn);
        assert_eq!(log_level(2, false), LevelFilter::Debug);
        assert_eq!(log_level(9, false), LevelFilter::Trace);
        assert_eq!(log_level(3, true), LevelFilter::Error);
    }

    #[test]
    fn test_filter_lines_keeps_allowed_categories() {
        let filter = CategoryFilter::new().with_excluded(["Db\\*"]);
        let input = Cursor::new("App\\Web\nDb\\Query\r\n\nApp\\Cli\n");
        let mut out = Vec::new();
        let written = filter_lines(input, &mut out, &filter, false).unwrap();
        assert_eq!(written, 3);
        assert_eq!(String::from_utf8(out).unwrap(), "App\\Web\n\nApp\\Cli\n");
    }

    #[test]
    fn test_filter_lines_invert() {
        let filter = CategoryFilter::new().with_excluded(["Db\\*"]);
        let input = Cursor::new("App\\Web\nDb\\Query\n");
        let mut out = Vec::new();
        filter_lines(input, &mut out, &filter, true).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Db\\Query\n");
    }

    #[test]
    fn test_write_check_json_with_explain() {
        let filter = CategoryFilter::new().with_included(["App\\*"]);
        let mut out = Vec::new();
        write_check(
            &mut out,
            &filter,
            &["App\\Db".to_string(), "Vendor".to_string()],
            OutputFormat::Json,
            true,
        )
        .unwrap();

        let lines: Vec<serde_json::Value> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(
            lines[0],
            json!({
                "category": "App\\Db",
                "excluded": false,
                "decision": {"reason": "included_by", "pattern": "App\\*"}
            })
        );
        assert_eq!(
            lines[1],
            json!({
                "category": "Vendor",
                "excluded": true,
                "decision": {"reason": "not_included"}
            })
        );
    }

    #[test]
    fn test_write_check_text_explain() {
        colored::control::set_override(false);
        let filter = CategoryFilter::new().with_excluded(["*"]);
        let mut out = Vec::new();
        write_check(
            &mut out,
            &filter,
            &["x".to_string()],
            OutputFormat::Text,
            true,
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "x\texcluded\t(excluded by pattern '*')\n"
        );
    }
}
