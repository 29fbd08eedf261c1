use clap::{ArgAction, Parser, Subcommand, ValueEnum};

/// Decide which log categories a category filter lets through
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Include pattern, e.g. "App\Db\*" (repeatable)
    #[arg(short, long = "include", value_name = "PATTERN", global = true)]
    pub include: Vec<String>,

    /// Exclude pattern, e.g. "App\Cache" (repeatable)
    #[arg(short, long = "exclude", value_name = "PATTERN", global = true)]
    pub exclude: Vec<String>,

    /// Rules as a JSON object: {"include": [...], "exclude": [...]}
    #[arg(long, value_name = "JSON", env = "LOG_CATEGORY_FILTER_RULES", global = true)]
    pub rules: Option<String>,

    /// Increase diagnostic output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only report errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// When to colorize output
    #[arg(long, value_enum, default_value_t = ColorMode::Auto, global = true)]
    pub color: ColorMode,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the decision for each category
    Check {
        /// Categories to check
        #[arg(required = true)]
        categories: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Show which rule decided
        #[arg(long)]
        explain: bool,
    },
    /// Read categories from stdin, one per line, and print those that pass
    Filter {
        /// Print the excluded categories instead
        #[arg(long)]
        invert: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

pub fn cli_parse() -> Cli {
    Cli::parse()
}
