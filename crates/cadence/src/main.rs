//! Cadence: cron schedule descriptions and presets
//!
//! Main binary with subcommands:
//! - `describe`: Describe schedule strings
//! - `presets`: List the preset catalog
//! - `validate`: Run the strict save-time check
//! - `edit`: Interactive preset/free-text schedule editor

use std::path::{Path, PathBuf};

use cadence_schedule::Catalog;
use clap::{Parser, Subcommand};
use miette::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod output;
mod session;

use output::{DescribeReport, OutputFormat, ValidationReport};

/// Schedule used when `edit` is started without one.
const DEFAULT_SCHEDULE: &str = "0 3 * * *";

#[derive(Parser)]
#[command(name = "cadence")]
#[command(about = "Cron schedule descriptions and presets", long_about = None)]
struct Cli {
    /// Output format for describe, presets and validate
    #[arg(long, global = true, env = "CADENCE_FORMAT", value_enum, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Describe one or more schedule strings (quote each one)
    Describe {
        /// Schedule strings, e.g. "0 3 * * *"
        #[arg(value_name = "EXPR", required_unless_present = "file")]
        expressions: Vec<String>,

        /// Read schedule strings from a file, one per line
        #[arg(long, conflicts_with = "expressions")]
        file: Option<PathBuf>,
    },

    /// List the preset schedules
    Presets,

    /// Check a schedule string strictly before saving it
    Validate {
        /// Schedule string, e.g. "0 3 * * *"
        #[arg(value_name = "EXPR")]
        expression: String,
    },

    /// Edit a schedule interactively
    Edit {
        /// Starting schedule string
        #[arg(long, default_value = DEFAULT_SCHEDULE)]
        initial: String,
    },
}

fn main() -> Result<()> {
    // Initialize tracing; stdout is reserved for command output
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "cadence=info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let catalog = Catalog::builtin();

    match cli.command {
        Commands::Describe { expressions, file } => {
            let expressions = match file {
                Some(path) => read_expressions(&path)?,
                None => expressions,
            };
            run_describe(&catalog, &expressions, cli.format)
        }
        Commands::Presets => run_presets(&catalog, cli.format),
        Commands::Validate { expression } => run_validate(&catalog, &expression, cli.format),
        Commands::Edit { initial } => run_edit(&initial),
    }
}

fn run_describe(catalog: &Catalog, expressions: &[String], format: OutputFormat) -> Result<()> {
    tracing::info!(count = expressions.len(), "describing schedules");
    let reports: Vec<DescribeReport> = expressions
        .iter()
        .map(|expr| DescribeReport::new(catalog, expr))
        .collect();

    let rendered =
        output::render_descriptions(&reports, format).map_err(|e| miette::miette!("{}", e))?;
    print!("{rendered}");
    Ok(())
}

fn run_presets(catalog: &Catalog, format: OutputFormat) -> Result<()> {
    let rendered =
        output::render_presets(catalog.entries(), format).map_err(|e| miette::miette!("{}", e))?;
    print!("{rendered}");
    Ok(())
}

fn run_validate(catalog: &Catalog, expression: &str, format: OutputFormat) -> Result<()> {
    let (report, error) = ValidationReport::new(catalog, expression);
    if format == OutputFormat::Json || error.is_none() {
        let rendered =
            output::render_validation(&report, format).map_err(|e| miette::miette!("{}", e))?;
        print!("{rendered}");
    }

    match error {
        None => {
            tracing::info!(expression, "schedule is valid");
            Ok(())
        }
        Some(e) => {
            tracing::warn!(expression, error = %e, "schedule rejected");
            Err(miette::miette!("{}", e))
        }
    }
}

fn run_edit(initial: &str) -> Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    let value = session::run(initial, stdin.lock(), &mut stdout)
        .map_err(|e| miette::miette!("failed to run editing session: {}", e))?;
    println!("{value}");
    Ok(())
}

/// Read schedule strings from a file, skipping blank lines and `#` comments.
fn read_expressions(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| miette::miette!("failed to read {}: {}", path.display(), e))?;
    Ok(parse_expressions(&contents))
}

fn parse_expressions(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_describe_args() {
        let cli = Cli::try_parse_from(["cadence", "describe", "0 3 * * *", "* * * * *"]).unwrap();
        match cli.command {
            Commands::Describe { expressions, file } => {
                assert_eq!(expressions, vec!["0 3 * * *", "* * * * *"]);
                assert!(file.is_none());
            }
            _ => panic!("Expected Describe command"),
        }
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_describe_requires_input() {
        assert!(Cli::try_parse_from(["cadence", "describe"]).is_err());
    }

    #[test]
    fn test_format_flag() {
        let cli = Cli::try_parse_from(["cadence", "presets", "--format", "json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_edit_default_initial() {
        let cli = Cli::try_parse_from(["cadence", "edit"]).unwrap();
        match cli.command {
            Commands::Edit { initial } => assert_eq!(initial, DEFAULT_SCHEDULE),
            _ => panic!("Expected Edit command"),
        }
    }

    #[test]
    fn test_parse_expressions_skips_blank_and_comments() {
        let parsed = parse_expressions("# nightly jobs\n0 3 * * *\n\n  */5 * * * *  \n");
        assert_eq!(parsed, vec!["0 3 * * *", "*/5 * * * *"]);
    }

    #[test]
    fn test_read_expressions_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "0 3,15 * * *").unwrap();
        writeln!(file, "a b c").unwrap();

        let parsed = read_expressions(file.path()).unwrap();
        assert_eq!(parsed, vec!["0 3,15 * * *", "a b c"]);
    }

    #[test]
    fn test_read_expressions_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_expressions(&dir.path().join("missing.txt")).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let catalog = Catalog::builtin();
        assert!(run_validate(&catalog, "0 3 * * *", OutputFormat::Json).is_ok());
        let err = run_validate(&catalog, "0 24 * * *", OutputFormat::Json).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }
}
