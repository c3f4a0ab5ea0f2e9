mod config;
mod error;
mod fetch;
mod model;
mod output;
mod parser;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use config::{OutputOptions, Source};

#[derive(Parser)]
#[command(name = "tvgu_teachers", about = "Tver State University teaching staff scraper")]
struct Cli {
    /// Output JSON file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory for the output file (created if missing)
    #[arg(short = 'd', long)]
    output_directory: Option<PathBuf>,

    /// Name the output file teachers-<YYYY-MM-DD>.json
    #[arg(short = 'a', long)]
    output_auto: bool,

    /// Indent the JSON output
    #[arg(short, long)]
    prettify: bool,

    /// Staff page URL (default: $TVGU_TEACHERS_URL, then the university's
    /// public staff page). An explicit --input ignores the environment.
    #[arg(long)]
    url: Option<String>,

    /// Parse a saved HTML page instead of fetching
    #[arg(short, long)]
    input: Option<PathBuf>,
}

impl Cli {
    fn output_options(&self) -> OutputOptions {
        OutputOptions {
            output: self.output.clone(),
            output_directory: self.output_directory.clone(),
            output_auto: self.output_auto,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    // Flag conflicts are reported before any network traffic.
    let output_path = cli
        .output_options()
        .resolve(chrono::Local::now().date_naive())?;
    let source = Source::resolve(
        cli.url.clone(),
        std::env::var(config::URL_ENV).ok(),
        cli.input.clone(),
    )?;

    let html = fetch::load_page(&source).await?;
    let teachers = parser::parse_page(&html).context("Failed to parse teachers page")?;

    match &output_path {
        Some(path) => {
            output::dump_teachers(&teachers, path, cli.prettify)?;
            println!("Saved {} teachers to {}", teachers.len(), path.display());
        }
        None => info!("Parsed {} teachers, no output requested", teachers.len()),
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("Done in {}", format_duration(elapsed));
    }

    Ok(())
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use clap::CommandFactory;

    use super::*;
    use crate::error::Error;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn long_and_short_flags() {
        let cli = Cli::try_parse_from([
            "tvgu_teachers",
            "--output-directory",
            "dumps",
            "-a",
            "-p",
        ])
        .unwrap();
        assert!(cli.output_auto);
        assert!(cli.prettify);
        assert_eq!(cli.output_directory, Some(PathBuf::from("dumps")));
    }

    #[test]
    fn output_with_auto_is_config_error() {
        let cli = Cli::try_parse_from(["tvgu_teachers", "-o", "x.json", "-a"]).unwrap();
        let today = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(matches!(
            cli.output_options().resolve(today),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn durations() {
        assert_eq!(format_duration(Duration::from_millis(2500)), "2.5s");
        assert_eq!(format_duration(Duration::from_secs(125)), "2m 5s");
    }
}
